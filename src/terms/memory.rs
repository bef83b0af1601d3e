//! In-memory term index.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SpellCheckError};
use crate::terms::reader::TermIndex;
use crate::terms::term::Term;

/// A term index that keeps per-field document frequencies in memory.
///
/// Terms are stored exactly as added; no normalization is applied.
#[derive(Debug, Clone, Default)]
pub struct MemoryTermIndex {
    /// Field name -> term -> document frequency.
    fields: BTreeMap<String, BTreeMap<String, u64>>,
    /// Number of live documents.
    num_docs: u64,
}

impl MemoryTermIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        MemoryTermIndex::default()
    }

    /// Create a new empty index reporting the given document count.
    pub fn with_num_docs(num_docs: u64) -> Self {
        MemoryTermIndex {
            fields: BTreeMap::new(),
            num_docs,
        }
    }

    /// Set the document frequency of a term, replacing any previous value.
    pub fn add_term<F, T>(&mut self, field: F, text: T, doc_freq: u64)
    where
        F: Into<String>,
        T: Into<String>,
    {
        self.fields
            .entry(field.into())
            .or_default()
            .insert(text.into(), doc_freq);
        self.num_docs = self.num_docs.max(doc_freq);
    }

    /// Index one document: every distinct term of `text` gains one document.
    pub fn add_document(&mut self, field: &str, text: &str) {
        let mut seen: Vec<&str> = text.split_whitespace().collect();
        seen.sort_unstable();
        seen.dedup();

        let terms = self.fields.entry(field.to_string()).or_default();
        for term in seen {
            *terms.entry(term.to_string()).or_insert(0) += 1;
        }
        self.num_docs += 1;
    }

    /// Override the live document count.
    pub fn set_num_docs(&mut self, num_docs: u64) {
        self.num_docs = num_docs;
    }

    /// Get the number of distinct terms in a field.
    pub fn term_count(&self, field: &str) -> usize {
        self.fields.get(field).map_or(0, BTreeMap::len)
    }

    /// Load a field from a frequency file with format "term frequency" per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load_field_from_file<P: AsRef<Path>>(&mut self, field: &str, path: P) -> Result<()> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let [term, frequency] = parts.as_slice() else {
                return Err(SpellCheckError::index_access(format!(
                    "line {}: expected \"term frequency\", got {line:?}",
                    line_no + 1
                )));
            };
            let frequency = frequency.parse::<u64>().map_err(|e| {
                SpellCheckError::index_access(format!("line {}: {e}", line_no + 1))
            })?;
            self.add_term(field, *term, frequency);
        }

        Ok(())
    }
}

impl TermIndex for MemoryTermIndex {
    fn num_docs(&self) -> u64 {
        self.num_docs
    }

    fn doc_freq(&self, term: &Term) -> Result<u64> {
        Ok(self
            .fields
            .get(term.field())
            .and_then(|terms| terms.get(term.text()))
            .copied()
            .unwrap_or(0))
    }

    fn terms(&self, field: &str) -> Result<Vec<String>> {
        Ok(self
            .fields
            .get(field)
            .map(|terms| terms.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn has_field(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|terms| !terms.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_add_document() {
        let mut index = MemoryTermIndex::new();
        index.add_document("text", "hello world hello");
        index.add_document("text", "hello there");

        assert_eq!(index.num_docs(), 2);
        assert_eq!(index.doc_freq(&Term::new("text", "hello")).unwrap(), 2);
        assert_eq!(index.doc_freq(&Term::new("text", "world")).unwrap(), 1);
        assert_eq!(index.doc_freq(&Term::new("title", "hello")).unwrap(), 0);
        assert_eq!(
            index.terms("text").unwrap(),
            vec!["hello", "there", "world"]
        );
    }

    #[test]
    fn test_terms_are_case_sensitive() {
        let mut index = MemoryTermIndex::new();
        index.add_term("text", "Hello", 3);

        assert!(index.contains(&Term::new("text", "Hello")).unwrap());
        assert!(!index.contains(&Term::new("text", "hello")).unwrap());
    }

    #[test]
    fn test_doc_ratio() {
        let mut index = MemoryTermIndex::with_num_docs(200);
        index.add_term("text", "the", 150);

        let ratio = index.doc_ratio(&Term::new("text", "the")).unwrap();
        assert!((ratio - 0.75).abs() < 1e-9);
        assert_eq!(MemoryTermIndex::new().doc_ratio(&Term::new("text", "x")).unwrap(), 0.0);
    }

    #[test]
    fn test_has_field() {
        let mut index = MemoryTermIndex::new();
        assert!(!index.has_field("text"));
        index.add_term("text", "hello", 1);
        assert!(index.has_field("text"));
        assert_eq!(index.term_count("text"), 1);
    }

    #[test]
    fn test_load_field_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# term frequencies").unwrap();
        writeln!(file, "hello 42").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "help 7").unwrap();

        let mut index = MemoryTermIndex::new();
        index.load_field_from_file("text", file.path()).unwrap();

        assert_eq!(index.doc_freq(&Term::new("text", "hello")).unwrap(), 42);
        assert_eq!(index.doc_freq(&Term::new("text", "help")).unwrap(), 7);
        assert_eq!(index.term_count("text"), 2);
    }

    #[test]
    fn test_load_field_from_file_rejects_bad_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hello many").unwrap();

        let mut index = MemoryTermIndex::new();
        let err = index.load_field_from_file("text", file.path()).unwrap_err();
        assert!(matches!(err, SpellCheckError::IndexAccess(_)));
    }
}
