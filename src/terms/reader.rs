//! Read-only term index handle.

use crate::error::Result;
use crate::terms::term::Term;

/// Trait for read-only access to the terms of an inverted index.
///
/// Implementations must tolerate concurrent readers: one handle is shared by
/// every suggestion call made against the same index snapshot.
pub trait TermIndex: Send + Sync + std::fmt::Debug {
    /// Get the number of live documents in the index.
    fn num_docs(&self) -> u64;

    /// Get the number of documents containing the given term.
    fn doc_freq(&self, term: &Term) -> Result<u64>;

    /// Enumerate the terms of a field in sorted order.
    fn terms(&self, field: &str) -> Result<Vec<String>>;

    /// Check whether the index holds any terms for the field.
    fn has_field(&self, field: &str) -> bool;

    /// Check whether the term occurs in at least one document.
    fn contains(&self, term: &Term) -> Result<bool> {
        Ok(self.doc_freq(term)? > 0)
    }

    /// Fraction of documents that contain the term.
    fn doc_ratio(&self, term: &Term) -> Result<f64> {
        let num_docs = self.num_docs();
        if num_docs == 0 {
            return Ok(0.0);
        }
        Ok(self.doc_freq(term)? as f64 / num_docs as f64)
    }
}
