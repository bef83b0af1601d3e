//! Spelling results keyed by input token.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// One suggested correction and its frequency in the source field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The suggested term.
    pub suggestion: String,
    /// Document frequency of the suggestion.
    pub freq: u64,
}

/// Suggestions for a single input token, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSuggestions {
    /// The input token.
    pub token: Token,
    /// Ranked corrections, possibly empty.
    pub corrections: Vec<Correction>,
}

/// The outcome of a spelling request.
///
/// Holds exactly one entry per input token, in input order, even when a token
/// received no suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingResult {
    entries: Vec<TokenSuggestions>,
}

impl SpellingResult {
    /// Create an empty result.
    pub fn new() -> Self {
        SpellingResult::default()
    }

    /// Append an entry for `token` with no corrections yet.
    pub fn add_token(&mut self, token: Token) {
        self.entries.push(TokenSuggestions {
            token,
            corrections: Vec::new(),
        });
    }

    /// Append a correction to the most recent entry for `token`, creating
    /// the entry if the token has none.
    pub fn add<S: Into<String>>(&mut self, token: &Token, suggestion: S, freq: u64) {
        let correction = Correction {
            suggestion: suggestion.into(),
            freq,
        };

        match self.entries.iter_mut().rev().find(|e| &e.token == token) {
            Some(entry) => entry.corrections.push(correction),
            None => self.entries.push(TokenSuggestions {
                token: token.clone(),
                corrections: vec![correction],
            }),
        }
    }

    /// Get the corrections for the first token whose text matches.
    pub fn get(&self, text: &str) -> Option<&[Correction]> {
        self.entries
            .iter()
            .find(|e| e.token.text == text)
            .map(|e| e.corrections.as_slice())
    }

    /// Iterate over entries in input order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenSuggestions> {
        self.entries.iter()
    }

    /// Get the entries in input order.
    pub fn entries(&self) -> &[TokenSuggestions] {
        &self.entries
    }

    /// Number of token entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any token received at least one correction.
    pub fn has_suggestions(&self) -> bool {
        self.entries.iter().any(|e| !e.corrections.is_empty())
    }
}

impl<'a> IntoIterator for &'a SpellingResult {
    type Item = &'a TokenSuggestions;
    type IntoIter = std::slice::Iter<'a, TokenSuggestions>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_creates_entry() {
        let token = Token::new("helo", 0);
        let mut result = SpellingResult::new();
        result.add(&token, "hello", 42);
        result.add(&token, "help", 7);

        assert_eq!(result.len(), 1);
        let corrections = result.get("helo").unwrap();
        assert_eq!(corrections[0].suggestion, "hello");
        assert_eq!(corrections[1].freq, 7);
        assert!(result.has_suggestions());
    }

    #[test]
    fn test_entries_keep_input_order() {
        let mut result = SpellingResult::new();
        result.add_token(Token::new("wrld", 1));
        result.add_token(Token::new("helo", 0));

        let texts: Vec<&str> = result.iter().map(|e| e.token.text.as_str()).collect();
        assert_eq!(texts, vec!["wrld", "helo"]);
        assert!(!result.has_suggestions());
        assert_eq!(result.get("helo"), Some(&[][..]));
        assert_eq!(result.get("missing"), None);
    }

    #[test]
    fn test_serialize() {
        let mut result = SpellingResult::new();
        result.add(&Token::new("helo", 0), "hello", 42);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["entries"][0]["token"]["text"], "helo");
        assert_eq!(json["entries"][0]["corrections"][0]["suggestion"], "hello");
        assert_eq!(json["entries"][0]["corrections"][0]["freq"], 42);
    }
}
