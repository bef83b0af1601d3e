//! Token representation for query analysis output.
//!
//! Tokens are produced by the host's query analyzer and handed to a spell
//! checker unchanged. The checker looks up `text` exactly as given; in
//! particular it is never lower-cased here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single query token.
///
/// # Examples
///
/// ```
/// use sarissa_spellcheck::analysis::token::Token;
///
/// let token = Token::with_offsets("Helo", 0, 0, 4);
/// assert_eq!(token.text, "Helo");
/// assert_eq!(token.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Split text on whitespace into tokens, tracking offsets.
    ///
    /// A convenience for tests and examples. It is not an analyzer: real
    /// query tokens come from the host's analysis chain.
    pub fn from_whitespace(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start = None;

        for (idx, ch) in text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(s)) => {
                    tokens.push(Token::with_offsets(&text[s..idx], tokens.len(), s, idx));
                    start = None;
                }
                (false, None) => start = Some(idx),
                _ => {}
            }
        }
        if let Some(s) = start {
            tokens.push(Token::with_offsets(&text[s..], tokens.len(), s, text.len()));
        }

        tokens
    }

    /// Length of the token text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
