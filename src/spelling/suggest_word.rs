//! A single suggestion returned by a suggestion engine.

use serde::{Deserialize, Serialize};

/// A suggested correction for one input term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestWord {
    /// The suggested term text.
    pub string: String,
    /// Document frequency of the suggestion in the source field.
    pub freq: u64,
    /// Similarity score assigned by the distance metric (higher is better).
    pub score: f32,
}

impl SuggestWord {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(string: S, freq: u64, score: f32) -> Self {
        SuggestWord {
            string: string.into(),
            freq,
            score,
        }
    }
}
