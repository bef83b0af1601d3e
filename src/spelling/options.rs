//! Per-request spelling options.

use crate::analysis::token::Token;
use crate::terms::reader::TermIndex;

/// Default number of suggestions per token.
pub const DEFAULT_COUNT: usize = 1;

/// A spelling request: the tokens to correct and how to correct them.
///
/// # Examples
///
/// ```
/// use sarissa_spellcheck::analysis::token::Token;
/// use sarissa_spellcheck::spelling::options::SpellingOptions;
/// use sarissa_spellcheck::terms::MemoryTermIndex;
///
/// let index = MemoryTermIndex::new();
/// let options = SpellingOptions::new(Token::from_whitespace("helo wrld"), &index)
///     .with_count(5)
///     .only_more_popular(true)
///     .with_accuracy(0.8);
///
/// assert_eq!(options.tokens.len(), 2);
/// assert_eq!(options.accuracy, Some(0.8));
/// ```
#[derive(Debug, Clone)]
pub struct SpellingOptions<'a> {
    /// Tokens to correct, in query order.
    pub tokens: Vec<Token>,
    /// Maximum number of suggestions per token.
    pub count: usize,
    /// Index the suggestions are drawn from.
    pub reader: &'a dyn TermIndex,
    /// Only suggest terms strictly more frequent than the token.
    pub only_more_popular: bool,
    /// Accuracy override; the configured accuracy applies when `None`.
    pub accuracy: Option<f32>,
}

impl<'a> SpellingOptions<'a> {
    /// Create options for `tokens` with one suggestion each.
    pub fn new(tokens: Vec<Token>, reader: &'a dyn TermIndex) -> Self {
        SpellingOptions {
            tokens,
            count: DEFAULT_COUNT,
            reader,
            only_more_popular: false,
            accuracy: None,
        }
    }

    /// Set the number of suggestions per token.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Restrict suggestions to more popular terms.
    pub fn only_more_popular(mut self, only_more_popular: bool) -> Self {
        self.only_more_popular = only_more_popular;
        self
    }

    /// Override the configured accuracy for this request.
    pub fn with_accuracy(mut self, accuracy: f32) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    /// Resolve the accuracy for this request.
    pub fn effective_accuracy(&self, configured: f32) -> f32 {
        self.accuracy.unwrap_or(configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::memory::MemoryTermIndex;

    #[test]
    fn test_defaults() {
        let index = MemoryTermIndex::new();
        let options = SpellingOptions::new(vec![Token::new("helo", 0)], &index);

        assert_eq!(options.count, DEFAULT_COUNT);
        assert!(!options.only_more_popular);
        assert_eq!(options.accuracy, None);
    }

    #[test]
    fn test_effective_accuracy() {
        let index = MemoryTermIndex::new();
        let options = SpellingOptions::new(Vec::new(), &index);
        assert_eq!(options.effective_accuracy(0.5), 0.5);

        let options = options.with_accuracy(0.9);
        assert_eq!(options.effective_accuracy(0.5), 0.9);
    }
}
