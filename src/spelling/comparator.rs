//! Ranking strategies for suggestions.
//!
//! A comparator orders the engine's candidates; `Ordering::Less` means the
//! first word ranks ahead of the second.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::spelling::suggest_word::SuggestWord;

/// Trait for suggestion ranking implementations.
pub trait SuggestWordComparator: Send + Sync + Debug {
    /// Compare two suggestions. `Less` ranks `a` before `b`.
    fn compare(&self, a: &SuggestWord, b: &SuggestWord) -> Ordering;

    /// Get the name of this comparator.
    fn name(&self) -> &'static str;

    /// Sort suggestions best-first.
    fn sort(&self, words: &mut [SuggestWord]) {
        words.sort_by(|a, b| self.compare(a, b));
    }
}

fn by_score(a: &SuggestWord, b: &SuggestWord) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

fn by_freq(a: &SuggestWord, b: &SuggestWord) -> Ordering {
    b.freq.cmp(&a.freq)
}

/// Ranks by score, then frequency. Selected by `comparatorClass=score`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreThenFrequencyComparator;

impl SuggestWordComparator for ScoreThenFrequencyComparator {
    fn compare(&self, a: &SuggestWord, b: &SuggestWord) -> Ordering {
        by_score(a, b)
            .then_with(|| by_freq(a, b))
            .then_with(|| a.string.cmp(&b.string))
    }

    fn name(&self) -> &'static str {
        "score"
    }
}

/// Ranks by frequency, then score. Selected by `comparatorClass=freq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyThenScoreComparator;

impl SuggestWordComparator for FrequencyThenScoreComparator {
    fn compare(&self, a: &SuggestWord, b: &SuggestWord) -> Ordering {
        by_freq(a, b)
            .then_with(|| by_score(a, b))
            .then_with(|| a.string.cmp(&b.string))
    }

    fn name(&self) -> &'static str {
        "freq"
    }
}
