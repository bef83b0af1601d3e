//! Spelling suggestions drawn directly from an index.
//!
//! This module adapts an edit-distance [`SuggestionEngine`] into the host's
//! spell checker slot. [`DirectSpellChecker`] parses the plugin options into a
//! [`DirectSpellCheckerConfig`], resolves the ranking and similarity plugins,
//! configures the engine, and forwards query tokens to it.

pub mod checker;
pub mod comparator;
pub mod config;
pub mod distance;
pub mod engine;
pub mod options;
pub mod plugin;
pub mod result;
pub mod suggest_word;

// Re-export commonly used types
pub use checker::{DirectSpellChecker, SpellChecker};
pub use comparator::{
    FrequencyThenScoreComparator, ScoreThenFrequencyComparator, SuggestWordComparator,
};
pub use config::{ComparatorKind, DirectSpellCheckerConfig, DistanceKind};
pub use distance::{
    DamerauLevenshteinDistance, InternalLevenshtein, LevenshteinDistance, StringDistance,
};
pub use engine::SuggestionEngine;
pub use options::SpellingOptions;
pub use plugin::{PluginLoader, PluginRegistry};
pub use result::{Correction, SpellingResult, TokenSuggestions};
pub use suggest_word::SuggestWord;
