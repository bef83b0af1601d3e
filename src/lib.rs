//! # Sarissa Spellcheck
//!
//! Direct spelling correction for the Sarissa search library.
//!
//! ## Features
//!
//! - Suggestions drawn straight from an indexed field, no auxiliary index
//! - String-keyed plugin options parsed into a typed configuration
//! - Pluggable ranking and similarity metrics through an injected loader
//! - Host lifecycle hooks (`reload`, `build`) and concurrent read-only use

pub mod analysis;
pub mod error;
pub mod spelling;
pub mod terms;

pub mod prelude {
    pub use crate::analysis::token::Token;
    pub use crate::error::{Result, SpellCheckError};
    pub use crate::spelling::{
        DirectSpellChecker, DirectSpellCheckerConfig, PluginLoader, PluginRegistry,
        SpellChecker, SpellingOptions, SpellingResult, SuggestWord, SuggestionEngine,
    };
    pub use crate::terms::{MemoryTermIndex, Term, TermIndex};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
