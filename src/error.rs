//! Error types for the spell checker.
//!
//! All errors are represented by the [`SpellCheckError`] enum. Configuration
//! problems (malformed numeric options, unresolvable plugins) surface when a
//! checker is initialized; index failures surface from individual suggestion
//! calls and are propagated to the caller unchanged.
//!
//! # Examples
//!
//! ```
//! use sarissa_spellcheck::error::{Result, SpellCheckError};
//!
//! fn parse_edits(value: &str) -> Result<u32> {
//!     value
//!         .parse()
//!         .map_err(|_| SpellCheckError::config(format!("maxEdits: {value:?}")))
//! }
//!
//! assert!(parse_edits("abc").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spell checking operations.
#[derive(Error, Debug)]
pub enum SpellCheckError {
    /// I/O errors (loading configuration or term files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed or missing configuration option
    #[error("Configuration error: {0}")]
    Config(String),

    /// A comparator or distance identifier could not be resolved
    #[error("Plugin load error: {0}")]
    PluginLoad(String),

    /// Failure reported by the term index or suggestion engine
    #[error("Index access error: {0}")]
    IndexAccess(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellCheckError.
pub type Result<T> = std::result::Result<T, SpellCheckError>;

impl SpellCheckError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellCheckError::Config(msg.into())
    }

    /// Create a new plugin load error.
    pub fn plugin_load<S: Into<String>>(msg: S) -> Self {
        SpellCheckError::PluginLoad(msg.into())
    }

    /// Create a new index access error.
    pub fn index_access<S: Into<String>>(msg: S) -> Self {
        SpellCheckError::IndexAccess(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellCheckError::Other(msg.into())
    }

    /// Whether this error was raised while building a configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SpellCheckError::Config(_) | SpellCheckError::PluginLoad(_)
        )
    }
}
