//! Loading of custom comparators and distance metrics by identifier.
//!
//! The configuration names custom ranking and similarity implementations by a
//! string identifier. Resolution goes through a [`PluginLoader`] injected into
//! the spell checker at construction; [`PluginRegistry`] is the standard
//! loader, a map from identifier to factory.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, SpellCheckError};
use crate::spelling::comparator::{
    FrequencyThenScoreComparator, ScoreThenFrequencyComparator, SuggestWordComparator,
};
use crate::spelling::distance::{
    DamerauLevenshteinDistance, InternalLevenshtein, LevenshteinDistance, StringDistance,
};

/// Factory producing a comparator instance.
pub type ComparatorFactory = Arc<dyn Fn() -> Arc<dyn SuggestWordComparator> + Send + Sync>;

/// Factory producing a distance metric instance.
pub type DistanceFactory = Arc<dyn Fn() -> Arc<dyn StringDistance> + Send + Sync>;

/// Trait for resolving implementation identifiers to instances.
pub trait PluginLoader: Send + Sync {
    /// Instantiate the comparator registered under `identifier`.
    fn load_comparator(&self, identifier: &str) -> Result<Arc<dyn SuggestWordComparator>>;

    /// Instantiate the distance metric registered under `identifier`.
    fn load_distance(&self, identifier: &str) -> Result<Arc<dyn StringDistance>>;
}

/// Identifier-to-factory registry implementing [`PluginLoader`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use sarissa_spellcheck::spelling::distance::LevenshteinDistance;
/// use sarissa_spellcheck::spelling::plugin::{PluginLoader, PluginRegistry};
///
/// let mut registry = PluginRegistry::new();
/// registry.register_distance("my.Levenshtein", || Arc::new(LevenshteinDistance));
///
/// assert!(registry.load_distance("my.Levenshtein").is_ok());
/// assert!(registry.load_distance("my.Missing").is_err());
/// ```
#[derive(Clone, Default)]
pub struct PluginRegistry {
    comparators: HashMap<String, ComparatorFactory>,
    distances: HashMap<String, DistanceFactory>,
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut comparators: Vec<&String> = self.comparators.keys().collect();
        let mut distances: Vec<&String> = self.distances.keys().collect();
        comparators.sort();
        distances.sort();

        f.debug_struct("PluginRegistry")
            .field("comparators", &comparators)
            .field("distances", &distances)
            .finish()
    }
}

impl PluginRegistry {
    /// Identifier of [`ScoreThenFrequencyComparator`] in [`Self::with_builtins`].
    pub const SCORE_COMPARATOR: &'static str =
        "sarissa_spellcheck::spelling::comparator::ScoreThenFrequencyComparator";
    /// Identifier of [`FrequencyThenScoreComparator`] in [`Self::with_builtins`].
    pub const FREQUENCY_COMPARATOR: &'static str =
        "sarissa_spellcheck::spelling::comparator::FrequencyThenScoreComparator";
    /// Identifier of [`InternalLevenshtein`] in [`Self::with_builtins`].
    pub const INTERNAL_LEVENSHTEIN: &'static str =
        "sarissa_spellcheck::spelling::distance::InternalLevenshtein";
    /// Identifier of [`LevenshteinDistance`] in [`Self::with_builtins`].
    pub const LEVENSHTEIN: &'static str =
        "sarissa_spellcheck::spelling::distance::LevenshteinDistance";
    /// Identifier of [`DamerauLevenshteinDistance`] in [`Self::with_builtins`].
    pub const DAMERAU_LEVENSHTEIN: &'static str =
        "sarissa_spellcheck::spelling::distance::DamerauLevenshteinDistance";

    /// Create an empty registry. Every lookup fails until something is registered.
    pub fn new() -> Self {
        PluginRegistry::default()
    }

    /// Create a registry with the crate's own comparators and metrics
    /// registered under their fully-qualified type paths.
    pub fn with_builtins() -> Self {
        let mut registry = PluginRegistry::new();
        registry.register_comparator(Self::SCORE_COMPARATOR, || {
            Arc::new(ScoreThenFrequencyComparator)
        });
        registry.register_comparator(Self::FREQUENCY_COMPARATOR, || {
            Arc::new(FrequencyThenScoreComparator)
        });
        registry.register_distance(Self::INTERNAL_LEVENSHTEIN, || Arc::new(InternalLevenshtein));
        registry.register_distance(Self::LEVENSHTEIN, || Arc::new(LevenshteinDistance));
        registry.register_distance(Self::DAMERAU_LEVENSHTEIN, || {
            Arc::new(DamerauLevenshteinDistance)
        });
        registry
    }

    /// Register a comparator factory, replacing any previous one for the identifier.
    pub fn register_comparator<S, F>(&mut self, identifier: S, factory: F) -> &mut Self
    where
        S: Into<String>,
        F: Fn() -> Arc<dyn SuggestWordComparator> + Send + Sync + 'static,
    {
        self.comparators.insert(identifier.into(), Arc::new(factory));
        self
    }

    /// Register a distance factory, replacing any previous one for the identifier.
    pub fn register_distance<S, F>(&mut self, identifier: S, factory: F) -> &mut Self
    where
        S: Into<String>,
        F: Fn() -> Arc<dyn StringDistance> + Send + Sync + 'static,
    {
        self.distances.insert(identifier.into(), Arc::new(factory));
        self
    }

    /// Check whether a comparator is registered under the identifier.
    pub fn has_comparator(&self, identifier: &str) -> bool {
        self.comparators.contains_key(identifier)
    }

    /// Check whether a distance metric is registered under the identifier.
    pub fn has_distance(&self, identifier: &str) -> bool {
        self.distances.contains_key(identifier)
    }
}

impl PluginLoader for PluginRegistry {
    fn load_comparator(&self, identifier: &str) -> Result<Arc<dyn SuggestWordComparator>> {
        self.comparators
            .get(identifier)
            .map(|factory| factory())
            .ok_or_else(|| {
                SpellCheckError::plugin_load(format!("unknown comparator: {identifier}"))
            })
    }

    fn load_distance(&self, identifier: &str) -> Result<Arc<dyn StringDistance>> {
        self.distances
            .get(identifier)
            .map(|factory| factory())
            .ok_or_else(|| {
                SpellCheckError::plugin_load(format!("unknown distance measure: {identifier}"))
            })
    }
}
