//! Spell checkers pluggable into the query pipeline.
//!
//! [`DirectSpellChecker`] draws suggestions straight from the terms of an
//! indexed field. It keeps no dictionary or auxiliary index of its own: it
//! parses its options, configures a [`SuggestionEngine`], and forwards every
//! query token to that engine.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, info};

use crate::error::Result;
use crate::spelling::comparator::{
    FrequencyThenScoreComparator, ScoreThenFrequencyComparator, SuggestWordComparator,
};
use crate::spelling::config::{ComparatorKind, DirectSpellCheckerConfig, DistanceKind};
use crate::spelling::distance::{InternalLevenshtein, StringDistance};
use crate::spelling::engine::SuggestionEngine;
use crate::spelling::options::SpellingOptions;
use crate::spelling::plugin::PluginLoader;
use crate::spelling::result::SpellingResult;
use crate::terms::reader::TermIndex;
use crate::terms::term::Term;

/// Lifecycle contract every spell checker exposes to the host.
pub trait SpellChecker: Send + Sync {
    /// Name the host uses to address this spell checker.
    fn name(&self) -> &str;

    /// Field used as the source of terms.
    fn field(&self) -> &str;

    /// Accuracy applied when a request does not override it.
    fn accuracy(&self) -> f32;

    /// Similarity metric used to score suggestions.
    fn string_distance(&self) -> Arc<dyn StringDistance>;

    /// Called whenever the underlying index changes.
    fn reload(&self, index: &dyn TermIndex) -> Result<()>;

    /// Called when the host asks spell checkers to (re)build their data.
    fn build(&self, index: &dyn TermIndex) -> Result<()>;

    /// Get suggestions for every token of the request.
    fn get_suggestions(&self, options: &SpellingOptions<'_>) -> Result<SpellingResult>;
}

/// Plugins resolved from a configuration.
struct Resolved {
    comparator: Arc<dyn SuggestWordComparator>,
    distance: Arc<dyn StringDistance>,
}

/// A spell checker that needs no auxiliary index.
///
/// Construction parses and resolves the full configuration and applies it to
/// the engine, so a `DirectSpellChecker` is always ready to serve requests.
/// Concurrent `get_suggestions` calls are safe; [`Self::reconfigure`] takes
/// `&mut self` and therefore cannot overlap with them.
///
/// # Examples
///
/// ```no_run
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// use sarissa_spellcheck::analysis::token::Token;
/// use sarissa_spellcheck::spelling::{
///     DirectSpellChecker, PluginRegistry, SpellChecker, SpellingOptions, SuggestionEngine,
/// };
/// use sarissa_spellcheck::terms::MemoryTermIndex;
///
/// # fn example<E: SuggestionEngine>(engine: E) -> sarissa_spellcheck::error::Result<()> {
/// let options = HashMap::from([
///     ("field".to_string(), "text".to_string()),
///     ("maxEdits".to_string(), "1".to_string()),
/// ]);
/// let checker = DirectSpellChecker::new(engine, Arc::new(PluginRegistry::new()), &options)?;
///
/// let index = MemoryTermIndex::new();
/// let request = SpellingOptions::new(Token::from_whitespace("helo"), &index).with_count(5);
/// let result = checker.get_suggestions(&request)?;
/// # Ok(())
/// # }
/// ```
pub struct DirectSpellChecker<E> {
    engine: E,
    loader: Arc<dyn PluginLoader>,
    config: Arc<DirectSpellCheckerConfig>,
    distance: Arc<dyn StringDistance>,
}

impl<E: SuggestionEngine> DirectSpellChecker<E> {
    /// Configure `engine` from `options` and wrap it.
    ///
    /// Custom comparators and distance metrics are resolved through `loader`.
    pub fn new(
        engine: E,
        loader: Arc<dyn PluginLoader>,
        options: &HashMap<String, String>,
    ) -> Result<Self> {
        let config = DirectSpellCheckerConfig::from_options(options)?;
        Self::with_config(engine, loader, config)
    }

    /// Wrap `engine` using an already parsed configuration.
    pub fn with_config(
        mut engine: E,
        loader: Arc<dyn PluginLoader>,
        config: DirectSpellCheckerConfig,
    ) -> Result<Self> {
        info!("init: {}", describe(&config));

        let resolved = resolve(loader.as_ref(), &config)?;
        apply(&mut engine, &config, &resolved);

        Ok(DirectSpellChecker {
            engine,
            loader,
            config: Arc::new(config),
            distance: resolved.distance,
        })
    }

    /// Replace the configuration wholesale.
    ///
    /// The new options are parsed and resolved before anything changes; on
    /// error the previous configuration stays in effect.
    pub fn reconfigure(&mut self, options: &HashMap<String, String>) -> Result<()> {
        let config = DirectSpellCheckerConfig::from_options(options)?;
        info!("reconfigure: {}", describe(&config));

        let resolved = resolve(self.loader.as_ref(), &config)?;
        apply(&mut self.engine, &config, &resolved);

        self.config = Arc::new(config);
        self.distance = resolved.distance;
        Ok(())
    }

    /// Get the active configuration.
    pub fn config(&self) -> &DirectSpellCheckerConfig {
        &self.config
    }

    /// Get the configured engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Consume the spell checker and return the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }
}

impl<E: SuggestionEngine> SpellChecker for DirectSpellChecker<E> {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn field(&self) -> &str {
        &self.config.field
    }

    fn accuracy(&self) -> f32 {
        self.config.accuracy
    }

    fn string_distance(&self) -> Arc<dyn StringDistance> {
        Arc::clone(&self.distance)
    }

    // Suggestions come straight from the live index, so there is nothing to reload.
    fn reload(&self, _index: &dyn TermIndex) -> Result<()> {
        Ok(())
    }

    // Nor anything to build.
    fn build(&self, _index: &dyn TermIndex) -> Result<()> {
        Ok(())
    }

    fn get_suggestions(&self, options: &SpellingOptions<'_>) -> Result<SpellingResult> {
        debug!("getSuggestions: {:?}", options.tokens);

        let accuracy = options.effective_accuracy(self.config.accuracy);
        let mut result = SpellingResult::new();

        for token in &options.tokens {
            let term = Term::new(self.config.field.as_str(), token.text.as_str());
            let suggestions = self.engine.suggest_similar(
                &term,
                options.count,
                options.reader,
                options.only_more_popular,
                accuracy,
            )?;

            result.add_token(token.clone());
            for suggestion in suggestions {
                result.add(token, suggestion.string, suggestion.freq);
            }
        }

        Ok(result)
    }
}

impl<E> fmt::Debug for DirectSpellChecker<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectSpellChecker")
            .field("config", &self.config)
            .field("distance", &self.distance.name())
            .finish()
    }
}

fn describe(config: &DirectSpellCheckerConfig) -> String {
    serde_json::to_string(config).unwrap_or_else(|_| format!("{config:?}"))
}

fn resolve(loader: &dyn PluginLoader, config: &DirectSpellCheckerConfig) -> Result<Resolved> {
    let comparator: Arc<dyn SuggestWordComparator> = match &config.comparator {
        ComparatorKind::Score => Arc::new(ScoreThenFrequencyComparator),
        ComparatorKind::Frequency => Arc::new(FrequencyThenScoreComparator),
        ComparatorKind::Custom(identifier) => loader.load_comparator(identifier)?,
    };

    let distance: Arc<dyn StringDistance> = match &config.distance {
        DistanceKind::Internal => Arc::new(InternalLevenshtein),
        DistanceKind::Custom(identifier) => loader.load_distance(identifier)?,
    };

    Ok(Resolved {
        comparator,
        distance,
    })
}

fn apply<E: SuggestionEngine>(
    engine: &mut E,
    config: &DirectSpellCheckerConfig,
    resolved: &Resolved,
) {
    engine.set_comparator(Arc::clone(&resolved.comparator));
    engine.set_distance(Arc::clone(&resolved.distance));
    engine.set_max_edits(config.max_edits);
    engine.set_min_prefix(config.min_prefix);
    engine.set_accuracy(config.accuracy);
    engine.set_threshold_frequency(config.threshold_frequency);
    engine.set_max_inspections(config.max_inspections);
    engine.set_min_query_length(config.min_query_length);
    engine.set_max_query_frequency(config.max_query_frequency);
    // Query terms are looked up exactly as the analyzer produced them.
    engine.set_lower_case_terms(false);
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::analysis::token::Token;
    use crate::error::SpellCheckError;
    use crate::spelling::plugin::PluginRegistry;
    use crate::spelling::suggest_word::SuggestWord;
    use crate::terms::memory::MemoryTermIndex;

    /// Engine stub that records every setting and lookup.
    #[derive(Debug, Default)]
    struct RecordingEngine {
        settings: Vec<String>,
        comparator: Option<&'static str>,
        distance: Option<&'static str>,
        lower_case_terms: Option<bool>,
        lookups: Mutex<Vec<(Term, f32)>>,
    }

    impl SuggestionEngine for RecordingEngine {
        fn set_accuracy(&mut self, accuracy: f32) {
            self.settings.push(format!("accuracy={accuracy}"));
        }
        fn set_max_edits(&mut self, max_edits: u32) {
            self.settings.push(format!("maxEdits={max_edits}"));
        }
        fn set_min_prefix(&mut self, min_prefix: u32) {
            self.settings.push(format!("minPrefix={min_prefix}"));
        }
        fn set_max_inspections(&mut self, max_inspections: u32) {
            self.settings.push(format!("maxInspections={max_inspections}"));
        }
        fn set_comparator(&mut self, comparator: Arc<dyn SuggestWordComparator>) {
            self.comparator = Some(comparator.name());
        }
        fn set_distance(&mut self, distance: Arc<dyn StringDistance>) {
            self.distance = Some(distance.name());
        }
        fn set_threshold_frequency(&mut self, threshold: f32) {
            self.settings.push(format!("threshold={threshold}"));
        }
        fn set_min_query_length(&mut self, min_query_length: u32) {
            self.settings.push(format!("minQueryLength={min_query_length}"));
        }
        fn set_max_query_frequency(&mut self, max_query_frequency: f32) {
            self.settings.push(format!("maxQueryFrequency={max_query_frequency}"));
        }
        fn set_lower_case_terms(&mut self, lower_case_terms: bool) {
            self.lower_case_terms = Some(lower_case_terms);
        }
        fn suggest_similar(
            &self,
            term: &Term,
            _count: usize,
            _index: &dyn TermIndex,
            _only_more_popular: bool,
            accuracy: f32,
        ) -> Result<Vec<SuggestWord>> {
            self.lookups.lock().push((term.clone(), accuracy));
            Ok(vec![SuggestWord::new(format!("{}!", term.text()), 1, 1.0)])
        }
    }

    fn options(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn checker(pairs: &[(&str, &str)]) -> Result<DirectSpellChecker<RecordingEngine>> {
        DirectSpellChecker::new(
            RecordingEngine::default(),
            Arc::new(PluginRegistry::with_builtins()),
            &options(pairs),
        )
    }

    #[test]
    fn test_defaults_applied_to_engine() {
        let checker = checker(&[("field", "text")]).unwrap();
        let engine = checker.engine();

        assert_eq!(
            engine.settings,
            vec![
                "maxEdits=2",
                "minPrefix=1",
                "accuracy=0.5",
                "threshold=0",
                "maxInspections=5",
                "minQueryLength=4",
                "maxQueryFrequency=0.01",
            ]
        );
        assert_eq!(engine.comparator, Some("score"));
        assert_eq!(engine.distance, Some("internal"));
        assert_eq!(engine.lower_case_terms, Some(false));
    }

    #[test]
    fn test_configured_values_applied_to_engine() {
        let checker = checker(&[
            ("name", "direct"),
            ("field", "body"),
            ("distanceMeasure", PluginRegistry::DAMERAU_LEVENSHTEIN),
            ("accuracy", "0.7"),
            ("maxEdits", "1"),
            ("minPrefix", "0"),
            ("maxInspections", "10"),
            ("comparatorClass", PluginRegistry::FREQUENCY_COMPARATOR),
            ("thresholdTokenFrequency", "0.001"),
            ("minQueryLength", "3"),
            ("maxQueryFrequency", "0.5"),
        ])
        .unwrap();
        let engine = checker.engine();

        assert_eq!(
            engine.settings,
            vec![
                "maxEdits=1",
                "minPrefix=0",
                "accuracy=0.7",
                "threshold=0.001",
                "maxInspections=10",
                "minQueryLength=3",
                "maxQueryFrequency=0.5",
            ]
        );
        assert_eq!(engine.comparator, Some("freq"));
        assert_eq!(engine.distance, Some("damerau_levenshtein"));
        assert_eq!(engine.lower_case_terms, Some(false));
    }

    #[test]
    fn test_reconfigure_reapplies_engine_settings() {
        let mut checker = checker(&[("field", "text")]).unwrap();
        let applied = checker.engine().settings.len();

        checker
            .reconfigure(&options(&[
                ("field", "title"),
                ("distanceMeasure", PluginRegistry::LEVENSHTEIN),
                ("accuracy", "0.9"),
                ("maxEdits", "1"),
                ("minPrefix", "3"),
                ("maxInspections", "2"),
                ("comparatorClass", "freq"),
                ("thresholdTokenFrequency", "4"),
                ("minQueryLength", "6"),
                ("maxQueryFrequency", "0.25"),
            ]))
            .unwrap();
        let engine = checker.engine();

        assert_eq!(
            engine.settings[applied..],
            [
                "maxEdits=1",
                "minPrefix=3",
                "accuracy=0.9",
                "threshold=4",
                "maxInspections=2",
                "minQueryLength=6",
                "maxQueryFrequency=0.25",
            ]
        );
        assert_eq!(engine.comparator, Some("freq"));
        assert_eq!(engine.distance, Some("levenshtein"));
        assert_eq!(engine.lower_case_terms, Some(false));
    }

    #[test]
    fn test_accessors() {
        let checker = checker(&[("field", "body"), ("name", "direct"), ("accuracy", "0.7")]).unwrap();

        assert_eq!(checker.name(), "direct");
        assert_eq!(checker.field(), "body");
        assert_eq!(checker.accuracy(), 0.7);
        assert_eq!(checker.string_distance().name(), "internal");
    }

    #[test]
    fn test_custom_plugins_resolved() {
        let checker = checker(&[
            ("field", "text"),
            ("comparatorClass", PluginRegistry::FREQUENCY_COMPARATOR),
            ("distanceMeasure", PluginRegistry::LEVENSHTEIN),
        ])
        .unwrap();

        assert_eq!(checker.engine().comparator, Some("freq"));
        assert_eq!(checker.engine().distance, Some("levenshtein"));
        assert_eq!(checker.string_distance().name(), "levenshtein");
    }

    #[test]
    fn test_unknown_plugins_fail() {
        let err = checker(&[("field", "text"), ("comparatorClass", "com.example.Nope")])
            .unwrap_err();
        assert!(matches!(err, SpellCheckError::PluginLoad(_)));

        let err = checker(&[("field", "text"), ("distanceMeasure", "com.example.Nope")])
            .unwrap_err();
        assert!(matches!(err, SpellCheckError::PluginLoad(_)));
    }

    #[test]
    fn test_reconfigure_replaces_config() {
        let mut checker = checker(&[("field", "text")]).unwrap();
        checker
            .reconfigure(&options(&[("field", "title"), ("comparatorClass", "freq")]))
            .unwrap();

        assert_eq!(checker.field(), "title");
        assert_eq!(checker.config().comparator, ComparatorKind::Frequency);
        assert_eq!(checker.engine().comparator, Some("freq"));
    }

    #[test]
    fn test_failed_reconfigure_keeps_previous_config() {
        let mut checker = checker(&[("field", "text"), ("accuracy", "0.6")]).unwrap();
        let applied = checker.engine().settings.len();

        let err = checker
            .reconfigure(&options(&[("field", "title"), ("accuracy", "abc")]))
            .unwrap_err();
        assert!(matches!(err, SpellCheckError::Config(_)));

        let err = checker
            .reconfigure(&options(&[("field", "title"), ("distanceMeasure", "nope")]))
            .unwrap_err();
        assert!(matches!(err, SpellCheckError::PluginLoad(_)));

        assert_eq!(checker.field(), "text");
        assert_eq!(checker.accuracy(), 0.6);
        assert_eq!(checker.engine().settings.len(), applied);
    }

    #[test]
    fn test_lookup_uses_configured_field() {
        let checker = checker(&[("field", "body")]).unwrap();
        let index = MemoryTermIndex::new();
        let request = SpellingOptions::new(vec![Token::new("Helo", 0)], &index);

        let result = checker.get_suggestions(&request).unwrap();
        assert_eq!(result.get("Helo").unwrap()[0].suggestion, "Helo!");

        let lookups = checker.engine().lookups.lock();
        assert_eq!(lookups[0], (Term::new("body", "Helo"), 0.5));
    }

    #[test]
    fn test_debug() {
        let checker = checker(&[("field", "text")]).unwrap();
        let debug = format!("{checker:?}");
        assert!(debug.contains("DirectSpellChecker"));
        assert!(debug.contains("internal"));
    }
}
