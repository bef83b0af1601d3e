//! Configuration for the direct spell checker.
//!
//! Options arrive as a flat map of option names to string values, the way a
//! search server's plugin configuration hands them over. They are parsed once
//! into an immutable [`DirectSpellCheckerConfig`]; a new configuration replaces
//! the old one wholesale.
//!
//! | option                    | default    |
//! |---------------------------|------------|
//! | `name`                    | `default`  |
//! | `field`                   | (required) |
//! | `distanceMeasure`         | `internal` |
//! | `accuracy`                | `0.5`      |
//! | `maxEdits`                | `2`        |
//! | `minPrefix`               | `1`        |
//! | `maxInspections`          | `5`        |
//! | `comparatorClass`         | `score`    |
//! | `thresholdTokenFrequency` | `0.0`      |
//! | `minQueryLength`          | `4`        |
//! | `maxQueryFrequency`       | `0.01`     |
//!
//! Values are only parsed, not range checked; bounds are left to the
//! suggestion engine. Integer options must be plain digits with no surrounding
//! whitespace. Float options are trimmed and then parsed with Rust's `f32`
//! grammar, which also accepts `inf`, `infinity` and `nan` in any case.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, SpellCheckError};

/// Option name of the spell checker's name.
pub const NAME: &str = "name";
/// Option name of the field used as the source of terms.
pub const FIELD: &str = "field";
/// Option name of the distance measure.
pub const STRING_DISTANCE: &str = "distanceMeasure";
/// Shorthand selecting the built-in Levenshtein metric.
pub const INTERNAL_DISTANCE: &str = "internal";
/// Option name of the minimum accuracy.
pub const ACCURACY: &str = "accuracy";
/// Option name of the maximum edit distance.
pub const MAX_EDITS: &str = "maxEdits";
/// Option name of the required common prefix length.
pub const MIN_PREFIX: &str = "minPrefix";
/// Option name of the inspection limit.
pub const MAX_INSPECTIONS: &str = "maxInspections";
/// Option name of the suggestion comparator.
pub const COMPARATOR_CLASS: &str = "comparatorClass";
/// Shorthand selecting score-then-frequency ranking.
pub const SCORE_COMP: &str = "score";
/// Shorthand selecting frequency-then-score ranking.
pub const FREQ_COMP: &str = "freq";
/// Option name of the minimum suggestion frequency.
pub const THRESHOLD: &str = "thresholdTokenFrequency";
/// Option name of the minimum query term length.
pub const MIN_QUERY_LENGTH: &str = "minQueryLength";
/// Option name of the maximum query term frequency.
pub const MAX_QUERY_FREQUENCY: &str = "maxQueryFrequency";

/// Default spell checker name.
pub const DEFAULT_NAME: &str = "default";
pub const DEFAULT_ACCURACY: f32 = 0.5;
pub const DEFAULT_MAX_EDITS: u32 = 2;
pub const DEFAULT_MIN_PREFIX: u32 = 1;
pub const DEFAULT_MAX_INSPECTIONS: u32 = 5;
pub const DEFAULT_THRESHOLD: f32 = 0.0;
pub const DEFAULT_MIN_QUERY_LENGTH: u32 = 4;
pub const DEFAULT_MAX_QUERY_FREQUENCY: f32 = 0.01;

/// Which suggestion ranking to use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ComparatorKind {
    /// Score first, then frequency.
    #[default]
    Score,
    /// Frequency first, then score.
    Frequency,
    /// A custom implementation resolved through the plugin loader.
    Custom(String),
}

impl ComparatorKind {
    /// Parse an option value; the shorthands match case-insensitively.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(SCORE_COMP) {
            ComparatorKind::Score
        } else if value.eq_ignore_ascii_case(FREQ_COMP) {
            ComparatorKind::Frequency
        } else {
            ComparatorKind::Custom(value.to_string())
        }
    }

    /// The option value this kind was parsed from (shorthands normalized).
    pub fn as_str(&self) -> &str {
        match self {
            ComparatorKind::Score => SCORE_COMP,
            ComparatorKind::Frequency => FREQ_COMP,
            ComparatorKind::Custom(identifier) => identifier,
        }
    }
}

/// Which string similarity metric to use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DistanceKind {
    /// The built-in Levenshtein metric.
    #[default]
    Internal,
    /// A custom implementation resolved through the plugin loader.
    Custom(String),
}

impl DistanceKind {
    /// Parse an option value; `internal` matches case-insensitively.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(INTERNAL_DISTANCE) {
            DistanceKind::Internal
        } else {
            DistanceKind::Custom(value.to_string())
        }
    }

    /// The option value this kind was parsed from (shorthand normalized).
    pub fn as_str(&self) -> &str {
        match self {
            DistanceKind::Internal => INTERNAL_DISTANCE,
            DistanceKind::Custom(identifier) => identifier,
        }
    }
}

impl fmt::Display for ComparatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DistanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ComparatorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for DistanceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Immutable configuration of a direct spell checker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectSpellCheckerConfig {
    /// Name the host uses to address this spell checker.
    pub name: String,
    /// Field used as the source of terms.
    pub field: String,
    /// Similarity metric.
    #[serde(rename = "distanceMeasure")]
    pub distance: DistanceKind,
    /// Minimum similarity a suggestion must reach.
    pub accuracy: f32,
    /// Maximum number of edits between a term and a suggestion.
    pub max_edits: u32,
    /// Number of leading characters a suggestion must share with the term.
    pub min_prefix: u32,
    /// Candidates inspected per requested suggestion.
    pub max_inspections: u32,
    /// Ranking of suggestions.
    #[serde(rename = "comparatorClass")]
    pub comparator: ComparatorKind,
    /// Minimum frequency (absolute, or a fraction of documents when below 1).
    #[serde(rename = "thresholdTokenFrequency")]
    pub threshold_frequency: f32,
    /// Terms shorter than this are not corrected.
    pub min_query_length: u32,
    /// Terms more frequent than this are considered correct.
    pub max_query_frequency: f32,
}

impl DirectSpellCheckerConfig {
    /// Create a configuration for `field` with every other option at its default.
    pub fn new<S: Into<String>>(field: S) -> Self {
        DirectSpellCheckerConfig {
            name: DEFAULT_NAME.to_string(),
            field: field.into(),
            distance: DistanceKind::default(),
            accuracy: DEFAULT_ACCURACY,
            max_edits: DEFAULT_MAX_EDITS,
            min_prefix: DEFAULT_MIN_PREFIX,
            max_inspections: DEFAULT_MAX_INSPECTIONS,
            comparator: ComparatorKind::default(),
            threshold_frequency: DEFAULT_THRESHOLD,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            max_query_frequency: DEFAULT_MAX_QUERY_FREQUENCY,
        }
    }

    /// Parse a configuration from an option map.
    ///
    /// Absent options take their defaults and unknown keys are ignored. Fails
    /// with [`SpellCheckError::Config`] when `field` is missing or a numeric
    /// option does not parse.
    pub fn from_options(options: &HashMap<String, String>) -> Result<Self> {
        let field = options
            .get(FIELD)
            .ok_or_else(|| SpellCheckError::config(format!("missing required option {FIELD:?}")))?;

        let mut config = DirectSpellCheckerConfig::new(field.as_str());

        if let Some(name) = options.get(NAME) {
            config.name = name.clone();
        }
        if let Some(value) = options.get(COMPARATOR_CLASS) {
            config.comparator = ComparatorKind::parse(value);
        }
        if let Some(value) = options.get(STRING_DISTANCE) {
            config.distance = DistanceKind::parse(value);
        }

        config.accuracy = parse_float(options, ACCURACY, DEFAULT_ACCURACY)?;
        config.max_edits = parse_int(options, MAX_EDITS, DEFAULT_MAX_EDITS)?;
        config.min_prefix = parse_int(options, MIN_PREFIX, DEFAULT_MIN_PREFIX)?;
        config.max_inspections = parse_int(options, MAX_INSPECTIONS, DEFAULT_MAX_INSPECTIONS)?;
        config.threshold_frequency = parse_float(options, THRESHOLD, DEFAULT_THRESHOLD)?;
        config.min_query_length = parse_int(options, MIN_QUERY_LENGTH, DEFAULT_MIN_QUERY_LENGTH)?;
        config.max_query_frequency =
            parse_float(options, MAX_QUERY_FREQUENCY, DEFAULT_MAX_QUERY_FREQUENCY)?;

        Ok(config)
    }

    /// Parse a configuration from a flat JSON object.
    ///
    /// Scalar values are converted to their string form and then parsed like
    /// [`Self::from_options`], so `{"maxEdits": 1}` and `{"maxEdits": "1"}`
    /// are equivalent.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_options(&options_from_json(&value)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Convert back into an option map that parses to an equal configuration.
    pub fn to_options(&self) -> HashMap<String, String> {
        HashMap::from([
            (NAME.to_string(), self.name.clone()),
            (FIELD.to_string(), self.field.clone()),
            (STRING_DISTANCE.to_string(), self.distance.to_string()),
            (ACCURACY.to_string(), self.accuracy.to_string()),
            (MAX_EDITS.to_string(), self.max_edits.to_string()),
            (MIN_PREFIX.to_string(), self.min_prefix.to_string()),
            (MAX_INSPECTIONS.to_string(), self.max_inspections.to_string()),
            (COMPARATOR_CLASS.to_string(), self.comparator.to_string()),
            (THRESHOLD.to_string(), self.threshold_frequency.to_string()),
            (MIN_QUERY_LENGTH.to_string(), self.min_query_length.to_string()),
            (
                MAX_QUERY_FREQUENCY.to_string(),
                self.max_query_frequency.to_string(),
            ),
        ])
    }
}

fn parse_int(options: &HashMap<String, String>, key: &str, default: u32) -> Result<u32> {
    parse_option(options, key, default, false)
}

fn parse_float(options: &HashMap<String, String>, key: &str, default: f32) -> Result<f32> {
    parse_option(options, key, default, true)
}

fn parse_option<T>(
    options: &HashMap<String, String>,
    key: &str,
    default: T,
    trim: bool,
) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(value) = options.get(key) else {
        return Ok(default);
    };
    let raw = if trim { value.trim() } else { value.as_str() };
    raw.parse::<T>().map_err(|e| {
        SpellCheckError::config(format!("invalid value {value:?} for option {key:?}: {e}"))
    })
}

fn options_from_json(value: &Value) -> Result<HashMap<String, String>> {
    let Value::Object(map) = value else {
        return Err(SpellCheckError::config(
            "spell checker configuration must be a JSON object",
        ));
    };

    let mut options = HashMap::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => continue,
            Value::Array(_) | Value::Object(_) => {
                return Err(SpellCheckError::config(format!(
                    "option {key:?} must be a scalar value"
                )));
            }
        };
        options.insert(key.clone(), value);
    }

    Ok(options)
}
