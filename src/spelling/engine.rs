//! The suggestion engine a direct spell checker delegates to.
//!
//! The engine owns candidate generation: bounded-edit term enumeration,
//! frequency filtering and ranking. The spell checker only configures it
//! through the setters below and forwards each query term to
//! [`SuggestionEngine::suggest_similar`].

use std::sync::Arc;

use crate::error::Result;
use crate::spelling::comparator::SuggestWordComparator;
use crate::spelling::distance::StringDistance;
use crate::spelling::suggest_word::SuggestWord;
use crate::terms::reader::TermIndex;
use crate::terms::term::Term;

/// Trait for edit-distance suggestion engines.
///
/// Setters are only called while the owning spell checker holds exclusive
/// access; `suggest_similar` may be called from many threads at once.
pub trait SuggestionEngine: Send + Sync {
    /// Set the minimum similarity a suggestion must reach.
    fn set_accuracy(&mut self, accuracy: f32);

    /// Set the maximum number of edits between a term and a suggestion.
    fn set_max_edits(&mut self, max_edits: u32);

    /// Set the number of leading characters a suggestion must share with the term.
    fn set_min_prefix(&mut self, min_prefix: u32);

    /// Set the number of candidates inspected per requested suggestion.
    fn set_max_inspections(&mut self, max_inspections: u32);

    /// Set the ranking of suggestions.
    fn set_comparator(&mut self, comparator: Arc<dyn SuggestWordComparator>);

    /// Set the similarity metric used to score candidates.
    fn set_distance(&mut self, distance: Arc<dyn StringDistance>);

    /// Set the minimum frequency of a suggestion.
    fn set_threshold_frequency(&mut self, threshold: f32);

    /// Set the minimum length of a term before suggestions are generated.
    fn set_min_query_length(&mut self, min_query_length: u32);

    /// Set the frequency above which a term is considered correctly spelled.
    fn set_max_query_frequency(&mut self, max_query_frequency: f32);

    /// Set whether terms are lower-cased before lookup.
    fn set_lower_case_terms(&mut self, lower_case_terms: bool);

    /// Suggest up to `count` corrections for `term`, best first.
    ///
    /// With `only_more_popular` only terms strictly more frequent than `term`
    /// are suggested. Index failures are reported as errors.
    fn suggest_similar(
        &self,
        term: &Term,
        count: usize,
        index: &dyn TermIndex,
        only_more_popular: bool,
        accuracy: f32,
    ) -> Result<Vec<SuggestWord>>;
}
