//! String similarity metrics used to score suggestion candidates.
//!
//! Every metric returns a similarity in `[0.0, 1.0]` where `1.0` means the
//! strings are identical.

use std::cmp::min;
use std::fmt::Debug;

/// Trait for pluggable string similarity metrics.
pub trait StringDistance: Send + Sync + Debug {
    /// Similarity between `target` and `other`, from 0.0 (unrelated) to 1.0 (equal).
    fn get_distance(&self, target: &str, other: &str) -> f32;

    /// Get the name of this metric.
    fn name(&self) -> &'static str;
}

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let (len1, len2) = (s1_chars.len(), s2_chars.len());

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);
            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Calculate Damerau-Levenshtein distance, which also considers transpositions.
/// This is more accurate for real-world typos where adjacent characters are swapped.
#[allow(clippy::needless_range_loop)]
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let (len1, len2) = (s1_chars.len(), s2_chars.len());

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    // Initialize first row and column
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);

            matrix[i][j] = min(
                min(matrix[i - 1][j] + 1, matrix[i][j - 1] + 1),
                matrix[i - 1][j - 1] + cost,
            );

            // Check for transposition
            if i > 1
                && j > 1
                && s1_chars[i - 1] == s2_chars[j - 2]
                && s1_chars[i - 2] == s2_chars[j - 1]
            {
                matrix[i][j] = min(matrix[i][j], matrix[i - 2][j - 2] + cost);
            }
        }
    }

    matrix[len1][len2]
}

fn normalized(edits: usize, len: usize) -> f32 {
    if len == 0 {
        return if edits == 0 { 1.0 } else { 0.0 };
    }
    (1.0 - edits as f32 / len as f32).max(0.0)
}

/// The built-in metric, selected by `distanceMeasure=internal`.
///
/// Edits are normalized by the shorter string, matching how a bounded-edit
/// term enumeration scores its candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternalLevenshtein;

impl StringDistance for InternalLevenshtein {
    fn get_distance(&self, target: &str, other: &str) -> f32 {
        let len = min(target.chars().count(), other.chars().count());
        normalized(levenshtein_distance(target, other), len)
    }

    fn name(&self) -> &'static str {
        "internal"
    }
}

/// Levenshtein similarity normalized by the longer string.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinDistance;

impl StringDistance for LevenshteinDistance {
    fn get_distance(&self, target: &str, other: &str) -> f32 {
        let len = target.chars().count().max(other.chars().count());
        normalized(levenshtein_distance(target, other), len)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Damerau-Levenshtein similarity normalized by the longer string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DamerauLevenshteinDistance;

impl StringDistance for DamerauLevenshteinDistance {
    fn get_distance(&self, target: &str, other: &str) -> f32 {
        let len = target.chars().count().max(other.chars().count());
        normalized(damerau_levenshtein_distance(target, other), len)
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}
