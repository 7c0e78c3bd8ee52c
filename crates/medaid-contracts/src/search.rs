//! Fuzzy search tuning.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the medication matcher.
///
/// Read from the `[search]` table of the medaid TOML configuration. Every
/// field has a default, so an empty table is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum normalized edit distance accepted as a match.
    /// 0.0 requires an exact substring, 1.0 matches anything.
    pub threshold: f64,

    /// Queries shorter than this (in characters, after trimming) return
    /// no results.
    pub min_query_len: usize,

    /// Cap on the number of results. `None` returns every match.
    pub limit: Option<usize>,
}

impl SearchConfig {
    pub const DEFAULT_THRESHOLD: f64 = 0.4;
    pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            min_query_len: Self::DEFAULT_MIN_QUERY_LEN,
            limit: None,
        }
    }
}
