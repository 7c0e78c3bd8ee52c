//! Approximate medication matching.
//!
//! Each medication is scored on two keys, brand name and generic name. A
//! key's score is the smallest Levenshtein distance (computed by `strsim`)
//! between the query and any window of the key text, divided by the query
//! length. 0.0 is an exact substring hit and 1.0 means nothing in common.
//! The position of the hit inside the key is ignored.
//!
//! A medication matches when its best key score is at or below the
//! configured threshold. Results are ordered by score; equal scores keep
//! catalog order.

use tracing::debug;

use medaid_contracts::{medication::Medication, search::SearchConfig};

/// One search result with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub medication: &'a Medication,
    /// Normalized edit distance in `0.0..=1.0`; lower is better.
    pub score: f64,
}

/// A configured matcher. Cheap to construct and holds no per-query state.
#[derive(Debug, Clone, Default)]
pub struct MedicationMatcher {
    config: SearchConfig,
}

impl MedicationMatcher {
    /// The threshold is clamped to `0.0..=1.0`.
    pub fn new(mut config: SearchConfig) -> Self {
        config.threshold = config.threshold.clamp(0.0, 1.0);
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Return matching medications, best first.
    pub fn search<'a>(&self, query: &str, catalog: &'a [Medication]) -> Vec<&'a Medication> {
        self.search_scored(query, catalog)
            .into_iter()
            .map(|hit| hit.medication)
            .collect()
    }

    /// Return matching medications with their scores, best first.
    ///
    /// A query shorter than `min_query_len` characters after trimming yields
    /// an empty list.
    pub fn search_scored<'a>(&self, query: &str, catalog: &'a [Medication]) -> Vec<SearchHit<'a>> {
        let trimmed = query.trim();
        let len = trimmed.chars().count();
        if len == 0 || len < self.config.min_query_len {
            debug!(query, min = self.config.min_query_len, "query too short");
            return Vec::new();
        }
        let pattern: Vec<char> = trimmed.to_lowercase().chars().collect();

        let mut hits: Vec<SearchHit<'a>> = catalog
            .iter()
            .filter_map(|medication| {
                let score = [&medication.brand_name, &medication.generic_name]
                    .into_iter()
                    .map(|key| key_score(&pattern, key, self.config.threshold))
                    .fold(f64::INFINITY, f64::min);
                (score <= self.config.threshold).then_some(SearchHit { medication, score })
            })
            .collect();

        // Stable: equal scores stay in catalog order.
        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        if let Some(limit) = self.config.limit {
            hits.truncate(limit);
        }

        debug!(query, hits = hits.len(), "medication search complete");
        hits
    }
}

/// Search `catalog` with the default configuration (threshold 0.4, minimum
/// query length 2).
pub fn search<'a>(query: &str, catalog: &'a [Medication]) -> Vec<&'a Medication> {
    MedicationMatcher::default().search(query, catalog)
}

/// Score `pattern` against one key. An empty key scores `f64::INFINITY`.
///
/// Only windows whose length differs from the pattern by at most the
/// permitted error count are tried; any other window is already over budget
/// on length alone.
fn key_score(pattern: &[char], key: &str, threshold: f64) -> f64 {
    let text: Vec<char> = key.to_lowercase().chars().collect();
    if text.is_empty() {
        return f64::INFINITY;
    }

    let m = pattern.len();
    let max_errors = ((threshold * m as f64).floor() as usize).min(m);
    let pattern: String = pattern.iter().collect();

    let shortest = m.saturating_sub(max_errors).max(1);
    let longest = (m + max_errors).min(text.len());

    let mut best = usize::MAX;
    if shortest > longest {
        // Key is shorter than any admissible window; compare it whole.
        best = strsim::levenshtein(&pattern, &text.iter().collect::<String>());
    } else {
        'windows: for len in shortest..=longest {
            for start in 0..=text.len() - len {
                let window: String = text[start..start + len].iter().collect();
                best = best.min(strsim::levenshtein(&pattern, &window));
                if best == 0 {
                    break 'windows;
                }
            }
        }
    }

    best as f64 / m as f64
}
