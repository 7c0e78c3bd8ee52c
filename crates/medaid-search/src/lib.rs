//! # medaid-search
//!
//! Fuzzy medication lookup over a medication catalog slice.
//!
//! Matches the query against both brand and generic names, tolerating typos
//! up to a configurable threshold. String distance comes from `strsim`.
//!
//! ```rust,ignore
//! use medaid_search::search;
//!
//! let hits = search("tacrolimis", catalog.medications());
//! assert_eq!(hits[0].generic_name, "Tacrolimus");
//! ```

pub mod matcher;

pub use matcher::{search, MedicationMatcher, SearchHit};

// ── Tests ─────────────────────────────────────────────────────────────────────
