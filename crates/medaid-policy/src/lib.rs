//! # medaid-policy
//!
//! Insurance-driven eligibility and priority rules for medication assistance
//! programs.
//!
//! ## Overview
//!
//! Two pure, total functions:
//!
//! - [`resolve_eligibility`] maps an insurance type to the set of program
//!   categories the patient can use.
//! - [`resolve_priority`] maps (insurance type, financial status) to the
//!   order in which to pursue those categories.
//!
//! Both are exhaustive `match`es over the enumerations in medaid-contracts,
//! so adding an insurance type fails to compile until it is mapped.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medaid_policy::{resolve_eligibility, resolve_priority};
//!
//! let flags = resolve_eligibility(InsuranceType::Medicare);
//! assert!(!flags.copay_cards);
//! let order = resolve_priority(InsuranceType::Medicare, FinancialStatus::Crisis);
//! ```

pub mod eligibility;
pub mod priority;

pub use eligibility::resolve_eligibility;
pub use priority::{resolve_priority, FALLBACK_ORDER};

// ── Tests ─────────────────────────────────────────────────────────────────────
