//! # medaid-contracts
//!
//! Shared types, enumerations, and error contracts for the medaid engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod eligibility;
pub mod error;
pub mod guidance;
pub mod medication;
pub mod profile;
pub mod search;
pub mod session;
