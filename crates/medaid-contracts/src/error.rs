//! Error types for the medaid crates.
//!
//! The eligibility, priority, guidance, and search functions are total and
//! never fail. Only the edges return `MedaidResult<T>`: loading catalogs and
//! configuration, strict enum parsing, wizard transitions, and persistence.

use thiserror::Error;

/// The unified error type for the medaid workspace.
#[derive(Debug, Error)]
pub enum MedaidError {
    /// A configuration document is missing, unreadable, or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A medication catalog could not be loaded or failed validation.
    #[error("catalog error: {reason}")]
    CatalogError { reason: String },

    /// A string did not name any variant of a strictly parsed enumeration.
    #[error("unknown {kind} value '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    /// The wizard cannot move on because a required answer is missing.
    #[error("questionnaire step '{step}' has not been answered")]
    StepIncomplete { step: String },

    /// The wizard was asked to make a transition it does not allow.
    #[error("illegal questionnaire transition: {reason}")]
    IllegalTransition { reason: String },

    /// A profile repository could not complete the requested operation.
    #[error("profile repository error: {reason}")]
    RepositoryError { reason: String },
}

/// Convenience alias used throughout the medaid crates.
pub type MedaidResult<T> = Result<T, MedaidError>;
