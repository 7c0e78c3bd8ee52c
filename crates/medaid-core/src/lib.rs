//! # medaid-core
//!
//! The stateful edges around the pure medaid engine:
//! - `MedicationCatalog`: the bundled (or configured) medication reference data
//! - `MedaidConfig`: TOML configuration for hosts
//! - `Wizard`: the eight-step questionnaire state machine
//! - `ProfileRepository`: the persistence seam for questionnaire results
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medaid_core::{MedicationCatalog, Wizard, wizard::Answer};
//!
//! let catalog = MedicationCatalog::bundled()?;
//! let mut wizard = Wizard::new();
//! wizard.answer(Answer::Role(Role::Patient))?;
//! wizard.advance()?;
//! ```

pub mod catalog;
pub mod config;
pub mod traits;
pub mod wizard;

pub use catalog::MedicationCatalog;
pub use config::MedaidConfig;
pub use traits::ProfileRepository;
pub use wizard::{Answer, Wizard, WizardStep};

// ── Tests ─────────────────────────────────────────────────────────────────────
