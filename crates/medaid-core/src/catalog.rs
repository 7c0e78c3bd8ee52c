//! TOML-backed medication catalog.
//!
//! The catalog is static reference data: it is loaded once, validated, and
//! never mutated afterwards. The default catalog ships inside the crate
//! (`data/medications.toml`); alternates can be loaded from a string or file
//! with the same schema.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use medaid_contracts::{
    error::{MedaidError, MedaidResult},
    medication::{Medication, TransplantStage},
    profile::OrganType,
};

const BUNDLED_CATALOG: &str = include_str!("../data/medications.toml");

/// The top-level structure deserialized from a catalog TOML document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    medications: Vec<Medication>,
}

/// An immutable, ID-unique list of medications.
///
/// ```rust,ignore
/// use medaid_core::MedicationCatalog;
///
/// let catalog = MedicationCatalog::bundled()?;
/// let prograf = catalog.get("tacrolimus");
/// ```
#[derive(Debug, Clone)]
pub struct MedicationCatalog {
    medications: Vec<Medication>,
}

impl MedicationCatalog {
    /// Parse the catalog compiled into this crate.
    pub fn bundled() -> MedaidResult<Self> {
        Self::from_toml_str(BUNDLED_CATALOG)
    }

    /// Parse `s` as a TOML catalog.
    ///
    /// Returns `MedaidError::CatalogError` if the TOML is malformed, does not
    /// match the `Medication` schema, or repeats a medication ID.
    pub fn from_toml_str(s: &str) -> MedaidResult<Self> {
        let doc: CatalogDocument = toml::from_str(s).map_err(|e| MedaidError::CatalogError {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;
        Self::new(doc.medications)
    }

    /// Read the file at `path` and parse it as a TOML catalog.
    pub fn from_file(path: &Path) -> MedaidResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedaidError::CatalogError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build a catalog from already-parsed records, rejecting duplicate IDs.
    pub fn new(medications: Vec<Medication>) -> MedaidResult<Self> {
        let mut seen = HashSet::with_capacity(medications.len());
        for med in &medications {
            if med.id.trim().is_empty() {
                return Err(MedaidError::CatalogError {
                    reason: format!("medication '{}' has an empty id", med.brand_name),
                });
            }
            if !seen.insert(med.id.as_str()) {
                return Err(MedaidError::CatalogError {
                    reason: format!("duplicate medication id '{}'", med.id),
                });
            }
        }

        info!(count = medications.len(), "medication catalog loaded");
        Ok(Self { medications })
    }

    /// Look up a medication by its catalog ID.
    pub fn get(&self, id: &str) -> Option<&Medication> {
        self.medications.iter().find(|m| m.id == id)
    }

    /// All medications, in catalog order.
    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn len(&self) -> usize {
        self.medications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }

    /// Medications commonly prescribed for `organ`.
    pub fn for_organ(&self, organ: OrganType) -> impl Iterator<Item = &Medication> {
        self.medications
            .iter()
            .filter(move |m| m.common_organs.contains(&organ))
    }

    /// Medications taken at `stage`. Entries marked `Both` always qualify.
    pub fn for_stage(&self, stage: TransplantStage) -> impl Iterator<Item = &Medication> {
        self.medications.iter().filter(move |m| m.stage.covers(stage))
    }
}

impl AsRef<[Medication]> for MedicationCatalog {
    fn as_ref(&self) -> &[Medication] {
        &self.medications
    }
}
