//! TOML configuration for hosts embedding the medaid engine.
//!
//! Example:
//! ```toml
//! catalog = "data/medications.toml"
//!
//! [search]
//! threshold = 0.4
//! min_query_len = 2
//! limit = 10
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use medaid_contracts::{
    error::{MedaidError, MedaidResult},
    search::SearchConfig,
};

use crate::catalog::MedicationCatalog;

/// Top-level configuration document. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MedaidConfig {
    /// Alternate catalog file. The bundled catalog is used when absent.
    pub catalog: Option<PathBuf>,

    /// Matcher tuning.
    pub search: SearchConfig,
}

impl MedaidConfig {
    /// Parse `s` as TOML configuration and validate it.
    pub fn from_toml_str(s: &str) -> MedaidResult<Self> {
        let config: MedaidConfig = toml::from_str(s).map_err(|e| MedaidError::ConfigError {
            reason: format!("failed to parse configuration TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as TOML configuration.
    pub fn from_file(path: &Path) -> MedaidResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedaidError::ConfigError {
            reason: format!("failed to read configuration file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load the configured catalog, or the bundled one.
    pub fn load_catalog(&self) -> MedaidResult<MedicationCatalog> {
        match &self.catalog {
            Some(path) => MedicationCatalog::from_file(path),
            None => MedicationCatalog::bundled(),
        }
    }

    fn validate(&self) -> MedaidResult<()> {
        let threshold = self.search.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(MedaidError::ConfigError {
                reason: format!("search.threshold must be within 0.0..=1.0, got {}", threshold),
            });
        }
        if self.search.limit == Some(0) {
            return Err(MedaidError::ConfigError {
                reason: "search.limit must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}
