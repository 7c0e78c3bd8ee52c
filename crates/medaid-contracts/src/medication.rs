//! Medication catalog records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::profile::OrganType;

/// Manufacturer value used for unbranded generics in the catalog.
pub const GENERIC_MANUFACTURER: &str = "Generic";

/// When in the transplant journey a medication is typically taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransplantStage {
    Pre,
    Post,
    Both,
}

impl TransplantStage {
    /// `Both` covers either side; otherwise stages must be equal.
    pub fn covers(&self, other: TransplantStage) -> bool {
        *self == TransplantStage::Both || other == TransplantStage::Both || *self == other
    }
}

/// One entry of the static medication catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    /// Stable identifier referenced by `UserProfile::medications`.
    pub id: String,
    pub brand_name: String,
    pub generic_name: String,
    /// `"Generic"` for unbranded products.
    pub manufacturer: String,
    /// Therapeutic category, e.g. "Immunosuppressant".
    pub category: String,
    #[serde(default)]
    pub common_organs: BTreeSet<OrganType>,
    pub stage: TransplantStage,
    /// Whether a lower-cost generic equivalent is on the market.
    #[serde(default)]
    pub has_generic: bool,
    /// Manufacturer patient assistance program enrollment page.
    #[serde(default)]
    pub pap_url: Option<String>,
    /// Manufacturer copay card enrollment page.
    #[serde(default)]
    pub copay_card_url: Option<String>,
}

impl Medication {
    /// True unless the manufacturer is the generic placeholder.
    pub fn is_brand_name(&self) -> bool {
        !self.manufacturer.eq_ignore_ascii_case(GENERIC_MANUFACTURER)
    }
}
