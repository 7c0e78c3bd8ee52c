//! Assistance program categories and per-category eligibility flags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A kind of medication assistance a patient may pursue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramCategory {
    #[serde(rename = "copayCards")]
    CopayCards,
    #[serde(rename = "manufacturerPAPs")]
    ManufacturerPaps,
    #[serde(rename = "foundations")]
    Foundations,
    #[serde(rename = "discountCards")]
    DiscountCards,
    #[serde(rename = "medicarePartBID")]
    MedicarePartBId,
    #[serde(rename = "stateFormulary")]
    StateFormulary,
    #[serde(rename = "vaPrograms")]
    VaPrograms,
    #[serde(rename = "ihsResources")]
    IhsResources,
}

impl ProgramCategory {
    /// Every category, in the field order of `EligibilityFlags`.
    pub const ALL: [ProgramCategory; 8] = [
        ProgramCategory::CopayCards,
        ProgramCategory::ManufacturerPaps,
        ProgramCategory::Foundations,
        ProgramCategory::DiscountCards,
        ProgramCategory::MedicarePartBId,
        ProgramCategory::StateFormulary,
        ProgramCategory::VaPrograms,
        ProgramCategory::IhsResources,
    ];

    /// The key used for this category in serialized flags and priority lists.
    pub fn key(&self) -> &'static str {
        match self {
            ProgramCategory::CopayCards => "copayCards",
            ProgramCategory::ManufacturerPaps => "manufacturerPAPs",
            ProgramCategory::Foundations => "foundations",
            ProgramCategory::DiscountCards => "discountCards",
            ProgramCategory::MedicarePartBId => "medicarePartBID",
            ProgramCategory::StateFormulary => "stateFormulary",
            ProgramCategory::VaPrograms => "vaPrograms",
            ProgramCategory::IhsResources => "ihsResources",
        }
    }
}

impl fmt::Display for ProgramCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which program categories a patient can use, derived from insurance type.
///
/// Fixed shape: exactly one boolean per `ProgramCategory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EligibilityFlags {
    #[serde(rename = "copayCards")]
    pub copay_cards: bool,
    #[serde(rename = "manufacturerPAPs")]
    pub manufacturer_paps: bool,
    #[serde(rename = "foundations")]
    pub foundations: bool,
    #[serde(rename = "discountCards")]
    pub discount_cards: bool,
    #[serde(rename = "medicarePartBID")]
    pub medicare_part_b_id: bool,
    #[serde(rename = "stateFormulary")]
    pub state_formulary: bool,
    #[serde(rename = "vaPrograms")]
    pub va_programs: bool,
    #[serde(rename = "ihsResources")]
    pub ihs_resources: bool,
}

impl EligibilityFlags {
    /// The fallback record: PAPs, foundations, and discount cards only.
    pub const PERMISSIVE: EligibilityFlags = EligibilityFlags {
        copay_cards: false,
        manufacturer_paps: true,
        foundations: true,
        discount_cards: true,
        medicare_part_b_id: false,
        state_formulary: false,
        va_programs: false,
        ihs_resources: false,
    };

    /// Return the flag for `category`.
    pub fn allows(&self, category: ProgramCategory) -> bool {
        match category {
            ProgramCategory::CopayCards => self.copay_cards,
            ProgramCategory::ManufacturerPaps => self.manufacturer_paps,
            ProgramCategory::Foundations => self.foundations,
            ProgramCategory::DiscountCards => self.discount_cards,
            ProgramCategory::MedicarePartBId => self.medicare_part_b_id,
            ProgramCategory::StateFormulary => self.state_formulary,
            ProgramCategory::VaPrograms => self.va_programs,
            ProgramCategory::IhsResources => self.ihs_resources,
        }
    }

    /// Categories whose flag is set, in `ProgramCategory::ALL` order.
    pub fn eligible_categories(&self) -> Vec<ProgramCategory> {
        ProgramCategory::ALL
            .iter()
            .copied()
            .filter(|c| self.allows(*c))
            .collect()
    }
}
