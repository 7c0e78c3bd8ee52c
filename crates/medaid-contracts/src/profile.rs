//! Questionnaire answers and the user profile they produce.
//!
//! Every enumeration here serializes to the camelCase keys used by the
//! questionnaire front end. `InsuranceType` and `FinancialStatus` carry a
//! catch-all variant so that values outside the known set deserialize to the
//! fallback branch instead of failing. `FromStr` stays strict.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MedaidError, MedaidResult};
use crate::medication::TransplantStage;

/// Implements `as_str`, `Display`, and strict `FromStr` for a fieldless enum
/// from a single variant/key table.
macro_rules! string_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The serialized key for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $key,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = MedaidError;

            fn from_str(s: &str) -> MedaidResult<Self> {
                match s {
                    $($key => Ok($ty::$variant),)+
                    other => Err(MedaidError::UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Who is filling in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Patient,
    Caregiver,
    SocialWorker,
}

string_enum!(Role, "role", {
    Patient => "patient",
    Caregiver => "caregiver",
    SocialWorker => "socialWorker",
});

/// Where the patient is in the transplant journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransplantStatus {
    PreEvaluation,
    Evaluating,
    Waitlisted,
    PostTransplant,
}

string_enum!(TransplantStatus, "transplant status", {
    PreEvaluation => "preEvaluation",
    Evaluating => "evaluating",
    Waitlisted => "waitlisted",
    PostTransplant => "postTransplant",
});

impl TransplantStatus {
    /// The medication stage relevant to this status.
    pub fn stage(&self) -> TransplantStage {
        match self {
            TransplantStatus::PreEvaluation
            | TransplantStatus::Evaluating
            | TransplantStatus::Waitlisted => TransplantStage::Pre,
            TransplantStatus::PostTransplant => TransplantStage::Post,
        }
    }
}

/// Transplanted (or to-be-transplanted) organ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrganType {
    Kidney,
    Liver,
    Heart,
    Lung,
    Pancreas,
    Intestine,
    Other,
}

string_enum!(OrganType, "organ", {
    Kidney => "Kidney",
    Liver => "Liver",
    Heart => "Heart",
    Lung => "Lung",
    Pancreas => "Pancreas",
    Intestine => "Intestine",
    Other => "Other",
});

/// Primary prescription coverage.
///
/// `Marketplace` (ACA exchange plans) is kept distinct from `Commercial` so
/// answers round-trip unchanged, but both resolve through the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsuranceType {
    Commercial,
    Marketplace,
    Medicare,
    Medicaid,
    TricareVa,
    Ihs,
    Uninsured,
    /// Not sure, or a value this version does not recognize.
    #[serde(other)]
    Other,
}

string_enum!(InsuranceType, "insurance type", {
    Commercial => "commercial",
    Marketplace => "marketplace",
    Medicare => "medicare",
    Medicaid => "medicaid",
    TricareVa => "tricareVa",
    Ihs => "ihs",
    Uninsured => "uninsured",
    Other => "other",
});

/// How the patient describes their ability to pay for medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinancialStatus {
    Manageable,
    Challenging,
    Unaffordable,
    Crisis,
    #[serde(other)]
    Unsure,
}

string_enum!(FinancialStatus, "financial status", {
    Manageable => "manageable",
    Challenging => "challenging",
    Unaffordable => "unaffordable",
    Crisis => "crisis",
    Unsure => "unsure",
});

impl FinancialStatus {
    /// True when the patient cannot cover their next fill without help.
    pub fn is_urgent(&self) -> bool {
        matches!(self, FinancialStatus::Crisis | FinancialStatus::Unaffordable)
    }
}

/// Everything the questionnaire collects about one user.
///
/// Lives for a single session. The engine never persists it; see
/// `ProfileRepository` in medaid-core for the persistence seam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub role: Role,
    pub transplant_status: TransplantStatus,
    #[serde(default)]
    pub organs: BTreeSet<OrganType>,
    pub insurance_type: InsuranceType,
    /// Catalog medication IDs, in the order the user picked them.
    #[serde(default)]
    pub medications: Vec<String>,
    pub financial_status: FinancialStatus,
}

impl UserProfile {
    /// Return true if the user selected `organ`.
    pub fn has_organ(&self, organ: OrganType) -> bool {
        self.organs.contains(&organ)
    }
}
