//! Guidance output types.
//!
//! `GuidanceEntry` is the per-medication result of the guidance generator and
//! `GuidanceSummary` is the full result page for one profile. Both are
//! computed on demand and never persisted.

use serde::{Deserialize, Serialize};

use crate::eligibility::{EligibilityFlags, ProgramCategory};

/// The kind of step a patient can take to lower the cost of one medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    CopayCard,
    ManufacturerPap,
    GenericAlternative,
    DiscountCard,
}

/// A labelled external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// One recommended action for a medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceAction {
    pub kind: ActionKind,
    /// 1 is most important. Several actions may share a rank.
    pub priority: u8,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub links: Vec<Link>,
    /// Ordered instructions for completing the action by hand.
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Guidance for a single medication the user takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceEntry {
    pub medication_id: String,
    pub brand_name: String,
    pub generic_name: String,
    /// Sorted by `priority`; actions with equal rank keep emission order.
    pub actions: Vec<GuidanceAction>,
}

/// Visual weight of an advisory message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageTone {
    Success,
    Warning,
    Urgent,
    Info,
}

/// A short advisory shown above the recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMessage {
    pub tone: MessageTone,
    pub text: String,
}

/// The block shown only to patients in a financial crisis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgentActions {
    pub title: String,
    pub steps: Vec<String>,
}

/// A curated external organization or tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Everything the results page shows for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceSummary {
    pub eligibility: EligibilityFlags,
    pub priority_order: Vec<ProgramCategory>,
    pub key_messages: Vec<KeyMessage>,
    /// Present only when the profile reports a financial crisis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgent_actions: Option<UrgentActions>,
    pub medications: Vec<GuidanceEntry>,
    pub resources: Vec<Resource>,
}
