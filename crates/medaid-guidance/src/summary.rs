//! Assembles the full guidance page for one profile.

use tracing::{debug, warn};

use medaid_contracts::{
    guidance::GuidanceSummary,
    medication::Medication,
    profile::{FinancialStatus, OrganType, UserProfile},
};
use medaid_policy::{resolve_eligibility, resolve_priority};

use crate::{content, medication::build_medication_guidance};

/// Build the guidance summary for `profile` against `catalog`.
///
/// Medication IDs with no catalog entry are skipped. Pure: identical inputs
/// produce identical output.
pub fn build_guidance_summary(profile: &UserProfile, catalog: &[Medication]) -> GuidanceSummary {
    let insurance = profile.insurance_type;
    let eligibility = resolve_eligibility(insurance);
    let priority_order = resolve_priority(insurance, profile.financial_status);

    let medications = profile
        .medications
        .iter()
        .filter_map(|id| {
            let found = catalog.iter().find(|m| &m.id == id);
            if found.is_none() {
                warn!(medication = %id, "medication id not in catalog; skipping");
            }
            found
        })
        .map(|med| build_medication_guidance(med, &eligibility, insurance))
        .collect::<Vec<_>>();

    let urgent_actions =
        (profile.financial_status == FinancialStatus::Crisis).then(content::urgent_actions);

    let resources = content::resources_for(insurance, profile.has_organ(OrganType::Kidney));

    debug!(
        insurance = %insurance,
        financial = %profile.financial_status,
        medications = medications.len(),
        resources = resources.len(),
        urgent = urgent_actions.is_some(),
        "guidance summary built"
    );

    GuidanceSummary {
        eligibility,
        priority_order,
        key_messages: content::key_messages(insurance),
        urgent_actions,
        medications,
        resources,
    }
}
