//! # medaid-guidance
//!
//! Turns a questionnaire profile into actionable medication assistance
//! guidance.
//!
//! 1. **Per-medication guidance**: [`build_medication_guidance`] ranks copay
//!    card, PAP, generic, and discount card actions for one drug.
//! 2. **Guidance summary**: [`build_guidance_summary`] combines eligibility,
//!    priority order, key messages, crisis steps, per-medication guidance, and
//!    curated resources into one result page.
//!
//! All content is static. Nothing here performs I/O.

pub mod content;
pub mod medication;
pub mod summary;

pub use medication::build_medication_guidance;
pub use summary::build_guidance_summary;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use medaid_contracts::{
        eligibility::{EligibilityFlags, ProgramCategory},
        guidance::{ActionKind, GuidanceEntry, MessageTone},
        medication::{Medication, TransplantStage},
        profile::{FinancialStatus, InsuranceType, OrganType, Role, TransplantStatus, UserProfile},
    };
    use medaid_core::MedicationCatalog;
    use medaid_policy::resolve_eligibility;

    use crate::{build_guidance_summary, build_medication_guidance, content::DISCOUNT_PROVIDERS};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn catalog() -> MedicationCatalog {
        MedicationCatalog::bundled().unwrap()
    }

    fn medication(id: &str) -> Medication {
        catalog().get(id).cloned().unwrap()
    }

    fn profile(
        insurance: InsuranceType,
        financial: FinancialStatus,
        organs: &[OrganType],
        medications: &[&str],
    ) -> UserProfile {
        UserProfile {
            role: Role::Patient,
            transplant_status: TransplantStatus::PostTransplant,
            organs: organs.iter().copied().collect(),
            insurance_type: insurance,
            medications: medications.iter().map(|s| s.to_string()).collect(),
            financial_status: financial,
        }
    }

    fn kinds(entry: &GuidanceEntry) -> Vec<ActionKind> {
        entry.actions.iter().map(|a| a.kind).collect()
    }

    fn guidance_for(id: &str, insurance: InsuranceType) -> GuidanceEntry {
        build_medication_guidance(&medication(id), &resolve_eligibility(insurance), insurance)
    }

    // ── 1. copay cards ────────────────────────────────────────────────────────

    #[test]
    fn test_commercial_brand_gets_copay_card_first() {
        let entry = guidance_for("tacrolimus", InsuranceType::Commercial);

        assert_eq!(
            kinds(&entry),
            vec![
                ActionKind::CopayCard,
                ActionKind::ManufacturerPap,
                ActionKind::GenericAlternative,
                ActionKind::DiscountCard,
            ]
        );
        assert_eq!(
            entry.actions.iter().map(|a| a.priority).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert!(entry.actions.iter().all(|a| !a.title.is_empty() && !a.steps.is_empty()));
    }

    /// No copay card action is ever emitted when copay cards are ineligible.
    #[test]
    fn test_no_copay_card_without_eligibility() {
        let catalog = catalog();
        for insurance in InsuranceType::ALL {
            let flags = resolve_eligibility(*insurance);
            if flags.copay_cards {
                continue;
            }
            for med in catalog.medications() {
                let entry = build_medication_guidance(med, &flags, *insurance);
                assert!(
                    !kinds(&entry).contains(&ActionKind::CopayCard),
                    "{insurance}: copay card offered for {}",
                    med.id
                );
            }
        }
    }

    #[test]
    fn test_generic_manufacturer_never_gets_copay_card() {
        let entry = guidance_for("prednisone", InsuranceType::Commercial);
        assert!(!kinds(&entry).contains(&ActionKind::CopayCard));
    }

    // ── 2. manufacturer PAPs ──────────────────────────────────────────────────

    #[test]
    fn test_uninsured_pap_and_discount_rank_first() {
        let entry = guidance_for("tacrolimus", InsuranceType::Uninsured);

        assert_eq!(
            kinds(&entry),
            vec![
                ActionKind::ManufacturerPap,
                ActionKind::DiscountCard,
                ActionKind::GenericAlternative,
            ]
        );
        assert_eq!(entry.actions[0].priority, 1);
        assert_eq!(entry.actions[1].priority, 1);
        assert!(entry.actions[0].links[0].url.contains("astellas"));
    }

    #[test]
    fn test_no_pap_without_url() {
        let entry = guidance_for("azathioprine", InsuranceType::Medicare);
        assert!(!kinds(&entry).contains(&ActionKind::ManufacturerPap));
    }

    // ── 3. generic alternatives ───────────────────────────────────────────────

    /// "Prednisone" / "prednisone" is the same name, so no generic action.
    #[test]
    fn test_trivial_generic_name_is_not_an_alternative() {
        let entry = guidance_for("prednisone", InsuranceType::Commercial);
        assert!(!kinds(&entry).contains(&ActionKind::GenericAlternative));
    }

    #[test]
    fn test_no_generic_action_when_no_generic_exists() {
        let entry = guidance_for("belatacept", InsuranceType::Commercial);
        assert!(!kinds(&entry).contains(&ActionKind::GenericAlternative));
    }

    // ── 4. discount cards ─────────────────────────────────────────────────────

    #[test]
    fn test_generics_only_provider_listed_first_when_generic_exists() {
        let entry = guidance_for("tacrolimus", InsuranceType::Commercial);
        let discount = entry
            .actions
            .iter()
            .find(|a| a.kind == ActionKind::DiscountCard)
            .unwrap();

        let cheapest = DISCOUNT_PROVIDERS.iter().find(|p| p.generics_only).unwrap();
        assert_eq!(discount.links[0].label, cheapest.name);
        assert_eq!(discount.links.len(), DISCOUNT_PROVIDERS.len());
    }

    #[test]
    fn test_generics_only_provider_omitted_for_brand_only_drug() {
        let entry = guidance_for("belatacept", InsuranceType::Commercial);
        let discount = entry
            .actions
            .iter()
            .find(|a| a.kind == ActionKind::DiscountCard)
            .unwrap();

        let cheapest = DISCOUNT_PROVIDERS.iter().find(|p| p.generics_only).unwrap();
        assert!(discount.links.iter().all(|l| l.label != cheapest.name));
        assert!(!discount.links.is_empty());
    }

    #[test]
    fn test_medicaid_gets_no_discount_card() {
        let entry = guidance_for("tacrolimus", InsuranceType::Medicaid);
        assert!(!kinds(&entry).contains(&ActionKind::DiscountCard));
    }

    // ── 5. empty guidance ─────────────────────────────────────────────────────

    #[test]
    fn test_no_applicable_actions_yields_empty_list() {
        let med = Medication {
            id: "compounded-suspension".to_string(),
            brand_name: "Compounded suspension".to_string(),
            generic_name: "Compounded suspension".to_string(),
            manufacturer: "Generic".to_string(),
            category: "Compounded".to_string(),
            common_organs: BTreeSet::new(),
            stage: TransplantStage::Post,
            has_generic: false,
            pap_url: None,
            copay_card_url: None,
        };
        let flags = EligibilityFlags {
            discount_cards: false,
            ..EligibilityFlags::PERMISSIVE
        };

        let entry = build_medication_guidance(&med, &flags, InsuranceType::Other);
        assert!(entry.actions.is_empty());
        assert_eq!(entry.medication_id, "compounded-suspension");
    }

    // ── 6. summary assembly ───────────────────────────────────────────────────

    /// Uninsured kidney patient in crisis on tacrolimus.
    #[test]
    fn test_end_to_end_uninsured_kidney_crisis() {
        let catalog = catalog();
        let profile = profile(
            InsuranceType::Uninsured,
            FinancialStatus::Crisis,
            &[OrganType::Kidney],
            &["tacrolimus"],
        );

        let summary = build_guidance_summary(&profile, catalog.medications());

        assert!(summary.eligibility.manufacturer_paps);
        assert!(!summary.eligibility.copay_cards);
        assert_eq!(summary.priority_order[0], ProgramCategory::ManufacturerPaps);
        assert!(summary.resources.iter().any(|r| r.name == "American Kidney Fund"));
        assert!(summary.urgent_actions.is_some());
        assert_eq!(summary.medications.len(), 1);
        assert_eq!(summary.medications[0].medication_id, "tacrolimus");

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("urgentActions").is_some());
        assert_eq!(json["priorityOrder"][0], "manufacturerPAPs");
    }

    #[test]
    fn test_urgent_actions_only_for_crisis() {
        let catalog = catalog();
        for financial in [
            FinancialStatus::Manageable,
            FinancialStatus::Challenging,
            FinancialStatus::Unaffordable,
            FinancialStatus::Unsure,
        ] {
            let summary = build_guidance_summary(
                &profile(InsuranceType::Commercial, financial, &[OrganType::Liver], &[]),
                catalog.medications(),
            );
            assert!(summary.urgent_actions.is_none(), "{financial}");

            let json = serde_json::to_value(&summary).unwrap();
            assert!(json.get("urgentActions").is_none());
        }
    }

    #[test]
    fn test_unknown_medication_ids_are_dropped() {
        let catalog = catalog();
        let summary = build_guidance_summary(
            &profile(
                InsuranceType::Commercial,
                FinancialStatus::Manageable,
                &[OrganType::Heart],
                &["not-a-drug", "mycophenolate-mofetil", "also-missing"],
            ),
            catalog.medications(),
        );

        assert_eq!(summary.medications.len(), 1);
        assert_eq!(summary.medications[0].medication_id, "mycophenolate-mofetil");
    }

    #[test]
    fn test_medicare_resources() {
        let catalog = catalog();

        let liver = build_guidance_summary(
            &profile(
                InsuranceType::Medicare,
                FinancialStatus::Manageable,
                &[OrganType::Liver],
                &[],
            ),
            catalog.medications(),
        );
        assert!(liver.resources.iter().any(|r| r.url.contains("medicare.gov")));
        assert!(!liver.resources.iter().any(|r| r.name.contains("Part B-ID")));
        assert!(!liver.resources.iter().any(|r| r.name == "American Kidney Fund"));

        let kidney = build_guidance_summary(
            &profile(
                InsuranceType::Medicare,
                FinancialStatus::Manageable,
                &[OrganType::Kidney],
                &[],
            ),
            catalog.medications(),
        );
        assert!(kidney.resources.iter().any(|r| r.name.contains("Part B-ID")));

        let commercial_kidney = build_guidance_summary(
            &profile(
                InsuranceType::Commercial,
                FinancialStatus::Manageable,
                &[OrganType::Kidney],
                &[],
            ),
            catalog.medications(),
        );
        assert!(!commercial_kidney.resources.iter().any(|r| r.url.contains("medicare.gov")));
    }

    #[test]
    fn test_key_messages_follow_insurance_type() {
        let catalog = catalog();
        let medicare = build_guidance_summary(
            &profile(InsuranceType::Medicare, FinancialStatus::Manageable, &[OrganType::Lung], &[]),
            catalog.medications(),
        );
        assert!(medicare
            .key_messages
            .iter()
            .any(|m| m.tone == MessageTone::Warning && m.text.contains("copay cards")));

        let uninsured = build_guidance_summary(
            &profile(
                InsuranceType::Uninsured,
                FinancialStatus::Manageable,
                &[OrganType::Lung],
                &[],
            ),
            catalog.medications(),
        );
        assert_eq!(uninsured.key_messages[0].tone, MessageTone::Urgent);

        for insurance in InsuranceType::ALL {
            let summary = build_guidance_summary(
                &profile(*insurance, FinancialStatus::Manageable, &[OrganType::Lung], &[]),
                catalog.medications(),
            );
            assert!(!summary.key_messages.is_empty(), "{insurance}");
        }
    }

    // ── 7. determinism ────────────────────────────────────────────────────────

    #[test]
    fn test_summary_is_idempotent() {
        let catalog = catalog();
        let profile = profile(
            InsuranceType::Medicare,
            FinancialStatus::Crisis,
            &[OrganType::Kidney, OrganType::Pancreas],
            &["tacrolimus", "mycophenolic-acid", "valganciclovir", "prednisone"],
        );

        let first = build_guidance_summary(&profile, catalog.medications());
        let second = build_guidance_summary(&profile, catalog.medications());

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
