//! Per-medication guidance.
//!
//! For one medication, emits the assistance actions the patient qualifies
//! for, ranked by priority:
//!
//! | Action              | Condition                                  | Rank            |
//! |---------------------|--------------------------------------------|-----------------|
//! | Copay card          | copay cards eligible, brand-name product   | 1               |
//! | Manufacturer PAP    | PAPs eligible, catalog has a PAP URL       | 1 uninsured / 2 |
//! | Generic alternative | generic exists, not just the brand renamed | 3               |
//! | Discount card       | discount cards eligible                    | 1 uninsured / 4 |
//!
//! Actions are sorted by rank; equal ranks keep the order above.

use tracing::debug;

use medaid_contracts::{
    eligibility::EligibilityFlags,
    guidance::{ActionKind, GuidanceAction, GuidanceEntry, Link},
    medication::Medication,
    profile::InsuranceType,
};

use crate::content::DISCOUNT_PROVIDERS;

/// Build the ranked action list for `medication`.
///
/// Never fails. Returns an entry with no actions when nothing applies.
pub fn build_medication_guidance(
    medication: &Medication,
    flags: &EligibilityFlags,
    insurance: InsuranceType,
) -> GuidanceEntry {
    let uninsured = insurance == InsuranceType::Uninsured;
    let mut actions = Vec::with_capacity(4);

    if flags.copay_cards && medication.is_brand_name() {
        actions.push(copay_card_action(medication));
    }

    if flags.manufacturer_paps {
        if let Some(url) = &medication.pap_url {
            actions.push(pap_action(medication, url, if uninsured { 1 } else { 2 }));
        }
    }

    if medication.has_generic
        && !is_trivial_variant(&medication.generic_name, &medication.brand_name)
    {
        actions.push(generic_action(medication));
    }

    if flags.discount_cards {
        actions.push(discount_card_action(medication, if uninsured { 1 } else { 4 }));
    }

    // Stable sort: equal ranks keep emission order.
    actions.sort_by_key(|a| a.priority);

    debug!(
        medication = %medication.id,
        insurance = %insurance,
        actions = actions.len(),
        "medication guidance built"
    );

    GuidanceEntry {
        medication_id: medication.id.clone(),
        brand_name: medication.brand_name.clone(),
        generic_name: medication.generic_name.clone(),
        actions,
    }
}

/// True when the generic name is the brand name (or contained in it, or vice
/// versa) once case and punctuation are ignored. "Prednisone" / "prednisone"
/// is trivial; "Prograf" / "Tacrolimus" is not.
fn is_trivial_variant(generic: &str, brand: &str) -> bool {
    let normalize = |s: &str| -> String {
        s.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect()
    };
    let generic = normalize(generic);
    let brand = normalize(brand);
    !generic.is_empty() && (brand.contains(&generic) || generic.contains(&brand))
}

fn copay_card_action(medication: &Medication) -> GuidanceAction {
    let mut links = Vec::new();
    if let Some(url) = &medication.copay_card_url {
        links.push(Link::new(format!("{} copay program", medication.brand_name), url));
    }

    GuidanceAction {
        kind: ActionKind::CopayCard,
        priority: 1,
        title: format!("Enroll in the {} copay card", medication.brand_name),
        description: format!(
            "{} offers a copay card that can lower what you pay for {} at the pharmacy.",
            medication.manufacturer, medication.brand_name
        ),
        links,
        steps: vec![
            format!(
                "Visit the {} copay program site or call the number on it.",
                medication.manufacturer
            ),
            "Enroll with your insurance card in hand; approval is usually immediate.".to_string(),
            "Give the card's BIN, PCN, group, and ID numbers to your specialty pharmacy."
                .to_string(),
            "Re-enroll each January; most cards reset annually.".to_string(),
        ],
    }
}

fn pap_action(medication: &Medication, url: &str, priority: u8) -> GuidanceAction {
    GuidanceAction {
        kind: ActionKind::ManufacturerPap,
        priority,
        title: format!("Apply to the {} patient assistance program", medication.manufacturer),
        description: format!(
            "{} may provide {} free of charge if your household income qualifies.",
            medication.manufacturer, medication.brand_name
        ),
        links: vec![Link::new(
            format!("{} patient assistance", medication.manufacturer),
            url,
        )],
        steps: vec![
            "Download the application from the program website.".to_string(),
            "Gather proof of income (tax return, pay stubs, or Social Security letter)."
                .to_string(),
            "Ask your transplant physician to complete and sign the prescriber section."
                .to_string(),
            "Submit the application and note the date; follow up after two weeks.".to_string(),
        ],
    }
}

fn generic_action(medication: &Medication) -> GuidanceAction {
    GuidanceAction {
        kind: ActionKind::GenericAlternative,
        priority: 3,
        title: format!("Ask about generic {}", medication.generic_name),
        description: format!(
            "A generic version of {} is available and usually costs much less.",
            medication.brand_name
        ),
        links: Vec::new(),
        steps: vec![
            "Ask your transplant team whether a generic is appropriate for you.".to_string(),
            "Do not switch manufacturers without your team's approval; blood levels may need checking."
                .to_string(),
            "Ask the pharmacy to fill the same generic manufacturer each time.".to_string(),
        ],
    }
}

fn discount_card_action(medication: &Medication, priority: u8) -> GuidanceAction {
    let links = DISCOUNT_PROVIDERS
        .iter()
        .filter(|p| medication.has_generic || !p.generics_only)
        .map(|p| Link::new(p.name, p.url))
        .collect();

    GuidanceAction {
        kind: ActionKind::DiscountCard,
        priority,
        title: format!("Compare discount card prices for {}", medication.generic_name),
        description: "Discount cards show cash prices that can beat your insurance copay. \
                      Cash fills do not count toward your deductible or out-of-pocket maximum."
            .to_string(),
        links,
        steps: vec![
            "Search the medication and your ZIP code on each site.".to_string(),
            "Compare the lowest price with your insurance copay.".to_string(),
            "Show the coupon at the pharmacy and ask them to run it instead of insurance."
                .to_string(),
        ],
    }
}
