//! Curated static content referenced by the guidance engine.
//!
//! Everything here is hand-maintained reference material: organizations,
//! discount providers, advisory wording. Builders return owned values so
//! callers can serialize them alongside computed guidance.

use medaid_contracts::{
    guidance::{KeyMessage, MessageTone, Resource, UrgentActions},
    profile::InsuranceType,
};

// ── Discount card providers ───────────────────────────────────────────────────

/// A prescription discount card or cash-price pharmacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountProvider {
    pub name: &'static str,
    pub url: &'static str,
    /// Lowest average cash price, but only stocks generics.
    pub generics_only: bool,
}

/// Providers in display order. The generics-only provider is listed first
/// because it is the cheapest on average when it applies.
pub const DISCOUNT_PROVIDERS: &[DiscountProvider] = &[
    DiscountProvider {
        name: "Mark Cuban Cost Plus Drug Company",
        url: "https://costplusdrugs.com",
        generics_only: true,
    },
    DiscountProvider {
        name: "GoodRx",
        url: "https://www.goodrx.com",
        generics_only: false,
    },
    DiscountProvider {
        name: "SingleCare",
        url: "https://www.singlecare.com",
        generics_only: false,
    },
];

// ── Curated resources ─────────────────────────────────────────────────────────

const fn resource(
    name: &'static str,
    url: &'static str,
    description: &'static str,
) -> StaticResource {
    StaticResource { name, url, description }
}

#[derive(Debug, Clone, Copy)]
struct StaticResource {
    name: &'static str,
    url: &'static str,
    description: &'static str,
}

impl StaticResource {
    fn to_resource(self) -> Resource {
        Resource {
            name: self.name.to_string(),
            url: self.url.to_string(),
            description: self.description.to_string(),
        }
    }
}

const GENERAL_RESOURCES: &[StaticResource] = &[
    resource(
        "NeedyMeds",
        "https://www.needymeds.org",
        "Searchable database of patient assistance programs, copay cards, and free clinics.",
    ),
    resource(
        "Medicine Assistance Tool",
        "https://medicineassistancetool.org",
        "PhRMA search engine for manufacturer assistance programs.",
    ),
    resource(
        "PAN Foundation",
        "https://www.panfoundation.org",
        "Copay foundation with disease funds for transplant immunosuppressants.",
    ),
    resource(
        "HealthWell Foundation",
        "https://www.healthwellfoundation.org",
        "Grants toward copays, premiums, and deductibles for insured patients.",
    ),
    resource(
        "American Transplant Foundation",
        "https://www.americantransplantfoundation.org",
        "Emergency medication assistance grants for transplant recipients.",
    ),
];

const KIDNEY_RESOURCE: StaticResource = resource(
    "American Kidney Fund",
    "https://www.kidneyfund.org",
    "Health insurance premium and safety-net grants for kidney patients.",
);

const MEDICARE_RESOURCES: &[StaticResource] = &[
    resource(
        "Medicare Plan Finder",
        "https://www.medicare.gov/plan-compare",
        "Compare Part D plans by the medications you take.",
    ),
    resource(
        "Extra Help with Medicare drug costs",
        "https://www.medicare.gov/basics/costs/help/drug-costs",
        "Low-income subsidy that lowers Part D premiums and copays.",
    ),
];

const MEDICARE_PART_B_ID_RESOURCE: StaticResource = resource(
    "Medicare Part B immunosuppressive drug coverage (Part B-ID)",
    "https://www.medicare.gov/basics/end-stage-renal-disease/immunosuppressive-drug-coverage",
    "Continued immunosuppressant coverage after ESRD Medicare ends 36 months post-transplant.",
);

/// The curated resource list for a profile.
///
/// General resources always appear. Kidney patients also get the American
/// Kidney Fund; Medicare patients get Medicare.gov links, and kidney patients
/// on Medicare additionally get the Part B-ID page.
pub fn resources_for(insurance: InsuranceType, kidney: bool) -> Vec<Resource> {
    let mut list: Vec<StaticResource> = GENERAL_RESOURCES.to_vec();

    if kidney {
        list.push(KIDNEY_RESOURCE);
    }
    if insurance == InsuranceType::Medicare {
        list.extend_from_slice(MEDICARE_RESOURCES);
        if kidney {
            list.push(MEDICARE_PART_B_ID_RESOURCE);
        }
    }

    list.into_iter().map(StaticResource::to_resource).collect()
}

// ── Key messages ──────────────────────────────────────────────────────────────

fn message(tone: MessageTone, text: &str) -> KeyMessage {
    KeyMessage {
        tone,
        text: text.to_string(),
    }
}

/// Advisory messages shown above the recommendations for `insurance`.
pub fn key_messages(insurance: InsuranceType) -> Vec<KeyMessage> {
    use MessageTone::{Info, Success, Urgent, Warning};

    match insurance {
        InsuranceType::Commercial | InsuranceType::Marketplace => vec![
            message(
                Success,
                "Manufacturer copay cards can bring brand-name costs down to $0-$10 per fill.",
            ),
            message(
                Warning,
                "Ask whether your plan uses a copay accumulator or maximizer; card payments may not count toward your deductible.",
            ),
            message(
                Info,
                "Transplant drugs are often filled through a specialty pharmacy chosen by your plan.",
            ),
        ],
        InsuranceType::Medicare => vec![
            message(
                Warning,
                "Federal law prohibits manufacturer copay cards for anyone on Medicare.",
            ),
            message(
                Success,
                "Copay foundations can cover Part D costs and are allowed with Medicare.",
            ),
            message(
                Info,
                "Kidney recipients may keep immunosuppressant coverage through Part B-ID after other Medicare coverage ends.",
            ),
        ],
        InsuranceType::Medicaid => vec![
            message(
                Success,
                "Medicaid usually covers transplant medications with little or no copay.",
            ),
            message(
                Info,
                "If a drug is not on your state formulary, your transplant team can request prior authorization.",
            ),
        ],
        InsuranceType::TricareVa => vec![
            message(
                Success,
                "TRICARE and VA pharmacy benefits cover most transplant medications at low cost.",
            ),
            message(
                Warning,
                "Manufacturer copay cards cannot be used with TRICARE or VA benefits.",
            ),
        ],
        InsuranceType::Ihs => vec![
            message(
                Info,
                "Indian Health Service and tribal pharmacies may supply medications directly; ask your IHS facility first.",
            ),
            message(
                Warning,
                "Manufacturer copay cards cannot be used with IHS coverage.",
            ),
        ],
        InsuranceType::Uninsured => vec![
            message(
                Urgent,
                "Manufacturer patient assistance programs can provide medication free of charge. Apply now.",
            ),
            message(
                Info,
                "Use a discount card for the next fill while PAP applications are processed.",
            ),
            message(
                Info,
                "A hospital financial counselor can screen you for Medicaid or marketplace coverage.",
            ),
        ],
        InsuranceType::Other => vec![message(
            Info,
            "Confirm your coverage type with your transplant social worker to unlock more options.",
        )],
    }
}

// ── Urgent actions ────────────────────────────────────────────────────────────

/// Steps for a patient who is about to run out of medication.
pub fn urgent_actions() -> UrgentActions {
    UrgentActions {
        title: "If you are about to run out of medication".to_string(),
        steps: [
            "Call your transplant coordinator today. Never skip or stretch doses.",
            "Ask your pharmacy for an emergency supply while assistance is arranged.",
            "Ask the manufacturer PAP for an expedited or emergency fill.",
            "Contact your transplant center's social worker or financial counselor.",
            "Use a discount card for a short cash-price fill if nothing else is available.",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}
