//! Insurance type → program eligibility.
//!
//! Every mapping starts from `EligibilityFlags::PERMISSIVE` (PAPs,
//! foundations, discount cards) and overrides the fields that insurance type
//! changes. `InsuranceType::Other` keeps the permissive record unchanged.

use tracing::debug;

use medaid_contracts::{eligibility::EligibilityFlags, profile::InsuranceType};

/// Resolve which program categories a patient with `insurance` may use.
///
/// Total and pure: the same input always yields the same record.
pub fn resolve_eligibility(insurance: InsuranceType) -> EligibilityFlags {
    let base = EligibilityFlags::PERMISSIVE;

    let flags = match insurance {
        InsuranceType::Commercial | InsuranceType::Marketplace => EligibilityFlags {
            copay_cards: true,
            ..base
        },

        // Federal anti-kickback rules bar manufacturer copay cards for
        // Medicare beneficiaries.
        InsuranceType::Medicare => EligibilityFlags {
            copay_cards: false,
            medicare_part_b_id: true,
            ..base
        },

        // Medicaid covers transplant drugs at nominal copays; discount cards
        // cannot be combined with it.
        InsuranceType::Medicaid => EligibilityFlags {
            state_formulary: true,
            discount_cards: false,
            ..base
        },

        InsuranceType::TricareVa => EligibilityFlags {
            va_programs: true,
            copay_cards: false,
            ..base
        },

        InsuranceType::Ihs => EligibilityFlags {
            ihs_resources: true,
            copay_cards: false,
            ..base
        },

        // Copay foundations pay insurance cost-sharing; with no plan there is
        // nothing for them to cover.
        InsuranceType::Uninsured => EligibilityFlags {
            copay_cards: false,
            manufacturer_paps: true,
            discount_cards: true,
            foundations: false,
            ..base
        },

        InsuranceType::Other => base,
    };

    debug!(insurance = %insurance, ?flags, "eligibility resolved");
    flags
}
