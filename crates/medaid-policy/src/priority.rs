//! Recommended order in which to pursue assistance programs.
//!
//! The order is hand-authored per (insurance type, urgency). Urgency is
//! `FinancialStatus::is_urgent()`: a patient who cannot pay for the next fill
//! is steered toward whatever closes the funding gap fastest. For commercial
//! plans that means foundations move ahead of discount cards.
//!
//! Every category listed is eligible under `resolve_eligibility` for the same
//! insurance type, and no category is listed twice.

use tracing::debug;

use medaid_contracts::{
    eligibility::ProgramCategory,
    profile::{FinancialStatus, InsuranceType},
};

use ProgramCategory::{
    CopayCards, DiscountCards, Foundations, IhsResources, ManufacturerPaps, MedicarePartBId,
    StateFormulary, VaPrograms,
};

/// Order used when insurance is unknown.
pub const FALLBACK_ORDER: [ProgramCategory; 3] = [ManufacturerPaps, Foundations, DiscountCards];

/// Resolve the recommended program order for `insurance` and `financial`.
pub fn resolve_priority(
    insurance: InsuranceType,
    financial: FinancialStatus,
) -> Vec<ProgramCategory> {
    let urgent = financial.is_urgent();

    let order: &[ProgramCategory] = match (insurance, urgent) {
        (InsuranceType::Commercial | InsuranceType::Marketplace, false) => {
            &[CopayCards, ManufacturerPaps, DiscountCards, Foundations]
        }
        (InsuranceType::Commercial | InsuranceType::Marketplace, true) => {
            &[CopayCards, Foundations, ManufacturerPaps, DiscountCards]
        }

        (InsuranceType::Medicare, false) => {
            &[Foundations, MedicarePartBId, ManufacturerPaps, DiscountCards]
        }
        (InsuranceType::Medicare, true) => {
            &[Foundations, ManufacturerPaps, MedicarePartBId, DiscountCards]
        }

        (InsuranceType::Medicaid, false) => &[StateFormulary, ManufacturerPaps, Foundations],
        (InsuranceType::Medicaid, true) => &[StateFormulary, Foundations, ManufacturerPaps],

        (InsuranceType::TricareVa, false) => {
            &[VaPrograms, ManufacturerPaps, DiscountCards, Foundations]
        }
        (InsuranceType::TricareVa, true) => {
            &[VaPrograms, Foundations, ManufacturerPaps, DiscountCards]
        }

        (InsuranceType::Ihs, false) => {
            &[IhsResources, ManufacturerPaps, DiscountCards, Foundations]
        }
        (InsuranceType::Ihs, true) => &[IhsResources, ManufacturerPaps, Foundations, DiscountCards],

        (InsuranceType::Uninsured, _) => &[ManufacturerPaps, DiscountCards],

        (InsuranceType::Other, _) => &FALLBACK_ORDER,
    };

    debug!(
        insurance = %insurance,
        financial = %financial,
        urgent,
        len = order.len(),
        "priority order resolved"
    );

    order.to_vec()
}
