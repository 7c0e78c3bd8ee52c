//! # medaid-store
//!
//! Reference `ProfileRepository` implementations.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medaid_core::ProfileRepository;
//! use medaid_store::InMemoryProfileRepository;
//!
//! let repo = InMemoryProfileRepository::new();
//! let session = SessionId::new();
//! repo.save(&session, &wizard.profile()?)?;
//! ```

pub mod memory;

pub use memory::InMemoryProfileRepository;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use medaid_contracts::{
        profile::{FinancialStatus, InsuranceType, OrganType, Role, TransplantStatus, UserProfile},
        session::SessionId,
    };
    use medaid_core::traits::ProfileRepository;

    use crate::InMemoryProfileRepository;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn sample_profile(insurance: InsuranceType) -> UserProfile {
        UserProfile {
            role: Role::Caregiver,
            transplant_status: TransplantStatus::PostTransplant,
            organs: BTreeSet::from([OrganType::Liver]),
            insurance_type: insurance,
            medications: vec!["tacrolimus".to_string(), "prednisone".to_string()],
            financial_status: FinancialStatus::Challenging,
        }
    }

    // ── 1. save and load ──────────────────────────────────────────────────────

    #[test]
    fn save_then_load_returns_profile() {
        let repo = InMemoryProfileRepository::new();
        let session = SessionId::new();
        let profile = sample_profile(InsuranceType::Commercial);

        let stored = repo.save(&session, &profile).unwrap();
        assert_eq!(stored.session_id, session);

        let loaded = repo.load(&session).unwrap().expect("profile present");
        assert_eq!(loaded.profile, profile);
        assert_eq!(loaded.saved_at, stored.saved_at);
    }

    #[test]
    fn load_unknown_session_returns_none() {
        let repo = InMemoryProfileRepository::new();
        assert!(repo.load(&SessionId::new()).unwrap().is_none());
        assert!(repo.is_empty().unwrap());
    }

    // ── 2. overwrite ──────────────────────────────────────────────────────────

    #[test]
    fn save_replaces_existing_profile() {
        let repo = InMemoryProfileRepository::new();
        let session = SessionId::new();

        repo.save(&session, &sample_profile(InsuranceType::Commercial)).unwrap();
        repo.save(&session, &sample_profile(InsuranceType::Medicare)).unwrap();

        assert_eq!(repo.len().unwrap(), 1);
        let loaded = repo.load(&session).unwrap().unwrap();
        assert_eq!(loaded.profile.insurance_type, InsuranceType::Medicare);
    }

    // ── 3. delete ─────────────────────────────────────────────────────────────

    #[test]
    fn delete_removes_profile_once() {
        let repo = InMemoryProfileRepository::new();
        let session = SessionId::new();
        repo.save(&session, &sample_profile(InsuranceType::Uninsured)).unwrap();

        assert!(repo.delete(&session).unwrap());
        assert!(!repo.delete(&session).unwrap());
        assert!(repo.load(&session).unwrap().is_none());
    }

    // ── 4. sharing ────────────────────────────────────────────────────────────

    /// Clones share one underlying store.
    #[test]
    fn clones_share_state_across_threads() {
        let repo = InMemoryProfileRepository::new();
        let session = SessionId::new();

        let writer = repo.clone();
        let handle = std::thread::spawn(move || {
            writer.save(&session, &sample_profile(InsuranceType::Ihs)).unwrap();
        });
        handle.join().unwrap();

        let loaded = repo.load(&session).unwrap().unwrap();
        assert_eq!(loaded.profile.insurance_type, InsuranceType::Ihs);
    }

    #[test]
    fn sessions_are_isolated() {
        let repo = InMemoryProfileRepository::new();
        let a = SessionId::new();
        let b = SessionId::new();

        repo.save(&a, &sample_profile(InsuranceType::Medicaid)).unwrap();
        repo.save(&b, &sample_profile(InsuranceType::TricareVa)).unwrap();

        assert_eq!(repo.len().unwrap(), 2);
        assert_eq!(repo.load(&a).unwrap().unwrap().profile.insurance_type, InsuranceType::Medicaid);
        assert_eq!(
            repo.load(&b).unwrap().unwrap().profile.insurance_type,
            InsuranceType::TricareVa
        );
    }
}
