//! Persistence seam for questionnaire results.
//!
//! The engine itself is pure: it takes a `UserProfile` and returns guidance.
//! Hosts that want answers to survive a reload (the browser stored them in
//! local storage) persist profiles through this trait. The engine never
//! calls it.

use medaid_contracts::{
    error::MedaidResult,
    profile::UserProfile,
    session::{SessionId, StoredProfile},
};

/// Stores one profile per questionnaire session.
pub trait ProfileRepository: Send + Sync {
    /// Insert or replace the profile for `session`.
    fn save(&self, session: &SessionId, profile: &UserProfile) -> MedaidResult<StoredProfile>;

    /// Return the profile saved for `session`, if any.
    fn load(&self, session: &SessionId) -> MedaidResult<Option<StoredProfile>>;

    /// Remove the profile for `session`. Returns true if one was present.
    fn delete(&self, session: &SessionId) -> MedaidResult<bool>;
}
