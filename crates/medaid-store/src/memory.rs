//! In-memory implementation of `ProfileRepository`.
//!
//! `InMemoryProfileRepository` keeps one `StoredProfile` per session in a
//! `HashMap` behind an `Arc<Mutex<_>>`, so clones share the same store and
//! can be handed to several request handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info};

use medaid_contracts::{
    error::{MedaidError, MedaidResult},
    profile::UserProfile,
    session::{SessionId, StoredProfile},
};
use medaid_core::traits::ProfileRepository;

/// A process-local profile store. Contents are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<Mutex<HashMap<SessionId, StoredProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub fn len(&self) -> MedaidResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> MedaidResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> MedaidResult<MutexGuard<'_, HashMap<SessionId, StoredProfile>>> {
        self.profiles.lock().map_err(|e| MedaidError::RepositoryError {
            reason: format!("profile store lock poisoned: {}", e),
        })
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    fn save(&self, session: &SessionId, profile: &UserProfile) -> MedaidResult<StoredProfile> {
        let stored = StoredProfile {
            session_id: *session,
            profile: profile.clone(),
            saved_at: Utc::now(),
        };

        let replaced = self.lock()?.insert(*session, stored.clone()).is_some();
        info!(session = %session, replaced, "profile saved");
        Ok(stored)
    }

    fn load(&self, session: &SessionId) -> MedaidResult<Option<StoredProfile>> {
        let found = self.lock()?.get(session).cloned();
        debug!(session = %session, found = found.is_some(), "profile lookup");
        Ok(found)
    }

    fn delete(&self, session: &SessionId) -> MedaidResult<bool> {
        let removed = self.lock()?.remove(session).is_some();
        info!(session = %session, removed, "profile deleted");
        Ok(removed)
    }
}
