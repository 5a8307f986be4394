//! Session state: the per-client cache of the resolved principal.
//!
//! DESIGN
//! ======
//! Exactly one principal-or-absent slot per client session. `load` is the
//! only operation that performs I/O and the only async one; `current` and
//! `logout` are synchronous. Auth failures never surface to callers of
//! `load` — they degrade to "logged out".
//!
//! CONCURRENCY
//! ===========
//! Two overlapping `load` calls recompute the same externally sourced value,
//! so the slot write is last-writer-wins. `logout` is a barrier: it bumps a
//! generation counter, and a `load` that started under an older generation
//! discards its result instead of resurrecting the principal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::credentials::CredentialStore;
use crate::fetch::UserFetch;
use crate::principal::Principal;

struct Slot {
    principal: Option<Principal>,
    generation: u64,
}

/// Shared session state. Owned by the application shell and injected into the
/// route guard and any user-aware component; cheap to clone via `Arc`.
pub struct SessionState {
    credentials: Arc<dyn CredentialStore>,
    fetch: Arc<dyn UserFetch>,
    slot: Mutex<Slot>,
}

impl SessionState {
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialStore>, fetch: Arc<dyn UserFetch>) -> Self {
        Self {
            credentials,
            fetch,
            slot: Mutex::new(Slot { principal: None, generation: 0 }),
        }
    }

    /// Cached principal. Never performs I/O and never mutates.
    #[must_use]
    pub fn current(&self) -> Option<Principal> {
        self.slot.lock().principal.clone()
    }

    /// Reconcile the cached principal against the credential store.
    ///
    /// No credential: clears the slot and returns `None` without touching the
    /// network. Otherwise performs exactly one fetch; any failure (transport
    /// or rejected token) also resolves to `None`.
    pub async fn load(&self) -> Option<Principal> {
        // Snapshot before the credential read: a logout landing anywhere
        // after this line bumps the generation and the writes below are
        // discarded.
        let generation = self.slot.lock().generation;

        let Some(token) = self.credentials.get() else {
            let mut slot = self.slot.lock();
            if slot.generation == generation {
                slot.principal = None;
            }
            return None;
        };

        let fetched = match self.fetch.fetch_current_user(&token).await {
            Ok(principal) => {
                tracing::debug!(user_id = %principal.id, role = ?principal.role, "session loaded");
                Some(principal)
            }
            Err(e) => {
                tracing::debug!(error = %e, "session load failed, treating as logged out");
                None
            }
        };

        let mut slot = self.slot.lock();
        if slot.generation != generation {
            // A logout ran after the snapshot; its result stands.
            return slot.principal.clone();
        }
        slot.principal = fetched.clone();
        fetched
    }

    /// Clear the credential and the cached principal. Purely local, no
    /// network call, idempotent.
    pub fn logout(&self) {
        self.credentials.set(None);
        let mut slot = self.slot.lock();
        slot.generation += 1;
        slot.principal = None;
        tracing::debug!("session cleared");
    }
}
