//! Bearer-credential storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the credential lives in an `access_token` cookie set by the
//! sign-in flow. This crate only reads and clears it, so the store is a trait
//! with an in-memory implementation standing in for the cookie jar.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::collections::HashMap;

use parking_lot::Mutex;

/// Cookie key the sign-in flow writes the bearer token under.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Opaque bearer token proving identity to the backend.
pub type Credential = String;

/// Durable, request-scoped holder for the bearer credential.
///
/// No expiry logic lives here: a stale token is only discovered when the
/// backend rejects it, which session state treats as "no principal".
pub trait CredentialStore: Send + Sync {
    /// Current credential, if any.
    fn get(&self) -> Option<Credential>;
    /// Replace the credential; `None` clears it.
    fn set(&self, credential: Option<Credential>);
}

/// In-memory credential store. Stands in for the browser cookie jar in tests
/// and non-browser hosts.
#[derive(Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<Credential>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential.
    #[must_use]
    pub fn with_token(token: impl Into<Credential>) -> Self {
        Self { slot: Mutex::new(Some(token.into())) }
    }

    /// Seed from a cookie map, reading the [`ACCESS_TOKEN_KEY`] entry.
    /// Hosts that own a real cookie jar hand its contents over here.
    #[must_use]
    pub fn from_cookies(cookies: &HashMap<String, String>) -> Self {
        Self { slot: Mutex::new(cookies.get(ACCESS_TOKEN_KEY).cloned()) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<Credential> {
        self.slot.lock().clone()
    }

    fn set(&self, credential: Option<Credential>) {
        *self.slot.lock() = credential;
    }
}
