//! Auth failure taxonomy and backend error-message extraction.
//!
//! ERROR HANDLING
//! ==============
//! `AuthError` distinguishes "no token" from transport faults and from a
//! token the backend rejected. Session state collapses all three into
//! "no principal" for its callers; the variants exist so the distinction is
//! still observable in logs and available to a future retry policy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure modes of resolving the current user from a credential.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No credential is present. A state, not a fault.
    #[error("no credential present")]
    CredentialAbsent,
    /// The fetch itself failed (network, decode).
    #[error("user fetch failed: {0}")]
    FetchFailed(String),
    /// The backend rejected the credential.
    #[error("credential rejected: {0}")]
    Unauthorized(String),
}

/// `detail` field of a backend validation error: either a plain message or a
/// list of per-field entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValidationDetail {
    Message(String),
    Fields(Vec<ValidationItem>),
}

/// One entry of a field-level validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationItem {
    pub msg: String,
}

/// Validation error body as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationError {
    #[serde(default)]
    pub detail: Option<ValidationDetail>,
}

/// Flatten a backend validation error into one user-facing message.
/// Falls back to `default` when the body carries no usable detail.
#[must_use]
pub fn extract_error_message(error: &ValidationError, default: &str) -> String {
    match &error.detail {
        Some(ValidationDetail::Message(msg)) => msg.clone(),
        Some(ValidationDetail::Fields(items)) => items
            .first()
            .map_or_else(|| default.to_owned(), |item| item.msg.clone()),
        None => default.to_owned(),
    }
}
