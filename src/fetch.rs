//! Current-user fetch seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session state resolves a credential into a [`Principal`] through this
//! trait. The shipped implementation hits the backend's current-user endpoint
//! over HTTP; tests substitute recording stubs.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use async_trait::async_trait;

use crate::error::AuthError;
use crate::principal::Principal;

/// Resolve a bearer credential into the current user.
#[async_trait]
pub trait UserFetch: Send + Sync {
    /// Fetch the user record the credential belongs to.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the backend rejects the credential, `FetchFailed`
    /// for transport or decode failures.
    async fn fetch_current_user(&self, credential: &str) -> Result<Principal, AuthError>;
}

/// HTTP implementation of [`UserFetch`] against the backend API.
pub struct HttpUserFetch {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserFetch {
    /// `base_url` without a trailing slash, e.g. `https://api.example.test`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.into() }
    }

    fn me_url(&self) -> String {
        format!("{}/api/v1/users/me", self.base_url)
    }
}

#[async_trait]
impl UserFetch for HttpUserFetch {
    async fn fetch_current_user(&self, credential: &str) -> Result<Principal, AuthError> {
        let resp = self
            .client
            .get(self.me_url())
            .header("Authorization", format!("Bearer {credential}"))
            .send()
            .await
            .map_err(|e| AuthError::FetchFailed(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Unauthorized(format!("{status}: {body}")));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::FetchFailed(format!("{status}: {body}")));
        }

        resp.json::<Principal>()
            .await
            .map_err(|e| AuthError::FetchFailed(e.to_string()))
    }
}
