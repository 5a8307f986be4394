//! Route guard: the per-navigation decision engine.
//!
//! ARCHITECTURE
//! ============
//! Runs before each protected navigation:
//! `Start -> (needs session?) -> Loading -> Decided{Proceed|Redirect|Abort}`.
//! `Loading` is the single await point in the subsystem — one session load
//! per attempt, entered only when nothing is cached and the target is not
//! allow-listed. Fetch failures never surface here; they arrive as "no
//! principal" and the machine decides as if unauthenticated.
//!
//! Outcomes are computed fresh per intent and never cached.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;

use crate::notify::{Notification, NotificationSink};
use crate::policy::{AccessPolicy, Decision};
use crate::principal::Role;
use crate::session::SessionState;

/// The route pair under evaluation. Ephemeral, one per navigation attempt.
#[derive(Clone, Debug)]
pub struct NavigationIntent {
    /// Target route.
    pub to: String,
    /// Route the navigation originated from.
    pub from: String,
}

impl NavigationIntent {
    #[must_use]
    pub fn new(to: impl Into<String>, from: impl Into<String>) -> Self {
        Self { to: to.into(), from: from.into() }
    }
}

/// Terminal decision of a navigation evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation through.
    Proceed,
    /// Send the user elsewhere.
    Redirect(String),
    /// The navigation simply does not happen.
    Abort,
}

/// Router-side effectors the terminal states map onto.
pub trait Navigator {
    fn redirect_to(&self, route: &str);
    fn abort(&self);
}

impl GuardOutcome {
    /// Apply the outcome to a router. `Proceed` performs neither effect.
    pub fn apply(&self, navigator: &dyn Navigator) {
        match self {
            Self::Proceed => {}
            Self::Redirect(route) => navigator.redirect_to(route),
            Self::Abort => navigator.abort(),
        }
    }
}

/// Per-navigation guard over shared session state and a static policy.
pub struct RouteGuard {
    session: Arc<SessionState>,
    policy: AccessPolicy,
    notifier: Arc<dyn NotificationSink>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(session: Arc<SessionState>, policy: AccessPolicy, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { session, policy, notifier }
    }

    /// Evaluate the general authentication gate for one navigation attempt.
    ///
    /// Allow-listed targets proceed without touching the session. Otherwise
    /// the cached principal is used, falling back to a single `load()` to
    /// recover a session from a still-valid credential across a page reload.
    pub async fn authenticate(&self, intent: &NavigationIntent) -> GuardOutcome {
        if self.policy.is_allow_listed(&intent.to) {
            return GuardOutcome::Proceed;
        }

        let principal = match self.session.current() {
            Some(p) => Some(p),
            None => self.session.load().await,
        };

        let outcome = match self.policy.evaluate(principal.as_ref(), &intent.to) {
            Decision::Allow => GuardOutcome::Proceed,
            Decision::RequireProfile => {
                self.notifier.notify(Notification::error(
                    "Vendor profile required",
                    "Please complete your vendor profile first",
                ));
                GuardOutcome::Redirect(self.policy.profile_completion_route.clone())
            }
            Decision::RequireLogin => {
                self.notifier.notify(Notification::error(
                    "Authorization required",
                    "Please log in to access this page",
                ));
                // Coming from an auth page, a redirect to sign-in would loop.
                if self.policy.is_allow_listed(&intent.from) {
                    GuardOutcome::Abort
                } else {
                    GuardOutcome::Redirect(self.policy.sign_in_route.clone())
                }
            }
            Decision::RoleMismatch { .. } => GuardOutcome::Abort,
        };

        tracing::debug!(to = %intent.to, from = %intent.from, ?outcome, "navigation decided");
        outcome
    }

    /// Simple role gate for role-only pages: proceed iff a principal exists
    /// and its role matches exactly, abort otherwise. No load, no redirect,
    /// no notification — the caller just sees the navigation fail.
    #[must_use]
    pub fn require_role(&self, role: Role) -> GuardOutcome {
        match self.session.current() {
            Some(principal) if principal.role == role => GuardOutcome::Proceed,
            _ => GuardOutcome::Abort,
        }
    }
}
