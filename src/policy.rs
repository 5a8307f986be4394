//! Access policy: the rules table the route guard evaluates.
//!
//! DESIGN
//! ======
//! `evaluate` is a pure function over (principal, target route) so every rule
//! is testable without session state or navigation machinery. Rules apply in
//! fixed precedence; the first deny wins. The profile-completeness gate
//! outranks role restrictions: an incomplete vendor is sent to onboarding
//! even from routes their role would otherwise permit.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::principal::{Principal, Role};

/// A route subtree only one role may enter.
#[derive(Clone, Debug)]
pub struct RoleRoute {
    /// Path prefix, e.g. `/dashboard/vendor`.
    pub prefix: String,
    /// Role required for everything under the prefix.
    pub role: Role,
}

/// Outcome of evaluating the rules table against one target route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// No rule denies the navigation.
    Allow,
    /// No principal and the target is outside the allow-list.
    RequireLogin,
    /// Vendor without a profile heading anywhere but onboarding.
    RequireProfile,
    /// Principal's role does not match a role-restricted subtree.
    RoleMismatch { required: Role },
}

/// Static route-authorization configuration.
///
/// Constants, not derived at runtime; the defaults mirror the application's
/// route map.
#[derive(Clone, Debug)]
pub struct AccessPolicy {
    /// Routes reachable without a principal, and exempt from the profile gate.
    pub allow_list: Vec<String>,
    /// Where unauthenticated navigations are redirected.
    pub sign_in_route: String,
    /// The one route an incomplete vendor may still reach.
    pub profile_completion_route: String,
    /// Role-restricted subtrees, checked in order, first prefix match wins.
    pub role_routes: Vec<RoleRoute>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            allow_list: ["/sign-in", "/register", "/password-reset", "/logout"]
                .map(String::from)
                .to_vec(),
            sign_in_route: "/sign-in".into(),
            profile_completion_route: "/dashboard/vendor-registration".into(),
            role_routes: Vec::new(),
        }
    }
}

impl AccessPolicy {
    /// Whether `path` is reachable without a principal.
    #[must_use]
    pub fn is_allow_listed(&self, path: &str) -> bool {
        self.allow_list.iter().any(|route| route == path)
    }

    /// Apply the rules table to one navigation target.
    #[must_use]
    pub fn evaluate(&self, principal: Option<&Principal>, target: &str) -> Decision {
        // Rule 1: unauthenticated allow-list, exempt from everything below.
        if self.is_allow_listed(target) {
            return Decision::Allow;
        }

        // Rule 5: outside the allow-list a principal is required.
        let Some(principal) = principal else {
            return Decision::RequireLogin;
        };

        // Rule 2: profile-completeness gate, outranks role restrictions.
        if !principal.profile_complete() && target != self.profile_completion_route {
            return Decision::RequireProfile;
        }

        // Rule 3: role-restricted subtrees.
        if let Some(restriction) = self.role_routes.iter().find(|r| target.starts_with(&r.prefix)) {
            if principal.role != restriction.role {
                return Decision::RoleMismatch { required: restriction.role };
            }
        }

        // Rule 4: authenticated and unrestricted.
        Decision::Allow
    }
}
