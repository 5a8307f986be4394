//! Client-side session and route-authorization layer for a two-role
//! (company/vendor) web application.
//!
//! ARCHITECTURE
//! ============
//! [`SessionState`] resolves "who is the current user" from a bearer
//! credential held in a [`CredentialStore`], through a [`UserFetch`]
//! collaborator. [`RouteGuard`] runs before each protected navigation, reads
//! (or loads) the session, evaluates the [`AccessPolicy`] rules table, and
//! produces a [`GuardOutcome`] the host router applies via [`Navigator`].
//!
//! Everything the host provides — cookie jar, HTTP transport, toast UI,
//! router — sits behind a trait seam, so the whole decision engine tests
//! off-browser.

pub mod credentials;
pub mod error;
pub mod fetch;
pub mod guard;
pub mod notify;
pub mod policy;
pub mod principal;
pub mod session;

pub use credentials::{ACCESS_TOKEN_KEY, Credential, CredentialStore, MemoryCredentialStore};
pub use error::{AuthError, ValidationDetail, ValidationError, ValidationItem, extract_error_message};
pub use fetch::{HttpUserFetch, UserFetch};
pub use guard::{GuardOutcome, NavigationIntent, Navigator, RouteGuard};
pub use notify::{Notification, NotificationSink, Severity, TracingNotifier};
pub use policy::{AccessPolicy, Decision, RoleRoute};
pub use principal::{Principal, Role, VendorProfile};
pub use session::SessionState;
