//! Resolved-user data model.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `Principal` is the client-side view of the authenticated user returned
//! by the current-user endpoint. Anonymous is represented as the absence of a
//! `Principal`, never as a variant on it.

#[cfg(test)]
#[path = "principal_test.rs"]
mod principal_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. Closed set; the backend rejects anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A client company posting projects.
    Company,
    /// A vendor offering services.
    Vendor,
}

/// Vendor onboarding profile. Mirrors the public vendor-profile record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub id: Uuid,
    pub main_goal: String,
    pub sales_email: String,
    pub admin_contact_phone: String,
    pub employee_count: u32,
    pub company_website: String,
    pub founded_year: u16,
    pub turnover: f64,
    pub description: String,
    pub min_project_size: f64,
    pub avg_hourly_rate: f64,
}

/// The current authenticated user as resolved from a single fetch.
///
/// Either fully populated or not present at all; there is no partially
/// constructed state. A `Vendor` with `vendor_profile == None` is meaningful:
/// registered, but onboarding not finished.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub company_name: String,
    pub location: String,
    pub role: Role,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub vendor_profile: Option<VendorProfile>,
}

impl Principal {
    /// Whether the role's required onboarding profile is present.
    /// Only vendors carry a profile requirement.
    #[must_use]
    pub fn profile_complete(&self) -> bool {
        match self.role {
            Role::Vendor => self.vendor_profile.is_some(),
            Role::Company => true,
        }
    }
}
