//! Organization models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organization resource
///
/// Fields the server omits decode to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    /// Organization ID
    pub id: String,

    /// Organization name (the `{org}` path segment of other endpoints)
    pub orgname: String,

    /// Display name
    pub full_name: String,

    /// Location
    pub location: String,

    /// Company name
    pub company: String,

    /// Profile page URL
    pub profile_url: String,

    /// When the organization was created
    pub date_joined: Option<DateTime<Utc>>,

    /// Gravatar image URL
    pub gravatar_url: String,

    /// Gravatar email address
    pub gravatar_email: String,

    /// Account type
    #[serde(rename = "type")]
    pub org_type: String,

    /// Plan badge
    pub badge: String,

    /// Whether the organization is active
    pub is_active: bool,
}
