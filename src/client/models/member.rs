//! Member models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Member of an organization
///
/// Fields the server omits decode to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgMember {
    /// Member ID
    pub id: String,

    /// Member UUID
    pub uuid: String,

    /// Username
    pub username: String,

    /// Display name
    pub full_name: String,

    /// Location
    pub location: String,

    /// Company name
    pub company: String,

    /// Profile page URL
    pub profile_url: String,

    /// When the account was created
    pub date_joined: Option<DateTime<Utc>>,

    /// Gravatar image URL
    pub gravatar_url: String,

    /// Gravatar email address
    pub gravatar_email: String,

    /// Account type
    #[serde(rename = "type")]
    pub member_type: String,

    /// Whether the member is an organization admin
    pub is_admin: bool,

    /// Whether the member is staff
    pub is_staff: bool,

    /// Email address
    pub email: String,

    /// Role within the organization
    pub role: String,

    /// Names of the groups the member belongs to
    pub groups: Vec<String>,

    /// Whether the member is a guest
    pub is_guest: bool,

    /// Primary email address
    pub primary_email: String,
}
