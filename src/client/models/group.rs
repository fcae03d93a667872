//! Group models

use serde::{Deserialize, Serialize};

/// Group (team) within an organization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgGroup {
    /// Group ID
    pub id: i64,

    /// Group name
    pub name: String,

    /// Group description
    pub description: String,

    /// Number of members in the group
    pub member_count: i64,
}

/// Payload for creating or updating a group.
///
/// Unset fields are omitted from the request body, leaving the server-side
/// value untouched on update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrgGroupInput {
    /// Group name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Group description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
