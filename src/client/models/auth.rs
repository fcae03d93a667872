//! Login credentials

use serde::Serialize;

/// Docker Hub account credentials.
///
/// Serialized once for the login exchange and never persisted beyond it.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
