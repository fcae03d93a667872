//! Resource records returned by the Docker Hub API
//!
//! Flat value objects decoded from JSON bodies; no behavior lives here.

pub mod auth;
pub mod group;
pub mod member;
pub mod org;

pub use auth::Credentials;
pub use group::{OrgGroup, OrgGroupInput};
pub use member::OrgMember;
pub use org::Organization;
