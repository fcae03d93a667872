//! Docker Hub API client

pub mod hub;
pub mod models;
pub mod orgs;
pub mod pagination;

pub use hub::{Client, DEFAULT_ENDPOINT};
pub use models::{Credentials, OrgGroup, OrgGroupInput, OrgMember, Organization};
pub use pagination::{Page, PageQuery, paginate};
