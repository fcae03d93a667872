//! Client library for the Docker Hub v2 organization-management API.
//!
//! A [`Client`] is constructed once from account credentials; construction
//! performs the login exchange and every subsequent call carries the bearer
//! token obtained there. List endpoints are paginated by the server; the
//! client walks the `next` links transparently and returns the full list.
//!
//! All calls are synchronous and block until the round-trip completes.
//!
//! # Example
//! ```no_run
//! use dockerhub_client::{Client, Credentials};
//!
//! fn main() -> dockerhub_client::Result<()> {
//!     let client = Client::new(&Credentials::new("jdoe", "hunter2"))?;
//!     for group in client.list_org_groups("my-org")? {
//!         println!("{} ({} members)", group.name, group.member_count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;

pub use client::{
    Client, Credentials, OrgGroup, OrgGroupInput, OrgMember, Organization, Page, PageQuery,
    paginate,
};
pub use error::{Error, Result};

// Re-exported so callers can name verbs for `Client::execute` without
// depending on reqwest directly.
pub use reqwest::Method;
