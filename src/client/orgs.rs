//! Organization, group, and membership endpoints
//!
//! Each operation is a thin mapping of path + verb + optional JSON payload
//! onto the transport; list operations hand a page-fetch closure to the
//! paginator. No endpoint-specific logic lives here beyond that mapping.

use reqwest::Method;
use serde::Serialize;

use super::Client;
use super::models::{OrgGroup, OrgGroupInput, OrgMember, Organization};
use super::pagination::{PageQuery, paginate};
use crate::error::Result;

impl Client {
    /// Fetch one organization by name.
    pub fn get_org(&self, org: &str) -> Result<Organization> {
        self.get_json(&format!("/orgs/{org}"))
    }

    /// Fetch every group of an organization, walking all pages.
    pub fn list_org_groups(&self, org: &str) -> Result<Vec<OrgGroup>> {
        paginate(|cursor| self.list_org_groups_page(org, cursor))
    }

    /// Fetch one page of an organization's groups.
    ///
    /// Returns the page's items and the cursor for the page after it; a
    /// terminal cursor (`is_empty`) means this was the last page.
    pub fn list_org_groups_page(
        &self,
        org: &str,
        cursor: &PageQuery,
    ) -> Result<(Vec<OrgGroup>, PageQuery)> {
        self.fetch_page(&format!("/orgs/{org}/groups"), cursor)
    }

    /// Fetch one group by name.
    pub fn get_org_group(&self, org: &str, group: &str) -> Result<OrgGroup> {
        self.get_json(&format!("/orgs/{org}/groups/{group}"))
    }

    /// Create a group in an organization.
    pub fn create_org_group(&self, org: &str, input: &OrgGroupInput) -> Result<()> {
        self.send_json(Method::POST, &format!("/orgs/{org}/groups"), input)?;
        Ok(())
    }

    /// Update a group's name or description.
    pub fn update_org_group(&self, org: &str, group: &str, input: &OrgGroupInput) -> Result<()> {
        self.send_json(Method::PATCH, &format!("/orgs/{org}/groups/{group}"), input)?;
        Ok(())
    }

    /// Delete a group.
    pub fn delete_org_group(&self, org: &str, group: &str) -> Result<()> {
        self.execute(Method::DELETE, &format!("/orgs/{org}/groups/{group}"), None)?;
        Ok(())
    }

    /// Fetch every member of an organization, walking all pages.
    pub fn list_org_members(&self, org: &str) -> Result<Vec<OrgMember>> {
        paginate(|cursor| self.list_org_members_page(org, cursor))
    }

    /// Fetch one page of an organization's members.
    pub fn list_org_members_page(
        &self,
        org: &str,
        cursor: &PageQuery,
    ) -> Result<(Vec<OrgMember>, PageQuery)> {
        self.fetch_page(&format!("/orgs/{org}/members"), cursor)
    }

    /// Invite users into an organization's group by username or email.
    pub fn invite_org_members(&self, org: &str, group: &str, invitees: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct InvitePayload<'a> {
            org: &'a str,
            team: &'a str,
            invitees: &'a [String],
            dry_run: bool,
        }

        self.send_json(
            Method::POST,
            "/invites/bulk",
            &InvitePayload {
                org,
                team: group,
                invitees,
                dry_run: false,
            },
        )?;
        Ok(())
    }

    /// Add an existing organization member to a group by username or email.
    pub fn add_org_group_member(&self, org: &str, group: &str, member: &str) -> Result<()> {
        #[derive(Serialize)]
        struct MemberPayload<'a> {
            member: &'a str,
        }

        self.send_json(
            Method::POST,
            &format!("/orgs/{org}/groups/{group}/members"),
            &MemberPayload { member },
        )?;
        Ok(())
    }

    /// Remove a member from a group.
    pub fn delete_org_group_member(&self, org: &str, group: &str, username: &str) -> Result<()> {
        self.execute(
            Method::DELETE,
            &format!("/orgs/{org}/groups/{group}/members/{username}"),
            None,
        )?;
        Ok(())
    }

    /// Remove a member from the organization.
    pub fn delete_org_member(&self, org: &str, username: &str) -> Result<()> {
        self.execute(Method::DELETE, &format!("/orgs/{org}/members/{username}"), None)?;
        Ok(())
    }
}
