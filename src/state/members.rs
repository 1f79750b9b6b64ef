//! Organization member management.

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;

use std::sync::Arc;

use crate::provider::{OrgMember, OrganizationDirectory};

/// View-local state for an organization's member list.
#[derive(Clone, Debug, Default)]
pub struct MemberListState {
    /// Organization whose members are loaded, if any.
    pub org_id: Option<String>,
    /// Cached member rows, in provider order.
    pub members: Vec<OrgMember>,
    /// True while a list fetch is in flight.
    pub loading: bool,
    /// True while a removal is in flight.
    pub removing: bool,
    /// Display-only error from the most recent failed action.
    pub error: Option<String>,
}

/// Controller for listing and removing organization members.
pub struct MemberList {
    directory: Arc<dyn OrganizationDirectory>,
    pub state: MemberListState,
}

impl MemberList {
    #[must_use]
    pub fn new(directory: Arc<dyn OrganizationDirectory>) -> Self {
        Self { directory, state: MemberListState::default() }
    }

    /// Fetch the member list for `org_id`. A failure surfaces an error and
    /// retains whatever was previously displayed.
    pub async fn load(&mut self, org_id: &str) {
        self.state.loading = true;
        self.state.error = None;
        match self.directory.list_members(org_id).await {
            Ok(members) => {
                self.state.members = members;
                self.state.org_id = Some(org_id.to_owned());
            }
            Err(e) => self.state.error = Some(e.display_message()),
        }
        self.state.loading = false;
    }

    /// Remove `user_id` from the loaded organization.
    ///
    /// On success the row is dropped locally; authorization failures (e.g. a
    /// non-owner removing members) surface like any other error and leave
    /// the list untouched.
    pub async fn remove(&mut self, user_id: &str) {
        let Some(org_id) = self.state.org_id.clone() else {
            return;
        };
        self.state.removing = true;
        self.state.error = None;
        match self.directory.remove_member(&org_id, user_id).await {
            Ok(()) => self.state.members.retain(|m| m.user_id != user_id),
            Err(e) => self.state.error = Some(e.display_message()),
        }
        self.state.removing = false;
    }
}
