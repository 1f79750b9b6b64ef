//! Organization switch workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the organization switcher surfaces: the locally cached list, the
//! displayed active id, and the load/switch/create actions. The provider is
//! the source of truth; this controller only keeps the displayed projection
//! consistent with it.
//!
//! TRADE-OFFS
//! ==========
//! `switch_to` sets the active id optimistically on provider success and
//! keeps it even when the follow-up list refresh fails; a stale list beats
//! flashing the previous organization back at the user.

#[cfg(test)]
#[path = "org_switcher_test.rs"]
mod org_switcher_test;

use std::sync::Arc;

use crate::provider::{
    CreateOrganization, OrganizationDirectory, OrganizationSummary, SessionProvider,
};
use crate::slug::slugify;

/// View-local state for the organization switcher.
#[derive(Clone, Debug, Default)]
pub struct OrgSwitcherState {
    /// Locally cached organization list, in provider order.
    pub organizations: Vec<OrganizationSummary>,
    /// The org id currently displayed as active, if any.
    pub active_org_id: Option<String>,
    /// Edit buffer for the create-organization input.
    pub new_org_name: String,
    /// True while a full refresh is in flight.
    pub loading: bool,
    /// True while a switch call is in flight.
    pub switch_pending: bool,
    /// True while a create call is in flight.
    pub create_pending: bool,
    /// Display-only error from the most recent failed action.
    pub error: Option<String>,
}

impl OrgSwitcherState {
    /// The summary for the displayed active org, when it is in the list.
    #[must_use]
    pub fn active_organization(&self) -> Option<&OrganizationSummary> {
        let active_id = self.active_org_id.as_deref()?;
        self.organizations.iter().find(|o| o.org_id == active_id)
    }
}

/// Controller for viewing, switching, and creating organizations.
pub struct OrgSwitcher {
    session: Arc<dyn SessionProvider>,
    directory: Arc<dyn OrganizationDirectory>,
    pub state: OrgSwitcherState,
}

impl OrgSwitcher {
    #[must_use]
    pub fn new(session: Arc<dyn SessionProvider>, directory: Arc<dyn OrganizationDirectory>) -> Self {
        Self { session, directory, state: OrgSwitcherState::default() }
    }

    /// Refresh the organization list and the displayed active id.
    ///
    /// The snapshot and the directory queries run concurrently. The derived
    /// active organization (explicit query) takes precedence; when that
    /// lookup fails or yields none, the previously displayed id stays, and a
    /// switcher that has never displayed anything falls back to the
    /// snapshot's cached active organization. A list fetch failure aborts
    /// the refresh and surfaces the error; prior list and active id are
    /// retained.
    pub async fn load(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        let snapshot = self.session.current_snapshot();
        let (organizations, derived) =
            tokio::join!(self.directory.organizations(), self.directory.active_organization());
        self.state.loading = false;

        let organizations = match organizations {
            Ok(list) => list,
            Err(e) => {
                self.state.error = Some(e.display_message());
                return;
            }
        };
        self.state.organizations = organizations;

        match derived {
            Ok(Some(active)) => self.state.active_org_id = Some(active.org_id),
            Ok(None) => self.fall_back_to_snapshot_active(&snapshot.active_organization),
            Err(e) => {
                tracing::debug!(error = %e, "active organization lookup failed; keeping displayed id");
                self.fall_back_to_snapshot_active(&snapshot.active_organization);
            }
        }
    }

    /// Switch the active organization to `org_id`.
    ///
    /// On provider success the displayed active id becomes `org_id`
    /// immediately, then the list is refreshed; a refresh failure is
    /// silently ignored and the optimistic id stands. On provider failure
    /// the error is surfaced and the displayed id is left untouched.
    pub async fn switch_to(&mut self, org_id: &str) {
        self.state.switch_pending = true;
        self.state.error = None;

        match self.directory.switch_organization(org_id).await {
            Ok(()) => {
                self.state.active_org_id = Some(org_id.to_owned());
                match self.directory.organizations().await {
                    Ok(list) => self.state.organizations = list,
                    Err(e) => {
                        tracing::debug!(error = %e, "list refresh after switch failed; keeping optimistic id");
                    }
                }
            }
            Err(e) => self.state.error = Some(e.display_message()),
        }
        self.state.switch_pending = false;
    }

    /// Create an organization named by the `new_org_name` buffer, then make
    /// it active.
    ///
    /// The slug is derived from the name, the owner is the current snapshot's
    /// user, and the input buffer is cleared on provider success. After the
    /// follow-up refresh the controller switches to the organization whose
    /// slug matches; with no match it switches to the first list entry, and
    /// an empty list ends the workflow silently. A created organization is
    /// never rolled back when a later step fails.
    pub async fn create_org(&mut self) {
        let name = self.state.new_org_name.trim().to_owned();
        let slug = slugify(&name);
        let owner_id = self.session.current_snapshot().user_id;

        self.state.create_pending = true;
        self.state.error = None;

        let created = self
            .directory
            .create_organization(&CreateOrganization { name, slug: slug.clone(), owner_id })
            .await;
        if let Err(e) = created {
            self.state.error = Some(e.display_message());
            self.state.create_pending = false;
            return;
        }
        self.state.new_org_name.clear();

        match self.directory.organizations().await {
            Ok(list) => self.state.organizations = list,
            Err(e) => {
                self.state.error = Some(e.display_message());
                self.state.create_pending = false;
                return;
            }
        }
        self.state.create_pending = false;

        let target = self
            .state
            .organizations
            .iter()
            .find(|o| o.slug == slug)
            .or_else(|| self.state.organizations.first())
            .map(|o| o.org_id.clone());
        if let Some(org_id) = target {
            self.switch_to(&org_id).await;
        }
    }

    fn fall_back_to_snapshot_active(&mut self, cached: &Option<OrganizationSummary>) {
        if self.state.active_org_id.is_none() {
            self.state.active_org_id = cached.as_ref().map(|o| o.org_id.clone());
        }
    }
}
