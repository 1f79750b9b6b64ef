//! Account field editing against a live snapshot stream.
//!
//! DESIGN
//! ======
//! The editor keeps two values per field: the live edit buffer the user types
//! into, and the baseline used for dirty-checking. Snapshots arriving from
//! the provider move the baseline (and avatar URL) but never the buffer once
//! the user has started typing — an in-progress edit is never clobbered by a
//! background refresh. The caller owns the [`SnapshotSubscription`] and
//! forwards each snapshot through [`AccountEditor::apply_snapshot`]; dropping
//! the subscription is the cancellation.
//!
//! [`SnapshotSubscription`]: crate::provider::SnapshotSubscription

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use std::sync::Arc;

use crate::provider::{SessionProvider, SessionSnapshot};

/// View-local state for the account editor.
#[derive(Clone, Debug, Default)]
pub struct AccountEditorState {
    /// Live edit buffer for the display name.
    pub name: String,
    /// Live edit buffer for the email address.
    pub email: String,
    /// Last known-good display name, used for dirty-checking and rollback.
    pub baseline_name: String,
    /// Last known-good email, used for dirty-checking and rollback.
    pub baseline_email: String,
    /// Avatar URL from the latest snapshot.
    pub image_url: Option<String>,
    /// True while a name save is in flight.
    pub name_saving: bool,
    /// True while an email save is in flight.
    pub email_saving: bool,
}

/// Controller for the independently savable name and email fields.
pub struct AccountEditor {
    session: Arc<dyn SessionProvider>,
    pub state: AccountEditorState,
}

impl AccountEditor {
    #[must_use]
    pub fn new(session: Arc<dyn SessionProvider>) -> Self {
        Self { session, state: AccountEditorState::default() }
    }

    /// Fold one provider snapshot into the editor.
    ///
    /// Seeds both edit buffers the first time a snapshot arrives while both
    /// are still empty; afterwards only the baselines and avatar URL move.
    pub fn apply_snapshot(&mut self, snapshot: &SessionSnapshot) {
        if self.state.name.is_empty() && self.state.email.is_empty() {
            self.state.name = snapshot.username.clone();
            self.state.email = snapshot.email.clone();
        }
        self.state.baseline_name = snapshot.username.clone();
        self.state.baseline_email = snapshot.email.clone();
        self.state.image_url = snapshot.image_url.clone();
    }

    /// Whether the name buffer is eligible for a save affordance.
    #[must_use]
    pub fn name_dirty(&self) -> bool {
        !self.state.name.is_empty() && self.state.name != self.state.baseline_name
    }

    /// Whether the email buffer is eligible for a save affordance.
    #[must_use]
    pub fn email_dirty(&self) -> bool {
        !self.state.email.is_empty() && self.state.email != self.state.baseline_email
    }

    /// Save the display name. Independent of the email field.
    ///
    /// No-op unless dirty and not already saving. On success the buffer
    /// becomes the new baseline; on failure the buffer rolls back to the
    /// baseline and the error is logged. No automatic retry.
    pub async fn save_name(&mut self) {
        if self.state.name_saving || !self.name_dirty() {
            return;
        }
        self.state.name_saving = true;
        let pending = self.state.name.clone();
        match self.session.set_username(&pending).await {
            Ok(()) => self.state.baseline_name = pending,
            Err(e) => {
                tracing::warn!(error = %e, "display name save failed; reverting edit");
                self.state.name = self.state.baseline_name.clone();
            }
        }
        self.state.name_saving = false;
    }

    /// Save the email address. Independent of the name field.
    pub async fn save_email(&mut self) {
        if self.state.email_saving || !self.email_dirty() {
            return;
        }
        self.state.email_saving = true;
        let pending = self.state.email.clone();
        match self.session.set_email(&pending).await {
            Ok(()) => self.state.baseline_email = pending,
            Err(e) => {
                tracing::warn!(error = %e, "email save failed; reverting edit");
                self.state.email = self.state.baseline_email.clone();
            }
        }
        self.state.email_saving = false;
    }
}
