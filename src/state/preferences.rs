//! User preference panel.
//!
//! Preferences are a single value the provider overwrites wholesale on every
//! save; the panel edits a local copy and writes the whole thing back. There
//! is no per-toggle patching.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::sync::Arc;

use crate::provider::{Preferences, SessionProvider};

/// View-local state for the preference panel.
#[derive(Clone, Debug, Default)]
pub struct PreferencePanelState {
    /// Local working copy of the toggles.
    pub prefs: Preferences,
    /// True once a load has succeeded at least once.
    pub loaded: bool,
    /// True while the initial load is in flight.
    pub loading: bool,
    /// True while a save is in flight.
    pub saving: bool,
    /// Display-only error from the most recent failed action.
    pub error: Option<String>,
}

/// Controller for loading and saving preference toggles.
pub struct PreferencePanel {
    session: Arc<dyn SessionProvider>,
    pub state: PreferencePanelState,
}

impl PreferencePanel {
    #[must_use]
    pub fn new(session: Arc<dyn SessionProvider>) -> Self {
        Self { session, state: PreferencePanelState::default() }
    }

    /// Fetch the current preference value, replacing local edits.
    pub async fn load(&mut self) {
        self.state.loading = true;
        self.state.error = None;
        match self.session.preferences().await {
            Ok(prefs) => {
                self.state.prefs = prefs;
                self.state.loaded = true;
            }
            Err(e) => self.state.error = Some(e.display_message()),
        }
        self.state.loading = false;
    }

    /// Write the whole local value back to the provider.
    pub async fn save(&mut self) {
        if self.state.saving {
            return;
        }
        self.state.saving = true;
        self.state.error = None;
        if let Err(e) = self.session.set_preferences(&self.state.prefs).await {
            self.state.error = Some(e.display_message());
        }
        self.state.saving = false;
    }
}
