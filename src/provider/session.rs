//! Session provider contract.

use super::error::AuthError;
use super::snapshots::SnapshotSubscription;
use super::types::{Preferences, SessionSnapshot, TokenBundle};

/// Session lifecycle surface of the Entity Auth provider.
///
/// Object-safe async trait so controllers can hold `Arc<dyn SessionProvider>`
/// and tests can substitute mocks.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync {
    /// The latest session snapshot. Infallible: providers cache the most
    /// recent value and return it without touching the network.
    fn current_snapshot(&self) -> SessionSnapshot;

    /// Open a lazy, infinite, restartable stream of session snapshots.
    /// Dropping the subscription cancels it.
    fn snapshot_stream(&self) -> SnapshotSubscription;

    /// Install tokens obtained out of band (e.g. from an SSO exchange).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Authentication`] when the tokens are invalid,
    /// or [`AuthError::Transport`] when the provider is unreachable.
    async fn apply_tokens(&self, tokens: &TokenBundle) -> Result<(), AuthError>;

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the provider rejects the call.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Change the user's display name.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] on rejection (validation, conflict).
    async fn set_username(&self, new_name: &str) -> Result<(), AuthError>;

    /// Change the user's email address.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] on rejection (validation, conflict).
    async fn set_email(&self, new_email: &str) -> Result<(), AuthError>;

    /// Fetch the user's preference toggles.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on transport failure.
    async fn preferences(&self) -> Result<Preferences, AuthError>;

    /// Overwrite the user's preference toggles as a whole value.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on rejection or transport failure.
    async fn set_preferences(&self, prefs: &Preferences) -> Result<(), AuthError>;

    /// Tenant this client is bound to. `None` means the deployment is
    /// misconfigured; callers surface that as a configuration error.
    fn workspace_tenant_id(&self) -> Option<String>;

    /// Base URL of the provider deployment.
    fn base_url(&self) -> String;
}
