//! SSO sign-in workflow.
//!
//! ARCHITECTURE
//! ============
//! Sign-in is a two-step pipeline against two provider surfaces: the SSO
//! exchange returns tenant-bound tokens, and the session provider installs
//! them. The tenant id is a precondition — a deployment without one is
//! misconfigured, and the flow refuses to start the exchange at all.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use std::sync::Arc;

use crate::provider::{AuthError, SessionProvider, SsoExchange, SsoProviderKind, SsoSignIn};

/// View-local state for the sign-in form.
#[derive(Clone, Debug, Default)]
pub struct SignInFlowState {
    /// True while an exchange is in flight.
    pub in_flight: bool,
    /// Display-only error from the most recent failed attempt.
    pub error: Option<String>,
}

/// Controller for the SSO sign-in and sign-out actions.
pub struct SignInFlow {
    session: Arc<dyn SessionProvider>,
    sso: Arc<dyn SsoExchange>,
    pub state: SignInFlowState,
}

impl SignInFlow {
    #[must_use]
    pub fn new(session: Arc<dyn SessionProvider>, sso: Arc<dyn SsoExchange>) -> Self {
        Self { session, sso, state: SignInFlowState::default() }
    }

    /// Run the SSO exchange for `provider` and install the returned tokens.
    ///
    /// Guarded by a single in-flight flag. Every failure — missing tenant,
    /// user cancellation, rejected exchange, rejected tokens — collapses to
    /// one display message.
    pub async fn sign_in(&mut self, provider: SsoProviderKind, return_to: Option<String>) {
        if self.state.in_flight {
            return;
        }
        self.state.in_flight = true;
        self.state.error = None;
        if let Err(e) = self.run_exchange(provider, return_to).await {
            self.state.error = Some(e.display_message());
        }
        self.state.in_flight = false;
    }

    /// End the current session.
    pub async fn sign_out(&mut self) {
        self.state.error = None;
        if let Err(e) = self.session.sign_out().await {
            self.state.error = Some(e.display_message());
        }
    }

    async fn run_exchange(
        &self,
        provider: SsoProviderKind,
        return_to: Option<String>,
    ) -> Result<(), AuthError> {
        let workspace_tenant_id = self
            .session
            .workspace_tenant_id()
            .ok_or_else(|| AuthError::Config("workspace tenant id not configured".into()))?;
        let tokens = self
            .sso
            .sign_in(&SsoSignIn { provider, return_to, workspace_tenant_id })
            .await?;
        self.session.apply_tokens(&tokens).await
    }
}
