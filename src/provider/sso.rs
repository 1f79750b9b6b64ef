//! SSO exchange contract.

use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::types::TokenBundle;

/// Identity providers supported for single sign-on. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SsoProviderKind {
    Google,
    Github,
    Apple,
}

impl SsoProviderKind {
    /// Wire/display form of the provider kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
            Self::Apple => "apple",
        }
    }
}

/// Request payload for an SSO sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoSignIn {
    /// Which identity provider to exchange against.
    pub provider: SsoProviderKind,
    /// Where to land after the redirect dance completes, if anywhere.
    pub return_to: Option<String>,
    /// Tenant the resulting session must be bound to.
    pub workspace_tenant_id: String,
}

/// Single-call SSO surface of the Entity Auth provider.
#[async_trait::async_trait]
pub trait SsoExchange: Send + Sync {
    /// Run the full sign-in exchange and return tenant-bound tokens.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Cancelled`] when the user abandons the flow,
    /// [`AuthError::Transport`] on network failure, or
    /// [`AuthError::Authentication`] when the identity provider rejects the
    /// exchange.
    async fn sign_in(&self, req: &SsoSignIn) -> Result<TokenBundle, AuthError>;
}
