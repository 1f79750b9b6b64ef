//! HTTP-backed provider implementation.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success status maps onto the [`AuthError`] taxonomy by status
//! class (401 authentication, 403 authorization, 400/409/422 validation,
//! anything else transport), pulling the human-readable message out of the
//! provider's `{"error": "..."}` body when present. Snapshot refreshes that
//! trail a successful write are best-effort: their failure is logged, never
//! surfaced, since the write itself already succeeded.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use std::sync::Mutex;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::ProviderConfig;
use crate::provider::{
    AuthError, CreateOrganization, OrgMember, OrganizationDirectory, OrganizationSummary,
    Preferences, SessionProvider, SessionSnapshot, SnapshotPublisher, SnapshotSubscription,
    SsoExchange, SsoSignIn, TokenBundle,
};

// =============================================================================
// endpoints
// =============================================================================

fn session_endpoint(base: &str) -> String {
    format!("{base}/api/session")
}

fn tokens_endpoint(base: &str) -> String {
    format!("{base}/api/session/tokens")
}

fn sign_out_endpoint(base: &str) -> String {
    format!("{base}/api/session/sign-out")
}

fn user_endpoint(base: &str) -> String {
    format!("{base}/api/users/me")
}

fn preferences_endpoint(base: &str) -> String {
    format!("{base}/api/users/me/preferences")
}

fn organizations_endpoint(base: &str) -> String {
    format!("{base}/api/organizations")
}

fn active_organization_endpoint(base: &str) -> String {
    format!("{base}/api/organizations/active")
}

fn members_endpoint(base: &str, org_id: &str) -> String {
    format!("{base}/api/organizations/{org_id}/members")
}

fn member_endpoint(base: &str, org_id: &str, user_id: &str) -> String {
    format!("{base}/api/organizations/{org_id}/members/{user_id}")
}

fn sso_sign_in_endpoint(base: &str) -> String {
    format!("{base}/api/sso/sign-in")
}

// =============================================================================
// error mapping
// =============================================================================

/// Pull the provider's message out of an `{"error": "..."}` body.
fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(ToOwned::to_owned)
}

/// Map a non-success status and response body onto the error taxonomy.
fn error_for_status(status: u16, body: &str) -> AuthError {
    let message =
        error_message_from_body(body).unwrap_or_else(|| format!("provider returned status {status}"));
    match status {
        401 => AuthError::Authentication(message),
        403 => AuthError::Authorization(message),
        400 | 409 | 422 => AuthError::Validation(message),
        _ => AuthError::Transport(message),
    }
}

// =============================================================================
// RestProvider
// =============================================================================

/// Provider backed by an Entity Auth REST deployment.
///
/// Implements all three contract traits. The latest session snapshot is
/// cached behind a [`SnapshotPublisher`], which makes `current_snapshot`
/// infallible and backs `snapshot_stream`.
pub struct RestProvider {
    client: reqwest::Client,
    config: ProviderConfig,
    access_token: Mutex<Option<String>>,
    publisher: SnapshotPublisher,
}

impl RestProvider {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        let access_token = Mutex::new(config.access_token.clone());
        Self {
            client: reqwest::Client::new(),
            config,
            access_token,
            publisher: SnapshotPublisher::default(),
        }
    }

    /// Fetch the session from the provider and publish it to subscribers.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the fetch fails; the previously
    /// published snapshot stays current in that case.
    pub async fn refresh_snapshot(&self) -> Result<SessionSnapshot, AuthError> {
        let snapshot: SessionSnapshot =
            self.get_json(&session_endpoint(&self.config.base_url)).await?;
        self.publisher.publish(snapshot.clone());
        Ok(snapshot)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        let token = self.access_token.lock().unwrap().clone();
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, AuthError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(error_for_status(status.as_u16(), &body))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AuthError> {
        let response = self.request(Method::GET, url).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<reqwest::Response, AuthError> {
        let response = self.request(method, url).json(body).send().await?;
        Self::check(response).await
    }

    /// Refresh that trails a successful write; failure is logged, not surfaced.
    async fn refresh_after_write(&self, action: &'static str) {
        if let Err(e) = self.refresh_snapshot().await {
            tracing::debug!(error = %e, action, "snapshot refresh after write failed");
        }
    }
}

#[async_trait::async_trait]
impl SessionProvider for RestProvider {
    fn current_snapshot(&self) -> SessionSnapshot {
        self.publisher.current()
    }

    fn snapshot_stream(&self) -> SnapshotSubscription {
        self.publisher.subscribe()
    }

    async fn apply_tokens(&self, tokens: &TokenBundle) -> Result<(), AuthError> {
        let url = tokens_endpoint(&self.config.base_url);
        self.send_json(Method::POST, &url, tokens).await?;
        *self.access_token.lock().unwrap() = Some(tokens.access_token.clone());
        self.refresh_after_write("apply_tokens").await;
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let url = sign_out_endpoint(&self.config.base_url);
        let response = self.request(Method::POST, &url).send().await?;
        Self::check(response).await?;
        *self.access_token.lock().unwrap() = None;
        self.publisher.publish(SessionSnapshot::default());
        Ok(())
    }

    async fn set_username(&self, new_name: &str) -> Result<(), AuthError> {
        let url = user_endpoint(&self.config.base_url);
        let body = serde_json::json!({ "username": new_name });
        self.send_json(Method::PATCH, &url, &body).await?;
        self.refresh_after_write("set_username").await;
        Ok(())
    }

    async fn set_email(&self, new_email: &str) -> Result<(), AuthError> {
        let url = user_endpoint(&self.config.base_url);
        let body = serde_json::json!({ "email": new_email });
        self.send_json(Method::PATCH, &url, &body).await?;
        self.refresh_after_write("set_email").await;
        Ok(())
    }

    async fn preferences(&self) -> Result<Preferences, AuthError> {
        self.get_json(&preferences_endpoint(&self.config.base_url)).await
    }

    async fn set_preferences(&self, prefs: &Preferences) -> Result<(), AuthError> {
        let url = preferences_endpoint(&self.config.base_url);
        self.send_json(Method::PUT, &url, prefs).await?;
        Ok(())
    }

    fn workspace_tenant_id(&self) -> Option<String> {
        self.config.workspace_tenant_id.clone()
    }

    fn base_url(&self) -> String {
        self.config.base_url.clone()
    }
}

#[async_trait::async_trait]
impl OrganizationDirectory for RestProvider {
    async fn organizations(&self) -> Result<Vec<OrganizationSummary>, AuthError> {
        self.get_json(&organizations_endpoint(&self.config.base_url)).await
    }

    async fn active_organization(&self) -> Result<Option<OrganizationSummary>, AuthError> {
        // The endpoint returns JSON null when no organization is active.
        self.get_json(&active_organization_endpoint(&self.config.base_url)).await
    }

    async fn switch_organization(&self, org_id: &str) -> Result<(), AuthError> {
        let url = active_organization_endpoint(&self.config.base_url);
        let body = serde_json::json!({ "org_id": org_id });
        self.send_json(Method::POST, &url, &body).await?;
        self.refresh_after_write("switch_organization").await;
        Ok(())
    }

    async fn create_organization(
        &self,
        req: &CreateOrganization,
    ) -> Result<OrganizationSummary, AuthError> {
        let url = organizations_endpoint(&self.config.base_url);
        let response = self.send_json(Method::POST, &url, req).await?;
        Ok(response.json::<OrganizationSummary>().await?)
    }

    async fn list_members(&self, org_id: &str) -> Result<Vec<OrgMember>, AuthError> {
        self.get_json(&members_endpoint(&self.config.base_url, org_id)).await
    }

    async fn remove_member(&self, org_id: &str, user_id: &str) -> Result<(), AuthError> {
        let url = member_endpoint(&self.config.base_url, org_id, user_id);
        let response = self.request(Method::DELETE, &url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl SsoExchange for RestProvider {
    async fn sign_in(&self, req: &SsoSignIn) -> Result<TokenBundle, AuthError> {
        let url = sso_sign_in_endpoint(&self.config.base_url);
        let response = self.send_json(Method::POST, &url, req).await?;
        Ok(response.json::<TokenBundle>().await?)
    }
}
