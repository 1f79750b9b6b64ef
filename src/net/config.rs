//! Provider deployment configuration loaded from environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Connection settings for one Entity Auth deployment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the deployment, without a trailing slash.
    pub base_url: String,
    /// Bearer token for an already-established session, if any.
    pub access_token: Option<String>,
    /// Tenant this client is bound to. Absence is a configuration error
    /// surfaced when a workflow needs it, not at load time.
    pub workspace_tenant_id: Option<String>,
}

impl ProviderConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            access_token: None,
            workspace_tenant_id: None,
        }
    }

    /// Load from `ENTITY_AUTH_BASE_URL`, `ENTITY_AUTH_ACCESS_TOKEN`,
    /// `ENTITY_AUTH_TENANT_ID`. Returns `None` if the base URL is missing
    /// (the client cannot be constructed at all).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        from_vars(
            std::env::var("ENTITY_AUTH_BASE_URL").ok(),
            std::env::var("ENTITY_AUTH_ACCESS_TOKEN").ok(),
            std::env::var("ENTITY_AUTH_TENANT_ID").ok(),
        )
    }
}

fn from_vars(
    base_url: Option<String>,
    access_token: Option<String>,
    workspace_tenant_id: Option<String>,
) -> Option<ProviderConfig> {
    let base_url = base_url.filter(|v| !v.trim().is_empty())?;
    Some(ProviderConfig {
        base_url: normalize_base_url(&base_url),
        access_token: access_token.filter(|v| !v.is_empty()),
        workspace_tenant_id: workspace_tenant_id.filter(|v| !v.is_empty()),
    })
}

/// Trim whitespace and any trailing slashes so endpoint concatenation stays
/// predictable.
fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
