//! Provider error taxonomy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by provider operations.
///
/// Controllers catch every variant at the triggering user action and collapse
/// it to a display string; nothing is re-thrown past the UI boundary, and no
/// variant is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid or expired credentials/tokens.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The provider rejected a value (bad slug, name, or email).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The caller lacks permission for the operation.
    #[error("not permitted: {0}")]
    Authorization(String),

    /// Network failure or unreachable provider.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The user abandoned an interactive flow.
    #[error("sign-in cancelled")]
    Cancelled,
}

impl AuthError {
    /// The human-readable form shown in view error state.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("malformed provider response: {err}"))
    }
}
