//! Organization directory contract.

use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::types::{OrgMember, OrganizationSummary};

/// Request payload for creating an organization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrganization {
    /// Human-readable organization name.
    pub name: String,
    /// URL-safe identifier derived from the name (see [`crate::slug`]).
    pub slug: String,
    /// User who will own the new organization (UUID string).
    pub owner_id: String,
}

/// Organization listing and membership surface of the Entity Auth provider.
#[async_trait::async_trait]
pub trait OrganizationDirectory: Send + Sync {
    /// All organizations the user belongs to, in provider order.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] when the provider is unreachable.
    async fn organizations(&self) -> Result<Vec<OrganizationSummary>, AuthError>;

    /// The organization currently acting as the user's context, resolved by
    /// an explicit provider query rather than read from a cached snapshot.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on transport failure.
    async fn active_organization(&self) -> Result<Option<OrganizationSummary>, AuthError>;

    /// Make `org_id` the active organization.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] when the id is unknown, or another
    /// [`AuthError`] when the switch is rejected.
    async fn switch_organization(&self, org_id: &str) -> Result<(), AuthError>;

    /// Create a new organization owned by `req.owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] on a duplicate slug or rejected name.
    async fn create_organization(
        &self,
        req: &CreateOrganization,
    ) -> Result<OrganizationSummary, AuthError>;

    /// Members of `org_id`, in provider order.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on transport failure.
    async fn list_members(&self, org_id: &str) -> Result<Vec<OrgMember>, AuthError>;

    /// Remove `user_id` from `org_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Authorization`] when the caller may not remove
    /// members, or [`AuthError::Validation`] when the member is absent.
    async fn remove_member(&self, org_id: &str, user_id: &str) -> Result<(), AuthError>;
}
