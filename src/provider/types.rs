//! Provider-owned entity snapshots and wire DTOs.
//!
//! DESIGN
//! ======
//! These types intentionally double as the REST wire DTOs so serde
//! round-trips stay lossless and the controllers never convert between a
//! "network" and a "domain" representation of the same value. Every value is
//! an immutable point-in-time copy: the provider replaces snapshots
//! wholesale, it never patches them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Point-in-time copy of the current session as pushed by the provider.
///
/// Carries at most one active organization. Once produced a snapshot is never
/// mutated; the provider publishes a replacement on every change.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Unique user identifier (UUID string); empty when signed out.
    #[serde(default)]
    pub user_id: String,
    /// Display name.
    #[serde(default)]
    pub username: String,
    /// Primary email address.
    #[serde(default)]
    pub email: String,
    /// Avatar image URL, if available.
    pub image_url: Option<String>,
    /// The organization currently acting as the user's context, if any.
    pub active_organization: Option<OrganizationSummary>,
    /// True while the provider is still resolving the session.
    #[serde(default)]
    pub is_loading: bool,
    /// True while a provider-side write is in flight.
    #[serde(default)]
    pub is_saving: bool,
}

impl SessionSnapshot {
    /// Whether this snapshot represents an authenticated user.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.user_id.is_empty()
    }
}

/// One organization in the user's directory listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    /// Stable organization identifier (UUID string).
    pub org_id: String,
    /// Human-readable organization name.
    pub name: String,
    /// URL-safe identifier derived from the name.
    pub slug: String,
    /// Number of members, as counted by the provider.
    #[serde(default)]
    pub member_count: i64,
    /// The requesting user's role within this organization.
    pub role: OrgRole,
    /// ISO 8601 timestamp of when the user joined, if known.
    pub joined_at: Option<String>,
    /// Tenant the organization's workspace is bound to, if any.
    pub workspace_tenant_id: Option<String>,
}

/// Membership role within an organization. Closed set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgRole {
    /// Full control, including member removal and deletion.
    Owner,
    /// Administrative rights short of ownership transfer.
    Admin,
    /// Regular membership.
    #[default]
    Member,
}

impl OrgRole {
    /// Wire/display form of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

/// One member row in an organization's member list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMember {
    /// User identifier (UUID string), unique within one organization's list.
    pub user_id: String,
    /// The member's role in the organization.
    pub role: OrgRole,
}

/// User preference toggles.
///
/// Saved as a whole value: the provider overwrites all fields on every save,
/// there is no partial merge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Chat surface enabled.
    #[serde(default)]
    pub chat: bool,
    /// Notes surface enabled.
    #[serde(default)]
    pub notes: bool,
    /// Tasks surface enabled.
    #[serde(default)]
    pub tasks: bool,
    /// Feed surface enabled.
    #[serde(default)]
    pub feed: bool,
    /// Cross-organization global view enabled.
    #[serde(default)]
    pub global_view_enabled: bool,
}

/// Token material returned by a successful SSO exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBundle {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Provider session identifier.
    pub session_id: String,
    /// User the tokens were issued for (UUID string).
    pub user_id: String,
}
