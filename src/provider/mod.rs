//! The external Entity Auth provider contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything under this module is a boundary: session lifecycle, token
//! exchange, and organization membership live in the provider service, not in
//! this SDK. The traits here are the fixed surface the workflow controllers
//! in [`crate::state`] are written against, and the types are immutable
//! snapshots of provider-owned entities.

mod directory;
mod error;
mod session;
mod snapshots;
mod sso;
mod types;

pub use directory::{CreateOrganization, OrganizationDirectory};
pub use error::AuthError;
pub use session::SessionProvider;
pub use snapshots::{SnapshotPublisher, SnapshotSubscription};
pub use sso::{SsoExchange, SsoProviderKind, SsoSignIn};
pub use types::{
    OrgMember, OrgRole, OrganizationSummary, Preferences, SessionSnapshot, TokenBundle,
};
