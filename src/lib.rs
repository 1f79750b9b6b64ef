//! Entity Auth client SDK.
//!
//! Headless building blocks for applications that authenticate against an
//! Entity Auth provider: typed provider contracts ([`provider`]), a REST
//! implementation of those contracts ([`net`]), and the workflow controllers
//! that UI layers drive ([`state`]).
//!
//! DESIGN
//! ======
//! The SDK never owns session truth. Providers push immutable
//! [`provider::SessionSnapshot`] values; controllers keep only view-local
//! edit buffers and display state, and forward user actions as single
//! asynchronous provider calls. Dependencies are injected explicitly through
//! constructors — there is no ambient global provider.

pub mod net;
pub mod provider;
pub mod slug;
pub mod state;

pub use provider::{
    AuthError, OrgMember, OrgRole, OrganizationDirectory, OrganizationSummary, Preferences,
    SessionProvider, SessionSnapshot, SnapshotSubscription, SsoExchange, TokenBundle,
};
pub use slug::slugify;
