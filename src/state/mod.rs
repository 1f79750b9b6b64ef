//! Workflow controllers driven by UI layers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller owns plain view-local state plus explicitly injected
//! provider handles, and exposes one `async fn` per user action. State is
//! never shared between controllers; the only shared resource is the provider
//! itself. Exclusive `&mut self` receivers serialize overlapping actions on a
//! single controller, so a slow provider call can never be clobbered by a
//! stale response from an earlier one.

mod account;
mod display;
mod members;
mod org_switcher;
mod preferences;
mod sign_in;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use account::{AccountEditor, AccountEditorState};
pub use display::{SwitcherModel, SwitcherRow, SwitcherStyle, switcher_model};
pub use members::{MemberList, MemberListState};
pub use org_switcher::{OrgSwitcher, OrgSwitcherState};
pub use preferences::{PreferencePanel, PreferencePanelState};
pub use sign_in::{SignInFlow, SignInFlowState};
