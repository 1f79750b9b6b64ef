//! Presentation models for the organization switcher.
//!
//! DESIGN
//! ======
//! One rendering strategy, selected by an explicit style parameter, instead
//! of per-platform view variants. The builder is pure: it reads switcher
//! state and produces plain display data; actual rendering stays outside the
//! SDK.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use super::org_switcher::OrgSwitcherState;
use crate::provider::OrganizationSummary;

/// Which switcher surface is being rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitcherStyle {
    /// Compact trigger showing only the active organization.
    Button,
    /// Full list with one row per organization.
    List,
    /// Anchored list with a create affordance, opened from the button.
    Popover,
}

/// One selectable row in a switcher list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitcherRow {
    /// Organization this row selects.
    pub org_id: String,
    /// Primary label (organization name).
    pub label: String,
    /// Secondary label: member count and role.
    pub detail: String,
    /// Whether this row is the displayed active organization.
    pub is_active: bool,
}

/// Display model for one switcher surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitcherModel {
    /// Headline: active organization name, or a placeholder when none.
    pub headline: String,
    /// Selectable rows; empty for the button style.
    pub rows: Vec<SwitcherRow>,
    /// Whether a create-organization affordance is shown.
    pub shows_create: bool,
    /// Error line to display, if the last action failed.
    pub error: Option<String>,
}

/// Placeholder headline shown before any organization is active.
const NO_ACTIVE_PLACEHOLDER: &str = "Select organization";

/// Build the display model for `style` from the switcher's current state.
#[must_use]
pub fn switcher_model(state: &OrgSwitcherState, style: SwitcherStyle) -> SwitcherModel {
    let headline = state
        .active_organization()
        .map_or_else(|| NO_ACTIVE_PLACEHOLDER.to_owned(), |o| o.name.clone());

    let rows = match style {
        SwitcherStyle::Button => Vec::new(),
        SwitcherStyle::List | SwitcherStyle::Popover => state
            .organizations
            .iter()
            .map(|o| row_for(o, state.active_org_id.as_deref()))
            .collect(),
    };

    SwitcherModel {
        headline,
        rows,
        shows_create: !matches!(style, SwitcherStyle::Button),
        error: state.error.clone(),
    }
}

fn row_for(org: &OrganizationSummary, active_id: Option<&str>) -> SwitcherRow {
    let members = if org.member_count == 1 {
        "1 member".to_owned()
    } else {
        format!("{} members", org.member_count)
    };
    SwitcherRow {
        org_id: org.org_id.clone(),
        label: org.name.clone(),
        detail: format!("{members} · {}", org.role.as_str()),
        is_active: active_id == Some(org.org_id.as_str()),
    }
}
