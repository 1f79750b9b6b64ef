use super::*;

fn org(id: &str, slug: &str) -> OrganizationSummary {
    OrganizationSummary {
        org_id: id.into(),
        name: slug.to_uppercase(),
        slug: slug.into(),
        member_count: 3,
        role: OrgRole::Member,
        joined_at: Some("2026-01-15T09:30:00Z".into()),
        workspace_tenant_id: Some("tenant-1".into()),
    }
}

// =============================================================================
// SessionSnapshot
// =============================================================================

#[test]
fn snapshot_default_is_signed_out() {
    let snap = SessionSnapshot::default();
    assert!(!snap.is_signed_in());
    assert!(snap.active_organization.is_none());
}

#[test]
fn snapshot_with_user_id_is_signed_in() {
    let snap = SessionSnapshot { user_id: "u1".into(), ..SessionSnapshot::default() };
    assert!(snap.is_signed_in());
}

#[test]
fn snapshot_deserializes_with_missing_flags() {
    let snap: SessionSnapshot = serde_json::from_str(
        r#"{"user_id":"u1","username":"alice","email":"a@example.com","image_url":null,"active_organization":null}"#,
    )
    .unwrap();
    assert_eq!(snap.username, "alice");
    assert!(!snap.is_loading);
    assert!(!snap.is_saving);
}

#[test]
fn snapshot_carries_at_most_one_active_organization() {
    let snap = SessionSnapshot {
        user_id: "u1".into(),
        active_organization: Some(org("o1", "acme")),
        ..SessionSnapshot::default()
    };
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["active_organization"]["org_id"], "o1");
}

// =============================================================================
// OrgRole
// =============================================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&OrgRole::Owner).unwrap(), "\"owner\"");
    assert_eq!(serde_json::to_string(&OrgRole::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&OrgRole::Member).unwrap(), "\"member\"");
}

#[test]
fn role_deserializes_from_wire_form() {
    let role: OrgRole = serde_json::from_str("\"owner\"").unwrap();
    assert_eq!(role, OrgRole::Owner);
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<OrgRole>("\"superuser\"").is_err());
}

#[test]
fn role_as_str_matches_wire_form() {
    for role in [OrgRole::Owner, OrgRole::Admin, OrgRole::Member] {
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, format!("\"{}\"", role.as_str()));
    }
}

// =============================================================================
// OrganizationSummary
// =============================================================================

#[test]
fn organization_deserializes_with_missing_member_count() {
    let parsed: OrganizationSummary = serde_json::from_str(
        r#"{"org_id":"o1","name":"Acme","slug":"acme","role":"admin","joined_at":null,"workspace_tenant_id":null}"#,
    )
    .unwrap();
    assert_eq!(parsed.member_count, 0);
    assert_eq!(parsed.role, OrgRole::Admin);
}

// =============================================================================
// Preferences
// =============================================================================

#[test]
fn preferences_default_all_disabled() {
    let prefs = Preferences::default();
    assert!(!prefs.chat && !prefs.notes && !prefs.tasks && !prefs.feed);
    assert!(!prefs.global_view_enabled);
}

#[test]
fn preferences_deserialize_fills_missing_fields() {
    let prefs: Preferences = serde_json::from_str(r#"{"chat":true}"#).unwrap();
    assert!(prefs.chat);
    assert!(!prefs.global_view_enabled);
}

// =============================================================================
// TokenBundle
// =============================================================================

#[test]
fn token_bundle_round_trip() {
    let bundle = TokenBundle {
        access_token: "at".into(),
        refresh_token: "rt".into(),
        session_id: "s1".into(),
        user_id: "u1".into(),
    };
    let json = serde_json::to_string(&bundle).unwrap();
    let restored: TokenBundle = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, bundle);
}
