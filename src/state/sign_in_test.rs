use std::sync::Arc;

use super::*;
use crate::provider::TokenBundle;
use crate::state::test_helpers::{MockSession, MockSso, snapshot};

fn flow_with(session: MockSession, sso: MockSso) -> (SignInFlow, Arc<MockSession>, Arc<MockSso>) {
    let session = Arc::new(session);
    let sso = Arc::new(sso);
    (SignInFlow::new(session.clone(), sso.clone()), session, sso)
}

// =============================================================================
// sign_in
// =============================================================================

#[tokio::test]
async fn sign_in_exchanges_then_applies_tokens() {
    let (mut flow, session, sso) =
        flow_with(MockSession::new(snapshot("", "", "")), MockSso::new());
    flow.sign_in(SsoProviderKind::Google, Some("/dashboard".into())).await;

    assert_eq!(sso.calls(), vec!["sign_in:google:tenant-1"]);
    assert_eq!(session.calls(), vec!["apply_tokens:s1"]);
    assert!(flow.state.error.is_none());
    assert!(!flow.state.in_flight);
}

#[tokio::test]
async fn sign_in_without_tenant_is_config_error_and_skips_exchange() {
    let (mut flow, session, sso) =
        flow_with(MockSession::without_tenant(snapshot("", "", "")), MockSso::new());
    flow.sign_in(SsoProviderKind::Github, None).await;

    assert!(sso.calls().is_empty(), "exchange never attempted");
    assert!(session.calls().is_empty());
    assert!(flow.state.error.as_deref().unwrap().contains("configuration error"));
}

#[tokio::test]
async fn sign_in_cancellation_surfaces_message() {
    let sso = MockSso::new();
    sso.sign_ins.lock().unwrap().push(Err(crate::provider::AuthError::Cancelled));
    let (mut flow, session, _) = flow_with(MockSession::new(snapshot("", "", "")), sso);
    flow.sign_in(SsoProviderKind::Apple, None).await;

    assert_eq!(flow.state.error.as_deref(), Some("sign-in cancelled"));
    assert!(session.calls().is_empty(), "no tokens to apply");
}

#[tokio::test]
async fn sign_in_token_rejection_surfaces_message() {
    let session = MockSession::new(snapshot("", "", ""));
    session
        .apply_tokens_results
        .lock()
        .unwrap()
        .push(Err(crate::provider::AuthError::Authentication("invalid tokens".into())));
    let (mut flow, _, sso) = flow_with(session, MockSso::new());
    flow.sign_in(SsoProviderKind::Google, None).await;

    assert_eq!(sso.calls().len(), 1, "exchange ran; apply failed afterwards");
    assert!(flow.state.error.as_deref().unwrap().contains("authentication failed"));
}

#[tokio::test]
async fn sign_in_guarded_while_in_flight() {
    let (mut flow, _, sso) = flow_with(MockSession::new(snapshot("", "", "")), MockSso::new());
    flow.state.in_flight = true;
    flow.sign_in(SsoProviderKind::Google, None).await;
    assert!(sso.calls().is_empty());
}

#[tokio::test]
async fn sign_in_passes_scripted_tokens_through() {
    let sso = MockSso::new();
    sso.sign_ins.lock().unwrap().push(Ok(TokenBundle {
        access_token: "at2".into(),
        refresh_token: "rt2".into(),
        session_id: "s2".into(),
        user_id: "u2".into(),
    }));
    let (mut flow, session, _) = flow_with(MockSession::new(snapshot("", "", "")), sso);
    flow.sign_in(SsoProviderKind::Github, None).await;
    assert_eq!(session.calls(), vec!["apply_tokens:s2"]);
}

// =============================================================================
// sign_out
// =============================================================================

#[tokio::test]
async fn sign_out_forwards_and_clears_error() {
    let (mut flow, session, _) = flow_with(MockSession::new(snapshot("u1", "alice", "a@example.com")), MockSso::new());
    flow.state.error = Some("stale".into());
    flow.sign_out().await;

    assert_eq!(session.calls(), vec!["sign_out"]);
    assert!(flow.state.error.is_none());
}

#[tokio::test]
async fn sign_out_failure_surfaces_error() {
    let session = MockSession::new(snapshot("u1", "alice", "a@example.com"));
    session
        .sign_out_results
        .lock()
        .unwrap()
        .push(Err(crate::provider::AuthError::Transport("offline".into())));
    let (mut flow, _, _) = flow_with(session, MockSso::new());
    flow.sign_out().await;
    assert!(flow.state.error.as_deref().unwrap().contains("transport failure"));
}
