//! Scripted provider mocks shared by controller tests.
//!
//! Each mock consumes a queue of scripted results in call order and falls
//! back to a benign default when the queue runs dry, so tests only script
//! the calls they care about. Every call is appended to a log for
//! call-sequence assertions.

use std::sync::Mutex;

use crate::provider::{
    AuthError, CreateOrganization, OrgMember, OrgRole, OrganizationDirectory,
    OrganizationSummary, Preferences, SessionProvider, SessionSnapshot, SnapshotPublisher,
    SnapshotSubscription, SsoExchange, SsoSignIn, TokenBundle,
};

pub fn org(id: &str, name: &str, slug: &str) -> OrganizationSummary {
    OrganizationSummary {
        org_id: id.into(),
        name: name.into(),
        slug: slug.into(),
        member_count: 1,
        role: OrgRole::Owner,
        joined_at: None,
        workspace_tenant_id: None,
    }
}

pub fn snapshot(user_id: &str, username: &str, email: &str) -> SessionSnapshot {
    SessionSnapshot {
        user_id: user_id.into(),
        username: username.into(),
        email: email.into(),
        ..SessionSnapshot::default()
    }
}

pub fn transport() -> AuthError {
    AuthError::Transport("connection refused".into())
}

// =============================================================================
// MockDirectory
// =============================================================================

#[derive(Default)]
pub struct MockDirectory {
    pub organizations: Mutex<Vec<Result<Vec<OrganizationSummary>, AuthError>>>,
    pub active: Mutex<Vec<Result<Option<OrganizationSummary>, AuthError>>>,
    pub switches: Mutex<Vec<Result<(), AuthError>>>,
    pub creates: Mutex<Vec<Result<OrganizationSummary, AuthError>>>,
    pub member_lists: Mutex<Vec<Result<Vec<OrgMember>, AuthError>>>,
    pub removals: Mutex<Vec<Result<(), AuthError>>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait::async_trait]
impl OrganizationDirectory for MockDirectory {
    async fn organizations(&self) -> Result<Vec<OrganizationSummary>, AuthError> {
        self.record("organizations");
        let mut scripted = self.organizations.lock().unwrap();
        if scripted.is_empty() { Ok(Vec::new()) } else { scripted.remove(0) }
    }

    async fn active_organization(&self) -> Result<Option<OrganizationSummary>, AuthError> {
        self.record("active_organization");
        let mut scripted = self.active.lock().unwrap();
        if scripted.is_empty() { Ok(None) } else { scripted.remove(0) }
    }

    async fn switch_organization(&self, org_id: &str) -> Result<(), AuthError> {
        self.record(format!("switch:{org_id}"));
        let mut scripted = self.switches.lock().unwrap();
        if scripted.is_empty() { Ok(()) } else { scripted.remove(0) }
    }

    async fn create_organization(
        &self,
        req: &CreateOrganization,
    ) -> Result<OrganizationSummary, AuthError> {
        self.record(format!("create:{}:{}", req.slug, req.owner_id));
        let mut scripted = self.creates.lock().unwrap();
        if scripted.is_empty() {
            Ok(org("created", &req.name, &req.slug))
        } else {
            scripted.remove(0)
        }
    }

    async fn list_members(&self, org_id: &str) -> Result<Vec<OrgMember>, AuthError> {
        self.record(format!("list_members:{org_id}"));
        let mut scripted = self.member_lists.lock().unwrap();
        if scripted.is_empty() { Ok(Vec::new()) } else { scripted.remove(0) }
    }

    async fn remove_member(&self, org_id: &str, user_id: &str) -> Result<(), AuthError> {
        self.record(format!("remove:{org_id}/{user_id}"));
        let mut scripted = self.removals.lock().unwrap();
        if scripted.is_empty() { Ok(()) } else { scripted.remove(0) }
    }
}

// =============================================================================
// MockSession
// =============================================================================

pub struct MockSession {
    pub publisher: SnapshotPublisher,
    pub tenant: Option<String>,
    pub apply_tokens_results: Mutex<Vec<Result<(), AuthError>>>,
    pub sign_out_results: Mutex<Vec<Result<(), AuthError>>>,
    pub set_username_results: Mutex<Vec<Result<(), AuthError>>>,
    pub set_email_results: Mutex<Vec<Result<(), AuthError>>>,
    pub preferences_results: Mutex<Vec<Result<Preferences, AuthError>>>,
    pub set_preferences_results: Mutex<Vec<Result<(), AuthError>>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockSession {
    pub fn new(initial: SessionSnapshot) -> Self {
        Self {
            publisher: SnapshotPublisher::new(initial),
            tenant: Some("tenant-1".into()),
            apply_tokens_results: Mutex::new(Vec::new()),
            sign_out_results: Mutex::new(Vec::new()),
            set_username_results: Mutex::new(Vec::new()),
            set_email_results: Mutex::new(Vec::new()),
            preferences_results: Mutex::new(Vec::new()),
            set_preferences_results: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn without_tenant(initial: SessionSnapshot) -> Self {
        let mut session = Self::new(initial);
        session.tenant = None;
        session
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn next(queue: &Mutex<Vec<Result<(), AuthError>>>) -> Result<(), AuthError> {
        let mut scripted = queue.lock().unwrap();
        if scripted.is_empty() { Ok(()) } else { scripted.remove(0) }
    }
}

#[async_trait::async_trait]
impl SessionProvider for MockSession {
    fn current_snapshot(&self) -> SessionSnapshot {
        self.publisher.current()
    }

    fn snapshot_stream(&self) -> SnapshotSubscription {
        self.publisher.subscribe()
    }

    async fn apply_tokens(&self, tokens: &TokenBundle) -> Result<(), AuthError> {
        self.record(format!("apply_tokens:{}", tokens.session_id));
        Self::next(&self.apply_tokens_results)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.record("sign_out");
        Self::next(&self.sign_out_results)
    }

    async fn set_username(&self, new_name: &str) -> Result<(), AuthError> {
        self.record(format!("set_username:{new_name}"));
        Self::next(&self.set_username_results)
    }

    async fn set_email(&self, new_email: &str) -> Result<(), AuthError> {
        self.record(format!("set_email:{new_email}"));
        Self::next(&self.set_email_results)
    }

    async fn preferences(&self) -> Result<Preferences, AuthError> {
        self.record("preferences");
        let mut scripted = self.preferences_results.lock().unwrap();
        if scripted.is_empty() { Ok(Preferences::default()) } else { scripted.remove(0) }
    }

    async fn set_preferences(&self, prefs: &Preferences) -> Result<(), AuthError> {
        self.record(format!("set_preferences:global_view={}", prefs.global_view_enabled));
        Self::next(&self.set_preferences_results)
    }

    fn workspace_tenant_id(&self) -> Option<String> {
        self.tenant.clone()
    }

    fn base_url(&self) -> String {
        "http://127.0.0.1:3000".into()
    }
}

// =============================================================================
// MockSso
// =============================================================================

#[derive(Default)]
pub struct MockSso {
    pub sign_ins: Mutex<Vec<Result<TokenBundle, AuthError>>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockSso {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SsoExchange for MockSso {
    async fn sign_in(&self, req: &SsoSignIn) -> Result<TokenBundle, AuthError> {
        self.calls.lock().unwrap().push(format!(
            "sign_in:{}:{}",
            req.provider.as_str(),
            req.workspace_tenant_id
        ));
        let mut scripted = self.sign_ins.lock().unwrap();
        if scripted.is_empty() {
            Ok(TokenBundle {
                access_token: "at".into(),
                refresh_token: "rt".into(),
                session_id: "s1".into(),
                user_id: "u1".into(),
            })
        } else {
            scripted.remove(0)
        }
    }
}
