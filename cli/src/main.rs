use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use entity_auth::net::{ProviderConfig, RestProvider};
use entity_auth::provider::{Preferences, SessionProvider, SsoProviderKind};
use entity_auth::slug::slugify;
use entity_auth::state::{
    AccountEditor, MemberList, OrgSwitcher, PreferencePanel, SignInFlow, SwitcherStyle,
    switcher_model,
};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing base URL; pass --base-url or set ENTITY_AUTH_BASE_URL")]
    MissingBaseUrl,
    #[error("{0}")]
    Action(String),
    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Provider(#[from] entity_auth::provider::AuthError),
}

#[derive(Parser, Debug)]
#[command(name = "entity-auth-cli", about = "Entity Auth provider CLI")]
struct Cli {
    #[arg(long, env = "ENTITY_AUTH_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "ENTITY_AUTH_ACCESS_TOKEN")]
    access_token: Option<String>,

    #[arg(long, env = "ENTITY_AUTH_TENANT_ID")]
    tenant_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current session snapshot.
    Session,
    /// Watch the snapshot stream, polling the provider for changes.
    Watch {
        #[arg(long, default_value_t = 5)]
        interval_secs: u64,
    },
    /// Run the SSO sign-in exchange and install the tokens.
    SignIn {
        #[arg(long, value_enum)]
        provider: SsoKind,
        #[arg(long)]
        return_to: Option<String>,
    },
    /// End the current session.
    SignOut,
    /// Organization operations.
    Org(OrgCommand),
    /// Account profile fields.
    User(UserCommand),
    /// Preference toggles.
    Prefs(PrefsCommand),
    /// Derive the slug for an organization name.
    Slug { name: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SsoKind {
    Google,
    Github,
    Apple,
}

impl From<SsoKind> for SsoProviderKind {
    fn from(kind: SsoKind) -> Self {
        match kind {
            SsoKind::Google => Self::Google,
            SsoKind::Github => Self::Github,
            SsoKind::Apple => Self::Apple,
        }
    }
}

#[derive(Args, Debug)]
struct OrgCommand {
    #[command(subcommand)]
    command: OrgSubcommand,
}

#[derive(Subcommand, Debug)]
enum OrgSubcommand {
    /// List organizations, marking the active one.
    List,
    /// Switch the active organization.
    Switch { org_id: String },
    /// Create an organization and switch to it.
    Create { name: String },
    /// List an organization's members.
    Members { org_id: String },
    /// Remove a member from an organization.
    RemoveMember { org_id: String, user_id: String },
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    /// Change the display name.
    SetName { name: String },
    /// Change the email address.
    SetEmail { email: String },
}

#[derive(Args, Debug)]
struct PrefsCommand {
    #[command(subcommand)]
    command: PrefsSubcommand,
}

#[derive(Subcommand, Debug)]
enum PrefsSubcommand {
    /// Show current preference toggles.
    Show,
    /// Overwrite the preference toggles as a whole value.
    Set {
        #[arg(long, default_value_t = false)]
        chat: bool,
        #[arg(long, default_value_t = false)]
        notes: bool,
        #[arg(long, default_value_t = false)]
        tasks: bool,
        #[arg(long, default_value_t = false)]
        feed: bool,
        #[arg(long, default_value_t = false)]
        global_view: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let provider = Arc::new(build_provider(&cli)?);

    match cli.command {
        Command::Session => run_session(&provider).await,
        Command::Watch { interval_secs } => run_watch(&provider, interval_secs).await,
        Command::SignIn { provider: kind, return_to } => {
            run_sign_in(&provider, kind.into(), return_to).await
        }
        Command::SignOut => run_sign_out(&provider).await,
        Command::Org(org) => run_org(&provider, org).await,
        Command::User(user) => run_user(&provider, user).await,
        Command::Prefs(prefs) => run_prefs(&provider, prefs).await,
        Command::Slug { name } => {
            println!("{}", slugify(&name));
            Ok(())
        }
    }
}

fn build_provider(cli: &Cli) -> Result<RestProvider, CliError> {
    let mut config = match (&cli.base_url, ProviderConfig::from_env()) {
        (Some(base_url), _) => ProviderConfig::new(base_url),
        (None, Some(config)) => config,
        (None, None) => return Err(CliError::MissingBaseUrl),
    };
    if cli.access_token.is_some() {
        config.access_token = cli.access_token.clone();
    }
    if cli.tenant_id.is_some() {
        config.workspace_tenant_id = cli.tenant_id.clone();
    }
    Ok(RestProvider::new(config))
}

async fn run_session(provider: &Arc<RestProvider>) -> Result<(), CliError> {
    let snapshot = provider.refresh_snapshot().await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

async fn run_watch(provider: &Arc<RestProvider>, interval_secs: u64) -> Result<(), CliError> {
    let mut subscription = provider.snapshot_stream();

    let poller = provider.clone();
    tokio::spawn(async move {
        loop {
            if let Err(e) = poller.refresh_snapshot().await {
                tracing::warn!(error = %e, "snapshot poll failed");
            }
            tokio::time::sleep(Duration::from_secs(interval_secs)).await;
        }
    });

    while let Some(snapshot) = subscription.next().await {
        println!("{}", serde_json::to_string(&snapshot)?);
    }
    Ok(())
}

async fn run_sign_in(
    provider: &Arc<RestProvider>,
    kind: SsoProviderKind,
    return_to: Option<String>,
) -> Result<(), CliError> {
    let mut flow = SignInFlow::new(provider.clone(), provider.clone());
    flow.sign_in(kind, return_to).await;
    if let Some(error) = flow.state.error {
        return Err(CliError::Action(error));
    }
    println!("signed in as {}", provider.current_snapshot().username);
    Ok(())
}

async fn run_sign_out(provider: &Arc<RestProvider>) -> Result<(), CliError> {
    let mut flow = SignInFlow::new(provider.clone(), provider.clone());
    flow.sign_out().await;
    if let Some(error) = flow.state.error {
        return Err(CliError::Action(error));
    }
    println!("signed out");
    Ok(())
}

async fn run_org(provider: &Arc<RestProvider>, org: OrgCommand) -> Result<(), CliError> {
    let mut switcher = OrgSwitcher::new(provider.clone(), provider.clone());
    match org.command {
        OrgSubcommand::List => {
            switcher.load().await;
            fail_on_error(switcher.state.error.take())?;
            let model = switcher_model(&switcher.state, SwitcherStyle::List);
            for row in model.rows {
                let marker = if row.is_active { "*" } else { " " };
                println!("{marker} {}  {} ({})", row.org_id, row.label, row.detail);
            }
            Ok(())
        }
        OrgSubcommand::Switch { org_id } => {
            switcher.switch_to(&org_id).await;
            fail_on_error(switcher.state.error.take())?;
            println!("active organization: {org_id}");
            Ok(())
        }
        OrgSubcommand::Create { name } => {
            provider.refresh_snapshot().await?;
            switcher.state.new_org_name = name;
            switcher.create_org().await;
            fail_on_error(switcher.state.error.take())?;
            match switcher.state.active_org_id {
                Some(org_id) => println!("created; active organization: {org_id}"),
                None => println!("created"),
            }
            Ok(())
        }
        OrgSubcommand::Members { org_id } => {
            let mut members = MemberList::new(provider.clone());
            members.load(&org_id).await;
            fail_on_error(members.state.error.take())?;
            for member in members.state.members {
                println!("{}  {}", member.user_id, member.role.as_str());
            }
            Ok(())
        }
        OrgSubcommand::RemoveMember { org_id, user_id } => {
            let mut members = MemberList::new(provider.clone());
            members.load(&org_id).await;
            fail_on_error(members.state.error.take())?;
            members.remove(&user_id).await;
            fail_on_error(members.state.error.take())?;
            println!("removed {user_id} from {org_id}");
            Ok(())
        }
    }
}

async fn run_user(provider: &Arc<RestProvider>, user: UserCommand) -> Result<(), CliError> {
    provider.refresh_snapshot().await?;
    let mut editor = AccountEditor::new(provider.clone());
    editor.apply_snapshot(&provider.current_snapshot());

    match user.command {
        UserSubcommand::SetName { name } => {
            editor.state.name = name.clone();
            editor.save_name().await;
            if editor.state.name == name {
                println!("display name: {name}");
                Ok(())
            } else {
                Err(CliError::Action("name save failed; reverted".to_owned()))
            }
        }
        UserSubcommand::SetEmail { email } => {
            editor.state.email = email.clone();
            editor.save_email().await;
            if editor.state.email == email {
                println!("email: {email}");
                Ok(())
            } else {
                Err(CliError::Action("email save failed; reverted".to_owned()))
            }
        }
    }
}

async fn run_prefs(provider: &Arc<RestProvider>, prefs: PrefsCommand) -> Result<(), CliError> {
    let mut panel = PreferencePanel::new(provider.clone());
    match prefs.command {
        PrefsSubcommand::Show => {
            panel.load().await;
            fail_on_error(panel.state.error.take())?;
            println!("{}", serde_json::to_string_pretty(&panel.state.prefs)?);
            Ok(())
        }
        PrefsSubcommand::Set { chat, notes, tasks, feed, global_view } => {
            panel.state.prefs =
                Preferences { chat, notes, tasks, feed, global_view_enabled: global_view };
            panel.save().await;
            fail_on_error(panel.state.error.take())?;
            println!("preferences saved");
            Ok(())
        }
    }
}

fn fail_on_error(error: Option<String>) -> Result<(), CliError> {
    match error {
        Some(message) => Err(CliError::Action(message)),
        None => Ok(()),
    }
}
