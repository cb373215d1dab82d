//! Zenbook - studio session booking CLI
//!
#![doc = "Zenbook - studio session booking CLI"]
#![doc = "Main entry point for the Zenbook client application."]

use std::sync::Arc;

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use zenbook::api::{ApiClient, AuthApi, SessionApi, SessionDraft, TeacherApi, UserApi};
use zenbook::cli::{AccountCommand, Cli, Commands, SessionCommand, TeacherCommand};
use zenbook::commands;
use zenbook::config::Config;
use zenbook::credentials::CredentialStore;
use zenbook::identity::IdentityStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Restore a persisted login, if any, so every handler sees the same
    // identity state the previous invocation left behind.
    let identity = Arc::new(IdentityStore::new());
    let credentials = CredentialStore;
    match credentials.load() {
        Ok(Some(stored)) => identity.log_in(stored),
        Ok(None) => {}
        Err(e) => tracing::warn!("Could not read stored credentials: {}", e),
    }

    let client = ApiClient::new(&config.api, Arc::clone(&identity))?;
    let auth = AuthApi::new(client.clone());
    let sessions = SessionApi::new(client.clone());
    let teachers = TeacherApi::new(client.clone());
    let users = UserApi::new(client);

    // Execute command
    match cli.command {
        Commands::Login { email, password } => {
            tracing::info!("Starting login for {}", email);
            commands::auth::run_login(&auth, &identity, &credentials, email, password).await
        }
        Commands::Logout => commands::auth::run_logout(&identity, &credentials),
        Commands::Register {
            email,
            first_name,
            last_name,
            password,
        } => {
            tracing::info!("Registering account for {}", email);
            commands::auth::run_register(&auth, email, first_name, last_name, password).await
        }
        Commands::Whoami => commands::auth::run_whoami(&identity),
        Commands::Session { command } => match command {
            SessionCommand::List => commands::session::run_list(&sessions).await,
            SessionCommand::Show { id } => {
                commands::session::run_show(&sessions, &teachers, &identity, id).await
            }
            SessionCommand::Create {
                name,
                date,
                teacher_id,
                description,
            } => {
                let draft = SessionDraft {
                    name,
                    date,
                    teacher_id,
                    description,
                };
                commands::session::run_create(&sessions, &identity, draft).await
            }
            SessionCommand::Update {
                id,
                name,
                date,
                teacher_id,
                description,
            } => {
                let draft = SessionDraft {
                    name,
                    date,
                    teacher_id,
                    description,
                };
                commands::session::run_update(&sessions, &identity, id, draft).await
            }
            SessionCommand::Delete { id } => {
                commands::session::run_delete(&sessions, &identity, id).await
            }
            SessionCommand::Join { id, user } => {
                commands::session::run_join(&sessions, &identity, id, user).await
            }
            SessionCommand::Leave { id, user } => {
                commands::session::run_leave(&sessions, &identity, id, user).await
            }
        },
        Commands::Teacher { command } => match command {
            TeacherCommand::List => commands::teacher::run_list(&teachers).await,
            TeacherCommand::Show { id } => commands::teacher::run_show(&teachers, id).await,
        },
        Commands::Account { command } => match command {
            AccountCommand::Show => commands::account::run_show(&users, &identity).await,
            AccountCommand::Delete => {
                commands::account::run_delete(&users, &identity, &credentials).await
            }
        },
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zenbook=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
