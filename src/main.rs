//! Taskdeck - command-line client for a task-management service
//!
#![doc = "Taskdeck - command-line client for a task-management service"]
#![doc = "Main entry point for the taskdeck binary."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskdeck::api::TaskApi;
use taskdeck::cli::{Cli, Commands, TaskCommand};
use taskdeck::commands;
use taskdeck::config::Config;
use taskdeck::session::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    let api = TaskApi::new(&config.api)?;
    let store = SessionStore::new(&config.session)?;

    // Execute command
    match cli.command {
        Commands::Auth => {
            tracing::info!("Starting interactive auth flow");
            // A successful login moves straight on to the dashboard
            if commands::auth::run_auth(&api, &store).await? {
                commands::dashboard::run_dashboard(&api, &store).await?;
            }
            Ok(())
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            tracing::info!("Registering account for {}", email);
            commands::auth::register_once(&api, &name, &email, &password).await?;
            Ok(())
        }
        Commands::Login { email, password } => {
            tracing::info!("Logging in as {}", email);
            commands::auth::login_once(&api, &store, &email, &password).await?;
            Ok(())
        }
        Commands::Logout => {
            tracing::info!("Clearing session");
            commands::auth::logout(&store)?;
            Ok(())
        }
        Commands::Whoami => {
            commands::auth::whoami(&store)?;
            Ok(())
        }
        Commands::Dashboard => {
            tracing::info!("Starting interactive dashboard");
            commands::dashboard::run_dashboard(&api, &store).await?;
            Ok(())
        }
        Commands::Tasks { command } => match command {
            TaskCommand::List {
                status,
                search,
                json,
            } => {
                commands::tasks::list(&api, &store, status, &search, json).await?;
                Ok(())
            }
            TaskCommand::Add {
                title,
                description,
                status,
            } => {
                commands::tasks::add(&api, &store, &title, &description, &status).await?;
                Ok(())
            }
            TaskCommand::Edit {
                id,
                title,
                description,
                status,
            } => {
                commands::tasks::edit(&api, &store, id, title, description, status).await?;
                Ok(())
            }
            TaskCommand::Rm { id } => {
                commands::tasks::rm(&api, &store, id).await?;
                Ok(())
            }
        },
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskdeck=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
