//! Keyholder CLI - Database migrations and administrator management.
//!
//! # Usage
//!
//! ```bash
//! # Run admin database migrations
//! keyholder-cli migrate
//!
//! # Manage administrators
//! keyholder-cli administrators list
//! keyholder-cli administrators add -e admin@example.com
//! keyholder-cli administrators remove -i 67e55044-10b1-426f-9247-bb680e5fe0c8
//!
//! # Check the database answers
//! keyholder-cli healthcheck
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "keyholder-cli")]
#[command(author, version, about = "Keyholder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run admin database migrations
    Migrate,
    /// Manage administrators
    Administrators {
        #[command(subcommand)]
        action: AdministratorsAction,
    },
    /// Verify the admin database answers `SELECT 1`
    Healthcheck,
}

#[derive(Subcommand)]
enum AdministratorsAction {
    /// List all administrators (id and email, tab separated)
    List,
    /// Invite a single administrator
    Add {
        /// Administrator email address
        #[arg(short, long)]
        email: String,
    },
    /// Remove an administrator (succeeds if the id is unknown)
    Remove {
        /// Administrator id
        #[arg(short, long)]
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::admin().await?,
        Commands::Administrators { action } => match action {
            AdministratorsAction::List => commands::administrators::list().await?,
            AdministratorsAction::Add { email } => commands::administrators::add(&email).await?,
            AdministratorsAction::Remove { id } => commands::administrators::remove(&id).await?,
        },
        Commands::Healthcheck => commands::administrators::healthcheck().await?,
    }
    Ok(())
}
