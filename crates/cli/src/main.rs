//! Storekeeper CLI - Database migrations.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending migrations
//! sk-cli migrate
//!
//! # Show which migrations have been applied
//! sk-cli migrate --status
//!
//! # Use a specific database
//! sk-cli --database-url sqlite://records.db migrate
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sk-cli")]
#[command(author, version, about = "Storekeeper CLI tools")]
struct Cli {
    /// Database URL (defaults to the server's configuration)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        /// List migrations and whether they are applied, without applying any
        #[arg(long)]
        status: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate { status } => {
            let database_url = commands::migrate::resolve_database_url(cli.database_url)?;
            if status {
                commands::migrate::status(&database_url).await?;
            } else {
                commands::migrate::run(&database_url).await?;
            }
        }
    }
    Ok(())
}
