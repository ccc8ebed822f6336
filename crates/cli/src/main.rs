//! Vendora CLI - Database migrations and demo data tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! vendora-cli migrate
//!
//! # Reset and seed the database with demo data
//! vendora-cli seed
//!
//! # Seed without deleting existing rows
//! vendora-cli seed --keep-existing
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the database with demo users, products and sales

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vendora-cli")]
#[command(author, version, about = "Vendora CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database with demo data
    Seed {
        /// Keep existing rows instead of deleting them first
        #[arg(long)]
        keep_existing: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { keep_existing } => commands::seed::run(keep_existing).await?,
    }
    Ok(())
}
