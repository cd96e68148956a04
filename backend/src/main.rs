//! BMI Health Planner
//!
//! Computes a BMI, generates a health plan and stores it.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - CLI: argument parsing and output (this file)
//! - Services: BMI computation and the record workflow
//! - Repositories: PostgreSQL or in-memory storage
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use anyhow::{Context, Result};
use bmi_planner_backend::{
    config::{self, StorageBackend},
    error::AppError,
    services::HealthService,
    state::AppState,
};
use bmi_planner_shared::{EntryId, HealthEntry, HealthEntryResponse};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bmi-planner")]
#[command(about = "BMI calculator and health plan generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the configured storage backend (postgres, memory)
    #[arg(long, global = true)]
    storage: Option<StorageBackend>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute BMI and plan without storing anything
    Generate {
        /// Weight in kilograms
        #[arg(long)]
        weight: Decimal,

        /// Height in centimeters
        #[arg(long)]
        height: Decimal,
    },

    #[command(flatten)]
    Stored(StoredCommand),
}

/// Commands that open storage
#[derive(Subcommand)]
enum StoredCommand {
    /// Compute BMI and plan, store the entry and send the plan
    Record {
        /// Owner of the entry
        #[arg(long)]
        email: String,

        /// Weight in kilograms
        #[arg(long)]
        weight: Decimal,

        /// Height in centimeters
        #[arg(long)]
        height: Decimal,
    },

    /// Show a stored entry
    Show {
        /// Entry identifier
        id: EntryId,
    },

    /// Show the most recently stored entry
    Latest,

    /// Check that storage is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let mut config = config::AppConfig::load()?;
    if let Some(storage) = cli.storage {
        config.storage.backend = storage;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        storage = %config.storage.backend,
        "Starting BMI Health Planner"
    );

    match cli.command {
        Commands::Generate { weight, height } => generate(weight, height),
        Commands::Stored(command) => {
            let state = AppState::connect(config)
                .await
                .context("failed to initialize storage")?;
            run_stored(&state, command).await
        }
    }
}

/// Pure generation; storage is never opened
fn generate(weight: Decimal, height: Decimal) -> Result<ExitCode> {
    match HealthService::new().generate(weight, height) {
        Ok(result) => {
            print_json(&result)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::from(2))
        }
    }
}

async fn run_stored(state: &AppState, command: StoredCommand) -> Result<ExitCode> {
    match command {
        StoredCommand::Record {
            email,
            weight,
            height,
        } => match state.entries.record(&email, weight, height).await {
            Ok(entry) => print_entry(&entry)?,
            Err(AppError::Notification { entry, source }) => {
                // Stored anyway, so the caller still gets the entry
                print_entry(&entry)?;
                error!(code = "NOTIFICATION_ERROR", "Plan delivery failed: {}", source);
                return Ok(ExitCode::from(3));
            }
            Err(e) => {
                error!(code = e.code(), "{}", e);
                return Ok(ExitCode::from(2));
            }
        },
        StoredCommand::Show { id } => match state.entries.get(id).await? {
            Some(entry) => print_entry(&entry)?,
            None => {
                error!(id, "Health entry not found");
                return Ok(ExitCode::from(1));
            }
        },
        StoredCommand::Latest => match state.entries.latest().await? {
            Some(entry) => print_entry(&entry)?,
            None => info!("No health entries recorded yet"),
        },
        StoredCommand::Check => {
            state.health_check().await?;
            info!("Storage is healthy");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_entry(entry: &HealthEntry) -> Result<()> {
    let response = HealthEntryResponse::try_from(entry)?;
    print_json(&response)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "bmi_planner_backend=info,bmi_planner=info".into()
        } else {
            "bmi_planner_backend=debug,bmi_planner=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_needs_no_storage() {
        let cli = Cli::try_parse_from(["bmi-planner", "generate", "--weight", "70", "--height", "170"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Generate { .. }));
    }

    #[test]
    fn test_storage_commands_are_flattened() {
        let cli = Cli::try_parse_from([
            "bmi-planner",
            "record",
            "--email",
            "cli@example.com",
            "--weight",
            "70.5",
            "--height",
            "170",
            "--storage",
            "memory",
        ])
        .unwrap();

        assert_eq!(cli.storage, Some(StorageBackend::Memory));
        match cli.command {
            Commands::Stored(StoredCommand::Record { email, weight, .. }) => {
                assert_eq!(email, "cli@example.com");
                assert_eq!(weight, Decimal::new(705, 1));
            }
            _ => panic!("expected record"),
        }

        let cli = Cli::try_parse_from(["bmi-planner", "show", "42"]).unwrap();
        assert!(matches!(cli.command, Commands::Stored(StoredCommand::Show { id: 42 })));
    }

    #[tokio::test]
    async fn test_show_missing_entry_exits_with_one() {
        let mut config = config::AppConfig::default();
        config.storage.backend = StorageBackend::Memory;
        let state = AppState::connect(config).await.unwrap();

        let code = run_stored(&state, StoredCommand::Show { id: 9 }).await.unwrap();
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(1)));
    }
}
