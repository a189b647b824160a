//! Munadi - Forum-to-Discord Webhook Notifier
//!
//! Operator tooling for the notification plugin: validate a configuration
//! and push a test notification through the real delivery path.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "munadi")]
#[command(author = "Munadi Team")]
#[command(version = munadi_core::VERSION)]
#[command(about = "Forum-to-Discord webhook notifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "munadi.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MUNADI_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the plugin configuration
    Check,

    /// Deliver a test notification to the configured webhook
    SendTest,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    let config = config::CliConfig::from_file(&cli.config)?;

    match cli.command {
        Commands::Check => commands::check::execute(&config),
        Commands::SendTest => commands::send_test::execute(&config).await,
    }
}
