//! Craven command-line tool
//!
//! Checks connection strings and sends one-off events to a Sentry server.

use clap::{Parser, Subcommand};
use colored::Colorize;
use craven::{ClientConfig, EventOutcome, ParsedDsn, ReportingClient};
use std::time::Duration;

/// Craven: report errors to Sentry-compatible servers
#[derive(Parser)]
#[command(name = "craven")]
#[command(version)]
#[command(about = "Check Sentry DSNs and send test events")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a DSN and show its fields and store endpoint
    Check {
        /// Connection string to check
        dsn: String,
    },

    /// Send one event
    Send {
        /// Connection string (empty disables reporting)
        #[arg(long, env = "SENTRY_DSN", default_value = "")]
        dsn: String,

        /// Source file reported for the event
        #[arg(long, default_value = "craven-cli")]
        file: String,

        /// Line number reported for the event
        #[arg(long, default_value = "0")]
        line: u32,

        /// Function reported as the culprit
        #[arg(long, default_value = "main")]
        function: String,

        /// Request timeout in seconds
        #[arg(long, env = "CRAVEN_TIMEOUT_SECS", default_value = "30")]
        timeout: u64,

        /// Event message
        message: String,
    },
}

fn check(dsn: &str) -> anyhow::Result<()> {
    let parsed: ParsedDsn = match dsn.parse() {
        Ok(parsed) => parsed,
        Err(e) => anyhow::bail!("Cannot parse DSN: {} (in {})", e, dsn),
    };

    println!("{}", parsed);
    match parsed.as_dsn() {
        Some(dsn) => println!("{} {}", "Store endpoint:".green(), dsn.store_endpoint().cyan()),
        None => println!("{}", "Reporting is disabled for an empty DSN".yellow()),
    }

    Ok(())
}

fn send(
    dsn: &str,
    file: &str,
    line: u32,
    function: &str,
    timeout: u64,
    message: &str,
) -> anyhow::Result<()> {
    let config = ClientConfig::new(dsn).with_timeout(Duration::from_secs(timeout))?;
    let mut client = ReportingClient::from_config(&config)?;

    let outcome = client.event(file, line, function, message);
    client.close();

    match outcome {
        EventOutcome::Sent => println!("{}", "Event sent".green()),
        EventOutcome::Skipped => println!("{}", "Client inactive, event not sent".yellow()),
        EventOutcome::Failed => anyhow::bail!("Event could not be sent (see logs)"),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { dsn } => check(&dsn),
        Commands::Send {
            dsn,
            file,
            line,
            function,
            timeout,
            message,
        } => send(&dsn, &file, line, &function, timeout, &message),
    }
}
