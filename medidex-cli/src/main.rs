// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Medidex CLI - practitioner directory from the command line.
//!
//! # Examples
//!
//! ```bash
//! # List the directory as cards
//! medidex list
//!
//! # Detail view for one practitioner
//! medidex show 42
//!
//! # JSON output
//! medidex list --format json --pretty
//!
//! # Retry a failing load a couple of times
//! medidex list --retries 2
//!
//! # Show or flip the persisted theme
//! medidex theme
//! medidex theme --toggle
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{list, show, theme};

// ============================================================================
// CLI Definition
// ============================================================================

/// Default directory endpoint when neither the flag nor the environment
/// variable is set.
const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Environment variable consulted for the directory endpoint.
const BASE_URL_ENV: &str = "MEDIDEX_API_URL";

/// Medidex CLI - practitioner directory client.
#[derive(Parser)]
#[command(name = "medidex")]
#[command(about = "Practitioner directory client")]
#[command(long_about = r#"
Medidex lists medical practitioners from a directory endpoint and renders
them as cards, with a detail view per practitioner and a persisted
light/dark theme.

Examples:
  medidex list                   # Directory as cards
  medidex show 42                # One practitioner
  medidex list --format json     # JSON output
  medidex theme --toggle         # Flip the persisted theme
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'list' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory endpoint URL. Falls back to $MEDIDEX_API_URL, then the
    /// default.
    #[arg(long, short = 'b', global = true)]
    pub base_url: Option<String>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Resolves the directory endpoint: flag, then environment, then
    /// default.
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the practitioner directory (default if no command specified).
    #[command(visible_alias = "l")]
    List(list::ListArgs),

    /// Show a single practitioner by id.
    #[command(visible_alias = "s")]
    Show(show::ShowArgs),

    /// Show or toggle the persisted theme.
    #[command(visible_alias = "t")]
    Theme(theme::ThemeArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable cards with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Directory or practitioner not found.
    NotFound = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("medidex=debug,info")
    } else {
        EnvFilter::new("medidex=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::List(args)) => list::run(args, &cli).await,
        Some(Commands::Show(args)) => show::run(args, &cli).await,
        Some(Commands::Theme(args)) => theme::run(args, &cli).await,
        None => {
            // Default to list command
            list::run(&list::ListArgs::default(), &cli).await
        }
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {}", e);
        }
        std::process::exit(ExitCode::Error as i32);
    }

    Ok(())
}
