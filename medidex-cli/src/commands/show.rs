//! Show command - detail view for one practitioner.

use anyhow::Result;
use clap::Args;
use medidex_fetch::{DirectoryGateway, FetchError, HttpClient};
use tracing::info;

use crate::commands::list::current_theme;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Practitioner identifier (case-sensitive exact match).
    pub id: String,
}

/// Runs the show command.
pub async fn run(args: &ShowArgs, cli: &Cli) -> Result<()> {
    let base_url = cli.resolved_base_url();
    info!(url = %base_url, id = %args.id, "Showing practitioner");

    let gateway = DirectoryGateway::new(HttpClient::new()?, &base_url)?;

    match gateway.fetch_doctor_by_id(&args.id).await {
        Ok(envelope) => {
            let doctor = envelope.doctor()?;
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", JsonFormatter::new(cli.pretty).format_doctor(&doctor)?);
                }
                OutputFormat::Text => {
                    let theme = current_theme().await;
                    let formatter = TextFormatter::new(!cli.no_color, theme);
                    print!("{}", formatter.format_detail(&doctor));
                }
            }
            Ok(())
        }
        Err(err) => {
            let classified = err.classify();
            if cli.format == OutputFormat::Json {
                println!("{}", JsonFormatter::new(cli.pretty).format_error(&classified)?);
            } else if !cli.quiet {
                eprintln!("{}", classified.display_message());
            }
            let code = if matches!(err, FetchError::DoctorAway) {
                ExitCode::NotFound
            } else {
                ExitCode::Error
            };
            std::process::exit(code as i32);
        }
    }
}
