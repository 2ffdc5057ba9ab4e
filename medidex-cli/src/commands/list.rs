//! List command - fetch and render the practitioner directory.

use anyhow::Result;
use clap::Args;
use medidex_fetch::{DirectoryGateway, HttpClient};
use medidex_store::{DirectoryLoader, LoadState, Theme, ThemeStore};
use tracing::{info, warn};

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Arguments for the list command.
#[derive(Args, Default)]
pub struct ListArgs {
    /// Retry a failed load up to this many times before giving up.
    #[arg(long, default_value_t = 0)]
    pub retries: u32,
}

/// Runs the list command.
pub async fn run(args: &ListArgs, cli: &Cli) -> Result<()> {
    let base_url = cli.resolved_base_url();
    info!(url = %base_url, "Listing directory");

    let gateway = DirectoryGateway::new(HttpClient::new()?, &base_url)?;
    let loader = DirectoryLoader::new(gateway);

    let mut state = loader.load().await;
    let mut attempts = 0;
    while state.error().is_some() && attempts < args.retries {
        attempts += 1;
        warn!(attempt = attempts, "Load failed, retrying");
        state = loader.retry().await;
    }

    match state {
        LoadState::Loaded(doctors) => {
            match cli.format {
                OutputFormat::Json => {
                    let formatter = JsonFormatter::new(cli.pretty);
                    println!("{}", formatter.format_doctors(&doctors)?);
                }
                OutputFormat::Text => {
                    let theme = current_theme().await;
                    let formatter = TextFormatter::new(!cli.no_color, theme);
                    print!("{}", formatter.format_directory(&doctors));
                }
            }
            Ok(())
        }
        LoadState::Failed(err) => {
            let message = err.display_message();
            if cli.format == OutputFormat::Json {
                println!("{}", JsonFormatter::new(cli.pretty).format_error(&err)?);
            } else if !cli.quiet {
                eprintln!("{message}");
            }
            let code = if err.status == Some(404) {
                ExitCode::NotFound
            } else {
                ExitCode::Error
            };
            std::process::exit(code as i32);
        }
        // load() always settles to Loaded or Failed.
        other => anyhow::bail!("loader settled in unexpected state: {other:?}"),
    }
}

/// Initializes the theme store and returns the active theme, falling back
/// to light if the preference slot is unusable.
pub(crate) async fn current_theme() -> Theme {
    let store = ThemeStore::at_default_path();
    match store.initialize().await {
        Ok(theme) => theme,
        Err(e) => {
            warn!(error = %e, "Failed to initialize theme, using light");
            Theme::Light
        }
    }
}
