//! Theme command - show or toggle the persisted preference.

use anyhow::Result;
use clap::Args;
use medidex_store::ThemeStore;
use serde_json::json;

use crate::{Cli, OutputFormat};

/// Arguments for the theme command.
#[derive(Args)]
pub struct ThemeArgs {
    /// Flip the theme before printing it.
    #[arg(long)]
    pub toggle: bool,
}

/// Runs the theme command.
pub async fn run(args: &ThemeArgs, cli: &Cli) -> Result<()> {
    let store = ThemeStore::at_default_path();
    store.initialize().await?;

    let theme = if args.toggle {
        store.toggle().await?
    } else {
        store.theme().await
    };

    match cli.format {
        OutputFormat::Json => {
            let value = json!({
                "theme": theme.as_str(),
                "slot": store.slot_path().display().to_string(),
            });
            if cli.pretty {
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{value}");
            }
        }
        OutputFormat::Text => {
            print!("{}", render_text(theme, store.slot_path()));
        }
    }

    Ok(())
}

/// Renders the text-mode report: current theme plus the slot it persists to.
fn render_text(theme: medidex_store::Theme, slot: &std::path::Path) -> String {
    format!("{theme}\nslot: {}\n", slot.display())
}

#[cfg(test)]
mod tests {
    use super::render_text;
    use medidex_store::Theme;
    use std::path::Path;

    #[test]
    fn text_report_includes_theme_and_slot_path() {
        let out = render_text(Theme::Dark, Path::new("/home/u/.config/medidex/theme"));
        assert_eq!(out, "dark\nslot: /home/u/.config/medidex/theme\n");
    }

    #[test]
    fn text_report_starts_with_the_theme_literal() {
        let out = render_text(Theme::Light, Path::new("theme"));
        assert!(out.starts_with("light\n"));
        assert!(out.contains("slot: theme"));
    }
}
