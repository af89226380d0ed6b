#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod layout;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::PortfolioContent;

/// Global settings, set from command line
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Resolved launch settings shared with the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub content: PortfolioContent,
}

/// Get the launch settings stored by `main`.
pub fn get_settings() -> Option<Settings> {
    SETTINGS.get().cloned()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Folio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Single-page personal portfolio")]
struct Args {
    /// Data directory for the preferences database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Portfolio content JSON (defaults to the built-in page)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_content(path: Option<&PathBuf>) -> anyhow::Result<PortfolioContent> {
    match path {
        Some(path) => PortfolioContent::load(path)
            .with_context(|| format!("failed to load content from {}", path.display())),
        None => PortfolioContent::embedded().context("embedded content is invalid"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    folio_core::logging::init(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let content = load_content(args.content.as_ref())?;

    tracing::info!("👋 Hello! Thanks for checking out my portfolio.");
    tracing::info!(
        owner = %content.owner.name,
        projects = content.projects.len(),
        data_dir = %data_dir.display(),
        "starting portfolio"
    );

    let title = format!("{} - {}", content.owner.name, content.owner.role);

    let _ = SETTINGS.set(Settings { data_dir, content });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["folio-desktop", "-vv", "--data-dir", "/tmp/folio"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/folio")));
        assert!(args.content.is_none());
    }

    #[test]
    fn test_load_embedded_content() {
        let content = load_content(None).unwrap();
        assert!(!content.projects.is_empty());
    }

    #[test]
    fn test_load_missing_content_file() {
        let err = load_content(Some(&PathBuf::from("/nonexistent/portfolio.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to load content"));
    }
}
