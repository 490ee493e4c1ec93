//! Waypost - navigation and footer data generator for static blogs.

mod check;
mod cli;
mod config;
mod emit;
mod logger;
mod navigation;
mod permalink;

use anyhow::Result;
use check::check_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use emit::emit_nav;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Emit { output, compact } => emit_nav(&config, output.as_deref(), *compact),
        Commands::Check => check_site(&config),
    }
}

/// Load configuration from CLI arguments.
///
/// A missing config file is not an error: the defaults describe the
/// complete navigation, so a bare `waypost emit` works out of the box.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if config_path.exists() {
        SiteConfig::from_path(&config_path)
    } else {
        log!("config"; "{} not found, using defaults", config_path.display());
        Ok(SiteConfig::default())
    }
}
