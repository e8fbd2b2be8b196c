//! Folio - A static site generator for book companion sites.

mod build;
mod cli;
mod config;
mod content;
mod render;
mod transform;
mod utils;

use anyhow::{Result, bail};
use build::{build_site, check_site};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build { .. } => build_site(config),
        Commands::Check => check_site(config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
