//! Vitrina - shopping-feed generator for product catalogs.

mod catalog;
mod cli;
mod config;
mod generator;
mod logger;
mod storage;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::FeedConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = FeedConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::run(&config),
        Commands::Sync { .. } => cli::sync::run(&config),
        Commands::Check { .. } => cli::check::run(&config),
    }
}
