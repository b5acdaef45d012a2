//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Vitrina shopping-feed generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: vitrina.toml)
    #[arg(short = 'C', long, default_value = "vitrina.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build both feeds from a local catalog file
    #[command(visible_alias = "b")]
    Build {
        /// Catalog JSON file (overrides `[build] catalog`)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        catalog: Option<PathBuf>,

        /// Output directory for generated feeds (overrides `[build] output`)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Fetch the catalog from object storage and publish both feeds back
    #[command(visible_alias = "s")]
    Sync {
        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Parse the catalog and report products and synthesized categories
    #[command(visible_alias = "c")]
    Check {
        /// Catalog JSON file (overrides `[build] catalog`)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        catalog: Option<PathBuf>,
    },
}
