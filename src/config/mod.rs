//! Configuration management for `vitrina.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[shop]`    | Storefront identity baked into the feeds        |
//! | `[build]`   | Local catalog file and output paths             |
//! | `[storage]` | Object storage endpoint, bucket and object keys |
//!
//! All fields have defaults reproducing the production setup, so the config
//! file is optional. Unknown keys are reported but do not abort the run.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{BuildConfig, ShopConfig, StorageConfig};

use crate::{
    cli::{Cli, Commands},
    log, logger,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing vitrina.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Storefront identity
    #[serde(default)]
    pub shop: ShopConfig,

    /// Local build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Object storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl FeedConfig {
    /// Load configuration from CLI arguments.
    ///
    /// A missing config file is not an error: every field has a default,
    /// and the project root falls back to the current directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = if cli.config.is_absolute() {
            cli.config.clone()
        } else {
            env::current_dir()?.join(&cli.config)
        };

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.apply_command_options(cli);

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            let display_path = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            log!("warning"; "unknown fields in {}, ignoring:", display_path);
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Apply per-command CLI overrides.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build {
                catalog,
                output,
                verbose,
            } => {
                logger::set_verbose(*verbose);
                if let Some(catalog) = catalog {
                    self.build.catalog = catalog.clone();
                }
                if let Some(output) = output {
                    self.build.output = output.clone();
                }
            }
            Commands::Sync { verbose } => logger::set_verbose(*verbose),
            Commands::Check { catalog } => {
                if let Some(catalog) = catalog {
                    self.build.catalog = catalog.clone();
                }
            }
        }
    }

    /// Resolve a path relative to the project root (absolute paths pass through).
    pub fn root_join(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Resolved catalog file path.
    pub fn catalog_path(&self) -> PathBuf {
        self.root_join(&self.build.catalog)
    }

    /// Resolved output path of the Google feed.
    pub fn google_output(&self) -> PathBuf {
        self.root_join(&self.build.output).join(&self.build.google)
    }

    /// Resolved output path of the Yandex feed.
    pub fn yandex_output(&self) -> PathBuf {
        self.root_join(&self.build.output).join(&self.build.yandex)
    }
}

/// Parse a config from a TOML snippet, panicking on error (tests only).
#[cfg(test)]
pub(crate) fn test_config(content: &str) -> FeedConfig {
    FeedConfig::from_str(content).expect("config should parse")
}
