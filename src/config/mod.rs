//! Configuration system for hclquill.
//!
//! This module provides the configuration structure for hclquill with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and overridden by command-line
//! arguments.
//!
//! # Example
//!
//! ```
//! use hclquill::config::Config;
//! use hclquill::output::OutputFormat;
//!
//! let config = Config::default();
//! assert_eq!(config.format, OutputFormat::Json);
//! assert_eq!(config.log_level, "warn");
//!
//! let custom = Config {
//!     format: OutputFormat::Raw,
//!     ..Config::default()
//! };
//! assert_eq!(custom.format, OutputFormat::Raw);
//! ```

use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the hclquill command.
///
/// # Fields
///
/// * `format` - Output format used when `--format` is not given (default: json)
/// * `log_level` - Log filter used when `RUST_LOG` is not set (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Default log filter, in `env_logger` syntax
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/hclquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("hclquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("ignoring invalid config file {}: {}", path.display(), err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
