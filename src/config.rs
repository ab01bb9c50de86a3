//! Configuration parser
//!
//! Parses `mybusiness.toml` into output and logging settings. Every table
//! and key is optional; missing values fall back to defaults.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mybusiness.toml";

/// How resolutions are written to stdout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<input> -> <label>` lines
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Line format (default: plain)
    #[serde(default)]
    pub format: OutputFormat,
    /// Colour plain output (default: true)
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

/// JSONL history settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Append resolutions to the JSONL log (default: false)
    #[serde(default)]
    pub enabled: bool,
    /// Directory holding `log.jsonl` (default: `.mybusiness`)
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(".mybusiness")
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_log_dir(),
        }
    }
}

/// Top-level configuration parsed from mybusiness.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Parse a config file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse a config file if it exists, otherwise return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse mybusiness.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.log.enabled && self.log.dir.as_os_str().is_empty() {
            bail!("Log directory cannot be empty when logging is enabled");
        }
        Ok(())
    }
}
