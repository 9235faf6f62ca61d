//! # Configuration Management
//!
//! This module handles loading and saving pipeline configuration from the
//! `pedometer-config.toml` file. Every setting has a default, so a missing or
//! broken file never stops the pipeline from running.
//!
//! ```toml
//! [parser]
//! strict_shape = true
//! max_input_bytes = 1048576
//!
//! [output]
//! ascii_rows = 16
//! pretty_json = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, resolved relative to the working directory
pub const CONFIG_FILE: &str = "pedometer-config.toml";

/// Pipeline configuration loaded from pedometer-config.toml
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Parsing and validation options
    pub parser: ParserConfig,
    /// Binary output options
    pub output: OutputConfig,
}

/// Parsing and validation options
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Validate every accelerometer record's field count, not just the first.
    /// Set false to ignore extra fields in later records.
    pub strict_shape: bool,
    /// Reject blobs longer than this many bytes before tokenizing
    pub max_input_bytes: Option<usize>,
}

/// Binary output options
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Height of the ASCII chart in rows
    pub ascii_rows: usize,
    /// Pretty-print the JSON report
    pub pretty_json: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            strict_shape: true,
            max_input_bytes: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            ascii_rows: 16,
            pretty_json: true,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from pedometer-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<PipelineConfig>(&contents) {
                Ok(config) => {
                    log::info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config file format in {}: {}", path.display(), e);
                    log::warn!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save current configuration to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        log::info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }
}
