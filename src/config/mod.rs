//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::chart;
use crate::core::error::{BenchPlotError, Result};

/// Default config file name searched for in the current directory
pub const CONFIG_FILE_NAME: &str = ".benchplot.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chart width in pixels
    pub chart_width: Option<u32>,

    /// Chart height in pixels
    pub chart_height: Option<u32>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chart_width: Some(chart::DEFAULT_WIDTH),
            chart_height: Some(chart::DEFAULT_HEIGHT),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, validating it before use
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BenchPlotError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            BenchPlotError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(CONFIG_FILE_NAME) {
            return config;
        }
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("chart_width", self.chart_width),
            ("chart_height", self.chart_height),
        ] {
            if let Some(pixels) = value {
                if !(chart::MIN_DIMENSION..=chart::MAX_DIMENSION).contains(&pixels) {
                    return Err(BenchPlotError::Config(format!(
                        "{name} must be between {} and {} pixels, got {pixels}",
                        chart::MIN_DIMENSION,
                        chart::MAX_DIMENSION
                    )));
                }
            }
        }
        Ok(())
    }

    /// Resolved (width, height) in pixels, falling back to the defaults
    pub fn chart_dimensions(&self) -> (u32, u32) {
        (
            self.chart_width.unwrap_or(chart::DEFAULT_WIDTH),
            self.chart_height.unwrap_or(chart::DEFAULT_HEIGHT),
        )
    }

    /// Whether verbose logging is enabled, CLI flag winning over the file
    pub fn effective_verbose(&self, cli_verbose: bool) -> bool {
        cli_verbose || self.verbose.unwrap_or(false)
    }
}
