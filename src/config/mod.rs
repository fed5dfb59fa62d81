//! # Configuration Management Module
//!
//! Centralized, serde-backed configuration for a Treasure Hunter session with
//! validation and defaults.
//!
//! ## Configuration Structure
//!
//! - [`RulesConfig`] - Economy and difficulty numbers behind each game mode
//! - [`SessionConfig`] - Per-run settings such as a fixed RNG seed
//! - [`DisplayConfig`] - Terminal color handling
//! - [`LoggingConfig`] - Log level and log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use treasure_hunter::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration from file, falling back to defaults when absent
//!     let config = Config::load_or_default("treasure-hunter.toml")?;
//!     println!("Starting gold: {}", config.rules.starting_gold);
//!
//!     // Write a default configuration file
//!     Config::create_default("treasure-hunter.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [rules]
//! starting_gold = 20
//! easy_starting_gold = 40
//! markdown = 0.5
//! hard_markdown = 0.25
//!
//! [session]
//! seed = 42
//!
//! [display]
//! color = "auto"
//!
//! [logging]
//! level = "info"
//! file = "treasure-hunter.log"
//! ```
//!
//! Every section is optional; missing values take the defaults shown by
//! `treasure-hunter init`. CLI flags take precedence over the file.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Numbers that differ between game modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub starting_gold: u32,
    pub easy_starting_gold: u32,
    /// Gold handed out by the stocked `test` mode.
    pub test_starting_gold: u32,
    pub kit_capacity: usize,
    /// Samurai mode gets a spare slot for the sword.
    pub samurai_kit_capacity: usize,
    /// Fraction of the catalog price the shop pays when buying back.
    pub markdown: f64,
    pub hard_markdown: f64,
    /// Probability that a freshly built town is a tough one.
    pub toughness: f64,
    pub hard_toughness: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_gold: 20,
            easy_starting_gold: 40,
            test_starting_gold: 100,
            kit_capacity: 7,
            samurai_kit_capacity: 8,
            markdown: 0.50,
            hard_markdown: 0.25,
            toughness: 0.4,
            hard_toughness: 0.75,
        }
    }
}

impl RulesConfig {
    /// Reject values that would break game invariants.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("markdown", self.markdown),
            ("hard_markdown", self.hard_markdown),
            ("toughness", self.toughness),
            ("hard_toughness", self.hard_toughness),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(anyhow!("rules.{} must be between 0 and 1, got {}", name, value));
            }
        }
        if self.kit_capacity == 0 || self.samurai_kit_capacity == 0 {
            return Err(anyhow!("kit capacities must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fixed RNG seed; a fresh entropy seed is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => atty::is(atty::Stream::Stdout),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; an empty string logs to stderr instead.
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> Option<String> {
    Some("treasure-hunter.log".to_string())
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config
            .rules
            .validate()
            .map_err(|e| anyhow!("Invalid config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load the file when it exists, otherwise use defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
