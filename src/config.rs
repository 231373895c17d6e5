//! Configuration management for the survey instruction parser.
//!
//! Handles:
//! - Command-line argument parsing
//! - Validation limits loaded from an optional TOML file

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Command-line arguments for the survey instruction parser
#[derive(Debug, Parser)]
#[command(name = "survey-ships")]
#[command(about = "Parse and validate survey ship instruction files")]
#[command(version)]
pub struct Args {
    /// Instruction file to parse
    pub input: PathBuf,

    /// Configuration file with validation limits
    #[arg(long, help = "TOML file overriding validation limits")]
    pub config: Option<PathBuf>,

    /// Log level for the parser
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Print the parsed run as JSON
    #[arg(long)]
    pub json: bool,
}

/// Bounds applied by the record validators
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ValidationLimits {
    /// Largest value a single digit may have in a ship start record
    pub max_start_digit: u32,
    /// Longest instruction line accepted, in characters
    pub max_instruction_len: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_start_digit: 50,
            max_instruction_len: 99,
        }
    }
}

impl ValidationLimits {
    /// Parse limits from TOML content; absent keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse validation limits TOML")
    }

    /// Load limits from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// File to parse
    pub input: PathBuf,
    /// Limits handed to the validators
    pub limits: ValidationLimits,
    /// Log level
    pub log_level: String,
    /// Emit JSON instead of a text summary
    pub json: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let limits = match args.config {
            // An explicitly requested file must exist
            Some(path) => ValidationLimits::load(&path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => ValidationLimits::load(&path)?,
                _ => ValidationLimits::default(),
            },
        };

        Ok(Config {
            input: args.input,
            limits,
            log_level: args.log_level,
            json: args.json,
        })
    }
}

/// `<config_dir>/survey-ships/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("survey-ships").join("config.toml"))
}
