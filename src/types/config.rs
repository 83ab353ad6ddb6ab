//! Configuration structures for the award quality simulator
//!
//! This module contains the command line arguments, the optional JSON
//! configuration file, and the merged simulation configuration with its
//! validation logic.

use super::OutputFormat;
use crate::award::AwardSeed;
use chrono::{Days, NaiveDate, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Awards seeded when no configuration supplies a list
pub fn default_award_seeds() -> Vec<AwardSeed> {
    vec![
        AwardSeed::new("ACME Partner Facility", 5, 7),
        AwardSeed::new("Blue Compare", 15, 20),
        AwardSeed::new("Blue Distinction Plus", 0, 80),
        AwardSeed::new("Blue First", 2, 0),
        AwardSeed::new("Gov Quality Plus", 10, 20),
        AwardSeed::new("Top Connected Providers", 3, 6),
    ]
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "provider-quality",
    version = "0.1.0",
    about = "Provider Quality - Advances award quality scores one simulated day at a time",
    long_about = "Builds a catalog of provider-quality awards and applies each award's daily quality rule for the requested number of days, reporting every day's state.

EXAMPLES:
    # Run one day over the built-in catalog
    provider-quality

    # Use a configuration file with a custom award list
    provider-quality --config awards.json

    # Simulate two weeks and emit JSON
    provider-quality --days 14 --output-format json

    # Generate configuration template
    provider-quality --print-config > awards.json

    # Validate configuration without running
    provider-quality --config awards.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of days to simulate
    #[arg(
        long,
        help = "Number of days to simulate",
        long_help = "Number of daily quality updates to apply. Must be greater than 0. Default: 1"
    )]
    pub days: Option<usize>,

    /// Calendar date of the first simulated day
    #[arg(
        long,
        help = "Date of the first simulated day (YYYY-MM-DD)",
        long_help = "Calendar date used to label the first simulated day in reports. Default: today (UTC)"
    )]
    pub start_date: Option<NaiveDate>,

    /// Output format for daily reports
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for daily reports. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Console log format
    #[arg(
        long,
        help = "Console log format (text or json)",
        long_help = "Format of log lines written to stderr. Supported formats: text, json. Default: text"
    )]
    pub log_format: Option<OutputFormat>,

    /// Directory for rolling log files
    #[arg(long, help = "Write JSON logs to daily rolling files in this directory")]
    pub log_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration and awards without simulating
    #[arg(long, help = "Validate configuration and awards without running the simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of days to simulate
    pub days: Option<usize>,

    /// Calendar date of the first simulated day
    pub start_date: Option<NaiveDate>,

    /// Output format for daily reports
    pub output_format: Option<String>,

    /// Awards to build, in report order
    pub awards: Option<Vec<AwardSeed>>,
}

/// Configuration for an award quality simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of days to simulate
    pub days: usize,

    /// Calendar date of the first simulated day (today when unset)
    pub start_date: Option<NaiveDate>,

    /// Output format for daily reports
    pub output_format: String,

    /// Awards to build, in report order
    pub awards: Vec<AwardSeed>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Days count is invalid
    #[error("Days count must be greater than 0, got {0}")]
    InvalidDaysCount(usize),

    /// No awards to simulate
    #[error("Award list must not be empty")]
    EmptyAwardList,

    /// Output format is not recognised
    #[error("Invalid output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),

    /// The last simulated day falls past the last supported date
    #[error("Simulating {days} days from {start_date} runs past the last supported date")]
    DateOutOfRange {
        /// First simulated day
        start_date: NaiveDate,
        /// Requested number of days
        days: usize,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 1,
            start_date: None,
            output_format: "text".to_string(),
            awards: default_award_seeds(),
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            days: config_file.days.unwrap_or(defaults.days),
            start_date: config_file.start_date.or(defaults.start_date),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            awards: config_file.awards.unwrap_or(defaults.awards),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.days {
            config.days = value;
        }
        if let Some(value) = args.start_date {
            config.start_date = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    ///
    /// Award seeds are checked later, when the factory builds them.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.days == 0 {
            return Err(ConfigValidationError::InvalidDaysCount(self.days));
        }

        if self.awards.is_empty() {
            return Err(ConfigValidationError::EmptyAwardList);
        }

        self.get_output_format()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))?;

        let start_date = self.effective_start_date();
        if start_date.checked_add_days(Days::new(self.days as u64)).is_none() {
            return Err(ConfigValidationError::DateOutOfRange { start_date, days: self.days });
        }

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// The first simulated day, defaulting to today
    pub fn effective_start_date(&self) -> NaiveDate {
        self.start_date.unwrap_or_else(|| Utc::now().date_naive())
    }
}
