//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the simulator.

use crate::types::{CliArgs, OutputFormat};
use tracing::{info, Level};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting
    pub json_format: bool,
    /// Log file directory; console only when unset
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_directory: None,
            log_file_prefix: "provider-quality".to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for the command line logging flags
    ///
    /// `--debug` wins over `--verbose`; with neither only warnings are shown.
    /// `--log-dir` adds a daily rolling JSON file next to the console.
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let mut config = match (args.debug, args.verbose) {
            (true, _) => Self::new().with_level(Level::DEBUG).with_span_events(),
            (false, true) => Self::new().with_level(Level::INFO).with_span_events(),
            (false, false) => Self::new().with_level(Level::WARN),
        };

        if args.log_format == Some(OutputFormat::Json) {
            config = config.with_json_format().without_ansi();
        }
        if let Some(dir) = &args.log_dir {
            config = config.with_file_logging(dir.clone());
        }
        config
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn build_env_filter(&self) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(filter) = &self.env_filter {
            return Ok(EnvFilter::try_new(filter)?);
        }

        Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                self.level
            ))
        }))
    }

    /// Initialize the global tracing subscriber
    ///
    /// Console output always goes to stderr so reports on stdout stay clean.
    /// When file logging is enabled, the returned guard must be held until
    /// shutdown or buffered lines are lost.
    pub fn init(self) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = self.build_env_filter()?;
        let registry = Registry::default().with(env_filter);

        let console_layer = if self.json_format {
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(self.span_events())
                .boxed()
        } else {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events())
                .boxed()
        };

        let guard = if let Some(log_dir) = &self.log_directory {
            let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
            let (file_writer, guard) = non_blocking(file_appender);
            let file_layer = fmt::layer()
                .json()
                .with_writer(file_writer)
                .with_span_events(self.span_events());

            registry.with(console_layer).with(file_layer).try_init()?;
            Some(guard)
        } else {
            registry.with(console_layer).try_init()?;
            None
        };

        info!("Logging initialized with configuration: {:?}", self);
        Ok(guard)
    }
}
