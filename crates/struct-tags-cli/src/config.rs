//! Front end configuration parsed from environment variables.
//!
//! Settings are read from variables prefixed with `STRUCT_TAGS_` and may be
//! overridden by command line flags.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "STRUCT_TAGS_LOG_LEVEL";

/// How much the front end reports on stderr.
///
/// The default, `Warn`, keeps stderr quiet on successful runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Each segment, name and option as the parser splits it.
    Trace,
    /// Inputs that held no annotations and the loaded configuration.
    Debug,
    /// Counts of inputs read and tags produced.
    Info,
    /// Nothing beyond recoverable problems.
    #[default]
    Warn,
    /// Only failures that end the command.
    Error,
}

const LEVEL_NAMES: [(&str, LogLevel); 6] = [
    ("trace", LogLevel::Trace),
    ("debug", LogLevel::Debug),
    ("info", LogLevel::Info),
    ("warn", LogLevel::Warn),
    ("warning", LogLevel::Warn),
    ("error", LogLevel::Error),
];

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LEVEL_NAMES
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|&(_, level)| level)
            .ok_or_else(|| {
                CliError::InvalidConfig(format!(
                    "`{s}` is not a log level; use trace, debug, info, warn or error"
                ))
            })
    }
}

impl LogLevel {
    /// The `EnvFilter` directive selecting this level.
    #[must_use]
    pub const fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for the command line front end.
///
/// # Environment Variables
///
/// - `STRUCT_TAGS_LOG_LEVEL`: Sets the log level (trace, debug, info, warn,
///   error)
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration using `var` to resolve environment variables.
    ///
    /// Missing variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable contains an invalid
    /// value.
    pub fn from_lookup<F>(var: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = var(LOG_LEVEL_VAR)
            .map(|val| val.parse::<LogLevel>())
            .transpose()?
            .unwrap_or_default();
        Ok(Self { log_level })
    }

    /// Apply optional command line overrides, which take precedence over
    /// environment-based values.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
