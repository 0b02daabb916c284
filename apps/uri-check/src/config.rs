//! Centralized configuration for uri-check.
//!
//! Environment variables are read once at startup so a typo fails fast
//! instead of silently falling back halfway through a run.

use std::env;
use std::fmt;

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Result output format on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error for {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    /// Log format (default: pretty)
    pub log_format: LogFormat,
    /// Result format (default: text); `--json` overrides it
    pub output: OutputFormat,
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format =
            LogFormat::from_str(&lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".into()));

        // Unlike LOG_FORMAT this one changes what scripts parse, so reject typos.
        let output = match lookup("URI_CHECK_OUTPUT").filter(|s| !s.is_empty()) {
            None => OutputFormat::Text,
            Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| ConfigError {
                field: "URI_CHECK_OUTPUT",
                message: format!("expected 'text' or 'json', got '{}'", raw),
            })?,
        };

        Ok(Self { log_format, output })
    }
}
