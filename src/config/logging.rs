//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::error::ValidationError;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `roi_advisor=debug`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_filter")]
    pub filter: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        match std::env::var("RUST_LOG") {
            Ok(directive) if !directive.is_empty() => EnvFilter::try_new(&directive)
                .map_err(|_| ValidationError::InvalidLogFilter(directive)),
            _ => EnvFilter::try_new(&self.filter).map_err(|_| ValidationError::InvalidLogFilter(self.filter.clone())),
        }
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.filter)
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidLogFilter(self.filter.clone()))
    }

    /// Install the global tracing subscriber
    ///
    /// Returns `Ok(false)` if a subscriber was already installed.
    pub fn init_tracing(&self) -> Result<bool, ValidationError> {
        let filter = self.env_filter()?;
        let registry = tracing_subscriber::registry().with(filter);
        let installed = match self.format {
            LogFormat::Plain => registry
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .try_init(),
            LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        };
        Ok(installed.is_ok())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}
