//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Activation threshold must be in [0, 1), got {0}")]
    InvalidActivationThreshold(f64),

    #[error("Minimum recommendation score must be in [0, 100), got {0}")]
    InvalidMinimumScore(f64),

    #[error("{0} must be greater than zero")]
    ZeroLimit(&'static str),

    #[error("min_short_term_tasks exceeds max_short_term_tasks")]
    InvalidShortTermBounds,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
