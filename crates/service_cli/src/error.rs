//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `binomial` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is incomplete.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The valuation itself failed.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Result serialisation failed.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// Replication residual above tolerance.
    #[error("Replication check failed: max error {max_error:e} exceeds tolerance {tolerance:e}")]
    AuditFailed {
        /// Largest residual found
        max_error: f64,
        /// Accepted tolerance
        tolerance: f64,
    },
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
