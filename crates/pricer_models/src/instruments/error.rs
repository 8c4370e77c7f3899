//! Instrument error types.
//!
//! This module provides structured error handling for validation of
//! replication parameters and option type parsing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `OutOfDomain`: a numeric parameter violates its domain constraint
/// - `NegativePeriods`: the period count is below zero
/// - `MissingParameter`: the builder was not given a required field
/// - `UnknownOptionType`: an option type string could not be parsed
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::NegativePeriods { periods: -2 };
/// assert!(format!("{}", err).contains("-2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Numeric parameter outside its domain.
    #[error("Invalid {name}: {value} (must be {constraint})")]
    OutOfDomain {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Domain constraint, e.g. "> 0"
        constraint: &'static str,
    },

    /// Negative number of periods.
    #[error("Invalid periods: {periods} (must be >= 0)")]
    NegativePeriods {
        /// The rejected period count
        periods: i64,
    },

    /// Required parameter not supplied.
    #[error("Missing parameter: {name}")]
    MissingParameter {
        /// Parameter name
        name: &'static str,
    },

    /// Option type string not recognised.
    #[error("Unknown option type: {0} (expected call or put)")]
    UnknownOptionType(String),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::OutOfDomain {
                name,
                value,
                constraint,
            } => PricingError::InvalidParameter {
                name,
                value,
                constraint,
            },
            InstrumentError::NegativePeriods { periods } => PricingError::InvalidParameter {
                name: "periods",
                value: periods as f64,
                constraint: ">= 0",
            },
            InstrumentError::MissingParameter { name } => PricingError::InvalidParameter {
                name,
                value: f64::NAN,
                constraint: "set",
            },
            InstrumentError::UnknownOptionType(_) => PricingError::InvalidParameter {
                name: "option_type",
                value: f64::NAN,
                constraint: "call or put",
            },
        }
    }
}
