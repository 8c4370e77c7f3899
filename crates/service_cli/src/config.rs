//! Valuation configuration management
//!
//! Resolves the eight valuation inputs and the log level from a TOML file,
//! environment variables, and command-line flags.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_models::instruments::{OptionType, ReplicationParams};
use serde::Deserialize;
use thiserror::Error;

use crate::error::{CliError, Result};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Verbosity of the diagnostic log on stderr.
///
/// A plain run stays at `warn`, so stdout carries only the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every replicated node.
    Trace,
    /// Lattice size, payoff and induction summaries.
    Debug,
    /// Valuation start and completion.
    Info,
    /// Oversized lattices only.
    #[default]
    Warn,
    /// Nothing but failures.
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    /// Case-insensitive; `warning` is accepted for `warn`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => return Err(ConfigError::InvalidLogLevel(s.to_string())),
        };
        Ok(level)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directive())
    }
}

/// Valuation configuration as read from a file.
///
/// Every field is optional here; [`ValuationConfig::resolve_params`] enforces
/// that all eight valuation inputs end up set by some source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValuationConfig {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub shares_controlled: Option<f64>,
    pub up_factor: Option<f64>,
    pub down_factor: Option<f64>,
    pub periods: Option<i64>,
    pub risk_free_rate: Option<f64>,
    #[serde(deserialize_with = "deserialize_option_type")]
    pub option_type: Option<OptionType>,
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: Option<LogLevel>,
}

fn deserialize_option_type<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<OptionType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OptionType::from_str(&s).map(Some).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<LogLevel>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map(Some).map_err(serde::de::Error::custom)
}

impl ValuationConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if cli.spot.is_some() {
            self.spot = cli.spot;
        }
        if cli.strike.is_some() {
            self.strike = cli.strike;
        }
        if cli.shares_controlled.is_some() {
            self.shares_controlled = cli.shares_controlled;
        }
        if cli.up_factor.is_some() {
            self.up_factor = cli.up_factor;
        }
        if cli.down_factor.is_some() {
            self.down_factor = cli.down_factor;
        }
        if cli.periods.is_some() {
            self.periods = cli.periods;
        }
        if cli.risk_free_rate.is_some() {
            self.risk_free_rate = cli.risk_free_rate;
        }
        if cli.option_type.is_some() {
            self.option_type = cli.option_type;
        }
        if cli.log_level.is_some() {
            self.log_level = cli.log_level;
        }
    }

    /// Effective log level, defaulting to `warn`
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    /// Build validated valuation parameters
    ///
    /// Unset inputs are configuration errors; out-of-domain inputs are
    /// reported as `PricingError::InvalidParameter`.
    pub fn resolve_params(&self) -> Result<ReplicationParams> {
        let params = ReplicationParams::builder()
            .spot(require("spot", self.spot)?)
            .strike(require("strike", self.strike)?)
            .shares_controlled(require("shares_controlled", self.shares_controlled)?)
            .up_factor(require("up_factor", self.up_factor)?)
            .down_factor(require("down_factor", self.down_factor)?)
            .periods(require("periods", self.periods)?)
            .risk_free_rate(require("risk_free_rate", self.risk_free_rate)?)
            .option_type(require("option_type", self.option_type)?)
            .build()
            .map_err(|e| CliError::Pricing(e.into()))?;
        Ok(params)
    }
}

fn require<T>(name: &'static str, value: Option<T>) -> std::result::Result<T, ConfigError> {
    value.ok_or(ConfigError::MissingParameter(name))
}

/// CLI arguments structure
///
/// Flags already carry their `BINOMIAL_*` environment fallback, so a value
/// here came from either the command line or the environment.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub shares_controlled: Option<f64>,
    pub up_factor: Option<f64>,
    pub down_factor: Option<f64>,
    pub periods: Option<i64>,
    pub risk_free_rate: Option<f64>,
    pub option_type: Option<OptionType>,
    /// Log level override
    pub log_level: Option<LogLevel>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
pub fn build_config(cli: &CliArgs) -> std::result::Result<ValuationConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => ValuationConfig::from_file(path)?,
        None => ValuationConfig::default(),
    };

    config.merge_with_cli(cli);

    Ok(config)
}
