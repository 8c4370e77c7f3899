//! Binomial CLI - European Option Valuation by Portfolio Replication
//!
//! Command-line wrapper around the lattice replication engine.
//!
//! # Commands
//!
//! - `binomial price` - Price the option and print the root replicating portfolio
//! - `binomial tree` - Dump every lattice node after resolution
//! - `binomial check` - Validate the configuration and audit the replication
//!
//! # Configuration
//!
//! Inputs come from flags, `BINOMIAL_*` environment variables, or a TOML
//! file passed with `--config`, in that order of precedence.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pricer_models::instruments::OptionType;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{CliArgs, LogLevel};

/// Binomial replication option pricer
#[derive(Parser)]
#[command(name = "binomial")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "BINOMIAL_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "BINOMIAL_LOG_LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

/// Valuation inputs; any left unset must come from the config file.
#[derive(Args, Debug, Clone, Default)]
struct ValuationArgs {
    /// Spot price of the underlying (> 0)
    #[arg(long, env = "BINOMIAL_SPOT", allow_negative_numbers = true)]
    spot: Option<f64>,

    /// Strike price (> 0)
    #[arg(long, env = "BINOMIAL_STRIKE", allow_negative_numbers = true)]
    strike: Option<f64>,

    /// Number of shares the option controls (> 0)
    #[arg(long, env = "BINOMIAL_SHARES", allow_negative_numbers = true)]
    shares: Option<f64>,

    /// Fractional price increase per up move (> -1)
    #[arg(long, env = "BINOMIAL_UP", allow_negative_numbers = true)]
    up: Option<f64>,

    /// Fractional price decrease per down move (in (-1, 1])
    #[arg(long, env = "BINOMIAL_DOWN", allow_negative_numbers = true)]
    down: Option<f64>,

    /// Number of periods to expiry (>= 0)
    #[arg(long, env = "BINOMIAL_PERIODS", allow_negative_numbers = true)]
    periods: Option<i64>,

    /// Risk-free rate per period (> -1)
    #[arg(long, env = "BINOMIAL_RATE", allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Option type (call or put)
    #[arg(short = 't', long, env = "BINOMIAL_OPTION_TYPE")]
    option_type: Option<OptionType>,
}

/// Output format for the price command
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the option and report the root replicating portfolio
    Price {
        #[command(flatten)]
        valuation: ValuationArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Also verify the replication equations at every node
        #[arg(long)]
        audit: bool,
    },

    /// Print every lattice node with its price, value and portfolio
    Tree {
        #[command(flatten)]
        valuation: ValuationArgs,
    },

    /// Validate configuration and audit the replication
    Check {
        #[command(flatten)]
        valuation: ValuationArgs,
    },
}

impl Commands {
    fn valuation_args(&self) -> &ValuationArgs {
        match self {
            Commands::Price { valuation, .. }
            | Commands::Tree { valuation }
            | Commands::Check { valuation } => valuation,
        }
    }
}

fn cli_args(cli: &Cli) -> CliArgs {
    let valuation = cli.command.valuation_args();
    CliArgs {
        config_file: cli.config.clone(),
        spot: valuation.spot,
        strike: valuation.strike,
        shares_controlled: valuation.shares,
        up_factor: valuation.up,
        down_factor: valuation.down,
        periods: valuation.periods,
        risk_free_rate: valuation.rate,
        option_type: valuation.option_type,
        log_level: cli.log_level,
    }
}

fn init_tracing(level: LogLevel) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.directive()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::build_config(&cli_args(&cli))?;
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level()
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price { format, audit, .. } => commands::price::run(&config, format, audit),
        Commands::Tree { .. } => commands::tree::run(&config),
        Commands::Check { .. } => commands::check::run(&config),
    }
}
