//! Option contract definitions.
//!
//! # Types
//!
//! - [`OptionType`]: Call or Put, with the terminal payoff formula
//! - [`ReplicationParams`]: validated inputs for a binomial replication valuation
//! - [`ReplicationParamsBuilder`]: fluent construction of [`ReplicationParams`]
//! - [`InstrumentError`]: validation failures, convertible into `PricingError`
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionType, ReplicationParams};
//!
//! let params = ReplicationParams::builder()
//!     .spot(420.0)
//!     .strike(500.0)
//!     .shares_controlled(100.0)
//!     .up_factor(0.1)
//!     .down_factor(0.1)
//!     .periods(4)
//!     .risk_free_rate(0.05)
//!     .option_type(OptionType::Call)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.periods(), 4);
//! assert_eq!(params.up_multiplier(), 1.1);
//! ```

mod error;
mod option_type;
mod params;

pub use error::InstrumentError;
pub use option_type::OptionType;
pub use params::{ReplicationParams, ReplicationParamsBuilder};
