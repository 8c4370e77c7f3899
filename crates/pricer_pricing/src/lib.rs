//! # Pricer Pricing (Layer 3: Lattice Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing values European options on a binomial lattice by
//! equivalent-portfolio replication:
//! - [`lattice`]: arena-backed, non-recombining binary price tree
//! - [`replication`]: terminal payoffs, backward induction, audit, and the
//!   end-to-end [`replication::value_option`] driver
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `PricingError`, result rounding
//! - Layer 2 (pricer_models): `OptionType`, `ReplicationParams`
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{OptionType, ReplicationParams};
//! use pricer_pricing::replication::value_option;
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
//! let result = value_option(&params).unwrap().rounded();
//! assert_eq!(result.option_price, 3099.73);
//! assert_eq!(result.hedge_shares, 49.8586);
//! assert_eq!(result.risk_free_amount, -17840.8649);
//! ```
//!
//! ## Known Constraints
//!
//! - **Exponential size**: `n` periods allocate `2^(n+1) - 1` nodes; more than
//!   [`lattice::MAX_PERIODS`] is rejected
//! - **European exercise only**: no early-exercise check during induction

#![warn(missing_docs)]

pub mod lattice;
pub mod replication;
