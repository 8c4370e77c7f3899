//! Numeric helpers.
//!
//! - `rounding`: decimal rounding applied to reported valuation results

pub mod rounding;
