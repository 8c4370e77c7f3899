//! Valuation result.

use std::fmt;

use pricer_core::math::rounding::{round_position, round_price};
use pricer_models::instruments::OptionType;

/// Root-node outputs of a replication valuation.
///
/// Values are carried at full precision; [`rounded`](Self::rounded) applies
/// the reporting precision (2 decimals for the price, 4 for positions).
/// `Display` prints the rounded figures.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReplicationResult {
    /// Call or put.
    pub option_type: OptionType,
    /// No-arbitrage option value at the root.
    pub option_price: f64,
    /// Shares of the underlying in the root replicating portfolio.
    pub hedge_shares: f64,
    /// Cash invested risk-free in the root replicating portfolio.
    pub risk_free_amount: f64,
    /// Number of periods to expiry.
    pub periods: usize,
    /// Number of lattice nodes evaluated.
    pub node_count: usize,
}

impl ReplicationResult {
    /// Returns a copy rounded to reporting precision.
    pub fn rounded(&self) -> Self {
        Self {
            option_price: round_price(self.option_price),
            hedge_shares: round_position(self.hedge_shares),
            risk_free_amount: round_position(self.risk_free_amount),
            ..*self
        }
    }
}

impl fmt::Display for ReplicationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        writeln!(
            f,
            "{} price: ${:.2}",
            self.option_type.label(),
            rounded.option_price
        )?;
        writeln!(
            f,
            "Number of Shares in Equivalent Portfolio: {:.4}",
            rounded.hedge_shares
        )?;
        write!(
            f,
            "Amount invested in risk-free asset: {:.4}",
            rounded.risk_free_amount
        )
    }
}
