//! Backward induction by one-period replication.
//!
//! At an internal node with up child `u` and down child `d`, the portfolio
//!
//! ```text
//! Δ = (V_u - V_d) / (S_u - S_d)
//! B = (V_d - S_d Δ) / (1 + r)
//! V = Δ S + B
//! ```
//!
//! pays exactly `V_u` in the up state and `V_d` in the down state, so its
//! cost `V` is the node's no-arbitrage option value.

use pricer_core::types::PricingError;
use pricer_models::instruments::ReplicationParams;
use tracing::{debug, trace};

use crate::lattice::Lattice;

/// Position in the underlying and the risk-free asset held at one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReplicatingPortfolio {
    /// Shares of the underlying (the hedge ratio).
    pub hedge_shares: f64,
    /// Cash invested at the risk-free rate.
    pub risk_free_amount: f64,
}

impl ReplicatingPortfolio {
    /// Solves for the portfolio matching both one-period outcomes.
    ///
    /// # Arguments
    /// * `up` - `(price, option value)` in the up state
    /// * `down` - `(price, option value)` in the down state
    /// * `growth_factor` - `1 + r` for one period
    /// * `price` - current underlying price, reported on failure
    ///
    /// # Errors
    /// Returns `DegenerateLattice` if both states share a price.
    pub fn solve(
        up: (f64, f64),
        down: (f64, f64),
        growth_factor: f64,
        price: f64,
    ) -> Result<Self, PricingError> {
        let (up_price, up_value) = up;
        let (down_price, down_value) = down;
        let spread = up_price - down_price;
        if spread == 0.0 {
            return Err(PricingError::DegenerateLattice {
                price,
                child_price: up_price,
            });
        }

        let hedge_shares = (up_value - down_value) / spread;
        let risk_free_amount = (down_value - down_price * hedge_shares) / growth_factor;
        Ok(Self {
            hedge_shares,
            risk_free_amount,
        })
    }

    /// Current cost of the portfolio at underlying price `price`.
    #[inline]
    pub fn cost(&self, price: f64) -> f64 {
        self.hedge_shares * price + self.risk_free_amount
    }

    /// Portfolio value one period later if the underlying ends at `price`.
    #[inline]
    pub fn value_next(&self, price: f64, growth_factor: f64) -> f64 {
        self.hedge_shares * price + self.risk_free_amount * growth_factor
    }
}

/// Resolves every internal node of a lattice whose leaves carry payoffs.
///
/// A single post-order pass visits each node after both of its children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReplicationEngine {
    growth_factor: f64,
}

impl ReplicationEngine {
    /// Creates an engine for a per-period risk-free rate.
    ///
    /// # Errors
    /// Returns `InvalidParameter` unless `risk_free_rate` is finite and
    /// greater than -1.
    pub fn new(risk_free_rate: f64) -> Result<Self, PricingError> {
        if !(risk_free_rate.is_finite() && risk_free_rate > -1.0) {
            return Err(PricingError::InvalidParameter {
                name: "risk_free_rate",
                value: risk_free_rate,
                constraint: "> -1",
            });
        }
        Ok(Self {
            growth_factor: 1.0 + risk_free_rate,
        })
    }

    /// Creates an engine from validated valuation parameters.
    pub fn from_params(params: &ReplicationParams) -> Self {
        Self {
            growth_factor: params.growth_factor(),
        }
    }

    /// Resolves option value, hedge shares and risk-free amount at every
    /// internal node, root included.
    ///
    /// # Errors
    ///
    /// - `DegenerateLattice` if some node's children share a price
    /// - `UnresolvedNode` if a leaf was not evaluated beforehand
    pub fn resolve(&self, lattice: &mut Lattice) -> Result<(), PricingError> {
        let growth_factor = self.growth_factor;
        let mut resolved = 0usize;

        for id in lattice.post_order() {
            let node = lattice.node(id);
            let Some(children) = node.children() else {
                continue;
            };
            let price = node.price();
            let up = (
                lattice.node(children.up).price(),
                lattice.resolved_value(children.up)?,
            );
            let down = (
                lattice.node(children.down).price(),
                lattice.resolved_value(children.down)?,
            );

            let portfolio = ReplicatingPortfolio::solve(up, down, growth_factor, price)?;
            let value = portfolio.cost(price);
            trace!(
                node = id.index(),
                price,
                hedge_shares = portfolio.hedge_shares,
                risk_free = portfolio.risk_free_amount,
                value,
                "node replicated"
            );
            lattice.node_mut(id).resolve_replicated(
                value,
                portfolio.hedge_shares,
                portfolio.risk_free_amount,
            );
            resolved += 1;
        }

        debug!(internal_nodes = resolved, growth_factor, "backward induction complete");
        Ok(())
    }
}
