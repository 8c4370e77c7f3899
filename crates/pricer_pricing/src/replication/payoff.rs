//! Terminal payoff evaluation.

use pricer_core::types::PricingError;
use pricer_models::instruments::{OptionType, ReplicationParams};
use tracing::debug;

use crate::lattice::Lattice;

/// Fills the option value of every leaf with the contract payoff.
///
/// Only terminal nodes are touched, and only their option value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayoffEvaluator {
    option_type: OptionType,
    strike: f64,
    shares_controlled: f64,
}

impl PayoffEvaluator {
    /// Creates an evaluator for the given contract terms.
    ///
    /// # Errors
    /// Returns `InvalidParameter` unless `strike` and `shares_controlled`
    /// are finite and positive.
    pub fn new(
        option_type: OptionType,
        strike: f64,
        shares_controlled: f64,
    ) -> Result<Self, PricingError> {
        if !(strike.is_finite() && strike > 0.0) {
            return Err(PricingError::InvalidParameter {
                name: "strike",
                value: strike,
                constraint: "> 0",
            });
        }
        if !(shares_controlled.is_finite() && shares_controlled > 0.0) {
            return Err(PricingError::InvalidParameter {
                name: "shares_controlled",
                value: shares_controlled,
                constraint: "> 0",
            });
        }

        Ok(Self {
            option_type,
            strike,
            shares_controlled,
        })
    }

    /// Creates an evaluator from validated valuation parameters.
    pub fn from_params(params: &ReplicationParams) -> Self {
        Self {
            option_type: params.option_type(),
            strike: params.strike(),
            shares_controlled: params.shares_controlled(),
        }
    }

    /// Payoff for a terminal underlying price.
    #[inline]
    pub fn payoff(&self, price: f64) -> f64 {
        self.option_type.payoff(price, self.strike, self.shares_controlled)
    }

    /// Resolves every leaf of `lattice` and returns how many were set.
    pub fn evaluate(&self, lattice: &mut Lattice) -> usize {
        let leaves: Vec<_> = lattice.leaves().collect();
        for &id in &leaves {
            let payoff = self.payoff(lattice.node(id).price());
            lattice.node_mut(id).resolve_terminal(payoff);
        }
        debug!(
            leaves = leaves.len(),
            option_type = %self.option_type,
            "terminal payoffs evaluated"
        );
        leaves.len()
    }
}
