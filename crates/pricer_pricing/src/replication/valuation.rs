//! End-to-end valuation: build, evaluate payoffs, replicate backwards.

use pricer_core::types::PricingError;
use pricer_models::instruments::ReplicationParams;
use tracing::{debug, info};

use super::engine::ReplicationEngine;
use super::payoff::PayoffEvaluator;
use super::result::ReplicationResult;
use crate::lattice::{Lattice, LatticeBuilder, NodeId};

/// A completed valuation together with the resolved lattice.
#[derive(Clone, Debug)]
pub struct Valuation {
    /// Root outputs.
    pub result: ReplicationResult,
    /// Every node, fully resolved.
    pub lattice: Lattice,
}

/// Prices a European option by equivalent-portfolio replication.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{OptionType, ReplicationParams};
/// use pricer_pricing::replication::value_option;
///
/// let params = ReplicationParams::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .shares_controlled(1.0)
///     .up_factor(0.1)
///     .down_factor(0.1)
///     .periods(1)
///     .risk_free_rate(0.05)
///     .option_type(OptionType::Call)
///     .build()
///     .unwrap();
///
/// let result = value_option(&params).unwrap();
/// assert!((result.option_price - 7.142857).abs() < 1e-6);
/// assert!((result.hedge_shares - 0.5).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// - `LatticeTooLarge` if the period count exceeds the supported depth
/// - `DegenerateLattice` if up and down moves produce the same price
pub fn value_option(params: &ReplicationParams) -> Result<ReplicationResult, PricingError> {
    value_option_with_lattice(params).map(|valuation| valuation.result)
}

/// Same as [`value_option`], keeping the resolved lattice for inspection.
///
/// # Errors
/// See [`value_option`].
pub fn value_option_with_lattice(params: &ReplicationParams) -> Result<Valuation, PricingError> {
    debug!(
        spot = params.spot(),
        strike = params.strike(),
        periods = params.periods(),
        option_type = %params.option_type(),
        "starting replication valuation"
    );

    let mut lattice = LatticeBuilder::from_params(params)?.build();
    PayoffEvaluator::from_params(params).evaluate(&mut lattice);
    ReplicationEngine::from_params(params).resolve(&mut lattice)?;

    let root = lattice.root();
    let result = ReplicationResult {
        option_type: params.option_type(),
        option_price: lattice.resolved_value(NodeId::ROOT)?,
        hedge_shares: root.hedge_shares(),
        risk_free_amount: root.risk_free_amount(),
        periods: lattice.periods(),
        node_count: lattice.node_count(),
    };

    info!(
        option_type = %result.option_type,
        price = result.option_price,
        hedge_shares = result.hedge_shares,
        risk_free = result.risk_free_amount,
        "valuation complete"
    );
    Ok(Valuation { result, lattice })
}
