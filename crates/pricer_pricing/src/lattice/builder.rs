//! Lattice construction from spot price and per-period moves.

use pricer_core::types::PricingError;
use pricer_models::instruments::ReplicationParams;
use tracing::{debug, warn};

use super::node::NodeId;
use super::tree::{expected_node_count, Lattice};

/// Largest supported number of periods.
///
/// The lattice is a full binary tree, so 24 periods already means
/// 33,554,431 nodes.
pub const MAX_PERIODS: usize = 24;

/// Period count above which construction logs a size warning.
pub const WARN_PERIODS: usize = 20;

/// Builds the full binary price lattice.
///
/// Each node at depth `d < periods` gets an up child priced at
/// `price * (1 + up_factor)` and a down child priced at
/// `price * (1 - down_factor)`. No recombination is performed.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::lattice::LatticeBuilder;
///
/// let lattice = LatticeBuilder::new(100.0, 0.1, 0.1, 2).unwrap().build();
/// assert_eq!(lattice.node_count(), 7);
/// assert_eq!(lattice.leaf_count(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeBuilder {
    spot: f64,
    up_multiplier: f64,
    down_multiplier: f64,
    periods: usize,
}

impl LatticeBuilder {
    /// Creates a builder.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `spot <= 0`, `up_factor <= -1` or
    ///   `down_factor` is outside `(-1, 1]`
    /// - `LatticeTooLarge` if `periods > MAX_PERIODS`
    pub fn new(
        spot: f64,
        up_factor: f64,
        down_factor: f64,
        periods: usize,
    ) -> Result<Self, PricingError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(PricingError::InvalidParameter {
                name: "spot",
                value: spot,
                constraint: "> 0",
            });
        }
        if !(up_factor.is_finite() && up_factor > -1.0) {
            return Err(PricingError::InvalidParameter {
                name: "up_factor",
                value: up_factor,
                constraint: "> -1",
            });
        }
        if !(down_factor.is_finite() && down_factor > -1.0 && down_factor <= 1.0) {
            return Err(PricingError::InvalidParameter {
                name: "down_factor",
                value: down_factor,
                constraint: "in (-1, 1]",
            });
        }
        if periods > MAX_PERIODS {
            return Err(PricingError::LatticeTooLarge {
                periods,
                max: MAX_PERIODS,
            });
        }

        Ok(Self {
            spot,
            up_multiplier: 1.0 + up_factor,
            down_multiplier: 1.0 - down_factor,
            periods,
        })
    }

    /// Creates a builder from validated valuation parameters.
    ///
    /// # Errors
    /// Returns `LatticeTooLarge` if the period count exceeds [`MAX_PERIODS`].
    pub fn from_params(params: &ReplicationParams) -> Result<Self, PricingError> {
        let periods = params.periods();
        if periods > MAX_PERIODS {
            return Err(PricingError::LatticeTooLarge {
                periods,
                max: MAX_PERIODS,
            });
        }

        Ok(Self {
            spot: params.spot(),
            up_multiplier: params.up_multiplier(),
            down_multiplier: params.down_multiplier(),
            periods,
        })
    }

    /// Materialises every path of the lattice.
    pub fn build(&self) -> Lattice {
        if self.periods > WARN_PERIODS {
            warn!(
                periods = self.periods,
                nodes = expected_node_count(self.periods),
                "building a very large non-recombining lattice"
            );
        }

        let mut lattice = Lattice::with_root(self.spot, self.periods);

        // Level-order expansion: children are appended behind the cursor.
        let mut cursor = 0;
        while cursor < lattice.node_count() {
            let id = NodeId(cursor);
            let node = lattice.node(id);
            if node.depth() < self.periods {
                let price = node.price();
                lattice.push_children(id, price * self.up_multiplier, price * self.down_multiplier);
            }
            cursor += 1;
        }

        debug!(
            periods = self.periods,
            nodes = lattice.node_count(),
            "lattice built"
        );
        lattice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::tree::expected_leaf_count;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_periods_single_leaf_root() {
        let lattice = LatticeBuilder::new(420.0, 0.1, 0.1, 0).unwrap().build();
        assert_eq!(lattice.node_count(), 1);
        assert!(lattice.root().is_leaf());
        assert_eq!(lattice.root().price(), 420.0);
    }

    #[test]
    fn test_one_period_prices() {
        let lattice = LatticeBuilder::new(100.0, 0.2, 0.1, 1).unwrap().build();
        let children = lattice.root().children().unwrap();
        assert_relative_eq!(lattice.node(children.up).price(), 120.0);
        assert_relative_eq!(lattice.node(children.down).price(), 90.0);
    }

    #[test]
    fn test_paths_not_merged() {
        // up-down and down-up reach the same price as distinct nodes
        let lattice = LatticeBuilder::new(100.0, 0.1, 0.1, 2).unwrap().build();
        let root = lattice.root().children().unwrap();
        let up = lattice.node(root.up).children().unwrap();
        let down = lattice.node(root.down).children().unwrap();
        assert_ne!(up.down, down.up);
        assert_relative_eq!(
            lattice.node(up.down).price(),
            lattice.node(down.up).price(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_shape_matches_closed_form() {
        for periods in 0..=8 {
            let lattice = LatticeBuilder::new(100.0, 0.1, 0.1, periods).unwrap().build();
            assert_eq!(lattice.node_count(), expected_node_count(periods));
            assert_eq!(lattice.leaf_count(), expected_leaf_count(periods));
            assert!(lattice.leaves().all(|id| lattice.node(id).depth() == periods));
        }
    }

    #[test]
    fn test_internal_nodes_have_two_children() {
        let lattice = LatticeBuilder::new(100.0, 0.1, 0.1, 3).unwrap().build();
        for (_, node) in lattice.iter() {
            assert_eq!(node.is_leaf(), node.depth() == 3);
        }
    }

    #[test]
    fn test_invalid_spot_rejected() {
        assert!(matches!(
            LatticeBuilder::new(0.0, 0.1, 0.1, 2),
            Err(PricingError::InvalidParameter { name: "spot", .. })
        ));
        assert!(LatticeBuilder::new(-5.0, 0.1, 0.1, 2).is_err());
    }

    #[test]
    fn test_invalid_factors_rejected() {
        assert!(LatticeBuilder::new(100.0, -1.0, 0.1, 2).is_err());
        assert!(LatticeBuilder::new(100.0, 0.1, 1.5, 2).is_err());
    }

    #[test]
    fn test_too_many_periods_rejected() {
        assert_eq!(
            LatticeBuilder::new(100.0, 0.1, 0.1, MAX_PERIODS + 1),
            Err(PricingError::LatticeTooLarge {
                periods: MAX_PERIODS + 1,
                max: MAX_PERIODS
            })
        );
    }

    #[test]
    fn test_from_params_matches_new() {
        let params = ReplicationParams::builder()
            .spot(420.0)
            .strike(500.0)
            .shares_controlled(100.0)
            .up_factor(0.1)
            .down_factor(0.1)
            .periods(3)
            .risk_free_rate(0.05)
            .option_type(pricer_models::instruments::OptionType::Call)
            .build()
            .unwrap();
        assert_eq!(
            LatticeBuilder::from_params(&params).unwrap(),
            LatticeBuilder::new(420.0, 0.1, 0.1, 3).unwrap()
        );
    }
}
