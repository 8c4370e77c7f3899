//! Property tests for lattice valuation.
//!
//! # Test Categories
//!
//! 1. **Lattice shape**: node and leaf counts follow the full binary tree
//! 2. **Terminal payoffs**: floor at zero, exact call/put symmetry
//! 3. **Replication**: every internal portfolio reproduces both child values
//! 4. **Monotonicity**: call value rises and put value falls with spot
//! 5. **Parity**: call minus put equals the discounted forward position

use pricer_models::instruments::{OptionType, ReplicationParams};
use pricer_pricing::lattice::{expected_leaf_count, expected_node_count, LatticeBuilder};
use pricer_pricing::replication::{
    audit_replication, value_option, value_option_with_lattice, PayoffEvaluator,
};
use proptest::prelude::*;

/// Parameters with `1 - down < 1 + rate < 1 + up`, i.e. no arbitrage in the lattice.
#[allow(clippy::too_many_arguments)]
fn params(
    spot: f64,
    strike: f64,
    shares: f64,
    up: f64,
    down: f64,
    periods: usize,
    rate: f64,
    option_type: OptionType,
) -> ReplicationParams {
    ReplicationParams::builder()
        .spot(spot)
        .strike(strike)
        .shares_controlled(shares)
        .up_factor(up)
        .down_factor(down)
        .periods(periods as i64)
        .risk_free_rate(rate)
        .option_type(option_type)
        .build()
        .unwrap()
}

// ============================================================================
// Lattice shape
// ============================================================================

proptest! {
    #[test]
    fn prop_tree_shape(periods in 0usize..=10, up in 0.01_f64..0.5, down in 0.01_f64..0.5) {
        let lattice = LatticeBuilder::new(100.0, up, down, periods).unwrap().build();
        prop_assert_eq!(lattice.node_count(), expected_node_count(periods));
        prop_assert_eq!(lattice.leaf_count(), expected_leaf_count(periods));
        prop_assert_eq!(lattice.node_count(), (1usize << (periods + 1)) - 1);
        prop_assert_eq!(lattice.leaf_count(), 1usize << periods);
    }
}

// ============================================================================
// Terminal payoffs
// ============================================================================

proptest! {
    #[test]
    fn prop_terminal_payoff_floor(
        spot in 1.0_f64..1_000.0,
        strike in 1.0_f64..1_000.0,
        periods in 0usize..=6,
        option_type in prop_oneof![Just(OptionType::Call), Just(OptionType::Put)],
    ) {
        let mut lattice = LatticeBuilder::new(spot, 0.1, 0.1, periods).unwrap().build();
        PayoffEvaluator::new(option_type, strike, 100.0).unwrap().evaluate(&mut lattice);
        for id in lattice.leaves() {
            prop_assert!(lattice.resolved_value(id).unwrap() >= 0.0);
        }
    }

    #[test]
    fn prop_put_call_terminal_symmetry(
        spot in 1.0_f64..1_000.0,
        strike in 1.0_f64..1_000.0,
        shares in 1.0_f64..500.0,
        periods in 0usize..=6,
    ) {
        let mut calls = LatticeBuilder::new(spot, 0.15, 0.1, periods).unwrap().build();
        let mut puts = calls.clone();
        let evaluator = PayoffEvaluator::new(OptionType::Call, strike, shares).unwrap();
        evaluator.evaluate(&mut calls);
        let evaluator = PayoffEvaluator::new(OptionType::Put, strike, shares).unwrap();
        evaluator.evaluate(&mut puts);

        for id in calls.leaves() {
            let price = calls.node(id).price();
            let call = calls.resolved_value(id).unwrap();
            let put = puts.resolved_value(id).unwrap();
            prop_assert_eq!(call - put, (price - strike) * shares);
        }
    }
}

// ============================================================================
// Replication consistency
// ============================================================================

proptest! {
    #[test]
    fn prop_replication_consistency(
        spot in 10.0_f64..500.0,
        strike in 10.0_f64..500.0,
        up in 0.06_f64..0.4,
        down in 0.01_f64..0.4,
        rate in 0.0_f64..0.05,
        periods in 1usize..=7,
        option_type in prop_oneof![Just(OptionType::Call), Just(OptionType::Put)],
    ) {
        let p = params(spot, strike, 100.0, up, down, periods, rate, option_type);
        let valuation = value_option_with_lattice(&p).unwrap();
        let audit = audit_replication(&valuation.lattice, rate).unwrap();

        prop_assert_eq!(audit.nodes_checked, expected_node_count(periods - 1));
        let scale = 100.0 * (spot + strike) * (1.0 + up).powi(periods as i32);
        prop_assert!(
            audit.is_within(1e-10 * scale),
            "max error {} at {:?}",
            audit.max_error,
            audit.worst_node
        );
    }
}

// ============================================================================
// Monotonicity in spot
// ============================================================================

proptest! {
    #[test]
    fn prop_call_increases_with_spot(
        spot in 80.0_f64..120.0,
        bump in 0.5_f64..10.0,
        up in 0.1_f64..0.4,
        down in 0.05_f64..0.3,
        rate in 0.0_f64..0.05,
        periods in 2usize..=6,
    ) {
        // top leaf is in the money for both spots
        let low = params(spot, 90.0, 100.0, up, down, periods, rate, OptionType::Call);
        let high = low.with_spot(spot + bump).unwrap();
        let v_low = value_option(&low).unwrap().option_price;
        let v_high = value_option(&high).unwrap().option_price;
        prop_assert!(v_high > v_low, "{} !> {}", v_high, v_low);
    }

    #[test]
    fn prop_put_decreases_with_spot(
        spot in 80.0_f64..120.0,
        bump in 0.5_f64..10.0,
        up in 0.1_f64..0.4,
        down in 0.05_f64..0.3,
        rate in 0.0_f64..0.05,
        periods in 2usize..=6,
    ) {
        // bottom leaf is in the money for both spots
        let low = params(spot, 130.0, 100.0, up, down, periods, rate, OptionType::Put);
        let high = low.with_spot(spot + bump).unwrap();
        let v_low = value_option(&low).unwrap().option_price;
        let v_high = value_option(&high).unwrap().option_price;
        prop_assert!(v_high < v_low, "{} !< {}", v_high, v_low);
    }
}

// ============================================================================
// Put-call parity
// ============================================================================

proptest! {
    #[test]
    fn prop_put_call_parity(
        spot in 50.0_f64..500.0,
        strike in 50.0_f64..500.0,
        shares in 1.0_f64..200.0,
        up in 0.06_f64..0.3,
        down in 0.01_f64..0.3,
        rate in 0.0_f64..0.05,
        periods in 0usize..=6,
    ) {
        let call_params = params(spot, strike, shares, up, down, periods, rate, OptionType::Call);
        let put_params = call_params.with_option_type(OptionType::Put);
        let call = value_option(&call_params).unwrap();
        let put = value_option(&put_params).unwrap();

        let discount = (1.0 + rate).powi(periods as i32);
        let forward = shares * (spot - strike / discount);
        let tolerance = 1e-9 * shares * (spot + strike);
        prop_assert!((call.option_price - put.option_price - forward).abs() <= tolerance);
        if periods > 0 {
            prop_assert!((call.hedge_shares - put.hedge_shares - shares).abs() <= 1e-9 * shares);
        }
    }
}
