//! Post-hoc check of the replication equations.
//!
//! For every internal node the stored portfolio must reproduce both child
//! option values after one period of risk-free growth:
//!
//! ```text
//! Δ S_u + B (1 + r) = V_u
//! Δ S_d + B (1 + r) = V_d
//! ```

use pricer_core::types::PricingError;

use super::engine::ReplicatingPortfolio;
use crate::lattice::{Lattice, NodeId};

/// Largest absolute replication residual found in a lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReplicationAudit {
    /// Number of internal nodes checked.
    pub nodes_checked: usize,
    /// Largest `|portfolio payoff - child option value|` over all checks.
    pub max_error: f64,
    /// Node at which `max_error` occurred, if any node was checked.
    pub worst_node: Option<NodeId>,
}

impl ReplicationAudit {
    /// Returns whether every residual is within `tolerance`.
    #[inline]
    pub fn is_within(&self, tolerance: f64) -> bool {
        self.max_error <= tolerance
    }
}

/// Re-checks both replication equations at every internal node.
///
/// # Errors
/// Returns `UnresolvedNode` if any node has not been resolved.
pub fn audit_replication(
    lattice: &Lattice,
    risk_free_rate: f64,
) -> Result<ReplicationAudit, PricingError> {
    let growth_factor = 1.0 + risk_free_rate;
    let mut audit = ReplicationAudit {
        nodes_checked: 0,
        max_error: 0.0,
        worst_node: None,
    };

    for (id, node) in lattice.iter() {
        let Some(children) = node.children() else {
            continue;
        };
        lattice.resolved_value(id)?;
        let portfolio = ReplicatingPortfolio {
            hedge_shares: node.hedge_shares(),
            risk_free_amount: node.risk_free_amount(),
        };
        for child in [children.up, children.down] {
            let target = lattice.resolved_value(child)?;
            let payoff = portfolio.value_next(lattice.node(child).price(), growth_factor);
            let error = (payoff - target).abs();
            if audit.worst_node.is_none() || error > audit.max_error {
                audit.max_error = error;
                audit.worst_node = Some(id);
            }
        }
        audit.nodes_checked += 1;
    }

    Ok(audit)
}

/// Largest absolute replication residual, or zero for a single-node lattice.
///
/// # Errors
/// Returns `UnresolvedNode` if any node has not been resolved.
pub fn max_replication_error(lattice: &Lattice, risk_free_rate: f64) -> Result<f64, PricingError> {
    audit_replication(lattice, risk_free_rate).map(|audit| audit.max_error)
}
