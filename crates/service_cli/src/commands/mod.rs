//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use pricer_models::instruments::ReplicationParams;

pub mod check;
pub mod price;
pub mod tree;

/// Relative tolerance for replication residuals.
const AUDIT_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Absolute residual tolerance scaled to the largest plausible node value.
pub(crate) fn audit_tolerance(params: &ReplicationParams) -> f64 {
    let growth = params.up_multiplier().max(1.0).powi(params.periods() as i32);
    let scale = params.shares_controlled() * (params.spot() * growth + params.strike());
    AUDIT_RELATIVE_TOLERANCE * scale.max(1.0)
}
