//! Equivalent-portfolio replication.
//!
//! The valuation runs in three phases over one lattice:
//!
//! 1. [`LatticeBuilder`](crate::lattice::LatticeBuilder) materialises every price path
//! 2. [`PayoffEvaluator`] resolves the leaves with the contract payoff
//! 3. [`ReplicationEngine`] resolves internal nodes in a single post-order pass
//!
//! [`value_option`] runs all three and reads the root. [`audit_replication`]
//! re-checks the replication equations on a resolved lattice.

mod audit;
mod engine;
mod payoff;
mod result;
mod valuation;

pub use audit::{audit_replication, max_replication_error, ReplicationAudit};
pub use engine::{ReplicatingPortfolio, ReplicationEngine};
pub use payoff::PayoffEvaluator;
pub use result::ReplicationResult;
pub use valuation::{value_option, value_option_with_lattice, Valuation};
