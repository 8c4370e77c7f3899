//! Binomial price lattice.
//!
//! This module provides:
//! - [`LatticeNode`]: one state of the underlying, with its option value and
//!   replicating portfolio once resolved
//! - [`Lattice`]: the full (non-recombining) binary tree, stored as an arena
//! - [`LatticeBuilder`]: construction from spot price and per-period moves
//!
//! # Scaling
//!
//! Every path is materialised, so a lattice of `n` periods holds
//! `2^(n+1) - 1` nodes. Construction refuses more than [`MAX_PERIODS`].

mod builder;
mod node;
mod tree;

pub use builder::{LatticeBuilder, MAX_PERIODS, WARN_PERIODS};
pub use node::{Children, LatticeNode, NodeId, OptionValue};
pub use tree::{expected_leaf_count, expected_node_count, Lattice};
