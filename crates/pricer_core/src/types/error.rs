//! Error types for structured error handling.
//!
//! This module provides `PricingError`, the single failure taxonomy shared by
//! lattice construction, payoff evaluation, and backward induction.

use thiserror::Error;

/// Categorised pricing errors.
///
/// All variants are fail-fast: a valuation that returns one of these has
/// produced no partial result.
///
/// # Variants
/// - `InvalidParameter`: an input outside its domain constraint
/// - `DegenerateLattice`: both children of a node carry the same price
/// - `UnresolvedNode`: a node's value was read before it was resolved
/// - `LatticeTooLarge`: the requested period count exceeds the supported depth
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     name: "spot",
///     value: -1.0,
///     constraint: "> 0",
/// };
/// assert_eq!(format!("{}", err), "Invalid parameter: spot = -1 (must be > 0)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Input outside its documented domain; raised before anything is built.
    #[error("Invalid parameter: {name} = {value} (must be {constraint})")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
        /// Human-readable domain constraint
        constraint: &'static str,
    },

    /// Up and down children share a price, so the hedge ratio is undefined.
    #[error("Degenerate lattice: node at price {price} has both children at {child_price}")]
    DegenerateLattice {
        /// Price level of the node being replicated
        price: f64,
        /// Common price of its two children
        child_price: f64,
    },

    /// Internal fault: a node was consumed before it was resolved.
    #[error("Unresolved node {index}: value requested before resolution")]
    UnresolvedNode {
        /// Arena index of the offending node
        index: usize,
    },

    /// The full binary lattice for this many periods would not fit in memory.
    #[error("Lattice too large: {periods} periods exceeds the maximum of {max}")]
    LatticeTooLarge {
        /// Requested period count
        periods: usize,
        /// Largest supported period count
        max: usize,
    },
}

impl PricingError {
    /// Returns whether this error signals a defect in the pricing code rather
    /// than a problem with the caller's inputs.
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, PricingError::UnresolvedNode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::InvalidParameter {
            name: "strike",
            value: 0.0,
            constraint: "> 0",
        };
        assert_eq!(
            format!("{}", err),
            "Invalid parameter: strike = 0 (must be > 0)"
        );
    }

    #[test]
    fn test_degenerate_lattice_display() {
        let err = PricingError::DegenerateLattice {
            price: 100.0,
            child_price: 100.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Degenerate lattice"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn test_unresolved_node_display() {
        let err = PricingError::UnresolvedNode { index: 7 };
        assert_eq!(
            err.to_string(),
            "Unresolved node 7: value requested before resolution"
        );
    }

    #[test]
    fn test_lattice_too_large_display() {
        let err = PricingError::LatticeTooLarge {
            periods: 40,
            max: 24,
        };
        assert!(err.to_string().contains("40 periods"));
    }

    #[test]
    fn test_is_internal() {
        assert!(PricingError::UnresolvedNode { index: 0 }.is_internal());
        assert!(!PricingError::DegenerateLattice {
            price: 1.0,
            child_price: 1.0
        }
        .is_internal());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::UnresolvedNode { index: 3 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::LatticeTooLarge {
            periods: 30,
            max: 24,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
