//! # pricer_core: Foundation for Binomial Replication Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - The pricing error taxonomy: `PricingError` (`types::error`)
//! - Decimal rounding for reported results (`math::rounding`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::rounding::{round_position, round_price};
//! use pricer_core::types::PricingError;
//!
//! assert_eq!(round_price(7.142857142857153_f64), 7.14);
//! assert_eq!(round_position(0.5000000000000003_f64), 0.5);
//!
//! let err = PricingError::UnresolvedNode { index: 0 };
//! assert!(err.is_internal());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
