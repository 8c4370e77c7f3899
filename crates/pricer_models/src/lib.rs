//! # Pricer Models (L2: Business Logic)
//!
//! Option payoffs and the valuation parameter record.
//!
//! This crate provides:
//! - [`instruments::OptionType`]: European call/put with exact terminal payoffs
//! - [`instruments::ReplicationParams`]: immutable, validated market and contract inputs
//! - [`instruments::InstrumentError`]: field-level validation failures
//!
//! ## Design Principles
//!
//! - **Enum-based option types** for static dispatch
//! - **Validated construction**: every `ReplicationParams` satisfies its domain constraints
//! - **Builder pattern** for ergonomic construction of the eight-field record

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
