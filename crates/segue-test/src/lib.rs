//! Segue Test Harness - Behavioural suite and invariant fuzzing
//!
//! This crate provides:
//! - Value fixtures (prototype-less objects, `valueOf`/`toString` hooks)
//! - Random value generation
//! - Invariant checking over random start/end pairs
//! - The end-to-end behavioural suite
//! - Logging setup for test runs

pub mod fixtures;
pub mod generator;
pub mod invariants;
pub mod integration;
pub mod logging;

pub use fixtures::*;
pub use generator::*;
pub use invariants::*;
pub use logging::*;
