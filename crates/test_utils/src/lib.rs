//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims workflow test suite.
//!
//! # Modules
//!
//! - `fixtures`: Claims sitting in each lifecycle status with consistent data
//! - `builders`: Builder patterns for records and validation inputs
//! - `assertions`: Assertion helpers for verdicts and workflow errors
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
