//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! money kernel test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built money values for common cases
//! - `assertions`: Custom assertion helpers for money and its errors
//! - `generators`: Property-based test data generators
//! - `logging`: Tracing subscriber setup for tests

pub mod fixtures;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
pub use logging::*;
