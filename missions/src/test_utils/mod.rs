//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks are hand-written rather than generated: they only need canned
//! responses and a call log.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
