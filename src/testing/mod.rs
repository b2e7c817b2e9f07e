//! Testing utilities and fixtures
//!
//! Mock rating sources and ready-made datasets shared by unit tests,
//! integration tests and benchmarks.

pub mod fixtures;
pub mod mocks;

pub use fixtures::Fixtures;
pub use mocks::{MockRatingSource, MockRatingSourceBuilder};
