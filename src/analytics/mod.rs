//! Movie rating analytics
//!
//! Counts, averages and rankings computed over a complete rating dataset.

pub mod engine;
pub mod models;

pub use engine::RatingsEngine;
pub use models::*;
