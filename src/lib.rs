//! # movierate
//!
//! Counts, averages and rankings over a collection of movie ratings.
//!
//! ## Usage
//!
//! ```bash
//! movierate --data ratings.json top-rated 10
//! ```
//!
//! ## Modules
//!
//! - `analytics` - Rating model and the aggregation engine
//! - `cli` - Command-line parsing, dispatch and output rendering
//! - `config` - Configuration from defaults, TOML file and environment
//! - `error` - Error type and error codes
//! - `source` - Rating sources backed by a JSON file or memory
//! - `testing` - Mock sources and fixture datasets
pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod source;

pub mod testing;

pub use analytics::{Rating, RatingsEngine};
pub use error::{RatingError, RatingResult};
pub use source::{InMemorySource, JsonFileSource, RatingSource};
