//! Rating sources
//!
//! The engine reads ratings through the [`RatingSource`] trait so it can run
//! against a loaded file, an in-memory fixture, or a counting mock from
//! [`crate::testing`].

pub mod file;

pub use file::{JsonFileSource, LoadOptions, DEFAULT_DATA_PATH};

use crate::analytics::Rating;
use std::sync::Arc;

/// Provides the complete rating dataset
///
/// Implementations must return the same records on every call for as long as
/// the source lives. Sources are shared across threads, so `get_all` must be
/// safe to call concurrently.
pub trait RatingSource: Send + Sync {
    /// Return every rating in the dataset
    fn get_all(&self) -> &[Rating];
}

impl<T: RatingSource + ?Sized> RatingSource for &T {
    fn get_all(&self) -> &[Rating] {
        (**self).get_all()
    }
}

impl<T: RatingSource + ?Sized> RatingSource for Arc<T> {
    fn get_all(&self) -> &[Rating] {
        (**self).get_all()
    }
}

impl<T: RatingSource + ?Sized> RatingSource for Box<T> {
    fn get_all(&self) -> &[Rating] {
        (**self).get_all()
    }
}

/// Ratings held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    ratings: Vec<Rating>,
}

impl InMemorySource {
    pub fn new(ratings: Vec<Rating>) -> Self {
        Self { ratings }
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

impl RatingSource for InMemorySource {
    fn get_all(&self) -> &[Rating] {
        &self.ratings
    }
}

impl From<Vec<Rating>> for InMemorySource {
    fn from(ratings: Vec<Rating>) -> Self {
        Self::new(ratings)
    }
}

impl FromIterator<Rating> for InMemorySource {
    fn from_iter<I: IntoIterator<Item = Rating>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
