//! Mock rating source

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::analytics::{parse_date, Rating};
use crate::source::RatingSource;

/// Rating source that serves a fixed dataset and counts reads
///
/// Used to check that queries read the dataset exactly once, and not at all
/// when their parameters are rejected.
#[derive(Debug, Default)]
pub struct MockRatingSource {
    ratings: Vec<Rating>,
    calls: AtomicUsize,
}

impl MockRatingSource {
    /// Create a new mock serving `ratings`
    pub fn new(ratings: Vec<Rating>) -> Self {
        Self {
            ratings,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `get_all` has been called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn reset_calls(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

impl RatingSource for MockRatingSource {
    fn get_all(&self) -> &[Rating] {
        self.calls.fetch_add(1, Ordering::SeqCst);
        &self.ratings
    }
}

/// Builder for mock rating sources
#[derive(Debug, Default)]
pub struct MockRatingSourceBuilder {
    ratings: Vec<Rating>,
}

impl MockRatingSourceBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undated rating
    pub fn rating(mut self, reviewer: i32, movie: i32, grade: i32) -> Self {
        self.ratings.push(Rating::new(reviewer, movie, grade));
        self
    }

    /// Add a dated rating, with `date` in any layout accepted by [`parse_date`]
    ///
    /// # Panics
    ///
    /// Panics if `date` cannot be parsed.
    pub fn dated(mut self, reviewer: i32, movie: i32, grade: i32, date: &str) -> Self {
        let date = parse_date(date).unwrap_or_else(|| panic!("invalid fixture date `{}`", date));
        self.ratings
            .push(Rating::new(reviewer, movie, grade).with_date(date));
        self
    }

    /// Build the mock
    pub fn build(self) -> MockRatingSource {
        MockRatingSource::new(self.ratings)
    }
}
