//! Common rating datasets

use super::mocks::{MockRatingSource, MockRatingSourceBuilder};
use crate::analytics::Rating;

/// Datasets for common query scenarios
pub struct Fixtures;

impl Fixtures {
    /// Two reviewers, two movies, three ratings
    ///
    /// Reviewer 1 averages 3.5 and movie 1 averages 1.5.
    pub fn small() -> MockRatingSource {
        MockRatingSourceBuilder::new()
            .rating(1, 1, 2)
            .rating(1, 2, 5)
            .rating(2, 1, 1)
            .build()
    }

    /// Reviewers 111, 112 and 113 with 3, 1 and 2 reviews
    pub fn productive_reviewers() -> MockRatingSource {
        MockRatingSourceBuilder::new()
            .rating(111, 1, 1)
            .rating(111, 2, 4)
            .rating(111, 3, 3)
            .rating(112, 1, 1)
            .rating(113, 1, 4)
            .rating(113, 2, 4)
            .build()
    }

    /// Three movies with 3, 1 and 2 top rates
    pub fn top_rates() -> MockRatingSource {
        MockRatingSourceBuilder::new()
            .rating(111, 1, 5)
            .rating(111, 2, 4)
            .rating(111, 3, 3)
            .rating(112, 1, 5)
            .rating(112, 2, 5)
            .rating(112, 3, 5)
            .rating(113, 1, 5)
            .rating(113, 2, 4)
            .rating(113, 3, 5)
            .build()
    }

    /// Four movies whose means rank 1, 3, 2, 4
    pub fn mean_grades() -> MockRatingSource {
        MockRatingSourceBuilder::new()
            .rating(1, 1, 5)
            .rating(1, 2, 2)
            .rating(1, 3, 3)
            .rating(2, 1, 4)
            .rating(2, 2, 4)
            .rating(3, 2, 4)
            .rating(3, 3, 4)
            .rating(3, 4, 1)
            .build()
    }

    /// Dated ratings where grade ties are decided by date
    ///
    /// Reviewer 1 ranks movies 2, 3, 1.
    pub fn dated_by_reviewer() -> MockRatingSource {
        MockRatingSourceBuilder::new()
            .dated(1, 1, 4, "2020-03-11")
            .dated(1, 2, 5, "2002-03-12")
            .dated(1, 3, 4, "2020-03-12")
            .dated(2, 1, 3, "2020-03-12")
            .dated(2, 2, 4, "2020-03-12")
            .dated(3, 2, 5, "2020-03-12")
            .dated(3, 3, 3, "2020-03-12")
            .build()
    }

    /// Dated ratings where movie 1 ranks reviewers 112, 111
    pub fn dated_by_movie() -> MockRatingSource {
        MockRatingSourceBuilder::new()
            .dated(111, 1, 4, "2020-03-11")
            .dated(111, 2, 5, "2002-03-12")
            .dated(111, 3, 4, "2020-03-12")
            .dated(112, 1, 4, "2020-03-12")
            .dated(112, 2, 4, "2020-03-12")
            .dated(113, 2, 5, "2020-03-12")
            .dated(113, 3, 3, "2020-03-12")
            .build()
    }

    /// Deterministic synthetic dataset of `size` ratings
    ///
    /// Ids and grades cycle with coprime strides so every reviewer and movie
    /// gets a spread of grades. Used by benchmarks.
    pub fn synthetic(size: usize, reviewers: i32, movies: i32) -> Vec<Rating> {
        let reviewers = reviewers.max(1) as i64;
        let movies = movies.max(1) as i64;
        (0..size as i64)
            .map(|i| {
                Rating::new(
                    (i % reviewers + 1) as i32,
                    ((i * 7) % movies + 1) as i32,
                    ((i * 13) % 5 + 1) as i32,
                )
            })
            .collect()
    }
}
