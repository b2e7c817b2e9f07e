//! Aggregation engine for movie rating queries
//!
//! Every query validates its parameters first and only then reads the full
//! dataset from the [`RatingSource`], exactly once. Nothing is cached between
//! calls.
//!
//! Ranking queries either aggregate per id and rank the aggregates (one entry
//! per movie or reviewer), or rank the matching records themselves (one entry
//! per record). Ties on an aggregate are broken by ascending id. Ties between
//! records with equal grade and date keep their input order.

use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use super::models::{GradeTally, Rating, MAX_GRADE, MIN_GRADE};
use crate::error::{RatingError, RatingResult, Subject};
use crate::source::RatingSource;

/// Computes counts, averages and rankings over a rating source
pub struct RatingsEngine<S> {
    source: S,
}

impl<S: RatingSource> RatingsEngine<S> {
    /// Create a new engine reading from `source`
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn ratings(&self) -> &[Rating] {
        self.source.get_all()
    }

    /// Number of ratings issued by `reviewer`
    pub fn count_reviews_by_reviewer(&self, reviewer: i32) -> RatingResult<usize> {
        ensure_reviewer(reviewer)?;

        let count = self
            .ratings()
            .iter()
            .filter(|r| r.reviewer == reviewer)
            .count();

        debug!("Reviewer {} has {} reviews", reviewer, count);
        Ok(count)
    }

    /// Mean grade over every rating issued by `reviewer`
    pub fn average_grade_by_reviewer(&self, reviewer: i32) -> RatingResult<f64> {
        ensure_reviewer(reviewer)?;

        let tally = tally(self.ratings().iter().filter(|r| r.reviewer == reviewer));
        let average = tally
            .mean()
            .ok_or_else(|| RatingError::no_data(Subject::Reviewer, reviewer))?;

        debug!(
            "Reviewer {} averages {:.3} over {} reviews",
            reviewer, average, tally.count
        );
        Ok(average)
    }

    /// Number of ratings by `reviewer` with grade equal to `rate`
    pub fn count_rates_by_reviewer(&self, reviewer: i32, rate: i32) -> RatingResult<usize> {
        ensure_reviewer(reviewer)?;
        ensure_rate(rate)?;

        let count = self
            .ratings()
            .iter()
            .filter(|r| r.reviewer == reviewer && r.grade == rate)
            .count();

        debug!("Reviewer {} gave grade {} {} times", reviewer, rate, count);
        Ok(count)
    }

    /// Number of ratings for `movie`
    pub fn count_reviews_of_movie(&self, movie: i32) -> RatingResult<usize> {
        ensure_movie(movie)?;

        let count = self.ratings().iter().filter(|r| r.movie == movie).count();

        debug!("Movie {} has {} reviews", movie, count);
        Ok(count)
    }

    /// Mean grade over every rating for `movie`
    pub fn average_grade_of_movie(&self, movie: i32) -> RatingResult<f64> {
        ensure_movie(movie)?;

        let tally = tally(self.ratings().iter().filter(|r| r.movie == movie));
        let average = tally
            .mean()
            .ok_or_else(|| RatingError::no_data(Subject::Movie, movie))?;

        debug!(
            "Movie {} averages {:.3} over {} reviews",
            movie, average, tally.count
        );
        Ok(average)
    }

    /// Number of ratings for `movie` with grade equal to `rate`
    pub fn count_rates_of_movie(&self, movie: i32, rate: i32) -> RatingResult<usize> {
        ensure_movie(movie)?;
        ensure_rate(rate)?;

        let count = self
            .ratings()
            .iter()
            .filter(|r| r.movie == movie && r.grade == rate)
            .count();

        debug!("Movie {} received grade {} {} times", movie, rate, count);
        Ok(count)
    }

    /// Movies ordered by how many top rates they received, most first
    ///
    /// Movies that never received a top rate are left out.
    pub fn movies_by_top_rate_count_desc(&self) -> RatingResult<Vec<i32>> {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for rating in self.ratings().iter().filter(|r| r.is_top_rate()) {
            *counts.entry(rating.movie).or_insert(0) += 1;
        }

        let movies = rank_by_count(counts);
        debug!("{} movies received a top rate", movies.len());
        Ok(movies)
    }

    /// Reviewers ordered by number of reviews, most first
    pub fn most_productive_reviewers(&self) -> RatingResult<Vec<i32>> {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for rating in self.ratings() {
            *counts.entry(rating.reviewer).or_insert(0) += 1;
        }

        let reviewers = rank_by_count(counts);
        debug!("Ranked {} reviewers by review count", reviewers.len());
        Ok(reviewers)
    }

    /// The `amount` movies with the highest mean grade, best first
    pub fn top_rated_movies(&self, amount: i32) -> RatingResult<Vec<i32>> {
        let amount = ensure_amount(amount)?;

        let mut tallies: HashMap<i32, GradeTally> = HashMap::new();
        for rating in self.ratings() {
            tallies
                .entry(rating.movie)
                .and_modify(|t| t.increment(rating))
                .or_insert_with(|| GradeTally::from(rating));
        }

        let mut means: Vec<(i32, f64)> = tallies
            .into_iter()
            .filter_map(|(movie, tally)| tally.mean().map(|mean| (movie, mean)))
            .collect();
        means.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        means.truncate(amount);

        debug!("Selected {} top rated movies (asked for {})", means.len(), amount);
        Ok(means.into_iter().map(|(movie, _)| movie).collect())
    }

    /// Movies rated by `reviewer`, best grade first and newest first within a grade
    ///
    /// Every rating contributes one entry, so a movie rated twice appears twice.
    pub fn top_movies_by_reviewer(&self, reviewer: i32) -> RatingResult<Vec<i32>> {
        ensure_reviewer(reviewer)?;

        let ranked = rank_records(self.ratings().iter().filter(|r| r.reviewer == reviewer));

        debug!("Reviewer {} rated {} movies", reviewer, ranked.len());
        Ok(ranked.into_iter().map(|r| r.movie).collect())
    }

    /// Reviewers of `movie`, best grade first and newest first within a grade
    ///
    /// Every rating contributes one entry, so a reviewer who rated twice appears twice.
    pub fn reviewers_by_movie(&self, movie: i32) -> RatingResult<Vec<i32>> {
        ensure_movie(movie)?;

        let ranked = rank_records(self.ratings().iter().filter(|r| r.movie == movie));

        debug!("Movie {} was rated by {} reviewers", movie, ranked.len());
        Ok(ranked.into_iter().map(|r| r.reviewer).collect())
    }
}

fn ensure_reviewer(reviewer: i32) -> RatingResult<()> {
    if reviewer < 1 {
        return Err(RatingError::invalid_argument(
            "reviewer",
            "The id of the reviewer has to be larger than 0.",
        ));
    }
    Ok(())
}

fn ensure_movie(movie: i32) -> RatingResult<()> {
    if movie < 1 {
        return Err(RatingError::invalid_argument(
            "movie",
            "The id of the movie has to be larger than 0.",
        ));
    }
    Ok(())
}

fn ensure_rate(rate: i32) -> RatingResult<()> {
    if !(MIN_GRADE..=MAX_GRADE).contains(&rate) {
        return Err(RatingError::invalid_argument(
            "rate",
            format!(
                "The rate has to be within the range {}-{}.",
                MIN_GRADE, MAX_GRADE
            ),
        ));
    }
    Ok(())
}

fn ensure_amount(amount: i32) -> RatingResult<usize> {
    match usize::try_from(amount) {
        Ok(amount) if amount >= 1 => Ok(amount),
        _ => Err(RatingError::invalid_argument(
            "amount",
            "The amount has to be larger than 0.",
        )),
    }
}

fn tally<'a>(ratings: impl Iterator<Item = &'a Rating>) -> GradeTally {
    let mut tally = GradeTally::default();
    for rating in ratings {
        tally.increment(rating);
    }
    tally
}

/// Order ids by count, highest first, ascending id on ties
fn rank_by_count(counts: HashMap<i32, usize>) -> Vec<i32> {
    let mut entries: Vec<(i32, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.into_iter().map(|(id, _)| id).collect()
}

/// Order records by grade then date, both descending
fn rank_records<'a>(ratings: impl Iterator<Item = &'a Rating>) -> Vec<&'a Rating> {
    let mut ranked: Vec<&Rating> = ratings.collect();
    // sort_by is stable: equal grade and date keep input order
    ranked.sort_by(|a, b| by_grade_then_date(b, a));
    ranked
}

fn by_grade_then_date(a: &Rating, b: &Rating) -> Ordering {
    a.grade.cmp(&b.grade).then_with(|| a.date.cmp(&b.date))
}
