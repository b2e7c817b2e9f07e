//! Data models for movie rating analytics

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Grade given for a top rating
pub const TOP_RATE: i32 = 5;

/// Lowest valid grade
pub const MIN_GRADE: i32 = 1;

/// Highest valid grade
pub const MAX_GRADE: i32 = 5;

/// One reviewer's grade for one movie on a given date
///
/// Field values are carried as read. Nothing here checks that ids are
/// positive or that the grade is within range. Field names are matched
/// without regard to case, and `reviewerId`/`movieId` name the same fields
/// as `reviewer`/`movie`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub reviewer: i32,
    pub movie: i32,
    pub grade: i32,
    /// `None` orders before every known date
    pub date: Option<NaiveDateTime>,
}

impl Rating {
    pub fn new(reviewer: i32, movie: i32, grade: i32) -> Self {
        Self {
            reviewer,
            movie,
            grade,
            date: None,
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    pub fn is_top_rate(&self) -> bool {
        self.grade == TOP_RATE
    }
}

/// Running sum and count of grades for one movie or reviewer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeTally {
    pub total: i64,
    pub count: usize,
}

impl GradeTally {
    pub fn increment(&mut self, rating: &Rating) {
        self.total += i64::from(rating.grade);
        self.count += 1;
    }

    /// Mean grade, or `None` for an empty tally
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total as f64 / self.count as f64)
        }
    }
}

impl From<&Rating> for GradeTally {
    fn from(rating: &Rating) -> Self {
        Self {
            total: i64::from(rating.grade),
            count: 1,
        }
    }
}

/// Parse a rating date in any of the layouts found in rating files
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS`
/// and RFC 3339 timestamps. Offsets are normalized to UTC.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    for layout in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, layout) {
            return Some(datetime);
        }
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.naive_utc())
}

#[derive(Clone, Copy)]
enum RatingField {
    Reviewer,
    Movie,
    Grade,
    Date,
}

impl RatingField {
    fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().replace('_', "").as_str() {
            "reviewer" | "reviewerid" => Some(Self::Reviewer),
            "movie" | "movieid" => Some(Self::Movie),
            "grade" => Some(Self::Grade),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Reviewer => "reviewer",
            Self::Movie => "movie",
            Self::Grade => "grade",
            Self::Date => "date",
        }
    }
}

struct RatingVisitor;

impl<'de> Visitor<'de> for RatingVisitor {
    type Value = Rating;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rating object with reviewer, movie and grade fields")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Rating, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut reviewer = None;
        let mut movie = None;
        let mut grade = None;
        let mut date = None;

        while let Some(key) = map.next_key::<String>()? {
            let Some(field) = RatingField::from_key(&key) else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            let seen = match field {
                RatingField::Reviewer => reviewer.replace(map.next_value::<i32>()?).is_some(),
                RatingField::Movie => movie.replace(map.next_value::<i32>()?).is_some(),
                RatingField::Grade => grade.replace(map.next_value::<i32>()?).is_some(),
                RatingField::Date => {
                    let raw: Option<String> = map.next_value()?;
                    date.replace(date_from_raw::<A::Error>(raw)?).is_some()
                }
            };
            if seen {
                return Err(de::Error::duplicate_field(field.name()));
            }
        }

        Ok(Rating {
            reviewer: reviewer.ok_or_else(|| de::Error::missing_field("reviewer"))?,
            movie: movie.ok_or_else(|| de::Error::missing_field("movie"))?,
            grade: grade.ok_or_else(|| de::Error::missing_field("grade"))?,
            date: date.flatten(),
        })
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RatingVisitor)
    }
}

fn date_from_raw<E: de::Error>(raw: Option<String>) -> Result<Option<NaiveDateTime>, E> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_date(&s)
            .map(Some)
            .ok_or_else(|| E::custom(format!("unrecognized date `{}`", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_capitalized_field_names() {
        let json = r#"{"Reviewer": 1, "Movie": 1488844, "Grade": 3, "Date": "2005-09-06"}"#;
        let rating: Rating = serde_json::from_str(json).unwrap();

        assert_eq!(rating.reviewer, 1);
        assert_eq!(rating.movie, 1488844);
        assert_eq!(rating.grade, 3);
        assert_eq!(rating.date, parse_date("2005-09-06"));
    }

    #[test]
    fn test_deserialize_id_suffixed_names_without_date() {
        let json = r#"{"ReviewerId": 7, "MovieId": 9, "Grade": 5}"#;
        let rating: Rating = serde_json::from_str(json).unwrap();

        assert_eq!(rating, Rating::new(7, 9, 5));
        assert!(rating.is_top_rate());
    }

    #[test]
    fn test_field_names_ignore_case() {
        let json = r#"{"REVIEWER": 2, "movieID": 1, "GRADE": 3, "DATE": "2020-03-12"}"#;
        let rating: Rating = serde_json::from_str(json).unwrap();

        assert_eq!(
            rating,
            Rating::new(2, 1, 3).with_date(parse_date("2020-03-12").unwrap())
        );
    }

    #[test]
    fn test_same_field_twice_is_rejected() {
        let json = r#"{"Reviewer": 1, "reviewer": 2, "Movie": 1, "Grade": 3}"#;
        let err = serde_json::from_str::<Rating>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate field `reviewer`"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"Reviewer": 1, "Movie": 2, "Grade": 3, "Comment": {"text": "ok"}}"#;
        let rating: Rating = serde_json::from_str(json).unwrap();
        assert_eq!(rating, Rating::new(1, 2, 3));
    }

    #[test]
    fn test_null_date_is_absent() {
        let json = r#"{"reviewer": 1, "movie": 2, "grade": 4, "date": null}"#;
        let rating: Rating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.date, None);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let json = r#"{"reviewer": 1, "movie": 2, "grade": 4, "date": "yesterday"}"#;
        let result: Result<Rating, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_date_layouts() {
        let midnight = parse_date("2020-03-12").unwrap();
        assert_eq!(midnight.to_string(), "2020-03-12 00:00:00");

        let iso = parse_date("2020-03-12T10:15:30").unwrap();
        assert_eq!(iso.to_string(), "2020-03-12 10:15:30");

        let spaced = parse_date("2020-03-12 10:15:30").unwrap();
        assert_eq!(spaced, iso);

        let rfc = parse_date("2020-03-12T12:15:30+02:00").unwrap();
        assert_eq!(rfc, iso);

        assert!(parse_date("12/03/2020").is_none());
    }

    #[test]
    fn test_absent_date_orders_first() {
        let dated = Rating::new(1, 1, 3).with_date(parse_date("1999-01-01").unwrap());
        let undated = Rating::new(1, 2, 3);
        assert!(undated.date < dated.date);
    }

    #[test]
    fn test_grade_tally_mean() {
        let mut tally = GradeTally::from(&Rating::new(1, 1, 2));
        tally.increment(&Rating::new(2, 1, 5));

        assert_eq!(tally.count, 2);
        assert_eq!(tally.mean(), Some(3.5));
        assert_eq!(GradeTally::default().mean(), None);
    }
}
