//! Rendering of query results

use anyhow::Result;
use serde::Serialize;

use crate::analytics::Rating;

/// Result of one CLI query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Count(usize),
    Average(f64),
    Ids(Vec<i32>),
    Ratings(Vec<Rating>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl QueryOutput {
    /// Keep only the first `limit` entries of a list result
    pub fn truncate(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            match &mut self {
                Self::Ids(ids) => ids.truncate(limit),
                Self::Ratings(ratings) => ratings.truncate(limit),
                Self::Count(_) | Self::Average(_) => {}
            }
        }
        self
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Self::Count(count) => count.to_string(),
            Self::Average(average) => average.to_string(),
            Self::Ids(ids) => ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Ratings(ratings) => ratings
                .iter()
                .map(format_rating)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn format_rating(rating: &Rating) -> String {
    let date = rating
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "Reviewer = {} movie = {} grade = {} date = {}",
        rating.reviewer, rating.movie, rating.grade, date
    )
}
