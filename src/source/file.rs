//! JSON file backed rating source
//!
//! The whole file is read once by [`JsonFileSource::load`] and kept immutable
//! afterwards. The file holds a single JSON array of rating objects.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use super::RatingSource;
use crate::analytics::Rating;
use crate::error::{RatingError, RatingResult};

/// File read when no data path is configured
pub const DEFAULT_DATA_PATH: &str = "ratings.json";

/// Options controlling how a rating file is parsed
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Fail the whole load on the first malformed record. When false,
    /// malformed records are logged and skipped.
    pub strict: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Ratings loaded from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    ratings: Vec<Rating>,
    skipped: usize,
}

impl JsonFileSource {
    /// Load ratings from `path` in strict mode
    pub async fn load(path: impl AsRef<Path>) -> RatingResult<Self> {
        Self::load_with(path, LoadOptions::default()).await
    }

    /// Load ratings from `path` with explicit options
    pub async fn load_with(path: impl AsRef<Path>, options: LoadOptions) -> RatingResult<Self> {
        let path = path.as_ref().to_path_buf();
        debug!("Reading ratings from {}", path.display());

        let contents = fs::read_to_string(&path).await.map_err(|e| {
            RatingError::source_io("failed to read rating file", Some(path.clone()))
                .with_source(e)
        })?;

        let (ratings, skipped) = parse_ratings(&contents, options, Some(&path))?;

        info!(
            "Loaded {} ratings from {} ({} skipped)",
            ratings.len(),
            path.display(),
            skipped
        );

        Ok(Self {
            path,
            ratings,
            skipped,
        })
    }

    /// Build a source from JSON text already in memory
    pub fn from_json_str(json: &str, options: LoadOptions) -> RatingResult<Self> {
        let (ratings, skipped) = parse_ratings(json, options, None)?;
        Ok(Self {
            path: PathBuf::new(),
            ratings,
            skipped,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Number of malformed records dropped by a lenient load
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl RatingSource for JsonFileSource {
    fn get_all(&self) -> &[Rating] {
        &self.ratings
    }
}

fn parse_ratings(
    json: &str,
    options: LoadOptions,
    path: Option<&Path>,
) -> RatingResult<(Vec<Rating>, usize)> {
    let parse_error = |message: &str, err: serde_json::Error| {
        RatingError::source_parse(message, path.map(Path::to_path_buf)).with_source(err)
    };

    if options.strict {
        let ratings: Vec<Rating> = serde_json::from_str(json)
            .map_err(|e| parse_error("invalid rating data", e))?;
        return Ok((ratings, 0));
    }

    let values: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| parse_error("expected a JSON array of ratings", e))?;

    let mut ratings = Vec::with_capacity(values.len());
    let mut skipped = 0;
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<Rating>(value) {
            Ok(rating) => ratings.push(rating),
            Err(e) => {
                warn!("Skipping malformed rating at index {}: {}", index, e);
                skipped += 1;
            }
        }
    }

    Ok((ratings, skipped))
}
