//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Rating file used by the file and CLI tests, with capitalized field names
pub const SAMPLE_RATINGS: &str = r#"[
  {"Reviewer": 1, "Movie": 1, "Grade": 4, "Date": "2020-03-11"},
  {"Reviewer": 1, "Movie": 2, "Grade": 5, "Date": "2002-03-12"},
  {"Reviewer": 1, "Movie": 3, "Grade": 4, "Date": "2020-03-12"},
  {"Reviewer": 2, "Movie": 1, "Grade": 3, "Date": "2020-03-12"},
  {"Reviewer": 2, "Movie": 2, "Grade": 4, "Date": "2020-03-12"},
  {"Reviewer": 3, "Movie": 2, "Grade": 5, "Date": "2020-03-12"},
  {"Reviewer": 3, "Movie": 3, "Grade": 3, "Date": "2020-03-12"}
]"#;

/// Temporary directory holding rating and config files
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Context with `ratings.json` holding [`SAMPLE_RATINGS`]
    pub fn with_sample() -> Result<Self> {
        let context = Self::new()?;
        context.write_file("ratings.json", SAMPLE_RATINGS)?;
        Ok(context)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn ratings_path(&self) -> PathBuf {
        self.path().join("ratings.json")
    }

    /// Write a file relative to the context root
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }
}
