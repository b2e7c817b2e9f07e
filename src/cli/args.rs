//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query counts, averages and rankings over a movie rating file
#[derive(Parser, Debug)]
#[command(name = "movierate")]
#[command(about = "movierate - Analytics over movie rating files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a movierate.toml configuration file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Rating file to load (overrides the configured data_path)
    #[arg(short = 'd', long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Skip malformed records instead of failing the load
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Count the reviews written by a reviewer
    #[command(name = "reviewer-count")]
    ReviewerCount {
        #[arg(allow_negative_numbers = true)]
        reviewer: i32,
    },

    /// Average grade given by a reviewer
    #[command(name = "reviewer-average")]
    ReviewerAverage {
        #[arg(allow_negative_numbers = true)]
        reviewer: i32,
    },

    /// Count how often a reviewer gave a specific grade
    #[command(name = "reviewer-rate-count")]
    ReviewerRateCount {
        #[arg(allow_negative_numbers = true)]
        reviewer: i32,
        /// Grade between 1 and 5
        #[arg(allow_negative_numbers = true)]
        rate: i32,
    },

    /// Count the reviews of a movie
    #[command(name = "movie-count")]
    MovieCount {
        #[arg(allow_negative_numbers = true)]
        movie: i32,
    },

    /// Average grade of a movie
    #[command(name = "movie-average")]
    MovieAverage {
        #[arg(allow_negative_numbers = true)]
        movie: i32,
    },

    /// Count how often a movie received a specific grade
    #[command(name = "movie-rate-count")]
    MovieRateCount {
        #[arg(allow_negative_numbers = true)]
        movie: i32,
        /// Grade between 1 and 5
        #[arg(allow_negative_numbers = true)]
        rate: i32,
    },

    /// Movies ordered by number of top (5) grades
    #[command(name = "top-rate-movies")]
    TopRateMovies {
        /// Only print the first N movies
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Reviewers ordered by number of reviews
    #[command(name = "productive-reviewers")]
    ProductiveReviewers {
        /// Only print the first N reviewers
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Movies with the highest average grade
    #[command(name = "top-rated")]
    TopRated {
        /// Number of movies (defaults to the configured default_amount)
        #[arg(allow_negative_numbers = true)]
        amount: Option<i32>,
    },

    /// Movies rated by a reviewer, best grade and newest first
    #[command(name = "reviewer-movies")]
    ReviewerMovies {
        #[arg(allow_negative_numbers = true)]
        reviewer: i32,
        /// Only print the first N movies
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Reviewers of a movie, best grade and newest first
    #[command(name = "movie-reviewers")]
    MovieReviewers {
        #[arg(allow_negative_numbers = true)]
        movie: i32,
        /// Only print the first N reviewers
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the first ratings in the file
    #[command(name = "sample")]
    Sample {
        /// Number of ratings to print
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}
