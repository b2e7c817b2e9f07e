//! CLI command handlers
//!
//! Argument parsing, configuration resolution, and dispatch of each
//! subcommand to the matching [`RatingsEngine`] query.

pub mod args;
pub mod output;

pub use args::{Cli, Commands};
pub use output::{OutputFormat, QueryOutput};

use anyhow::{Context, Result};
use tracing::debug;

use crate::analytics::RatingsEngine;
use crate::config::{Config, ConfigLoader};
use crate::error::RatingResult;
use crate::source::{JsonFileSource, RatingSource};

/// Resolve the effective configuration for an invocation
///
/// Precedence, lowest first: defaults, config file, environment, CLI flags.
pub async fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    match &cli.config {
        Some(path) => loader.load_file(path).await?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            loader.load_project(&cwd).await?;
        }
    }
    loader.merge_env_vars();

    let mut config = loader.into_config();
    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }
    if cli.lenient {
        config.strict = false;
    }

    Ok(config)
}

/// Tracing filter for a verbosity count, falling back to the configured level
pub fn log_filter(verbose: u8, config: &Config) -> String {
    match verbose {
        0 => config
            .log_level
            .clone()
            .unwrap_or_else(|| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Run one query against `engine`
pub fn execute<S: RatingSource>(
    engine: &RatingsEngine<S>,
    command: &Commands,
    config: &Config,
) -> RatingResult<QueryOutput> {
    let output = match command {
        Commands::ReviewerCount { reviewer } => {
            QueryOutput::Count(engine.count_reviews_by_reviewer(*reviewer)?)
        }
        Commands::ReviewerAverage { reviewer } => {
            QueryOutput::Average(engine.average_grade_by_reviewer(*reviewer)?)
        }
        Commands::ReviewerRateCount { reviewer, rate } => {
            QueryOutput::Count(engine.count_rates_by_reviewer(*reviewer, *rate)?)
        }
        Commands::MovieCount { movie } => {
            QueryOutput::Count(engine.count_reviews_of_movie(*movie)?)
        }
        Commands::MovieAverage { movie } => {
            QueryOutput::Average(engine.average_grade_of_movie(*movie)?)
        }
        Commands::MovieRateCount { movie, rate } => {
            QueryOutput::Count(engine.count_rates_of_movie(*movie, *rate)?)
        }
        Commands::TopRateMovies { limit } => {
            QueryOutput::Ids(engine.movies_by_top_rate_count_desc()?).truncate(*limit)
        }
        Commands::ProductiveReviewers { limit } => {
            QueryOutput::Ids(engine.most_productive_reviewers()?).truncate(*limit)
        }
        Commands::TopRated { amount } => {
            let amount = match amount {
                Some(amount) => *amount,
                None => i32::try_from(config.default_amount).unwrap_or(i32::MAX),
            };
            QueryOutput::Ids(engine.top_rated_movies(amount)?)
        }
        Commands::ReviewerMovies { reviewer, limit } => {
            QueryOutput::Ids(engine.top_movies_by_reviewer(*reviewer)?).truncate(*limit)
        }
        Commands::MovieReviewers { movie, limit } => {
            QueryOutput::Ids(engine.reviewers_by_movie(*movie)?).truncate(*limit)
        }
        Commands::Sample { count } => QueryOutput::Ratings(
            engine
                .source()
                .get_all()
                .iter()
                .take(*count)
                .cloned()
                .collect(),
        ),
    };

    Ok(output)
}

/// Load the rating file, run the query and print the result
pub async fn run(cli: &Cli, config: &Config) -> Result<()> {
    debug!("Running {:?} with data file {}", cli.command, config.data_path.display());

    let source = JsonFileSource::load_with(&config.data_path, config.load_options())
        .await
        .with_context(|| format!("Failed to load ratings from {}", config.data_path.display()))?;
    let engine = RatingsEngine::new(source);

    let output = execute(&engine, &cli.command, config).context("Query failed")?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let rendered = output.render(format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(())
}
