//! Loading rating files and querying them end to end

mod common;

use common::TestContext;
use movierate::analytics::parse_date;
use movierate::error::ErrorCode;
use movierate::source::{JsonFileSource, LoadOptions};
use movierate::{RatingSource, RatingsEngine};
use std::sync::Arc;

#[tokio::test]
async fn test_loaded_file_answers_queries() {
    let context = TestContext::with_sample().unwrap();

    let source = JsonFileSource::load(context.ratings_path()).await.unwrap();
    let engine = RatingsEngine::new(source);

    assert_eq!(engine.count_reviews_by_reviewer(1).unwrap(), 3);
    assert_eq!(engine.top_movies_by_reviewer(1).unwrap(), vec![2, 3, 1]);
    assert_eq!(engine.reviewers_by_movie(2).unwrap(), vec![3, 1, 2]);
    assert_eq!(engine.most_productive_reviewers().unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_loaded_dates_are_parsed() {
    let context = TestContext::with_sample().unwrap();

    let source = JsonFileSource::load(context.ratings_path()).await.unwrap();

    assert_eq!(source.get_all()[1].date, parse_date("2002-03-12"));
}

#[tokio::test]
async fn test_lowercase_and_timestamp_layouts() {
    let context = TestContext::new().unwrap();
    let path = context
        .write_file(
            "lower.json",
            r#"[
                {"reviewer": 4, "movie": 8, "grade": 2, "date": "2019-05-01T08:30:00"},
                {"reviewerId": 4, "movieId": 9, "grade": 2, "date": "2019-05-01T08:30:00Z"}
            ]"#,
        )
        .unwrap();

    let source = JsonFileSource::load(&path).await.unwrap();

    assert_eq!(source.len(), 2);
    assert_eq!(source.get_all()[0].date, source.get_all()[1].date);
}

#[tokio::test]
async fn test_strict_and_lenient_loading() {
    let context = TestContext::new().unwrap();
    let path = context
        .write_file(
            "mixed.json",
            r#"[
                {"Reviewer": 1, "Movie": 1, "Grade": 5},
                {"Reviewer": 1, "Movie": 2, "Grade": "five"},
                {"Reviewer": 2, "Movie": 1, "Grade": 3}
            ]"#,
        )
        .unwrap();

    let err = JsonFileSource::load(&path).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::SOURCE_PARSE_ERROR);

    let source = JsonFileSource::load_with(&path, LoadOptions { strict: false })
        .await
        .unwrap();
    assert_eq!(source.len(), 2);
    assert_eq!(source.skipped(), 1);
}

#[tokio::test]
async fn test_not_json_is_parse_error() {
    let context = TestContext::new().unwrap();
    let path = context.write_file("broken.json", "not json").unwrap();

    let err = JsonFileSource::load(&path).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::SOURCE_PARSE_ERROR);
    assert_eq!(err.exit_code(), 4);
}

#[tokio::test]
async fn test_shared_source_across_threads() {
    let context = TestContext::with_sample().unwrap();
    let source = Arc::new(JsonFileSource::load(context.ratings_path()).await.unwrap());

    let handles: Vec<_> = (1..=3)
        .map(|reviewer| {
            let source = Arc::clone(&source);
            std::thread::spawn(move || {
                RatingsEngine::new(source)
                    .count_reviews_by_reviewer(reviewer)
                    .unwrap()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![3, 2, 2]);
}
