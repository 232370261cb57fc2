use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use moviemax_api::{
    api::{create_router, AppState},
    error::{AppError, AppResult},
    models::{MovieDetail, MovieSummary},
    services::{CatalogService, MovieProvider},
};

fn summary(id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: "2012".to_string(),
        poster: format!("https://example.com/{}.jpg", id),
        rating: 0.0,
        genre: "Movie".to_string(),
    }
}

fn detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: "2012".to_string(),
        poster: format!("https://example.com/{}.jpg", id),
        backdrop: format!("https://example.com/{}.jpg", id),
        rating: 8.0,
        genre: "Action".to_string(),
        description: "A movie.".to_string(),
        long_description: "A movie.".to_string(),
        duration: "143 min".to_string(),
        director: "Someone".to_string(),
        cast: vec!["Actor One".to_string(), "Actor Two".to_string()],
    }
}

/// Stand-in metadata backend with a fixed catalog.
struct StubProvider;

#[async_trait::async_trait]
impl MovieProvider for StubProvider {
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        Ok(match query {
            "avengers" => vec![
                summary("tt0848228", "The Avengers"),
                summary("tt4154796", "Avengers: Endgame"),
            ],
            "batman" => vec![
                summary("tt0468569", "The Dark Knight"),
                // Deliberate overlap with the trending row.
                summary("tt0848228", "The Avengers"),
            ],
            "hangover" => vec![summary("tt1119646", "The Hangover")],
            "action" => vec![
                summary("tt0848228", "The Avengers"),
                summary("tt0468569", "The Dark Knight"),
            ],
            _ => vec![],
        })
    }

    async fn fetch_detail(&self, imdb_id: &str) -> AppResult<MovieDetail> {
        match imdb_id {
            "tt0848228" => Ok(detail("tt0848228", "The Avengers")),
            "tt0468569" => Ok(detail("tt0468569", "The Dark Knight")),
            _ => Err(AppError::NotFound(format!(
                "No movie found for id {}",
                imdb_id
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Backend where every request fails at the transport level.
struct FailingProvider;

#[async_trait::async_trait]
impl MovieProvider for FailingProvider {
    async fn search_movies(&self, _query: &str) -> AppResult<Vec<MovieSummary>> {
        Err(AppError::ExternalApi("connection refused".to_string()))
    }

    async fn fetch_detail(&self, _imdb_id: &str) -> AppResult<MovieDetail> {
        Err(AppError::ExternalApi("connection refused".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

fn test_app(provider: impl MovieProvider + 'static) -> Router {
    let catalog = Arc::new(CatalogService::new(Arc::new(provider)));
    create_router(AppState::new(catalog))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app(StubProvider);
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_home_feed_assembles_categories() {
    let app = test_app(StubProvider);
    let (status, body) = get_json(&app, "/api/v1/home").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trending"].as_array().unwrap().len(), 2);
    assert_eq!(body["action"].as_array().unwrap().len(), 2);
    assert_eq!(body["comedy"].as_array().unwrap().len(), 1);
    assert_eq!(body["featured"]["imdb_id"], "tt0848228");

    // tt0848228 appears in both trending and action; merged list keeps one.
    let all_ids: Vec<&str> = body["all_movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["imdb_id"].as_str().unwrap())
        .collect();
    assert_eq!(all_ids, vec!["tt0848228", "tt4154796", "tt0468569", "tt1119646"]);
}

#[tokio::test]
async fn test_home_feed_is_stable_across_requests() {
    let app = test_app(StubProvider);
    let (_, first) = get_json(&app, "/api/v1/home").await;
    let (_, second) = get_json(&app, "/api/v1/home").await;

    assert_eq!(first["trending"], second["trending"]);
    assert_eq!(first["all_movies"], second["all_movies"]);
    assert_eq!(first["featured"], second["featured"]);
}

#[tokio::test]
async fn test_search_returns_summaries() {
    let app = test_app(StubProvider);
    let (status, body) = get_json(&app, "/api/v1/search?q=batman").await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], "The Dark Knight");
}

#[tokio::test]
async fn test_search_unknown_term_is_empty_list() {
    let app = test_app(StubProvider);
    let (status, body) = get_json(&app, "/api/v1/search?q=nonexistent").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_search_empty_query_is_rejected() {
    let app = test_app(StubProvider);
    let (status, body) = get_json(&app, "/api/v1/search?q=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_movie_detail_found() {
    let app = test_app(StubProvider);
    let (status, body) = get_json(&app, "/api/v1/movies/tt0468569").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["imdb_id"], "tt0468569");
    assert_eq!(body["title"], "The Dark Knight");
    assert_eq!(body["cast"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_movie_detail_unknown_is_404() {
    let app = test_app(StubProvider);
    let (status, body) = get_json(&app, "/api/v1/movies/tt9999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_similar_movies_excludes_subject() {
    let app = test_app(StubProvider);
    // Detail genre is "Action", so similar search runs for "action".
    let (status, body) = get_json(&app, "/api/v1/movies/tt0848228/similar").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["imdb_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["tt0468569"]);
}

#[tokio::test]
async fn test_lookup_skips_unknown_ids() {
    let app = test_app(StubProvider);
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/movies/lookup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "imdb_ids": ["tt0848228", "tt9999999", "tt0468569"] }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["imdb_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["tt0848228", "tt0468569"]);
}

#[tokio::test]
async fn test_backend_failure_renders_as_empty_feed() {
    let app = test_app(FailingProvider);
    let (status, body) = get_json(&app, "/api/v1/home").await;

    // Provider failures never propagate: the feed is served with empty rows.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trending"].as_array().unwrap().len(), 0);
    assert_eq!(body["all_movies"].as_array().unwrap().len(), 0);
    assert!(body["featured"].is_null());
}

#[tokio::test]
async fn test_backend_failure_renders_as_empty_search() {
    let app = test_app(FailingProvider);
    let (status, body) = get_json(&app, "/api/v1/search?q=batman").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_backend_failure_renders_detail_as_404() {
    let app = test_app(FailingProvider);
    let (status, _) = get_json(&app, "/api/v1/movies/tt0848228").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
