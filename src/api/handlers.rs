use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{HomeFeed, MovieDetail, MovieSummary},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Returns the home feed, initializing the catalog on first use.
pub async fn home(State(state): State<AppState>) -> Json<HomeFeed> {
    Json(state.catalog.initialize().await)
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

/// Handler for interactive movie search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    if params.q.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Search query cannot be empty".to_string(),
        ));
    }

    Ok(Json(state.catalog.search_movies(params.q.trim()).await))
}

/// Returns full detail for one movie, 404 when unknown.
pub async fn movie_detail(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<Json<MovieDetail>> {
    state
        .catalog
        .fetch_detail(&imdb_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No movie found for id {}", imdb_id)))
}

/// Returns movies similar to the given one, found by genre.
pub async fn similar_movies(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    let detail = state
        .catalog
        .fetch_detail(&imdb_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No movie found for id {}", imdb_id)))?;

    Ok(Json(state.catalog.similar_movies(&detail).await))
}

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub imdb_ids: Vec<String>,
}

/// Resolves a list of identifiers (e.g. a user's favorites) to details.
/// Unresolvable identifiers are skipped rather than failing the batch.
pub async fn lookup_movies(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Json<Vec<MovieDetail>> {
    Json(state.catalog.lookup_movies(&request.imdb_ids).await)
}
