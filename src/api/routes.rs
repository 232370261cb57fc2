use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(handlers::home))
        .route("/search", get(handlers::search))
        .route("/movies/:imdb_id", get(handlers::movie_detail))
        .route("/movies/:imdb_id/similar", get(handlers::similar_movies))
        .route("/movies/lookup", post(handlers::lookup_movies))
}
