/// Movie metadata provider abstraction
///
/// This module provides a pluggable seam for external movie-metadata sources.
/// The catalog layer only depends on this trait, which keeps it testable with
/// a mocked provider and leaves room for alternative backends.
use crate::{
    error::AppResult,
    models::{MovieDetail, MovieSummary},
};

pub mod omdb;

/// Trait for movie metadata providers
///
/// Providers implement both title search (by free-text term) and full-detail
/// lookup (by the provider-assigned identifier). Search results are already
/// normalized into `MovieSummary` values; defaulting of absent fields happens
/// at the provider boundary, never downstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search for movies matching a free-text term
    ///
    /// A search the upstream API reports as unsuccessful (no matches) is an
    /// empty list, not an error. Transport and malformed-payload failures are
    /// surfaced as errors and handled by the caller.
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieSummary>>;

    /// Fetch full metadata for a single movie by identifier
    ///
    /// Returns `AppError::NotFound` when the upstream API reports a logical
    /// failure for the identifier.
    async fn fetch_detail(&self, imdb_id: &str) -> AppResult<MovieDetail>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
