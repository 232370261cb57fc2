/// Movie catalog service
///
/// Owns the session-lifetime movie cache and orchestrates every data fetch
/// the presentation layer needs: seeded category rows, interactive search,
/// per-movie detail, similar titles, and favorites lookup. Provider failures
/// never escape this layer; list operations degrade to empty results and
/// single-item lookups to `None`, with the failure logged.
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{HomeFeed, MovieDetail, MovieSummary},
    services::providers::MovieProvider,
};

/// Seed search terms standing in for thematic categories.
pub const TRENDING_SEED: &str = "avengers";
pub const ACTION_SEED: &str = "batman";
pub const COMEDY_SEED: &str = "hangover";

/// Movies kept per category row.
pub const CATEGORY_LIMIT: usize = 10;
/// Movies returned for an interactive search.
pub const SEARCH_LIMIT: usize = 20;
/// Movies returned in a "more like this" row.
pub const SIMILAR_LIMIT: usize = 6;

/// Session-lifetime movie store.
///
/// All fields start empty and are populated together by `initialize`. The
/// detail map grows one entry per successful lookup and is never evicted.
#[derive(Default)]
struct MovieCache {
    trending: Vec<MovieSummary>,
    action: Vec<MovieSummary>,
    comedy: Vec<MovieSummary>,
    all_movies: Vec<MovieSummary>,
    details: HashMap<String, MovieDetail>,
    featured: Option<MovieDetail>,
}

impl MovieCache {
    fn feed(&self) -> HomeFeed {
        HomeFeed {
            featured: self.featured.clone(),
            trending: self.trending.clone(),
            action: self.action.clone(),
            comedy: self.comedy.clone(),
            all_movies: self.all_movies.clone(),
            generated_at: Utc::now(),
        }
    }
}

pub struct CatalogService {
    provider: Arc<dyn MovieProvider>,
    cache: RwLock<MovieCache>,
}

impl CatalogService {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            provider,
            cache: RwLock::new(MovieCache::default()),
        }
    }

    /// Fetches movies for a seed term, truncated to `limit`.
    ///
    /// Any provider error is logged and yields an empty list.
    pub async fn fetch_by_category(&self, seed: &str, limit: usize) -> Vec<MovieSummary> {
        match self.provider.search_movies(seed).await {
            Ok(mut movies) => {
                movies.truncate(limit);
                movies
            }
            Err(e) => {
                tracing::error!(
                    seed = %seed,
                    error = %e,
                    provider = self.provider.name(),
                    "Category fetch failed"
                );
                Vec::new()
            }
        }
    }

    /// Interactive search: results deduplicated by id (first occurrence wins)
    /// and truncated to the search limit. Errors degrade to an empty result
    /// set, indistinguishable from "no matches".
    pub async fn search_movies(&self, query: &str) -> Vec<MovieSummary> {
        match self.provider.search_movies(query).await {
            Ok(movies) => {
                let mut unique = dedup_by_id(movies);
                unique.truncate(SEARCH_LIMIT);
                unique
            }
            Err(e) => {
                tracing::error!(
                    query = %query,
                    error = %e,
                    provider = self.provider.name(),
                    "Movie search failed"
                );
                Vec::new()
            }
        }
    }

    /// Returns full detail for a movie, from cache when available.
    ///
    /// Misses fetch from the provider and store the result. Concurrent misses
    /// for the same id are not collapsed; each issues its own fetch and the
    /// last write wins, which is harmless because normalization is
    /// deterministic per id. Failed lookups are not cached.
    pub async fn fetch_detail(&self, imdb_id: &str) -> Option<MovieDetail> {
        if let Some(detail) = self.cache.read().await.details.get(imdb_id) {
            return Some(detail.clone());
        }

        match self.provider.fetch_detail(imdb_id).await {
            Ok(detail) => {
                self.cache
                    .write()
                    .await
                    .details
                    .insert(imdb_id.to_string(), detail.clone());
                Some(detail)
            }
            Err(AppError::NotFound(_)) => {
                tracing::debug!(imdb_id = %imdb_id, "Movie not found");
                None
            }
            Err(e) => {
                tracing::error!(
                    imdb_id = %imdb_id,
                    error = %e,
                    provider = self.provider.name(),
                    "Detail fetch failed"
                );
                None
            }
        }
    }

    /// Populates the category rows, the merged list, and the featured movie.
    ///
    /// Runs once per session: when the trending row is already non-empty the
    /// existing cache is returned unchanged. The three category fetches run
    /// concurrently and a failed category simply contributes an empty row.
    /// The featured-detail fetch starts only after the category join.
    pub async fn initialize(&self) -> HomeFeed {
        {
            let cache = self.cache.read().await;
            if !cache.trending.is_empty() {
                return cache.feed();
            }
        }

        let (trending, action, comedy) = tokio::join!(
            self.fetch_by_category(TRENDING_SEED, CATEGORY_LIMIT),
            self.fetch_by_category(ACTION_SEED, CATEGORY_LIMIT),
            self.fetch_by_category(COMEDY_SEED, CATEGORY_LIMIT),
        );

        let all_movies = dedup_by_id(
            trending
                .iter()
                .chain(action.iter())
                .chain(comedy.iter())
                .cloned()
                .collect(),
        );

        let featured = match trending.first() {
            Some(first) => self.fetch_detail(&first.imdb_id).await,
            None => None,
        };

        tracing::info!(
            trending = trending.len(),
            action = action.len(),
            comedy = comedy.len(),
            combined = all_movies.len(),
            featured = featured.is_some(),
            "Movie catalog initialized"
        );

        let mut cache = self.cache.write().await;
        cache.trending = trending;
        cache.action = action;
        cache.comedy = comedy;
        cache.all_movies = all_movies;
        if let Some(featured) = featured {
            cache.featured = Some(featured);
        }
        cache.feed()
    }

    /// Movies similar to `detail`, found by searching its genre label.
    /// The subject movie itself is filtered out of the results.
    pub async fn similar_movies(&self, detail: &MovieDetail) -> Vec<MovieSummary> {
        let mut similar = self
            .fetch_by_category(&detail.genre.to_lowercase(), SIMILAR_LIMIT)
            .await;
        similar.retain(|movie| movie.imdb_id != detail.imdb_id);
        similar
    }

    /// Resolves a list of identifiers (a user's favorites) to details.
    /// Identifiers that cannot be resolved are skipped.
    pub async fn lookup_movies(&self, imdb_ids: &[String]) -> Vec<MovieDetail> {
        let mut movies = Vec::with_capacity(imdb_ids.len());
        for imdb_id in imdb_ids {
            if let Some(detail) = self.fetch_detail(imdb_id).await {
                movies.push(detail);
            }
        }
        movies
    }
}

/// Keeps the first occurrence of each id, preserving order.
fn dedup_by_id(movies: Vec<MovieSummary>) -> Vec<MovieSummary> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.imdb_id.clone()))
        .collect()
}
