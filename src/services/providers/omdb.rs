/// OMDb API provider
///
/// Wraps the single OMDb endpoint: `?s=<term>&type=movie` for search and
/// `?i=<imdbID>` for detail lookup, with the API key merged into every
/// request. OMDb reports logical failure through a `Response: "False"` body
/// field rather than the HTTP status, so both are checked.
use crate::{
    error::{AppError, AppResult},
    models::{MovieDetail, MovieSummary, OmdbMovieDetail, OmdbSearchResponse},
    services::providers::MovieProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }

    /// Issues a GET against the OMDb endpoint with the given query parameters
    /// plus the API key, and returns the raw response after a status check.
    async fn get(&self, params: &[(&str, &str)]) -> AppResult<reqwest::Response> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        Ok(response)
    }

    /// Turns a parsed search envelope into normalized summaries.
    ///
    /// An unsuccessful envelope ("Movie not found!") is an empty list, not an
    /// error.
    fn collect_results(response: OmdbSearchResponse) -> Vec<MovieSummary> {
        if !response.is_success() {
            return Vec::new();
        }
        response.search.into_iter().map(MovieSummary::from).collect()
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let response = self.get(&[("s", query), ("type", "movie")]).await?;
        let envelope: OmdbSearchResponse = response.json().await?;

        if let Some(error) = &envelope.error {
            tracing::debug!(query = %query, upstream_error = %error, "OMDb search unsuccessful");
        }

        let movies = Self::collect_results(envelope);

        tracing::info!(
            query = %query,
            results = movies.len(),
            provider = "omdb",
            "Movie search completed"
        );

        Ok(movies)
    }

    async fn fetch_detail(&self, imdb_id: &str) -> AppResult<MovieDetail> {
        let response = self.get(&[("i", imdb_id)]).await?;
        let record: OmdbMovieDetail = response.json().await?;

        if !record.is_success() {
            return Err(AppError::NotFound(format!(
                "No movie found for id {}",
                imdb_id
            )));
        }

        let detail = MovieDetail::from(record);

        tracing::info!(
            imdb_id = %imdb_id,
            title = %detail.title,
            provider = "omdb",
            "Movie detail fetched"
        );

        Ok(detail)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
