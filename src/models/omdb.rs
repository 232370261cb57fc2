//! Raw OMDb wire types and their conversion into the application model.
//!
//! OMDb signals a missing field with the literal string `"N/A"` rather than
//! omitting it, so every field is checked individually for the sentinel and
//! replaced by its documented default during conversion. Sentinel handling
//! lives here so nothing loosely-typed leaks past the boundary.

use serde::Deserialize;

use super::{MovieDetail, MovieSummary};

/// OMDb's "field not available" sentinel.
const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown when a result has no poster.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450?text=No+Poster";
/// Placeholder shown when a detail page has no backdrop image.
pub const PLACEHOLDER_BACKDROP: &str = "https://via.placeholder.com/1920x1080?text=No+Backdrop";
/// Generic genre label used when the genre is unknown (the search endpoint
/// never returns one).
pub const GENERIC_GENRE: &str = "Movie";
const NO_DESCRIPTION: &str = "No description available.";
const UNKNOWN_DIRECTOR: &str = "Unknown";

/// Number of cast members kept from the upstream actor list.
pub const MAX_CAST: usize = 4;

/// Treats the OMDb sentinel as an absent value.
fn present(value: &str) -> Option<&str> {
    if value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

/// Envelope for `?s=` search responses.
///
/// OMDb reports logical failure ("Movie not found!", bad API key) through the
/// `Response` flag instead of the HTTP status.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchResult>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

/// One record of a `?s=` search response.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResult {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "Poster")]
    pub poster: String,
}

impl From<OmdbSearchResult> for MovieSummary {
    fn from(result: OmdbSearchResult) -> Self {
        let poster = present(&result.poster)
            .unwrap_or(PLACEHOLDER_POSTER)
            .to_string();

        MovieSummary {
            imdb_id: result.imdb_id,
            title: result.title,
            year: result.year,
            poster,
            // The search endpoint carries neither rating nor genre; a detail
            // lookup fills these in.
            rating: 0.0,
            genre: GENERIC_GENRE.to_string(),
        }
    }
}

/// A `{Source, Value}` rating pair from the detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbRating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Flat `?i=` detail record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbMovieDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub rated: String,
    #[serde(default)]
    pub released: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub awards: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub ratings: Vec<OmdbRating>,
    #[serde(default)]
    pub metascore: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes", default)]
    pub imdb_votes: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub media_type: String,
    #[serde(rename = "DVD", default)]
    pub dvd: String,
    #[serde(default)]
    pub box_office: String,
    #[serde(default)]
    pub production: String,
    #[serde(default)]
    pub website: String,
    pub response: String,
}

impl OmdbMovieDetail {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

impl From<OmdbMovieDetail> for MovieDetail {
    fn from(detail: OmdbMovieDetail) -> Self {
        let rating = present(&detail.imdb_rating)
            .and_then(|r| r.parse::<f64>().ok())
            .unwrap_or(0.0);

        // The genre field is comma-separated; only the first label is shown.
        let genre = present(&detail.genre)
            .and_then(|g| g.split(',').next())
            .map(|g| g.trim().to_string())
            .unwrap_or_else(|| GENERIC_GENRE.to_string());

        let cast: Vec<String> = present(&detail.actors)
            .map(|actors| {
                actors
                    .split(", ")
                    .take(MAX_CAST)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let plot = present(&detail.plot).unwrap_or(NO_DESCRIPTION).to_string();
        let poster = present(&detail.poster)
            .unwrap_or(PLACEHOLDER_POSTER)
            .to_string();
        let backdrop = present(&detail.poster)
            .unwrap_or(PLACEHOLDER_BACKDROP)
            .to_string();

        MovieDetail {
            imdb_id: detail.imdb_id,
            title: detail.title,
            year: detail.year,
            poster,
            backdrop,
            rating,
            genre,
            description: plot.clone(),
            long_description: plot,
            duration: present(&detail.runtime)
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            director: present(&detail.director)
                .unwrap_or(UNKNOWN_DIRECTOR)
                .to_string(),
            cast,
        }
    }
}
