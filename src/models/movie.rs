use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A movie as it appears in category rows and search results.
///
/// The identifier is the IMDB id assigned by the external metadata API and is
/// treated as an opaque string. Summaries carry a zero rating and a generic
/// genre label because the search endpoint does not return either; both are
/// filled in by a subsequent detail lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    /// Release year as reported upstream. Kept as a string because series
    /// entries use ranges like "2012–2014".
    pub year: String,
    pub poster: String,
    pub rating: f64,
    pub genre: String,
}

/// Full metadata for a single movie, as rendered on a detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    /// Backdrop image for hero layouts. The upstream API only provides a
    /// poster, so this is the poster URL with a wide placeholder fallback.
    pub backdrop: String,
    pub rating: f64,
    pub genre: String,
    pub description: String,
    pub long_description: String,
    pub duration: String,
    pub director: String,
    /// Top-billed cast, at most four names.
    pub cast: Vec<String>,
}

impl MovieDetail {
    /// Projects the detail down to its summary fields.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id.clone(),
            title: self.title.clone(),
            year: self.year.clone(),
            poster: self.poster.clone(),
            rating: self.rating,
            genre: self.genre.clone(),
        }
    }
}

/// Snapshot of the home feed assembled by catalog initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeFeed {
    pub featured: Option<MovieDetail>,
    pub trending: Vec<MovieSummary>,
    pub action: Vec<MovieSummary>,
    pub comedy: Vec<MovieSummary>,
    /// All category entries merged, deduplicated by id (first occurrence wins).
    pub all_movies: Vec<MovieSummary>,
    pub generated_at: DateTime<Utc>,
}
