pub mod movie;
pub mod omdb;

pub use movie::{HomeFeed, MovieDetail, MovieSummary};
pub use omdb::{
    OmdbMovieDetail, OmdbRating, OmdbSearchResponse, OmdbSearchResult, GENERIC_GENRE, MAX_CAST,
    PLACEHOLDER_BACKDROP, PLACEHOLDER_POSTER,
};
