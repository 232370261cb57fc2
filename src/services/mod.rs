pub mod catalog;
pub mod providers;
pub mod search;

pub use catalog::CatalogService;
pub use providers::MovieProvider;
pub use search::{SearchSession, SearchState};
