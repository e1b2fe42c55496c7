//! Marquee - Debounced movie search

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Drives the query-to-results flow of a movie search front end: classifies
//! user input, debounces remote searches against the OMDb API, and maintains
//! a single result-state snapshot for rendering.

pub mod config;
pub mod controller;
pub mod errors;
pub mod lookup;
pub mod types;

// Re-export main types
pub use config::SearchConfig;
pub use controller::SearchController;
pub use errors::LookupError;
pub use lookup::{MovieLookup, OmdbLookup};
pub use types::{Movie, QueryMode, ResultState};

/// Convenience type alias for Results with LookupError.
pub type Result<T> = std::result::Result<T, LookupError>;
