//! Lookup backends for the movie search controller.

use async_trait::async_trait;

use crate::errors::LookupError;
use crate::types::Movie;

pub mod mock;
pub mod omdb;

#[cfg(test)]
pub use mock::MockLookup;
pub use omdb::OmdbLookup;

/// Trait for movie lookup backends.
///
/// Implementations answer free-text searches and exact-title lookups
/// (the OMDb API in production, scripted data in tests).
#[async_trait]
pub trait MovieLookup: Send + Sync + std::fmt::Debug {
    /// Search for movies matching a free-text term.
    ///
    /// # Errors
    /// - `LookupError::NoMatches` - API reported zero matches for the term
    /// - `LookupError::Network` - Network connectivity issues
    /// - `LookupError::Parse` - Response body could not be decoded
    async fn search_by_term(&self, term: &str) -> Result<Vec<Movie>, LookupError>;

    /// Fetch the single best match for an exact title.
    ///
    /// Returns `Ok(None)` when the API knows no movie by that title; this is
    /// a normal answer, not an error.
    ///
    /// # Errors
    /// - `LookupError::Network` - Network connectivity issues
    /// - `LookupError::Parse` - Response body could not be decoded
    async fn fetch_by_title(&self, title: &str) -> Result<Option<Movie>, LookupError>;
}
