//! Centralized configuration for Marquee.
//!
//! All tunable parameters and fixed user-facing messages are defined here to
//! avoid hard-coded values scattered throughout the codebase.

use std::time::Duration;

/// Validation message for queries under the minimum length.
pub const QUERY_TOO_SHORT_MESSAGE: &str = "Please enter at least 3 characters to search.";

/// Fallback message when the API reports zero matches without its own error.
pub const NO_MATCHES_MESSAGE: &str = "No movies found.";

/// Generic message for transport or decoding failures during a search.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch movies. Please try again later.";

/// Generic message when the curated default list cannot be loaded.
pub const DEFAULTS_FAILED_MESSAGE: &str = "Failed to load default movies.";

/// Curated titles shown when no search is active, in display order.
///
/// Used verbatim as exact-lookup keys.
pub const FEATURED_TITLES: [&str; 8] = [
    "Inception",
    "The Dark Knight",
    "Pulp Fiction",
    "The Godfather",
    "Interstellar",
    "Fight Club",
    "The Matrix",
    "Goodfellas",
];

/// Tunable parameters for the search controller.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search fires
    pub settle_delay: Duration,
    /// Cap on displayed search results
    pub max_results: usize,
    /// Minimum trimmed query length that qualifies for a remote search
    pub min_query_len: usize,
    /// Titles fetched when the query is empty, in display order
    pub featured_titles: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(500),
            max_results: 8,
            min_query_len: 3,
            featured_titles: FEATURED_TITLES.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}
