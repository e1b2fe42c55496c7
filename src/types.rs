//! Data types for movie search results.

use serde::{Deserialize, Serialize};

/// Local image shown in place of a poster the API does not have.
pub const POSTER_PLACEHOLDER: &str = "placeholder.png";

/// Marker the OMDb API uses for missing field values.
const NOT_AVAILABLE: &str = "N/A";

/// A single movie record as returned by the lookup API.
///
/// Field names follow the OMDb wire format via serde renames. `Year` stays a
/// raw string because the API returns ranges like "2019-2021" for series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique IMDb identifier
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// Display title
    #[serde(rename = "Title")]
    pub title: String,
    /// Poster URL, or the "N/A" sentinel when the API has no image
    #[serde(rename = "Poster")]
    pub poster: String,
    /// Release year (or range) as reported by the API
    #[serde(rename = "Year")]
    pub year: String,
    /// Primary language; absent from term-search payloads
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
}

impl Movie {
    /// Poster URL if the API provided one.
    pub fn poster_url(&self) -> Option<&str> {
        (self.poster != NOT_AVAILABLE).then_some(self.poster.as_str())
    }

    /// Poster reference for display, substituting the local placeholder for
    /// the "N/A" sentinel. Never yields the literal sentinel string.
    pub fn display_poster(&self) -> &str {
        self.poster_url().unwrap_or(POSTER_PLACEHOLDER)
    }
}

/// Snapshot of the controller's display state.
///
/// The movie list and the error message are mutually exclusive for display;
/// state transitions always replace both together.
#[derive(Debug, Clone, Default)]
pub struct ResultState {
    /// Movies in display order (API order for searches, curated order for
    /// defaults)
    pub movies: Vec<Movie>,
    /// User-facing error message, if the last attempt produced one
    pub error: Option<String>,
    /// True only while a fetch for the active query is in flight
    pub loading: bool,
}

/// Classification of a raw query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// Nothing typed; the curated defaults should be shown.
    Empty,
    /// Below the search threshold; too short to send anywhere.
    TooShort,
    /// Trimmed term ready for a debounced search.
    Ready(String),
}

impl QueryMode {
    /// Classify raw input after trimming. `min_len` is the minimum number of
    /// characters that qualifies for a remote search.
    pub fn classify(raw: &str, min_len: usize) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else if trimmed.chars().count() < min_len {
            Self::TooShort
        } else {
            Self::Ready(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_with_poster(poster: &str) -> Movie {
        Movie {
            imdb_id: "tt1375666".to_string(),
            title: "Inception".to_string(),
            poster: poster.to_string(),
            year: "2010".to_string(),
            language: Some("English".to_string()),
        }
    }

    #[test]
    fn poster_sentinel_maps_to_placeholder() {
        let movie = movie_with_poster("N/A");
        assert_eq!(movie.poster_url(), None);
        assert_eq!(movie.display_poster(), POSTER_PLACEHOLDER);
    }

    #[test]
    fn real_poster_passes_through() {
        let movie = movie_with_poster("https://m.media-amazon.com/inception.jpg");
        assert_eq!(
            movie.display_poster(),
            "https://m.media-amazon.com/inception.jpg"
        );
    }

    #[test]
    fn movie_deserializes_from_omdb_keys() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "imdbID": "tt1375666",
            "Poster": "N/A"
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.imdb_id, "tt1375666");
        assert_eq!(movie.language, None);
    }

    #[test]
    fn classify_trims_before_measuring() {
        assert_eq!(QueryMode::classify("   ", 3), QueryMode::Empty);
        assert_eq!(QueryMode::classify(" in ", 3), QueryMode::TooShort);
        assert_eq!(
            QueryMode::classify("  inception  ", 3),
            QueryMode::Ready("inception".to_string())
        );
    }

    #[test]
    fn classify_boundary_lengths() {
        assert_eq!(QueryMode::classify("", 3), QueryMode::Empty);
        assert_eq!(QueryMode::classify("in", 3), QueryMode::TooShort);
        assert_eq!(
            QueryMode::classify("inc", 3),
            QueryMode::Ready("inc".to_string())
        );
    }
}
