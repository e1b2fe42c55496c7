//! OMDb-backed movie lookup.
//!
//! One HTTP GET per operation: `s=<term>&page=1` for term searches,
//! `t=<title>` for exact lookups. For production use, set the OMDB_API_KEY
//! environment variable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MovieLookup;
use crate::config::NO_MATCHES_MESSAGE;
use crate::errors::LookupError;
use crate::types::Movie;

const OMDB_ENDPOINT: &str = "https://www.omdbapi.com/";

/// Movie lookup backed by the OMDb HTTP API.
#[derive(Debug, Clone)]
pub struct OmdbLookup {
    client: reqwest::Client,
    api_key: Option<String>,
}

/// OMDb answer to a term search (`s=`).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Search")]
    search: Option<Vec<Movie>>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// OMDb answer to an exact-title lookup (`t=`): movie fields and status
/// fields arrive in one flat object, everything optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OmdbTitleResponse {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Language")]
    language: Option<String>,
}

impl OmdbLookup {
    /// Create a lookup reading the API key from the OMDB_API_KEY environment
    /// variable. The free tier answers a limited number of requests per day
    /// without a key.
    pub fn new() -> Self {
        Self::with_api_key(std::env::var("OMDB_API_KEY").ok())
    }

    /// Create a lookup with an explicit API key.
    ///
    /// Allows configuration-driven credentials instead of the environment.
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    fn url(&self, params: &str) -> String {
        match &self.api_key {
            Some(key) => format!("{OMDB_ENDPOINT}?apikey={key}&{params}"),
            None => format!("{OMDB_ENDPOINT}?{params}"),
        }
    }
}

impl Default for OmdbLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieLookup for OmdbLookup {
    async fn search_by_term(&self, term: &str) -> Result<Vec<Movie>, LookupError> {
        let url = self.url(&format!("s={}&page=1", urlencoding::encode(term)));
        debug!(term, "searching OMDb");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| LookupError::Network {
                    reason: format!("HTTP request failed: {e}"),
                })?;

        let payload: OmdbSearchResponse =
            response.json().await.map_err(|e| LookupError::Parse {
                reason: format!("JSON parsing failed: {e}"),
            })?;

        decode_search(payload)
    }

    async fn fetch_by_title(&self, title: &str) -> Result<Option<Movie>, LookupError> {
        let url = self.url(&format!("t={}", urlencoding::encode(title)));
        debug!(title, "fetching OMDb title");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| LookupError::Network {
                    reason: format!("HTTP request failed: {e}"),
                })?;

        let payload: OmdbTitleResponse =
            response.json().await.map_err(|e| LookupError::Parse {
                reason: format!("JSON parsing failed: {e}"),
            })?;

        decode_title(payload)
    }
}

/// Map a search payload to its match list. `Response:"False"` is a
/// no-matches answer carrying the API's own message when present.
fn decode_search(payload: OmdbSearchResponse) -> Result<Vec<Movie>, LookupError> {
    if payload.response.as_deref() == Some("False") {
        return Err(LookupError::NoMatches {
            message: payload
                .error
                .unwrap_or_else(|| NO_MATCHES_MESSAGE.to_string()),
        });
    }

    Ok(payload.search.unwrap_or_default())
}

/// Map an exact-lookup payload to a movie. Only an explicit `Response:"True"`
/// counts as a hit; not-found and payloads without a status both map to
/// `Ok(None)`, never an error. The caller decides whether absence matters.
fn decode_title(payload: OmdbTitleResponse) -> Result<Option<Movie>, LookupError> {
    if payload.response.as_deref() != Some("True") {
        return Ok(None);
    }

    let (Some(imdb_id), Some(title)) = (payload.imdb_id, payload.title) else {
        return Err(LookupError::Parse {
            reason: "title payload missing imdbID or Title".to_string(),
        });
    };

    Ok(Some(Movie {
        imdb_id,
        title,
        poster: payload.poster.unwrap_or_else(|| "N/A".to_string()),
        year: payload.year.unwrap_or_else(|| "N/A".to_string()),
        language: payload.language,
    }))
}
