//! Mock lookup implementation for testing.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use parking_lot::Mutex;

#[cfg(test)]
use super::MovieLookup;
#[cfg(test)]
use crate::errors::LookupError;
#[cfg(test)]
use crate::types::Movie;

/// Scripted answer served for every term search.
#[cfg(test)]
#[derive(Debug, Clone)]
pub enum SearchScript {
    /// Return these movies.
    Movies(Vec<Movie>),
    /// Report `Response:"False"` with this API message.
    NoMatches(String),
    /// Fail with a transport error.
    Network,
}

/// Mock lookup for controller tests.
///
/// Serves scripted answers and records every call. Per-title latency lets
/// tests exercise completion-order effects under a paused tokio clock.
#[cfg(test)]
#[derive(Debug)]
pub struct MockLookup {
    search_script: SearchScript,
    titles: HashMap<String, Movie>,
    title_delays: HashMap<String, Duration>,
    fail_titles: bool,
    calls: Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockLookup {
    /// Creates a mock that finds nothing anywhere.
    pub fn new() -> Self {
        Self {
            search_script: SearchScript::Movies(Vec::new()),
            titles: HashMap::new(),
            title_delays: HashMap::new(),
            fail_titles: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock answering every term search with the given movies.
    pub fn with_search_results(movies: Vec<Movie>) -> Self {
        Self::with_search_script(SearchScript::Movies(movies))
    }

    /// Creates a mock with an explicit search script.
    pub fn with_search_script(script: SearchScript) -> Self {
        let mut mock = Self::new();
        mock.search_script = script;
        mock
    }

    /// Replaces the answer served for term searches.
    pub fn set_search_script(&mut self, script: SearchScript) {
        self.search_script = script;
    }

    /// Registers a movie answered for exact lookups of its title.
    pub fn insert_title(&mut self, movie: Movie) {
        self.titles.insert(movie.title.clone(), movie);
    }

    /// Delays exact lookups of `title` by `delay` (virtual time).
    pub fn delay_title(&mut self, title: &str, delay: Duration) {
        self.title_delays.insert(title.to_string(), delay);
    }

    /// Makes every exact lookup fail with a transport error.
    pub fn fail_titles(&mut self) {
        self.fail_titles = true;
    }

    /// Every call made so far, in order, as `s:<term>` / `t:<title>`.
    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Terms passed to `search_by_term`, in order.
    pub fn search_terms(&self) -> Vec<String> {
        self.recorded_calls()
            .into_iter()
            .filter_map(|call| call.strip_prefix("s:").map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
impl Default for MockLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[async_trait]
impl MovieLookup for MockLookup {
    async fn search_by_term(&self, term: &str) -> Result<Vec<Movie>, LookupError> {
        self.calls.lock().push(format!("s:{term}"));

        match &self.search_script {
            SearchScript::Movies(movies) => Ok(movies.clone()),
            SearchScript::NoMatches(message) => Err(LookupError::NoMatches {
                message: message.clone(),
            }),
            SearchScript::Network => Err(LookupError::Network {
                reason: "connection refused".to_string(),
            }),
        }
    }

    async fn fetch_by_title(&self, title: &str) -> Result<Option<Movie>, LookupError> {
        self.calls.lock().push(format!("t:{title}"));

        if let Some(delay) = self.title_delays.get(title) {
            tokio::time::sleep(*delay).await;
        }

        if self.fail_titles {
            return Err(LookupError::Network {
                reason: "connection refused".to_string(),
            });
        }

        Ok(self.titles.get(title).cloned())
    }
}

/// Minimal movie fixture keyed by title.
#[cfg(test)]
pub fn movie(imdb_id: &str, title: &str) -> Movie {
    Movie {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        poster: "N/A".to_string(),
        year: "2010".to_string(),
        language: Some("English".to_string()),
    }
}
