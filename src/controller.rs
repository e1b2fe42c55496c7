//! Search controller: query state machine and debounced lookups.
//!
//! One controller per search box. Every query edit lands in
//! [`SearchController::on_query_change`], which either reloads the curated
//! defaults, rejects the input as too short, or arms the settle timer for a
//! remote search.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::{
    DEFAULTS_FAILED_MESSAGE, NO_MATCHES_MESSAGE, QUERY_TOO_SHORT_MESSAGE, SEARCH_FAILED_MESSAGE,
    SearchConfig,
};
use crate::errors::LookupError;
use crate::lookup::MovieLookup;
use crate::types::{QueryMode, ResultState};

/// Drives the search-input-to-results flow.
///
/// Owns the current query text, the single settle timer, and the shared
/// result state that a front end renders from.
#[derive(Debug)]
pub struct SearchController {
    lookup: Arc<dyn MovieLookup>,
    config: SearchConfig,
    state: Arc<Mutex<ResultState>>,
    query: String,
    settle_timer: Option<JoinHandle<()>>,
}

impl SearchController {
    /// Create a controller over the given lookup backend.
    ///
    /// The initial state is empty; callers typically follow up with
    /// [`SearchController::load_defaults`] to populate the curated list.
    pub fn new(lookup: Arc<dyn MovieLookup>, config: SearchConfig) -> Self {
        Self {
            lookup,
            config,
            state: Arc::new(Mutex::new(ResultState::default())),
            query: String::new(),
            settle_timer: None,
        }
    }

    /// Snapshot of the current display state.
    pub fn state(&self) -> ResultState {
        self.state.lock().clone()
    }

    /// Query text as last entered, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// React to a change of the query text.
    ///
    /// Empty input reloads the curated defaults immediately. Input under the
    /// minimum length sets a fixed validation error without any network
    /// call. Anything longer (re)arms the settle timer; the search fires only
    /// once the input has been quiet for the configured delay, so rapid edits
    /// collapse into a single call for the final term.
    pub async fn on_query_change(&mut self, new_text: &str) {
        self.query = new_text.to_string();
        self.cancel_settle_timer();

        match QueryMode::classify(new_text, self.config.min_query_len) {
            QueryMode::Empty => self.load_defaults().await,
            QueryMode::TooShort => {
                debug!("query below minimum length, skipping search");
                let mut state = self.state.lock();
                state.movies.clear();
                state.error = Some(QUERY_TOO_SHORT_MESSAGE.to_string());
            }
            QueryMode::Ready(term) => {
                let lookup = Arc::clone(&self.lookup);
                let state = Arc::clone(&self.state);
                let delay = self.config.settle_delay;
                let max_results = self.config.max_results;

                // Deadline is anchored here, at the keystroke, not at the
                // spawned task's first poll.
                let settle = tokio::time::sleep(delay);
                self.settle_timer = Some(tokio::spawn(async move {
                    settle.await;
                    // Detached so that cancelling a later timer can never
                    // abort a search that already fired. In-flight responses
                    // carry no staleness guard: a slow superseded search can
                    // still overwrite a faster newer one.
                    tokio::spawn(run_search(lookup, state, term, max_results));
                }));
            }
        }
    }

    /// Fetch the curated default titles and publish them in curated order.
    ///
    /// All lookups run concurrently; the state updates once, after the last
    /// one completes, keyed to the curated order rather than completion
    /// order. Titles the API does not know are dropped silently. Any
    /// transport or parse failure discards the whole load.
    pub async fn load_defaults(&self) {
        self.state.lock().loading = true;

        let lookups = self
            .config
            .featured_titles
            .iter()
            .map(|title| self.lookup.fetch_by_title(title));
        let results = futures::future::join_all(lookups).await;

        let mut state = self.state.lock();
        state.loading = false;
        match results.into_iter().collect::<Result<Vec<_>, _>>() {
            Ok(found) => {
                state.movies = found.into_iter().flatten().collect();
                state.error = None;
            }
            Err(error) => {
                warn!(%error, "default movie load failed");
                state.movies.clear();
                state.error = Some(DEFAULTS_FAILED_MESSAGE.to_string());
            }
        }
    }

    fn cancel_settle_timer(&mut self) {
        if let Some(timer) = self.settle_timer.take() {
            timer.abort();
        }
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.cancel_settle_timer();
    }
}

/// Execute one settled search and publish the outcome.
async fn run_search(
    lookup: Arc<dyn MovieLookup>,
    state: Arc<Mutex<ResultState>>,
    term: String,
    max_results: usize,
) {
    state.lock().loading = true;

    let outcome = lookup.search_by_term(&term).await;

    let mut state = state.lock();
    state.loading = false;
    match outcome {
        Ok(movies) if !movies.is_empty() => {
            debug!(%term, count = movies.len(), "search returned matches");
            state.movies = movies;
            state.movies.truncate(max_results);
            state.error = None;
        }
        Ok(_) => {
            state.movies.clear();
            state.error = Some(NO_MATCHES_MESSAGE.to_string());
        }
        Err(LookupError::NoMatches { message }) => {
            state.movies.clear();
            state.error = Some(message);
        }
        Err(error) => {
            warn!(%error, %term, "search failed");
            state.movies.clear();
            state.error = Some(SEARCH_FAILED_MESSAGE.to_string());
        }
    }
}
