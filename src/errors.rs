//! Error types for movie lookup operations.

use thiserror::Error;

/// Errors that can occur while querying the movie lookup API.
///
/// A successful-but-empty answer from the API is its own variant, distinct
/// from transport and decoding failures: the API reports "no such movie" as a
/// well-formed response carrying its own message.
#[derive(Debug, Error)]
pub enum LookupError {
    /// API answered but reported zero matches for the query.
    #[error("no matches: {message}")]
    NoMatches {
        /// Message from the API payload, or a stock fallback
        message: String,
    },

    /// Network communication failed before a response arrived.
    #[error("network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// Response body could not be decoded.
    #[error("parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },
}
