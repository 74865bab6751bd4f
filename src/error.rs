//! Error types for adapter operations.
//!
//! Only two error classes exist: transport failures and non-success
//! backend responses. A well-formed success response that lacks the
//! expected field is never an error; the operations surface it as an
//! absent or empty result instead.

use thiserror::Error;

/// The error type for all adapter operations.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The request could not be sent or the response could not be read.
    #[error("transport error: {source}")]
    Transport {
        /// The underlying client error.
        #[from]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("backend error ({status}): {body}")]
    Backend {
        /// The HTTP status code.
        status: u16,
        /// The backend's raw error payload, or the status line when the
        /// body could not be read.
        body: String,
    },
}

/// Result type alias for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
