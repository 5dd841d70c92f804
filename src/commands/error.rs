//! Remote store errors.

use thiserror::Error;

/// Common result type for remote store operations
pub type StoreResult<T> = Result<T, NetworkError>;

/// Failure of a remote call: transport, non-2xx status, or unreadable body
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
