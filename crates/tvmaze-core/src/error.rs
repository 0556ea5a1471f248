//! Error types for TVMaze lookups
//!
//! Every failure of a lookup is a `RemoteFetchError`: the request could not be sent,
//! the catalog answered with a non-success status, or the body did not match the
//! expected shape. RemoteFetchError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for catalog lookups
#[derive(Error, Debug)]
pub enum RemoteFetchError {
    /// HTTP request failed (connection, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog answered 404 for the requested resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// Catalog answered with any other non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body did not match the expected schema
    #[error("Malformed response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Base URL or endpoint could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl RemoteFetchError {
    /// HTTP status carried by the error, if the catalog answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Decode { .. } | Self::InvalidUrl(_) => None,
        }
    }
}

/// Serialize RemoteFetchError as a string for Tauri compatibility
impl Serialize for RemoteFetchError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, RemoteFetchError>;
