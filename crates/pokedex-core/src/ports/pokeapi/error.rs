//! Error types for PokeAPI port operations.

use thiserror::Error;

/// Errors from PokeAPI port operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these by the
/// adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokeApiError {
    /// Non-success HTTP status (404 for unknown names).
    #[error("HTTP {status} from {url}")]
    Http {
        /// Response status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Body could not be decoded into the expected shape.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error (bad base URL, TLS setup).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl PokeApiError {
    /// Convenience constructor used by fakes and tests.
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::Http {
            status: 404,
            url: url.into(),
        }
    }
}

/// Result type alias for PokeAPI port operations.
pub type PokeApiResult<T> = Result<T, PokeApiError>;
