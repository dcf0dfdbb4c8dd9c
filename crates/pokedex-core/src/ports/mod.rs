//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Local lookups report absence as `None`, never as an error
//! - Adapters map their own failures into [`RepositoryError`] or [`PokeApiError`]

pub mod pokeapi;
pub mod pokemon_store;

use thiserror::Error;

pub use pokeapi::{PokeApiError, PokeApiPort, PokeApiResult};
pub use pokemon_store::{ListOrder, PokemonStore, RecordStream};

#[cfg(test)]
pub use pokeapi::MockPokeApiPort;

/// Domain-specific errors for local store operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored JSON blob could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Local store operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Fetching and caching a single Pokémon failed.
    #[error("failed to fetch pokemon '{name}': {source}")]
    Fetch {
        name: String,
        #[source]
        source: Box<CoreError>,
    },

    /// Uncached remote lookup (species, evolution chain) failed.
    #[error(transparent)]
    Remote(#[from] PokeApiError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Wrap a failure of the fetch-project-store pipeline for `name`.
    pub fn fetch(name: impl Into<String>, source: impl Into<Self>) -> Self {
        Self::Fetch {
            name: name.into(),
            source: Box::new(source.into()),
        }
    }

    /// The remote error at the root of this error, if any.
    pub fn remote_cause(&self) -> Option<&PokeApiError> {
        match self {
            Self::Remote(err) => Some(err),
            Self::Fetch { source, .. } => source.remote_cause(),
            Self::Repository(_) | Self::Validation(_) => None,
        }
    }
}
