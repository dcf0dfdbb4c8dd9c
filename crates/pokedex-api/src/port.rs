//! `PokeApiPort` implementation for `PokeApiClient`.
//!
//! Internal `ApiError`s are mapped to the core-owned `PokeApiError` here so
//! reqwest and serde types never leak past the adapter.

use async_trait::async_trait;
use pokedex_core::{EvolutionChain, PokeApiError, PokeApiPort, PokeApiResult, Pokemon, PokemonSpecies};

use crate::client::PokeApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `PokeApiError`.
pub(crate) fn map_error(err: ApiError) -> PokeApiError {
    match err {
        ApiError::ApiRequestFailed { status, url } => PokeApiError::Http { status, url },
        // Builder failures are setup problems, not connectivity ones
        ApiError::Network(e) if e.is_builder() => PokeApiError::Configuration {
            message: e.to_string(),
        },
        ApiError::Network(e) if e.is_decode() => PokeApiError::InvalidResponse {
            message: e.to_string(),
        },
        ApiError::Network(e) => PokeApiError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => PokeApiError::Configuration {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => PokeApiError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> PokeApiPort for PokeApiClient<B> {
    async fn fetch_pokemon(&self, name_or_id: &str) -> PokeApiResult<Pokemon> {
        self.get_pokemon(name_or_id).await.map_err(map_error)
    }

    async fn fetch_species(&self, name_or_id: &str) -> PokeApiResult<PokemonSpecies> {
        self.get_species(name_or_id).await.map_err(map_error)
    }

    async fn fetch_evolution_chain(&self, id: i64) -> PokeApiResult<EvolutionChain> {
        self.get_evolution_chain(id).await.map_err(map_error)
    }
}
