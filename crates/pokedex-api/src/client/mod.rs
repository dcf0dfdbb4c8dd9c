//! PokeAPI client for Pokémon, species and evolution chain lookups.

mod resources;

use pokedex_core::PokeApiResult;
use url::Url;

use crate::config::PokeApiClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::port::map_error;
use crate::url::parse_base_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default PokeAPI client using the reqwest HTTP backend.
pub type DefaultPokeApiClient = PokeApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the PokeAPI v2 REST API.
///
/// Generic over an HTTP backend so tests can run without a network. External
/// code should use `DefaultPokeApiClient::new()` and talk to it through
/// `PokeApiPort`.
pub struct PokeApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultPokeApiClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with a configuration error if the base URL does not parse or
    /// the HTTP client cannot be built.
    pub fn new(config: &PokeApiClientConfig) -> PokeApiResult<Self> {
        let base_url = parse_base_url(&config.base_url).map_err(map_error)?;
        let backend = ReqwestBackend::new(&config.user_agent).map_err(map_error)?;
        Ok(Self { backend, base_url })
    }

    /// Create a client pointed at the public PokeAPI.
    pub fn default_client() -> PokeApiResult<Self> {
        Self::new(&PokeApiClientConfig::default())
    }
}

impl<B: HttpBackend> PokeApiClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }
}
