//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Database pool and store (via pokedex-db)
//! - PokeAPI client (via pokedex-api)
//! - Service and state holder (via pokedex-core)

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use pokedex_api::{DefaultPokeApiClient, PokeApiClientConfig};
use pokedex_core::{PokedexState, PokemonService, database_path};
use pokedex_db::{StoreFactory, setup_database};
use tracing::debug;

use crate::error::CliError;

/// Environment variable overriding the PokeAPI base URL.
pub const API_BASE_URL_ENV: &str = "POKEAPI_BASE_URL";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// SQLite database file.
    pub database_path: PathBuf,
    /// PokeAPI client settings.
    pub api: PokeApiClientConfig,
}

impl CliConfig {
    /// Resolve config from the environment, preferring an explicit database path.
    pub fn with_defaults(database_override: Option<PathBuf>) -> Result<Self> {
        let database_path = match database_override {
            Some(path) => path,
            None => database_path().map_err(CliError::from)?,
        };

        Ok(Self {
            database_path,
            api: PokeApiClientConfig::new().with_optional_base_url(env::var(API_BASE_URL_ENV).ok()),
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    state: PokedexState,
}

impl CliContext {
    /// The presentation state holder handlers drive.
    pub const fn state(&self) -> &PokedexState {
        &self.state
    }

    /// The read-through service behind the state holder.
    pub fn service(&self) -> &PokemonService {
        self.state.service()
    }
}

/// Bootstrap the CLI application.
///
/// Opens (and if needed creates) the database, builds the PokeAPI client and
/// assembles the state holder over them.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    debug!(
        database = %config.database_path.display(),
        api = config.api.base_url(),
        "Bootstrapping"
    );

    let pool = setup_database(&config.database_path).await?;
    let api = DefaultPokeApiClient::new(&config.api)
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(CliContext {
        state: StoreFactory::build_state(pool, Arc::new(api)),
    })
}

/// Bootstrap over an already-built service (for testing).
pub fn bootstrap_with(service: PokemonService) -> CliContext {
    CliContext {
        state: PokedexState::new(Arc::new(service)),
    }
}
