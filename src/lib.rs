//! # pokedex
//!
//! Pokémon lookup backed by a local SQLite read-through cache of
//! [PokeAPI](https://pokeapi.co/).
//!
//! This facade re-exports the pieces needed to assemble the cache in one
//! place. The workspace crates can also be used directly:
//!
//! - `pokedex_core` - domain types, ports, the read-through service and the
//!   presentation state holder
//! - `pokedex_db` - the SQLite store
//! - `pokedex_api` - the PokeAPI client
//!
//! ```no_run
//! use std::sync::Arc;
//! use pokedex::{DefaultPokeApiClient, PokeApiClientConfig, StoreFactory, database_path, setup_database};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = setup_database(&database_path()?).await?;
//! let api = DefaultPokeApiClient::new(&PokeApiClientConfig::default())?;
//! let service = StoreFactory::build_service(pool, Arc::new(api));
//!
//! let pikachu = service.get("Pikachu").await?;
//! assert_eq!(pikachu.id, 25);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Workspace Crate Re-exports
// =============================================================================

pub use pokedex_api::{DefaultPokeApiClient, PokeApiClientConfig};
pub use pokedex_core::{
    CoreError, ListOrder, PokeApiError, PokeApiPort, PokedexState, PokemonDetail, PokemonRecord,
    PokemonService, PokemonStore, PokemonView, RecordStream, RepositoryError, ViewFidelity,
    database_path, reverse_project,
};
pub use pokedex_db::{SqlitePokemonStore, StoreFactory, setup_database};
