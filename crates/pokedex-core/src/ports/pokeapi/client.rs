//! PokeAPI client port trait.

use async_trait::async_trait;

use super::error::PokeApiResult;
use crate::domain::{EvolutionChain, Pokemon, PokemonSpecies};

/// Port trait for read-only PokeAPI lookups.
///
/// # Design
///
/// - Returns the lenient domain DTOs; unknown fields are dropped by the adapter
/// - Every method is an idempotent GET with no retry
/// - Callers do not distinguish failure kinds beyond logging them
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokeApiPort: Send + Sync {
    /// Fetch a Pokémon by lowercase name or numeric id.
    async fn fetch_pokemon(&self, name_or_id: &str) -> PokeApiResult<Pokemon>;

    /// Fetch species data by lowercase name or numeric id.
    async fn fetch_species(&self, name_or_id: &str) -> PokeApiResult<PokemonSpecies>;

    /// Fetch an evolution chain by its numeric id.
    async fn fetch_evolution_chain(&self, id: i64) -> PokeApiResult<EvolutionChain>;
}
