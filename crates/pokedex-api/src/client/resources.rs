//! Resource lookups against PokeAPI.

use pokedex_core::{EvolutionChain, Pokemon, PokemonSpecies};
use tracing::debug;

use super::PokeApiClient;
use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::url::{build_evolution_chain_url, build_pokemon_url, build_species_url};

impl<B: HttpBackend> PokeApiClient<B> {
    /// GET `pokemon/{name_or_id}`.
    pub(crate) async fn get_pokemon(&self, name_or_id: &str) -> ApiResult<Pokemon> {
        let url = build_pokemon_url(&self.base_url, name_or_id)?;
        let pokemon: Pokemon = self.backend.get_json(&url).await?;
        debug!(id = pokemon.id, name = %pokemon.name, "Fetched pokemon");
        Ok(pokemon)
    }

    /// GET `pokemon-species/{name_or_id}`.
    pub(crate) async fn get_species(&self, name_or_id: &str) -> ApiResult<PokemonSpecies> {
        let url = build_species_url(&self.base_url, name_or_id)?;
        self.backend.get_json(&url).await
    }

    /// GET `evolution-chain/{id}`.
    pub(crate) async fn get_evolution_chain(&self, id: i64) -> ApiResult<EvolutionChain> {
        let url = build_evolution_chain_url(&self.base_url, id)?;
        self.backend.get_json(&url).await
    }
}
