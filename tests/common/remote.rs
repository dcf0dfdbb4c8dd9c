//! Scriptable in-memory PokeAPI.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use pokedex_core::{
    EvolutionChain, PokeApiError, PokeApiPort, PokeApiResult, Pokemon, PokemonSpecies,
};

/// Serves canned records and counts every `fetch_pokemon` call.
#[derive(Default)]
pub struct ScriptedApi {
    pokemon: HashMap<String, Pokemon>,
    species: HashMap<String, PokemonSpecies>,
    chains: HashMap<i64, EvolutionChain>,
    pokemon_requests: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn with_pokemon(mut self, pokemon: Pokemon) -> Self {
        self.pokemon.insert(pokemon.name.clone(), pokemon);
        self
    }

    /// Serve `pokemon` for `key` regardless of its own name.
    pub fn with_pokemon_at(mut self, key: &str, pokemon: Pokemon) -> Self {
        self.pokemon.insert(key.to_string(), pokemon);
        self
    }

    pub fn with_species(mut self, species: PokemonSpecies) -> Self {
        self.species.insert(species.name.clone(), species);
        self
    }

    pub fn with_chain(mut self, chain: EvolutionChain) -> Self {
        self.chains.insert(chain.id, chain);
        self
    }

    /// Names passed to `fetch_pokemon`, in call order.
    pub fn pokemon_requests(&self) -> Vec<String> {
        self.pokemon_requests.lock().unwrap().clone()
    }

    pub fn pokemon_calls(&self) -> usize {
        self.pokemon_requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PokeApiPort for ScriptedApi {
    async fn fetch_pokemon(&self, name_or_id: &str) -> PokeApiResult<Pokemon> {
        self.pokemon_requests
            .lock()
            .unwrap()
            .push(name_or_id.to_string());

        self.pokemon
            .get(name_or_id)
            .cloned()
            .ok_or_else(|| PokeApiError::not_found(format!("pokemon/{name_or_id}")))
    }

    async fn fetch_species(&self, name_or_id: &str) -> PokeApiResult<PokemonSpecies> {
        self.species
            .get(name_or_id)
            .cloned()
            .ok_or_else(|| PokeApiError::not_found(format!("pokemon-species/{name_or_id}")))
    }

    async fn fetch_evolution_chain(&self, id: i64) -> PokeApiResult<EvolutionChain> {
        self.chains
            .get(&id)
            .cloned()
            .ok_or_else(|| PokeApiError::not_found(format!("evolution-chain/{id}")))
    }
}
