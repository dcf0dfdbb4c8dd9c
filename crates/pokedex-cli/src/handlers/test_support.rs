//! Context builders for handler tests.

use std::sync::Arc;

use async_trait::async_trait;
use pokedex_core::{
    EvolutionChain, NamedResource, PokeApiError, PokeApiPort, PokeApiResult, Pokemon,
    PokemonSpecies, Sprites, StatEntry, TypeSlot,
};
use pokedex_db::TestDb;

use crate::bootstrap::{CliContext, bootstrap_with};

/// Answers `fetch_pokemon` for a fixed set of names; everything else is 404.
pub struct StubApi {
    known: Vec<(i64, &'static str)>,
}

impl StubApi {
    pub fn new(known: &[(i64, &'static str)]) -> Self {
        Self {
            known: known.to_vec(),
        }
    }
}

#[async_trait]
impl PokeApiPort for StubApi {
    async fn fetch_pokemon(&self, name_or_id: &str) -> PokeApiResult<Pokemon> {
        let (id, name) = self
            .known
            .iter()
            .find(|(_, name)| *name == name_or_id)
            .copied()
            .ok_or_else(|| PokeApiError::not_found(format!("pokemon/{name_or_id}")))?;

        Ok(Pokemon {
            id,
            name: name.to_string(),
            sprites: Sprites::front_only(format!("https://img.example/{id}.png")),
            types: vec![TypeSlot {
                slot: 1,
                kind: NamedResource::new("normal", ""),
            }],
            stats: vec![StatEntry {
                base_stat: 50,
                effort: 0,
                stat: NamedResource::new("hp", ""),
            }],
            ..Pokemon::default()
        })
    }

    async fn fetch_species(&self, name_or_id: &str) -> PokeApiResult<PokemonSpecies> {
        Err(PokeApiError::not_found(format!("pokemon-species/{name_or_id}")))
    }

    async fn fetch_evolution_chain(&self, id: i64) -> PokeApiResult<EvolutionChain> {
        Err(PokeApiError::not_found(format!("evolution-chain/{id}")))
    }
}

/// A context over a fresh in-memory database. Keep the `TestDb` alive.
pub async fn context(known: &[(i64, &'static str)]) -> (CliContext, TestDb) {
    let db = TestDb::new().await.unwrap();
    let ctx = bootstrap_with(db.service(Arc::new(StubApi::new(known))));
    (ctx, db)
}
