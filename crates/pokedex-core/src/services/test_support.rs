//! In-memory port fakes and fixtures shared by service tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::{
    ApiResource, ChainLink, EvolutionChain, FlavorTextEntry, NamedResource, Pokemon,
    PokemonRecord, PokemonSpecies, Sprites, StatEntry, TypeSlot,
};
use crate::ports::{
    ListOrder, PokeApiError, PokeApiPort, PokeApiResult, PokemonStore, RecordStream,
    RepositoryError,
};
use crate::utils::live_query;

/// Remote record with one type and an `hp` stat.
pub fn pokemon(id: i64, name: &str, type_name: &str) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        height: 7,
        weight: 69,
        is_default: true,
        sprites: Sprites::front_only(format!("https://img.example/{id}.png")),
        species: NamedResource::new(name, format!("https://pokeapi.co/api/v2/pokemon-species/{id}/")),
        types: vec![TypeSlot {
            slot: 1,
            kind: NamedResource::new(type_name, ""),
        }],
        stats: vec![StatEntry {
            base_stat: 45,
            effort: 0,
            stat: NamedResource::new("hp", ""),
        }],
        ..Pokemon::default()
    }
}

pub fn record(id: i64, name: &str) -> PokemonRecord {
    PokemonRecord::from_remote(&pokemon(id, name, "normal")).unwrap_or_else(|e| panic!("{e}"))
}

pub fn species(name: &str, chain_url: Option<&str>, flavor: Option<&str>) -> PokemonSpecies {
    PokemonSpecies {
        name: name.to_string(),
        evolution_chain: chain_url.map(|url| ApiResource { url: url.to_string() }),
        flavor_text_entries: flavor
            .map(|text| FlavorTextEntry {
                flavor_text: text.to_string(),
                language: NamedResource::new("en", ""),
                version: NamedResource::default(),
            })
            .into_iter()
            .collect(),
        ..PokemonSpecies::default()
    }
}

pub fn chain(id: i64, names: &[&str]) -> EvolutionChain {
    let mut link: Option<ChainLink> = None;
    for name in names.iter().rev() {
        link = Some(ChainLink {
            species: NamedResource::new(*name, ""),
            evolves_to: link.into_iter().collect(),
            ..ChainLink::default()
        });
    }
    EvolutionChain {
        id,
        chain: link.unwrap_or_default(),
        ..EvolutionChain::default()
    }
}

/// Remote fake keyed by exact name. Unknown names return HTTP 404.
#[derive(Default)]
pub struct FakeApi {
    pokemon: HashMap<String, Pokemon>,
    species: HashMap<String, PokemonSpecies>,
    chains: HashMap<i64, EvolutionChain>,
    pub pokemon_calls: AtomicUsize,
    pub requested: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_pokemon(mut self, pokemon: Pokemon) -> Self {
        self.pokemon.insert(pokemon.name.clone(), pokemon);
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

    pub fn calls(&self) -> usize {
        self.pokemon_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PokeApiPort for FakeApi {
    async fn fetch_pokemon(&self, name_or_id: &str) -> PokeApiResult<Pokemon> {
        self.pokemon_calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(name_or_id.to_string());
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

/// Store fake backed by a `Vec` in insertion order.
pub struct FakeStore {
    rows: Arc<Mutex<Vec<PokemonRecord>>>,
    revision: watch::Sender<u64>,
    pub fail_writes: AtomicBool,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self {
            rows: Arc::default(),
            revision: watch::channel(0).0,
            fail_writes: AtomicBool::new(false),
        }
    }
}

impl FakeStore {
    pub fn seeded(records: &[PokemonRecord]) -> Self {
        let store = Self::default();
        store.rows.lock().unwrap().extend_from_slice(records);
        store
    }

    fn check_writable(&self) -> Result<(), RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("database is locked".to_string()));
        }
        Ok(())
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }

    fn snapshot(rows: &Mutex<Vec<PokemonRecord>>, order: ListOrder) -> Vec<PokemonRecord> {
        let mut out = rows.lock().unwrap().clone();
        match order {
            ListOrder::Unspecified => {}
            ListOrder::ByName => out.sort_by(|a, b| a.name.cmp(&b.name)),
            ListOrder::ById => out.sort_by_key(|r| r.id),
        }
        out
    }

    fn remove_where(&self, pred: impl Fn(&PokemonRecord) -> bool) -> u64 {
        let removed = {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| !pred(r));
            (before - rows.len()) as u64
        };
        if removed > 0 {
            self.notify();
        }
        removed
    }
}

#[async_trait]
impl PokemonStore for FakeStore {
    async fn upsert(&self, record: &PokemonRecord) -> Result<(), RepositoryError> {
        self.check_writable()?;
        {
            let mut rows = self.rows.lock().unwrap();
            rows.retain(|r| r.id != record.id && r.name != record.name);
            rows.push(record.clone());
        }
        self.notify();
        Ok(())
    }

    async fn upsert_many(&self, records: &[PokemonRecord]) -> Result<(), RepositoryError> {
        for record in records {
            self.upsert(record).await?;
        }
        Ok(())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<PokemonRecord>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.name == name).cloned())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<PokemonRecord>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, order: ListOrder) -> Result<Vec<PokemonRecord>, RepositoryError> {
        Ok(Self::snapshot(&self.rows, order))
    }

    fn watch_all(&self, order: ListOrder) -> RecordStream {
        let rows = Arc::clone(&self.rows);
        live_query(self.revision.subscribe(), move || {
            std::future::ready(Ok(Self::snapshot(&rows, order)))
        })
    }

    fn search(&self, query: &str) -> RecordStream {
        let rows = Arc::clone(&self.rows);
        let query = query.to_string();
        live_query(self.revision.subscribe(), move || {
            let hits = Self::snapshot(&rows, ListOrder::ById)
                .into_iter()
                .filter(|r| r.name.contains(&query))
                .collect();
            std::future::ready(Ok(hits))
        })
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError> {
        self.check_writable()?;
        Ok(self.remove_where(|r| r.name == name))
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError> {
        self.check_writable()?;
        Ok(self.remove_where(|r| r.id == id))
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        self.check_writable()?;
        Ok(self.remove_where(|_| true))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    async fn exists(&self, name: &str) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().any(|r| r.name == name))
    }

    async fn all_ids(&self) -> Result<Vec<i64>, RepositoryError> {
        let mut ids: Vec<i64> = self.rows.lock().unwrap().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
