//! Pokémon service - the read-through cache over the local store and PokeAPI.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::{
    EvolutionChain, Pokemon, PokemonRecord, PokemonSpecies, PokemonView, normalize_name,
    reverse_project,
};
use crate::ports::{
    CoreError, ListOrder, PokeApiError, PokeApiPort, PokemonStore, RecordStream, RepositoryError,
};

/// Read-through cache for Pokémon records.
///
/// Lookups by name are served from the local store when the row exists and
/// otherwise fetched from PokeAPI, projected and written back. Cached rows are
/// never revalidated; they leave the cache only through explicit deletion.
///
/// Names are normalized (trimmed and lowercased) here, before they reach
/// either port.
pub struct PokemonService {
    store: Arc<dyn PokemonStore>,
    api: Arc<dyn PokeApiPort>,
}

impl PokemonService {
    pub fn new(store: Arc<dyn PokemonStore>, api: Arc<dyn PokeApiPort>) -> Self {
        Self { store, api }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read-through
    // ─────────────────────────────────────────────────────────────────────────

    /// Get a Pokémon by name, from the cache if present, else from PokeAPI.
    ///
    /// A purely numeric key is looked up in the cache by id, since rows are
    /// stored under the remote name.
    pub async fn get(&self, name: &str) -> Result<PokemonRecord, CoreError> {
        let name = validated_name(name)?;

        let cached = match name.parse::<i64>() {
            Ok(id) => self.store.get_by_id(id).await?,
            Err(_) => self.store.get_by_name(&name).await?,
        };
        if let Some(record) = cached {
            debug!(name = %name, id = record.id, "Cache hit");
            return Ok(record);
        }

        debug!(name = %name, "Cache miss, fetching from PokeAPI");
        self.fetch_and_save_normalized(&name).await.map(|(record, _)| record)
    }

    /// Fetch from PokeAPI and write the projection, replacing any cached row.
    pub async fn fetch_and_save(&self, name: &str) -> Result<PokemonRecord, CoreError> {
        self.fetch_fresh(name).await.map(|(record, _)| record)
    }

    /// Like [`Self::fetch_and_save`], also returning a full-fidelity view of
    /// the remote record.
    pub async fn fetch_fresh(&self, name: &str) -> Result<(PokemonRecord, PokemonView), CoreError> {
        let name = validated_name(name)?;
        self.fetch_and_save_normalized(&name).await
    }

    /// Fetch and save each name in order, skipping failures.
    ///
    /// Always goes to the remote, so existing rows are refreshed. Returns the
    /// records that succeeded, in input order. Never fails as a whole.
    pub async fn fetch_many<S: AsRef<str>>(&self, names: &[S]) -> Vec<PokemonRecord> {
        let mut saved = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            match self.fetch_and_save(name).await {
                Ok(record) => saved.push(record),
                Err(e) => warn!(name = %name, error = %e, "Skipping pokemon that failed to load"),
            }
        }

        info!(
            requested = names.len(),
            saved = saved.len(),
            "Batch fetch finished"
        );
        saved
    }

    async fn fetch_and_save_normalized(
        &self,
        name: &str,
    ) -> Result<(PokemonRecord, PokemonView), CoreError> {
        self.fetch_project_store(name)
            .await
            .map_err(|e| CoreError::fetch(name, e))
    }

    async fn fetch_project_store(
        &self,
        name: &str,
    ) -> Result<(PokemonRecord, PokemonView), CoreError> {
        let pokemon: Pokemon = self.api.fetch_pokemon(name).await?;
        check_identity(&pokemon)?;
        let record = PokemonRecord::from_remote(&pokemon)?;
        self.store.upsert(&record).await?;

        info!(name = %record.name, id = record.id, "Saved pokemon to local cache");
        Ok((record, PokemonView::from_remote(&pokemon)))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Uncached remote lookups
    // ─────────────────────────────────────────────────────────────────────────

    /// Species data for the detail view. Not cached.
    pub async fn species_details(&self, name: &str) -> Result<PokemonSpecies, CoreError> {
        let name = validated_name(name)?;
        self.api.fetch_species(&name).await.map_err(|e| {
            error!(name = %name, error = %e, "Failed to fetch species");
            CoreError::from(e)
        })
    }

    /// Evolution chain by id. Not cached.
    pub async fn evolution_chain(&self, id: i64) -> Result<EvolutionChain, CoreError> {
        self.api.fetch_evolution_chain(id).await.map_err(|e| {
            error!(chain_id = id, error = %e, "Failed to fetch evolution chain");
            CoreError::from(e)
        })
    }

    /// Lossy display view of a cached record.
    pub fn view(&self, record: &PokemonRecord) -> Result<PokemonView, RepositoryError> {
        reverse_project(record)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Local-only operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Cached row for `name`, without falling back to the remote.
    pub async fn get_local(&self, name: &str) -> Result<Option<PokemonRecord>, CoreError> {
        let name = validated_name(name)?;
        self.store.get_by_name(&name).await.map_err(CoreError::from)
    }

    pub async fn get_local_by_id(&self, id: i64) -> Result<Option<PokemonRecord>, CoreError> {
        self.store.get_by_id(id).await.map_err(CoreError::from)
    }

    pub async fn is_saved_locally(&self, name: &str) -> Result<bool, CoreError> {
        let name = validated_name(name)?;
        self.store.exists(&name).await.map_err(CoreError::from)
    }

    pub async fn local_count(&self) -> Result<u64, CoreError> {
        self.store.count().await.map_err(CoreError::from)
    }

    pub async fn list_local(&self, order: ListOrder) -> Result<Vec<PokemonRecord>, CoreError> {
        self.store.list(order).await.map_err(CoreError::from)
    }

    /// Live view of the whole cache.
    pub fn watch_local(&self, order: ListOrder) -> RecordStream {
        self.store.watch_all(order)
    }

    /// Live substring search over cached names. The query is lowercased.
    pub fn search_local(&self, query: &str) -> RecordStream {
        self.store.search(&query.trim().to_lowercase())
    }

    pub async fn cached_ids(&self) -> Result<Vec<i64>, CoreError> {
        self.store.all_ids().await.map_err(CoreError::from)
    }

    /// Remove a cached row by name. Returns the number of rows removed.
    pub async fn delete(&self, name: &str) -> Result<u64, CoreError> {
        let name = validated_name(name)?;
        let removed = self.store.delete_by_name(&name).await?;
        debug!(name = %name, removed, "Deleted cached pokemon");
        Ok(removed)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64, CoreError> {
        self.store.delete_by_id(id).await.map_err(CoreError::from)
    }

    pub async fn delete_all(&self) -> Result<u64, CoreError> {
        let removed = self.store.delete_all().await?;
        info!(removed, "Cleared local cache");
        Ok(removed)
    }
}

fn validated_name(raw: &str) -> Result<String, CoreError> {
    let name = normalize_name(raw);
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Pokémon name cannot be empty".to_string(),
        ));
    }
    Ok(name)
}

/// Reject remote records that cannot be keyed in the cache.
fn check_identity(pokemon: &Pokemon) -> Result<(), PokeApiError> {
    if pokemon.id <= 0 || pokemon.name.trim().is_empty() {
        return Err(PokeApiError::InvalidResponse {
            message: format!(
                "pokemon record without identity (id {}, name {:?})",
                pokemon.id, pokemon.name
            ),
        });
    }
    Ok(())
}
