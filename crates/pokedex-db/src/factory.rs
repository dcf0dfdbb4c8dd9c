//! Composition utilities for building services with the `SQLite` store.
//!
//! This module is focused purely on construction and should not contain any
//! domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use pokedex_core::ports::PokeApiPort;
use pokedex_core::services::{PokedexState, PokemonService};

use crate::repositories::SqlitePokemonStore;

/// Factory for wiring the `SQLite` store into core services.
pub struct StoreFactory;

impl StoreFactory {
    /// Create the store over a pool from `setup_database()`.
    pub fn store(pool: SqlitePool) -> Arc<SqlitePokemonStore> {
        Arc::new(SqlitePokemonStore::new(pool))
    }

    /// Build the read-through cache from a pool and a remote client.
    pub fn build_service(pool: SqlitePool, api: Arc<dyn PokeApiPort>) -> PokemonService {
        PokemonService::new(Self::store(pool), api)
    }

    /// Build the presentation state holder in one step.
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let state = StoreFactory::build_state(pool, Arc::new(PokeApiClient::new()?));
    /// ```
    pub fn build_state(pool: SqlitePool, api: Arc<dyn PokeApiPort>) -> PokedexState {
        PokedexState::new(Arc::new(Self::build_service(pool, api)))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema and
/// a store over it.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
    store: Arc<SqlitePokemonStore>,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        let store = StoreFactory::store(pool.clone());
        Ok(Self { pool, store })
    }

    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The store over this database. Clones share change notifications.
    pub fn store(&self) -> Arc<SqlitePokemonStore> {
        Arc::clone(&self.store)
    }

    /// Read-through service over this database.
    pub fn service(&self, api: Arc<dyn PokeApiPort>) -> PokemonService {
        PokemonService::new(self.store(), api)
    }
}
