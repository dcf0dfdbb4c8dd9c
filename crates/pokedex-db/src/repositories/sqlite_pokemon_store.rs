//! `SQLite` implementation of the `PokemonStore` trait.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, SqlitePool};
use tokio::sync::watch;
use tracing::debug;

use pokedex_core::utils::live_query;
use pokedex_core::{ListOrder, PokemonRecord, PokemonStore, RecordStream, RepositoryError};

use super::row_mappers::{POKEMON_SELECT_COLUMNS, escape_like, row_to_record};

/// `SQLite` implementation of the `PokemonStore` trait.
///
/// Clones share the pool and the change notifier, so a live query opened on
/// one clone observes writes made through another.
#[derive(Clone)]
pub struct SqlitePokemonStore {
    pool: SqlitePool,
    revision: Arc<watch::Sender<u64>>,
}

impl SqlitePokemonStore {
    /// Create a new store over a pool whose schema is already set up.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            revision: Arc::new(watch::channel(0).0),
        }
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    /// Run a write, notifying live queries when any row changed.
    async fn execute_write<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Result<u64, RepositoryError> {
        let affected = query
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .rows_affected();

        if affected > 0 {
            self.notify();
        }
        Ok(affected)
    }
}

const fn order_clause(order: ListOrder) -> &'static str {
    match order {
        ListOrder::Unspecified => "",
        ListOrder::ByName => " ORDER BY name ASC",
        ListOrder::ById => " ORDER BY id ASC",
    }
}

async fn select_all(
    pool: &SqlitePool,
    order: ListOrder,
) -> Result<Vec<PokemonRecord>, RepositoryError> {
    let sql = format!(
        "SELECT {POKEMON_SELECT_COLUMNS} FROM pokemons{}",
        order_clause(order)
    );
    let rows = sqlx::query(&sql)
        .fetch_all(pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    rows.iter().map(row_to_record).collect()
}

async fn select_matching(
    pool: &SqlitePool,
    pattern: &str,
) -> Result<Vec<PokemonRecord>, RepositoryError> {
    let sql = format!(
        "SELECT {POKEMON_SELECT_COLUMNS} FROM pokemons \
         WHERE name LIKE '%' || ? || '%' ESCAPE '\\' ORDER BY id ASC"
    );
    let rows = sqlx::query(&sql)
        .bind(pattern)
        .fetch_all(pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    rows.iter().map(row_to_record).collect()
}

#[async_trait]
impl PokemonStore for SqlitePokemonStore {
    async fn upsert(&self, record: &PokemonRecord) -> Result<(), RepositoryError> {
        self.execute_write(
            sqlx::query(
                "INSERT OR REPLACE INTO pokemons (id, name, imageUrl, types, stats) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(record.id)
            .bind(&record.name)
            .bind(&record.image_url)
            .bind(&record.types)
            .bind(&record.stats),
        )
        .await?;

        debug!(id = record.id, name = %record.name, "Upserted pokemon");
        Ok(())
    }

    async fn upsert_many(&self, records: &[PokemonRecord]) -> Result<(), RepositoryError> {
        for record in records {
            self.upsert(record).await?;
        }
        Ok(())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<PokemonRecord>, RepositoryError> {
        let sql = format!("SELECT {POKEMON_SELECT_COLUMNS} FROM pokemons WHERE name = ? LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<PokemonRecord>, RepositoryError> {
        let sql = format!("SELECT {POKEMON_SELECT_COLUMNS} FROM pokemons WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn list(&self, order: ListOrder) -> Result<Vec<PokemonRecord>, RepositoryError> {
        select_all(&self.pool, order).await
    }

    fn watch_all(&self, order: ListOrder) -> RecordStream {
        let pool = self.pool.clone();
        live_query(self.revision.subscribe(), move || {
            let pool = pool.clone();
            async move { select_all(&pool, order).await }
        })
    }

    fn search(&self, query: &str) -> RecordStream {
        let pool = self.pool.clone();
        let pattern = escape_like(query);
        live_query(self.revision.subscribe(), move || {
            let pool = pool.clone();
            let pattern = pattern.clone();
            async move { select_matching(&pool, &pattern).await }
        })
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError> {
        self.execute_write(sqlx::query("DELETE FROM pokemons WHERE name = ?").bind(name))
            .await
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError> {
        self.execute_write(sqlx::query("DELETE FROM pokemons WHERE id = ?").bind(id))
            .await
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        self.execute_write(sqlx::query("DELETE FROM pokemons")).await
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pokemons")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn exists(&self, name: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM pokemons WHERE name = ?)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    }

    async fn all_ids(&self) -> Result<Vec<i64>, RepositoryError> {
        sqlx::query_scalar("SELECT id FROM pokemons ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}
