//! Local store trait definition.
//!
//! This port defines the interface for the single-table Pokémon cache.
//! Implementations must map their internal errors to `RepositoryError`.

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use super::RepositoryError;
use crate::domain::PokemonRecord;

/// Live query result. Emits the current rows immediately, then again after
/// every write to the store. Consecutive writes may coalesce into one item.
pub type RecordStream = BoxStream<'static, Result<Vec<PokemonRecord>, RepositoryError>>;

/// Ordering for full-table listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Whatever order the storage engine returns.
    #[default]
    Unspecified,
    /// Name ascending.
    ByName,
    /// Pokédex id ascending.
    ById,
}

/// Store for cached Pokémon records.
///
/// Names are compared exactly; callers normalize before lookup.
#[async_trait]
pub trait PokemonStore: Send + Sync {
    /// Insert a record, fully replacing any row with the same id or name.
    async fn upsert(&self, record: &PokemonRecord) -> Result<(), RepositoryError>;

    /// Upsert each record in turn. Not atomic: rows written before a failure
    /// stay written.
    async fn upsert_many(&self, records: &[PokemonRecord]) -> Result<(), RepositoryError>;

    async fn get_by_name(&self, name: &str) -> Result<Option<PokemonRecord>, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<PokemonRecord>, RepositoryError>;

    /// One-shot snapshot of every row.
    async fn list(&self, order: ListOrder) -> Result<Vec<PokemonRecord>, RepositoryError>;

    /// Live view of every row.
    fn watch_all(&self, order: ListOrder) -> RecordStream;

    /// Live view of rows whose name contains `query` (unanchored, literal).
    fn search(&self, query: &str) -> RecordStream;

    /// Returns the number of rows removed.
    async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError>;

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError>;

    async fn delete_all(&self) -> Result<u64, RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;

    async fn exists(&self, name: &str) -> Result<bool, RepositoryError>;

    /// Every cached id, ascending.
    async fn all_ids(&self) -> Result<Vec<i64>, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn PokemonStore>) {}

    #[test]
    fn test_default_order_is_unspecified() {
        assert_eq!(ListOrder::default(), ListOrder::Unspecified);
    }
}
