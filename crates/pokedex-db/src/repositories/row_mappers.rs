//! Row mapping helpers for `SQLite` queries.

use pokedex_core::{PokemonRecord, RepositoryError};
use sqlx::Row;

/// Shared SELECT column list for pokemon queries.
pub const POKEMON_SELECT_COLUMNS: &str = "id, name, imageUrl, types, stats";

/// Parse a database row into a `PokemonRecord`.
pub fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<PokemonRecord, RepositoryError> {
    Ok(PokemonRecord {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        image_url: row
            .try_get("imageUrl")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        types: row
            .try_get("types")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        stats: row
            .try_get("stats")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}

/// Escape `LIKE` wildcards so the query matches literally (escape char `\`).
pub fn escape_like(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
