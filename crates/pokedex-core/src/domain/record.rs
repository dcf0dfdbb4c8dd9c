//! Persisted projection of a remote Pokémon.

use serde::{Deserialize, Serialize};

use super::remote::{Pokemon, StatEntry, TypeSlot};
use crate::ports::RepositoryError;

/// One cached row. `types` and `stats` hold the remote lists as JSON text
/// and are decoded on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub types: String,
    pub stats: String,
}

impl PokemonRecord {
    /// Project a fresh remote record into its persisted form.
    ///
    /// The name is lowercased so later lookups by normalized name hit.
    pub fn from_remote(pokemon: &Pokemon) -> Result<Self, RepositoryError> {
        Ok(Self {
            id: pokemon.id,
            name: pokemon.name.to_lowercase(),
            image_url: pokemon.sprites.front_default.clone(),
            types: encode(&pokemon.types)?,
            stats: encode(&pokemon.stats)?,
        })
    }

    pub fn decode_types(&self) -> Result<Vec<TypeSlot>, RepositoryError> {
        decode(&self.types)
    }

    pub fn decode_stats(&self) -> Result<Vec<StatEntry>, RepositoryError> {
        decode(&self.stats)
    }

    /// Type names in slot order. Empty if the blob is unreadable.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots = self.decode_types().unwrap_or_default();
        slots.sort_by_key(|slot| slot.slot);
        slots.into_iter().map(|slot| slot.kind.name).collect()
    }
}

/// Trim and lowercase a user-supplied name.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn encode<T: Serialize>(value: &T) -> Result<String, RepositoryError> {
    serde_json::to_string(value).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn decode<T: for<'de> Deserialize<'de>>(blob: &str) -> Result<T, RepositoryError> {
    serde_json::from_str(blob).map_err(|e| RepositoryError::Serialization(e.to_string()))
}
