//! PokeAPI `pokemon/{name-or-id}` response shape.
//!
//! Only `id`, `name`, `sprites.front_default`, `types` and `stats` survive the
//! projection into a [`PokemonRecord`](super::PokemonRecord). The rest is kept
//! so freshly fetched entities can be displayed at full fidelity.

use serde::{Deserialize, Serialize};

use super::lenient::null_as_default;

/// A `{ name, url }` reference to another PokeAPI resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A `{ url }` reference to an unnamed resource (e.g. an evolution chain).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResource {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Full remote record for a single Pokémon.
///
/// `id` and `name` are required; a payload without them is not a Pokémon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_experience: i64,
    #[serde(default)]
    pub cries: Cries,
    #[serde(default)]
    pub forms: Vec<NamedResource>,
    #[serde(default)]
    pub game_indices: Vec<GameIndex>,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub held_items: Vec<HeldItem>,
    pub id: i64,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_area_encounters: String,
    #[serde(default)]
    pub moves: Vec<Move>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(default)]
    pub past_abilities: Vec<PastAbility>,
    #[serde(default)]
    pub past_types: Vec<serde_json::Value>,
    #[serde(default)]
    pub species: NamedResource,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub weight: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ability {
    pub ability: Option<NamedResource>,
    pub is_hidden: bool,
    pub slot: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cries {
    #[serde(deserialize_with = "null_as_default")]
    pub latest: String,
    #[serde(deserialize_with = "null_as_default")]
    pub legacy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameIndex {
    pub game_index: i64,
    pub version: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeldItem {
    pub item: NamedResource,
    pub version_details: Vec<HeldItemVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeldItemVersion {
    pub rarity: i64,
    pub version: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Move {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    pub version_group_details: Vec<MoveVersionDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveVersionDetail {
    pub level_learned_at: i64,
    pub move_learn_method: NamedResource,
    pub order: Option<i64>,
    pub version_group: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastAbility {
    pub abilities: Vec<Ability>,
    pub generation: NamedResource,
}

/// Sprite URLs. Variant galleries (`other`, `versions`) are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sprites {
    #[serde(deserialize_with = "null_as_default")]
    pub back_default: String,
    pub back_female: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub back_shiny: String,
    pub back_shiny_female: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub front_default: String,
    pub front_female: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub front_shiny: String,
    pub front_shiny_female: Option<String>,
    pub other: Option<serde_json::Value>,
    pub versions: Option<serde_json::Value>,
}

impl Sprites {
    /// Sprites carrying only a primary image, as rebuilt from the cache.
    pub fn front_only(url: impl Into<String>) -> Self {
        Self {
            front_default: url.into(),
            ..Self::default()
        }
    }
}

/// One base stat (`hp`, `attack`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatEntry {
    pub base_stat: i64,
    pub effort: i64,
    pub stat: NamedResource,
}

/// One type slot. Slot 1 is the primary type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeSlot {
    pub slot: i64,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
