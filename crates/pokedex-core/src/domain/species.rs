//! PokeAPI `pokemon-species/{name-or-id}` response shape.
//!
//! Species data is fetched on demand for the detail view and never cached.

use serde::{Deserialize, Serialize};

use super::evolution::chain_id_from_url;
use super::lenient::null_as_default;
use super::remote::{ApiResource, NamedResource};

const ENGLISH: &str = "en";

/// Species record. `id` and `name` are required; counters PokeAPI leaves
/// `null` on recent species fall back to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_happiness: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capture_rate: i64,
    #[serde(default)]
    pub color: NamedResource,
    #[serde(default)]
    pub egg_groups: Vec<NamedResource>,
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
    #[serde(default)]
    pub evolves_from_species: Option<NamedResource>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub form_descriptions: Vec<serde_json::Value>,
    #[serde(default)]
    pub forms_switchable: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender_rate: i64,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub generation: NamedResource,
    #[serde(default)]
    pub growth_rate: NamedResource,
    #[serde(default)]
    pub habitat: Option<NamedResource>,
    #[serde(default)]
    pub has_gender_differences: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hatch_counter: i64,
    pub id: i64,
    #[serde(default)]
    pub is_baby: bool,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(default)]
    pub pal_park_encounters: Vec<PalParkEncounter>,
    #[serde(default)]
    pub pokedex_numbers: Vec<PokedexNumber>,
    #[serde(default)]
    pub shape: Option<NamedResource>,
    #[serde(default)]
    pub varieties: Vec<Variety>,
}

impl PokemonSpecies {
    /// First English flavor text, with line and page breaks collapsed to spaces.
    pub fn english_flavor_text(&self) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == ENGLISH)
            .map(|entry| entry.flavor_text.replace(['\n', '\u{c}'], " "))
    }

    /// English genus ("Mouse Pokémon"), if present.
    pub fn english_genus(&self) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language.name == ENGLISH)
            .map(|g| g.genus.as_str())
    }

    /// URL of the evolution chain resource. `None` when absent or empty.
    pub fn evolution_chain_url(&self) -> Option<&str> {
        self.evolution_chain
            .as_ref()
            .map(|resource| resource.url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// Evolution chain id parsed from [`Self::evolution_chain_url`].
    pub fn evolution_chain_id(&self) -> Option<i64> {
        self.evolution_chain_url().and_then(chain_id_from_url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlavorTextEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genus {
    #[serde(deserialize_with = "null_as_default")]
    pub genus: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedName {
    pub language: NamedResource,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PalParkEncounter {
    pub area: NamedResource,
    pub base_score: i64,
    pub rate: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokedexNumber {
    pub entry_number: i64,
    pub pokedex: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variety {
    pub is_default: bool,
    pub pokemon: NamedResource,
}
