//! Display projection shared by fresh and cached entities.
//!
//! A cached [`PokemonRecord`] keeps only five fields of the remote record, so
//! rebuilding the full shape from it is lossy. `PokemonView` makes that
//! explicit with a [`ViewFidelity`] marker instead of reusing [`Pokemon`].

use serde::Serialize;

use super::record::PokemonRecord;
use super::remote::{
    Ability, Cries, GameIndex, HeldItem, Move, NamedResource, PastAbility, Pokemon, Sprites,
    StatEntry, TypeSlot,
};
use crate::ports::RepositoryError;

const SPECIES_URL_BASE: &str = "https://pokeapi.co/api/v2/pokemon-species";

/// Where a [`PokemonView`]'s fields came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewFidelity {
    /// Built from a remote record; every field is real.
    Full,
    /// Rebuilt from a cached record; only id, name, image, types and stats
    /// are real, everything else holds placeholders.
    Cached,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonView {
    pub fidelity: ViewFidelity,
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<Ability>,
    pub base_experience: i64,
    pub cries: Cries,
    pub forms: Vec<NamedResource>,
    pub game_indices: Vec<GameIndex>,
    pub height: i64,
    pub held_items: Vec<HeldItem>,
    pub is_default: bool,
    pub location_area_encounters: String,
    pub moves: Vec<Move>,
    pub order: i64,
    pub past_abilities: Vec<PastAbility>,
    pub past_types: Vec<serde_json::Value>,
    pub species: NamedResource,
    pub sprites: Sprites,
    pub weight: i64,
}

impl PokemonView {
    pub fn from_remote(pokemon: &Pokemon) -> Self {
        Self {
            fidelity: ViewFidelity::Full,
            id: pokemon.id,
            name: pokemon.name.clone(),
            image_url: pokemon.sprites.front_default.clone(),
            types: pokemon.types.clone(),
            stats: pokemon.stats.clone(),
            abilities: pokemon.abilities.clone(),
            base_experience: pokemon.base_experience,
            cries: pokemon.cries.clone(),
            forms: pokemon.forms.clone(),
            game_indices: pokemon.game_indices.clone(),
            height: pokemon.height,
            held_items: pokemon.held_items.clone(),
            is_default: pokemon.is_default,
            location_area_encounters: pokemon.location_area_encounters.clone(),
            moves: pokemon.moves.clone(),
            order: pokemon.order,
            past_abilities: pokemon.past_abilities.clone(),
            past_types: pokemon.past_types.clone(),
            species: pokemon.species.clone(),
            sprites: pokemon.sprites.clone(),
            weight: pokemon.weight,
        }
    }

    pub const fn is_cached(&self) -> bool {
        matches!(self.fidelity, ViewFidelity::Cached)
    }
}

/// Canonical species URL for a Pokédex id.
pub fn species_url(id: i64) -> String {
    format!("{SPECIES_URL_BASE}/{id}/")
}

/// Rebuild a display view from a cached record.
///
/// Fails only if the stored type or stat blobs cannot be decoded.
pub fn reverse_project(record: &PokemonRecord) -> Result<PokemonView, RepositoryError> {
    let species = NamedResource::new(record.name.clone(), species_url(record.id));

    Ok(PokemonView {
        fidelity: ViewFidelity::Cached,
        id: record.id,
        name: record.name.clone(),
        image_url: record.image_url.clone(),
        types: record.decode_types()?,
        stats: record.decode_stats()?,
        abilities: Vec::new(),
        base_experience: 0,
        cries: Cries::default(),
        forms: vec![species.clone()],
        game_indices: Vec::new(),
        height: 0,
        held_items: Vec::new(),
        is_default: true,
        location_area_encounters: String::new(),
        moves: Vec::new(),
        order: 0,
        past_abilities: Vec::new(),
        past_types: Vec::new(),
        species,
        sprites: Sprites::front_only(record.image_url.clone()),
        weight: 0,
    })
}
