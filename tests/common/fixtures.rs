//! Remote record fixtures.

#![allow(dead_code)]

use pokedex_core::domain::{Ability, Cries, FlavorTextEntry};
use pokedex_core::{
    ApiResource, ChainLink, EvolutionChain, NamedResource, Pokemon, PokemonSpecies, Sprites,
    StatEntry, TypeSlot,
};

/// A fully populated remote record, as PokeAPI would return it.
pub fn pokemon(id: i64, name: &str, types: &[&str]) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        base_experience: 64,
        height: 7,
        weight: 69,
        order: id,
        is_default: true,
        location_area_encounters: format!("https://pokeapi.co/api/v2/pokemon/{id}/encounters"),
        species: NamedResource::new(name, format!("https://pokeapi.co/api/v2/pokemon-species/{id}/")),
        forms: vec![NamedResource::new(name, format!("https://pokeapi.co/api/v2/pokemon-form/{id}/"))],
        sprites: Sprites {
            front_default: format!("https://sprites.example/{id}.png"),
            back_default: format!("https://sprites.example/back/{id}.png"),
            ..Sprites::default()
        },
        cries: Cries {
            latest: format!("https://cries.example/{id}.ogg"),
            legacy: String::new(),
        },
        abilities: vec![Ability {
            ability: Some(NamedResource::new("overgrow", "")),
            is_hidden: false,
            slot: 1,
        }],
        types: types
            .iter()
            .zip(1..)
            .map(|(name, slot)| TypeSlot {
                slot,
                kind: NamedResource::new(*name, format!("https://pokeapi.co/api/v2/type/{name}/")),
            })
            .collect(),
        stats: [("hp", 45), ("attack", 49), ("defense", 49), ("speed", 45)]
            .into_iter()
            .map(|(stat, base_stat)| StatEntry {
                base_stat,
                effort: 0,
                stat: NamedResource::new(stat, ""),
            })
            .collect(),
        ..Pokemon::default()
    }
}

/// Species with an English description and a chain URL.
pub fn species(name: &str, chain_id: i64, flavor: &str) -> PokemonSpecies {
    PokemonSpecies {
        name: name.to_string(),
        evolution_chain: Some(ApiResource {
            url: format!("https://pokeapi.co/api/v2/evolution-chain/{chain_id}/"),
        }),
        flavor_text_entries: vec![FlavorTextEntry {
            flavor_text: flavor.to_string(),
            language: NamedResource::new("en", ""),
            version: NamedResource::new("red", ""),
        }],
        ..PokemonSpecies::default()
    }
}

/// A linear chain `names[0] -> names[1] -> ...`.
pub fn chain(id: i64, names: &[&str]) -> EvolutionChain {
    let link = names
        .iter()
        .rev()
        .fold(None::<ChainLink>, |next, name| {
            Some(ChainLink {
                species: NamedResource::new(*name, ""),
                evolves_to: next.into_iter().collect(),
                ..ChainLink::default()
            })
        })
        .unwrap_or_default();

    EvolutionChain {
        id,
        chain: link,
        ..EvolutionChain::default()
    }
}
