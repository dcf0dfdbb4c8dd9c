//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! about concrete implementations.

mod pokedex_state;
mod pokemon_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use pokedex_state::{INITIAL_POKEMON, MessageKind, PokedexState, PokemonDetail, StatusMessage};
pub use pokemon_service::PokemonService;
