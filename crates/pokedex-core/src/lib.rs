#![doc = include_str!("../README.md")]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    ApiResource, ChainLink, EvolutionChain, EvolutionDetail, NamedResource, Pokemon,
    PokemonRecord, PokemonSpecies, PokemonView, Sprites, StatEntry, TypeSlot, ViewFidelity,
    chain_id_from_url, normalize_name, render_evolution_chain, reverse_project,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{
    CoreError, ListOrder, PokeApiError, PokeApiPort, PokeApiResult, PokemonStore, RecordStream,
    RepositoryError,
};
pub use services::{
    INITIAL_POKEMON, MessageKind, PokedexState, PokemonDetail, PokemonService, StatusMessage,
};
pub use utils::formatting::{capitalize, format_dex_number, type_color};
