//! Domain types for pokedex.
//!
//! - `remote`, `species`, `evolution` mirror the PokeAPI response shapes.
//! - `record` is the persisted projection stored in the local cache.
//! - `view` is the display projection shared by fresh and cached entities.

mod evolution;
mod lenient;
mod record;
mod remote;
mod species;
mod view;

pub use evolution::{
    ChainLink, EvolutionChain, EvolutionDetail, chain_id_from_url, render_evolution_chain,
};
pub use record::{PokemonRecord, normalize_name};
pub use remote::{
    Ability, ApiResource, Cries, GameIndex, HeldItem, HeldItemVersion, Move, MoveVersionDetail,
    NamedResource, PastAbility, Pokemon, Sprites, StatEntry, TypeSlot,
};
pub use species::{
    FlavorTextEntry, Genus, LocalizedName, PalParkEncounter, PokedexNumber, PokemonSpecies,
    Variety,
};
pub use view::{PokemonView, ViewFidelity, reverse_project, species_url};
