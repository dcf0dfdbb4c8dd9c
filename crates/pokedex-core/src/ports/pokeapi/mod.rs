//! PokeAPI port definitions.
//!
//! The core domain uses [`PokeApiPort`] for all remote lookups. The concrete
//! implementation lives in `pokedex-api`.

mod client;
mod error;

pub use client::PokeApiPort;
pub use error::{PokeApiError, PokeApiResult};

#[cfg(test)]
pub use client::MockPokeApiPort;
