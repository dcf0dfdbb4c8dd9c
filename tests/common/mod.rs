//! Common test utilities.
//!
//! Shared fixtures and a scriptable fake of the PokeAPI port for tests that
//! run the real SQLite store.

pub mod fixtures;
pub mod remote;
