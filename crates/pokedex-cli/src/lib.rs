//! Terminal front end for the pokedex cache.
//!
//! `main.rs` parses arguments and hands off to [`bootstrap`], which wires the
//! SQLite store and the PokeAPI client into a [`CliContext`]. Handlers only
//! ever talk to that context.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::{Commands, SortArg};
pub use error::CliError;
pub use parser::Cli;
