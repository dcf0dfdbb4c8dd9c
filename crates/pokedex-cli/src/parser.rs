//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Look up Pokémon through a local SQLite cache of PokeAPI.
#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Look up Pokémon and keep them in a local cache")]
#[command(version)]
pub struct Cli {
    /// Use this database file instead of the default location
    #[arg(long = "database", global = true, env = "POKEDEX_DATABASE")]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
