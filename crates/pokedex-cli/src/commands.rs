//! Main commands enum.

use clap::{Subcommand, ValueEnum};
use pokedex_core::ListOrder;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Look a Pokémon up and save it to the local cache
    Search {
        /// Pokémon name (case-insensitive)
        name: String,
    },

    /// Show details, description and evolution chain for a Pokémon
    Show {
        /// Pokémon name (case-insensitive)
        name: String,
        /// Re-fetch from PokeAPI even if cached
        #[arg(long)]
        refresh: bool,
    },

    /// List cached Pokémon
    List {
        /// Sort order
        #[arg(long, value_enum, default_value_t = SortArg::Default)]
        sort: SortArg,
    },

    /// Search cached Pokémon by name fragment
    Find {
        /// Substring to match
        query: String,
    },

    /// Populate the cache with the starter Pokémon
    Seed,

    /// Remove a Pokémon from the cache
    Remove {
        /// Name of the Pokémon to remove
        #[arg(required_unless_present = "id", conflicts_with = "id")]
        name: Option<String>,
        /// Remove by Pokédex number instead of name
        #[arg(long)]
        id: Option<i64>,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Remove every cached Pokémon
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show how many Pokémon are cached
    Count,

    /// Print the cached list every time it changes (Ctrl-C to stop)
    Watch,
}

/// `--sort` values for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Storage order
    Default,
    Name,
    Id,
}

impl From<SortArg> for ListOrder {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Default => Self::Unspecified,
            SortArg::Name => Self::ByName,
            SortArg::Id => Self::ById,
        }
    }
}
