//! Seed command handler.
//!
//! Fetches the starter set into the cache. Names that fail are skipped.

use anyhow::Result;
use pokedex_core::{INITIAL_POKEMON, capitalize};

use super::report_status;
use crate::bootstrap::CliContext;

pub async fn execute(ctx: &CliContext) -> Result<()> {
    println!("Fetching {} Pokémon...", INITIAL_POKEMON.len());

    let saved = ctx.state().load_initial().await;
    for record in &saved {
        println!("  saved {}", capitalize(&record.name));
    }

    if saved.len() < INITIAL_POKEMON.len() {
        println!(
            "  {} could not be fetched (run with --verbose for details)",
            INITIAL_POKEMON.len() - saved.len()
        );
    }

    report_status(ctx)
}
