//! Find command handler: substring search over cached names.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::print_pokemon_table;

pub async fn execute(ctx: &CliContext, query: &str) -> Result<()> {
    let hits = ctx.state().search_local(query).await;

    if hits.is_empty() {
        println!("No cached Pokémon match '{}'.", query.trim());
        return Ok(());
    }

    print_pokemon_table(&hits);
    Ok(())
}
