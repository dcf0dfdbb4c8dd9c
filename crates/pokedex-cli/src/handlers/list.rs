//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::SortArg;
use crate::error::CliError;
use crate::presentation::print_pokemon_table;

/// Print every cached Pokémon in the requested order.
pub async fn execute(ctx: &CliContext, sort: SortArg) -> Result<()> {
    let records = ctx
        .service()
        .list_local(sort.into())
        .await
        .map_err(CliError::from)?;

    if records.is_empty() {
        println!("No Pokémon cached yet.");
        println!("Use 'pokedex search <name>' or 'pokedex seed' to add some.");
        return Ok(());
    }

    println!("{} Pokémon cached:\n", records.len());
    print_pokemon_table(&records);
    Ok(())
}
