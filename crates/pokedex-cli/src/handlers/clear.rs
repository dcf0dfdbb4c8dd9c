//! Clear command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::utils::input;

/// Remove every cached Pokémon, confirming first unless `force` is set.
pub async fn execute(ctx: &CliContext, force: bool) -> Result<()> {
    let count = ctx.service().local_count().await.map_err(CliError::from)?;
    if count == 0 {
        println!("The cache is already empty.");
        return Ok(());
    }

    if !force && !input::prompt_confirmation(&format!("Remove all {count} cached Pokémon?"))? {
        println!("Clear operation cancelled.");
        return Ok(());
    }

    let removed = ctx.service().delete_all().await.map_err(CliError::from)?;
    println!("Removed {removed} Pokémon from the cache.");
    Ok(())
}
