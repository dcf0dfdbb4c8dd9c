//! Count command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub async fn execute(ctx: &CliContext) -> Result<()> {
    let count = ctx.service().local_count().await.map_err(CliError::from)?;
    println!("{count} Pokémon cached.");
    Ok(())
}
