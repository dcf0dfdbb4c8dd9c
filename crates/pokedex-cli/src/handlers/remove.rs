//! Remove command handler.
//!
//! Removes one cached Pokémon by name or Pokédex number.

use anyhow::Result;
use pokedex_core::{PokemonRecord, capitalize, format_dex_number};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_summary;
use crate::utils::input;

/// What to remove.
#[derive(Debug, Clone)]
pub enum RemoveTarget {
    Name(String),
    Id(i64),
}

impl RemoveTarget {
    /// Build from the parsed arguments; clap guarantees exactly one is set.
    pub fn from_args(name: Option<String>, id: Option<i64>) -> Result<Self> {
        match (name, id) {
            (_, Some(id)) => Ok(Self::Id(id)),
            (Some(name), None) => Ok(Self::Name(name)),
            (None, None) => Err(CliError::Arguments("a name or --id is required".to_string()).into()),
        }
    }
}

/// Execute the remove command.
///
/// Shows the record and asks for confirmation unless `force` is set.
pub async fn execute(ctx: &CliContext, target: RemoveTarget, force: bool) -> Result<()> {
    let Some(record) = find(ctx, &target).await? else {
        match target {
            RemoveTarget::Name(name) => println!("No cached Pokémon named '{}'.", name.trim()),
            RemoveTarget::Id(id) => println!("No cached Pokémon with number {id}."),
        }
        println!("Use 'pokedex list' to see cached Pokémon.");
        return Ok(());
    };

    if !force {
        println!("Pokémon to remove:");
        display_summary(&record);
        println!();

        if !input::prompt_confirmation("Remove this Pokémon from the cache?")? {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    ctx.service()
        .delete_by_id(record.id)
        .await
        .map_err(CliError::from)?;

    println!(
        "Removed {} ({}) from the cache.",
        capitalize(&record.name),
        format_dex_number(record.id)
    );
    Ok(())
}

async fn find(ctx: &CliContext, target: &RemoveTarget) -> Result<Option<PokemonRecord>> {
    let found = match target {
        RemoveTarget::Name(name) => ctx.service().get_local(name).await,
        RemoveTarget::Id(id) => ctx.service().get_local_by_id(*id).await,
    };
    Ok(found.map_err(CliError::from)?)
}
