//! Watch command handler.
//!
//! Reprints the cached list each time it changes, until Ctrl-C. Run
//! `pokedex search` in another terminal to see it update.

use anyhow::Result;
use futures_util::StreamExt;
use pokedex_core::{PokemonRecord, RecordStream};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_pokemon_table;

pub async fn execute(ctx: &CliContext) -> Result<()> {
    println!("Watching the cache (Ctrl-C to stop)...\n");

    let stream = ctx.state().pokemon_list();
    let shutdown = async {
        tokio::signal::ctrl_c().await.map_err(CliError::from)
    };

    tokio::select! {
        result = print_updates(stream, print_snapshot) => result,
        signal = shutdown => {
            signal?;
            println!();
            Ok(())
        }
    }
}

/// Feed each emission to `render` until the stream ends or fails.
async fn print_updates<F>(mut stream: RecordStream, mut render: F) -> Result<()>
where
    F: FnMut(&[PokemonRecord]),
{
    while let Some(snapshot) = stream.next().await {
        let records = snapshot.map_err(|e| CliError::Database(e.to_string()))?;
        render(&records);
    }
    Ok(())
}

fn print_snapshot(records: &[PokemonRecord]) {
    if records.is_empty() {
        println!("(cache is empty)");
    } else {
        print_pokemon_table(records);
    }
    println!();
}
