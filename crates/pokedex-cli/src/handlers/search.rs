//! Search command handler.
//!
//! Looks a name up through the cache, fetching and saving it on a miss.

use anyhow::Result;

use super::report_status;
use crate::bootstrap::CliContext;
use crate::presentation::display_summary;

pub async fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    let saved = ctx.state().search_and_save(name).await;
    report_status(ctx)?;

    if let Some(record) = saved {
        display_summary(&record);
    }
    Ok(())
}
