//! Show command handler.
//!
//! Displays the detail screen: types, stats, description and evolution chain.

use anyhow::Result;

use super::report_status;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_detail;

/// Execute the show command.
///
/// Without `refresh` the record comes through the cache and the view is the
/// reduced cached one. With `refresh` the record is re-fetched and saved,
/// and the full remote view is shown.
pub async fn execute(ctx: &CliContext, name: &str, refresh: bool) -> Result<()> {
    let (record, fresh_view) = if refresh {
        let (record, view) = ctx
            .service()
            .fetch_fresh(name)
            .await
            .map_err(CliError::from)?;
        (record, Some(view))
    } else {
        match ctx.state().get_pokemon(name).await {
            Some(record) => (record, None),
            None => return report_status(ctx),
        }
    };

    let mut detail = ctx.state().load_detail(&record).await;
    if let Some(view) = fresh_view {
        detail.view = Ok(view);
    }

    display_detail(&detail);
    Ok(())
}
