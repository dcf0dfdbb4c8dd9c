//! Re-runnable queries driven by a store revision counter.
//!
//! A store owns a `watch::Sender<u64>` and bumps it after every successful
//! write. [`live_query`] turns that receiver plus a query closure into a
//! stream that yields the current result first and then a fresh result after
//! each observed revision change. Revisions that arrive while a query is
//! running collapse into a single re-run.

use std::future::Future;

use futures_util::StreamExt;
use futures_util::stream;
use tokio::sync::watch;

use crate::domain::PokemonRecord;
use crate::ports::{RecordStream, RepositoryError};

/// Build a live view from a revision receiver and a query.
///
/// The stream ends when the store (the sender side) is dropped.
pub fn live_query<F, Fut>(changes: watch::Receiver<u64>, query: F) -> RecordStream
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Vec<PokemonRecord>, RepositoryError>> + Send + 'static,
{
    stream::unfold(
        (changes, query, true),
        |(mut changes, mut query, first)| async move {
            if !first && changes.changed().await.is_err() {
                return None;
            }
            // Mark the current revision as seen before querying so a write
            // racing with the query triggers another emission.
            let _ = changes.borrow_and_update();
            let rows = query().await;
            Some((rows, (changes, query, false)))
        },
    )
    .boxed()
}
