//! One-time reference table load.

use ral_palette::{BuildStats, ReferenceTable};
use std::sync::Arc;
use tokio::task::JoinHandle;

use super::source::RowSource;
use super::table_store::TableStore;
use crate::error::SourceError;

/// Fetch rows from `source` and build a table from them.
pub async fn load_table(
    source: &dyn RowSource,
) -> Result<(ReferenceTable, BuildStats), SourceError> {
    let rows = source.fetch_rows().await?;
    let (table, stats) = ReferenceTable::build_with_stats(&rows);

    if stats.rows_dropped > 0 {
        tracing::debug!(
            dropped = stats.rows_dropped,
            rows = stats.rows_seen,
            "Dropped malformed reference rows"
        );
    }
    if table.is_empty() {
        tracing::warn!(source = %source.describe(), "Reference source produced no usable rows");
    }

    Ok((table, stats))
}

/// Load the table and publish it into `store`.
///
/// Returns the number of entries installed.
pub async fn load_into(store: &TableStore, source: &dyn RowSource) -> Result<usize, SourceError> {
    let (table, stats) = load_table(source).await?;
    let entries = table.len();

    tracing::info!(
        source = %source.describe(),
        entries,
        rows = stats.rows_seen,
        dropped = stats.rows_dropped,
        duplicates = stats.duplicates,
        "Loaded reference table"
    );

    store.install(table, source.describe());
    Ok(entries)
}

/// Start the initial load in the background.
///
/// Fire and forget: there is no retry and no timeout. If the load fails the
/// store stays empty and every lookup reports not found.
pub fn spawn_initial_load(store: Arc<TableStore>, source: Arc<dyn RowSource>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = load_into(&store, source.as_ref()).await {
            tracing::error!(
                %e,
                source = %source.describe(),
                "Failed to load reference table, lookups will report not found"
            );
        }
    })
}
