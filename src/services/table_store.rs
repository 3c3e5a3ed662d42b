//! Session-wide holder for the reference table.
//!
//! The store starts empty and is filled exactly once when the background
//! load completes. Readers take an `Arc` snapshot, so a query that started
//! against the empty table finishes against it even if the load lands
//! mid-request.

use chrono::{DateTime, Utc};
use ral_palette::ReferenceTable;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use utoipa::ToSchema;

struct LoadedTable {
    table: Arc<ReferenceTable>,
    source: String,
    loaded_at: DateTime<Utc>,
}

/// Load state of the reference table
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TableStatus {
    /// Whether the reference table has been loaded
    pub loaded: bool,
    /// Number of RAL entries available for lookups
    pub entries: usize,
    /// Where the table was loaded from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// When the table was loaded (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub loaded_at: Option<DateTime<Utc>>,
}

pub struct TableStore {
    loaded: OnceLock<LoadedTable>,
    empty: Arc<ReferenceTable>,
}

impl TableStore {
    /// An empty store; lookups see no entries until [`install`](Self::install).
    pub fn new() -> Self {
        Self {
            loaded: OnceLock::new(),
            empty: Arc::new(ReferenceTable::empty()),
        }
    }

    /// A store that is already loaded with `table`.
    pub fn with_table(table: ReferenceTable, source: impl Into<String>) -> Self {
        let store = Self::new();
        store.install(table, source);
        store
    }

    /// Publish the table. Only the first call has an effect; returns
    /// whether this call installed it.
    pub fn install(&self, table: ReferenceTable, source: impl Into<String>) -> bool {
        let source = source.into();
        let entries = table.len();
        let installed = self
            .loaded
            .set(LoadedTable {
                table: Arc::new(table),
                source: source.clone(),
                loaded_at: Utc::now(),
            })
            .is_ok();

        if installed {
            tracing::info!(entries, source = %source, "Reference table installed");
        } else {
            tracing::warn!(source = %source, "Reference table already loaded, ignoring");
        }
        installed
    }

    /// Current table: the loaded one, or an empty one before loading.
    pub fn snapshot(&self) -> Arc<ReferenceTable> {
        match self.loaded.get() {
            Some(loaded) => loaded.table.clone(),
            None => self.empty.clone(),
        }
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    pub fn status(&self) -> TableStatus {
        match self.loaded.get() {
            Some(loaded) => TableStatus {
                loaded: true,
                entries: loaded.table.len(),
                source: Some(loaded.source.clone()),
                loaded_at: Some(loaded.loaded_at),
            },
            None => TableStatus {
                loaded: false,
                entries: 0,
                source: None,
                loaded_at: None,
            },
        }
    }
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new()
    }
}
