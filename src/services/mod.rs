pub mod loader;
pub mod source;
pub mod table_store;

pub use loader::{load_into, load_table, spawn_initial_load};
pub use source::{parse_csv, source_for, FileSource, RowSource, StaticSource, UrlSource};
pub use table_store::{TableStatus, TableStore};
