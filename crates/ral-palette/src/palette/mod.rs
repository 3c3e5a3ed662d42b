//! Reference table, conversion engine and their error types
//!
//! The table is built once from raw rows and never changes afterwards;
//! a [`Converter`] borrows it to answer lookups and nearest-match queries.

mod converter;
mod error;
mod table;

pub use converter::{similarity, ColorMatch, Converter};
pub use error::{ConvertError, ParseColorError};
pub use table::{BuildStats, ColorEntry, RawRow, ReferenceTable, UNKNOWN_NAME};
