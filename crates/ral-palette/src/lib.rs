//! ral-palette: RAL reference table and nearest-color matching
//!
//! This library converts between RAL codes, hex colors and English color
//! names, and finds the RAL entry closest to an arbitrary hex color.
//!
//! # Quick Start
//!
//! ```
//! use ral_palette::{Converter, RawRow, ReferenceTable};
//!
//! let rows = [
//!     RawRow::new("RAL 9010", "#FFFFFF", "255-255-255", Some("Pure White")),
//!     RawRow::new("RAL 9005", "#0A0A0A", "10-10-10", Some("Jet Black")),
//! ];
//! let table = ReferenceTable::build(&rows);
//! let converter = Converter::new(&table);
//!
//! assert_eq!(converter.ral_to_hex("RAL 9010").unwrap(), "#FFFFFF");
//!
//! let found = converter.hex_to_ral("#fefefe").unwrap();
//! assert_eq!(found.code, "RAL 9010");
//! assert_eq!(found.similarity_label(), "99.61");
//! ```
//!
//! # Matching
//!
//! Distance is plain Euclidean distance between 8-bit RGB triples. The
//! search is a linear scan over the table in insertion order; reference
//! tables hold a few hundred entries, so no index is kept. Ties go to the
//! entry that appears first.
//!
//! The similarity score maps that distance onto a percentage relative to
//! the diagonal of the RGB cube:
//!
//! ```text
//! similarity = 100 - distance / sqrt(3 * 255^2) * 100
//! ```
//!
//! It is deliberately left unclamped, so its domain is `(-inf, 100]`.
//!
//! # Loading
//!
//! This crate does no I/O. Callers decode their source into [`RawRow`]s
//! and hand them to [`ReferenceTable::build`], which drops malformed rows
//! without reporting them individually; [`ReferenceTable::build_with_stats`]
//! returns counters for logging.

pub mod color;
pub mod palette;


pub use color::{hex_to_rgb, normalize_hex, Rgb, MAX_DISTANCE};
pub use palette::{
    similarity, BuildStats, ColorEntry, ColorMatch, ConvertError, Converter, ParseColorError,
    RawRow, ReferenceTable, UNKNOWN_NAME,
};
