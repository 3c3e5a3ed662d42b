//! Reference table of RAL entries and the builder that produces it.

use std::collections::HashMap;

use crate::color::Rgb;

/// Name stored for entries whose source row has no English name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One row of reference data as it comes from the source, before validation.
///
/// Every field is optional because the tabular source may leave any cell
/// empty or omit a column entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// RAL code, e.g. `"RAL 9010"`
    pub code: Option<String>,
    /// Hex color, e.g. `"#F7F9EF"`
    pub hex: Option<String>,
    /// Dash-separated channels, e.g. `"247-249-239"`
    pub rgb: Option<String>,
    /// English color name
    pub name: Option<String>,
}

impl RawRow {
    /// Convenience constructor for rows with every column present.
    pub fn new(code: &str, hex: &str, rgb: &str, name: Option<&str>) -> Self {
        Self {
            code: Some(code.to_string()),
            hex: Some(hex.to_string()),
            rgb: Some(rgb.to_string()),
            name: name.map(str::to_string),
        }
    }
}

/// A validated reference entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// RAL code, unique within a table
    pub code: String,
    /// Hex value exactly as the source wrote it (trimmed)
    pub hex: String,
    /// English name, [`UNKNOWN_NAME`] when the source had none
    pub name: String,
    /// Channel values used for matching
    pub rgb: Rgb,
}

impl ColorEntry {
    /// Validate a raw row.
    ///
    /// Returns `None` when the code or hex is missing or blank, or when the
    /// RGB field is not exactly three dash-separated integers in 0..=255.
    pub fn from_row(row: &RawRow) -> Option<Self> {
        let code = non_blank(row.code.as_deref())?;
        let hex = non_blank(row.hex.as_deref())?;
        let rgb = parse_rgb_triple(row.rgb.as_deref()?)?;
        let name = non_blank(row.name.as_deref()).unwrap_or(UNKNOWN_NAME);

        Some(Self {
            code: code.to_string(),
            hex: hex.to_string(),
            name: name.to_string(),
            rgb,
        })
    }
}

fn non_blank(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse `"R-G-B"` into a color.
fn parse_rgb_triple(field: &str) -> Option<Rgb> {
    let mut parts = field.split('-').map(|part| part.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb::new(r, g, b))
}

/// Counters collected while building a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Rows handed to the builder
    pub rows_seen: usize,
    /// Rows rejected by validation
    pub rows_dropped: usize,
    /// Valid rows that replaced an earlier entry with the same code
    pub duplicates: usize,
}

/// Immutable lookup structure keyed by RAL code.
///
/// Iteration order is the order in which each code first appeared. When a
/// code appears again, the newer entry replaces the old one in place, so
/// the last occurrence wins while the position stays stable. Nearest-match
/// ties are resolved by this order.
///
/// # Example
///
/// ```
/// use ral_palette::{RawRow, ReferenceTable};
///
/// let rows = [
///     RawRow::new("RAL 9010", "#FFFFFF", "255-255-255", Some("Pure White")),
///     RawRow::new("RAL 9005", "#0A0A0A", "10-10-10", Some("Jet Black")),
///     RawRow::new("X", "#123", "not-a-number", None),
/// ];
/// let table = ReferenceTable::build(&rows);
///
/// assert_eq!(table.len(), 2);
/// assert!(table.get("X").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<ColorEntry>,
    index: HashMap<String, usize>,
}

impl ReferenceTable {
    /// A table with no entries, the state before any data has loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from raw rows, silently dropping invalid ones.
    pub fn build(rows: &[RawRow]) -> Self {
        Self::build_with_stats(rows).0
    }

    /// Build a table and report how many rows were dropped or replaced.
    pub fn build_with_stats(rows: &[RawRow]) -> (Self, BuildStats) {
        let mut table = Self::empty();
        let mut stats = BuildStats {
            rows_seen: rows.len(),
            ..BuildStats::default()
        };

        for row in rows {
            match ColorEntry::from_row(row) {
                Some(entry) => {
                    if table.insert(entry) {
                        stats.duplicates += 1;
                    }
                }
                None => stats.rows_dropped += 1,
            }
        }

        (table, stats)
    }

    /// Build a table from already validated entries.
    ///
    /// Duplicate codes follow the same last-wins rule as [`build`](Self::build).
    pub fn from_entries(entries: impl IntoIterator<Item = ColorEntry>) -> Self {
        let mut table = Self::empty();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    /// Returns true when an existing entry was replaced.
    fn insert(&mut self, entry: ColorEntry) -> bool {
        match self.index.get(&entry.code) {
            Some(&pos) => {
                self.entries[pos] = entry;
                true
            }
            None => {
                self.index.insert(entry.code.clone(), self.entries.len());
                self.entries.push(entry);
                false
            }
        }
    }

    /// Look up an entry by exact code.
    #[inline]
    pub fn get(&self, code: &str) -> Option<&ColorEntry> {
        self.index.get(code).map(|&pos| &self.entries[pos])
    }

    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ReferenceTable {
    type Item = &'a ColorEntry;
    type IntoIter = std::slice::Iter<'a, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
