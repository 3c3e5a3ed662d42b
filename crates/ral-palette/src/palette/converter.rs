//! Conversions and nearest-color matching against a reference table.

use super::error::ConvertError;
use super::table::{ColorEntry, ReferenceTable};
use crate::color::{Rgb, MAX_DISTANCE};

/// Map an RGB distance to a similarity percentage.
///
/// `100 - distance / MAX_DISTANCE * 100`. The result is not clamped: an
/// exact match scores 100 and the score falls linearly with distance,
/// going negative for anything beyond the cube diagonal.
#[inline]
pub fn similarity(distance: f64) -> f64 {
    100.0 - (distance / MAX_DISTANCE) * 100.0
}

/// Best match for a query color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatch {
    /// RAL code of the closest entry
    pub code: String,
    /// Name of the closest entry
    pub name: String,
    /// Hex value of the closest entry, as stored in the table
    pub hex: String,
    /// Channel values of the closest entry
    pub rgb: Rgb,
    /// Euclidean RGB distance from the query
    pub distance: f64,
}

impl ColorMatch {
    /// Similarity percentage, see [`similarity`].
    #[inline]
    pub fn similarity(&self) -> f64 {
        similarity(self.distance)
    }

    /// Similarity formatted with exactly two decimals, e.g. `"100.00"`.
    pub fn similarity_label(&self) -> String {
        format!("{:.2}", self.similarity())
    }
}

/// Read-only conversion engine over a borrowed [`ReferenceTable`].
///
/// # Example
///
/// ```
/// use ral_palette::{Converter, ConvertError, RawRow, ReferenceTable};
///
/// let rows = [
///     RawRow::new("A", "#FFFFFF", "255-255-255", Some("White")),
///     RawRow::new("B", "#000000", "0-0-0", Some("Black")),
/// ];
/// let table = ReferenceTable::build(&rows);
/// let converter = Converter::new(&table);
///
/// assert_eq!(converter.ral_to_hex("A").unwrap(), "#FFFFFF");
/// assert_eq!(converter.ral_to_name("C"), Err(ConvertError::NotFound));
///
/// let found = converter.hex_to_ral("#111").unwrap();
/// assert_eq!(found.code, "B");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    table: &'a ReferenceTable,
}

impl<'a> Converter<'a> {
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    /// The table this converter reads from.
    #[inline]
    pub fn table(&self) -> &'a ReferenceTable {
        self.table
    }

    /// Hex value stored for a RAL code.
    ///
    /// # Errors
    ///
    /// [`ConvertError::NotFound`] if the code is not in the table.
    pub fn ral_to_hex(&self, code: &str) -> Result<&'a str, ConvertError> {
        self.lookup(code).map(|entry| entry.hex.as_str())
    }

    /// English name stored for a RAL code.
    ///
    /// # Errors
    ///
    /// [`ConvertError::NotFound`] if the code is not in the table.
    pub fn ral_to_name(&self, code: &str) -> Result<&'a str, ConvertError> {
        self.lookup(code).map(|entry| entry.name.as_str())
    }

    fn lookup(&self, code: &str) -> Result<&'a ColorEntry, ConvertError> {
        self.table.get(code).ok_or(ConvertError::NotFound)
    }

    /// Parse a hex color into channels.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidFormat`] for anything [`normalize_hex`](crate::normalize_hex)
    /// rejects.
    pub fn hex_to_rgb(&self, hex: &str) -> Result<Rgb, ConvertError> {
        Ok(crate::color::hex_to_rgb(hex)?)
    }

    /// Find the table entry closest to `rgb`.
    ///
    /// Linear scan in table order with a strict `<` comparison, so among
    /// entries at equal distance the one earliest in the table wins.
    /// Returns `None` for an empty table.
    pub fn find_nearest(&self, rgb: Rgb) -> Option<(&'a ColorEntry, f64)> {
        let mut best: Option<(&'a ColorEntry, f64)> = None;
        let mut best_dist = f64::INFINITY;

        for entry in self.table {
            let dist = rgb.distance(entry.rgb);
            if dist < best_dist {
                best_dist = dist;
                best = Some((entry, dist));
            }
        }

        best
    }

    /// Closest RAL entry for a hex color.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidFormat`] if `hex` does not parse,
    /// [`ConvertError::NoEntries`] if the table is empty.
    pub fn hex_to_ral(&self, hex: &str) -> Result<ColorMatch, ConvertError> {
        let query = self.hex_to_rgb(hex)?;
        let (entry, distance) = self.find_nearest(query).ok_or(ConvertError::NoEntries)?;

        Ok(ColorMatch {
            code: entry.code.clone(),
            name: entry.name.clone(),
            hex: entry.hex.clone(),
            rgb: entry.rgb,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ParseColorError, RawRow};

    fn black_and_white() -> ReferenceTable {
        ReferenceTable::build(&[
            RawRow::new("A", "#FFFFFF", "255-255-255", Some("White")),
            RawRow::new("B", "#000000", "0-0-0", Some("Black")),
        ])
    }

    #[test]
    fn test_ral_to_hex_found() {
        let table = ReferenceTable::build(&[RawRow::new(
            "RAL 9010",
            "#FFFFFF",
            "255-255-255",
            Some("Pure White"),
        )]);
        let converter = Converter::new(&table);
        assert_eq!(converter.ral_to_hex("RAL 9010").unwrap(), "#FFFFFF");
        assert_eq!(converter.ral_to_name("RAL 9010").unwrap(), "Pure White");
    }

    #[test]
    fn test_ral_lookup_not_found() {
        let table = black_and_white();
        let converter = Converter::new(&table);

        let err = converter.ral_to_hex("RAL 0000").unwrap_err();
        assert_eq!(err, ConvertError::NotFound);
        assert_eq!(err.to_string(), "RAL code not found.");
        assert_eq!(
            converter.ral_to_name("RAL 0000"),
            Err(ConvertError::NotFound)
        );
    }

    #[test]
    fn test_hex_to_ral_exact_white() {
        let table = black_and_white();
        let found = Converter::new(&table).hex_to_ral("#FFFFFF").unwrap();
        assert_eq!(found.code, "A");
        assert_eq!(found.name, "White");
        assert_eq!(found.similarity_label(), "100.00");
    }

    #[test]
    fn test_hex_to_ral_exact_black() {
        let table = black_and_white();
        let found = Converter::new(&table).hex_to_ral("#000000").unwrap();
        assert_eq!(found.code, "B");
        assert_eq!(found.similarity_label(), "100.00");
    }

    #[test]
    fn test_hex_to_ral_shorthand_input() {
        let table = black_and_white();
        let found = Converter::new(&table).hex_to_ral("eee").unwrap();
        assert_eq!(found.code, "A");
    }

    #[test]
    fn test_similarity_of_partial_match() {
        let table = black_and_white();
        // (128,128,128) is 127*sqrt(3) from white, 128*sqrt(3) from black
        let found = Converter::new(&table).hex_to_ral("#808080").unwrap();
        assert_eq!(found.code, "A");
        let expected = 100.0 - (127.0 * 3f64.sqrt() / MAX_DISTANCE) * 100.0;
        assert!((found.similarity() - expected).abs() < 1e-9);
        assert_eq!(found.similarity_label(), format!("{expected:.2}"));
    }

    #[test]
    fn test_similarity_of_opposite_corner_is_zero() {
        let table = ReferenceTable::build(&[RawRow::new("B", "#000000", "0-0-0", None)]);
        let found = Converter::new(&table).hex_to_ral("#FFFFFF").unwrap();
        assert_eq!(found.similarity_label(), "0.00");
    }

    #[test]
    fn test_similarity_is_not_clamped() {
        assert_eq!(similarity(0.0), 100.0);
        assert!(similarity(MAX_DISTANCE * 2.0) < 0.0);
        assert!((similarity(MAX_DISTANCE * 2.0) + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_break_prefers_earlier_entry() {
        // Both entries are exactly 10 away from (100,100,100)
        let table = ReferenceTable::build(&[
            RawRow::new("first", "#6E6464", "110-100-100", None),
            RawRow::new("second", "#5A6464", "90-100-100", None),
        ]);
        let found = Converter::new(&table).hex_to_ral("#646464").unwrap();
        assert_eq!(found.code, "first");

        let swapped = ReferenceTable::build(&[
            RawRow::new("second", "#5A6464", "90-100-100", None),
            RawRow::new("first", "#6E6464", "110-100-100", None),
        ]);
        let found = Converter::new(&swapped).hex_to_ral("#646464").unwrap();
        assert_eq!(found.code, "second");
    }

    #[test]
    fn test_empty_table_has_no_entries() {
        let table = ReferenceTable::empty();
        let converter = Converter::new(&table);
        assert_eq!(
            converter.hex_to_ral("#123456"),
            Err(ConvertError::NoEntries)
        );
        assert!(converter.find_nearest(Rgb::new(1, 2, 3)).is_none());
        assert_eq!(
            converter.ral_to_hex("RAL 9010"),
            Err(ConvertError::NotFound)
        );
    }

    #[test]
    fn test_invalid_hex_is_reported_before_empty_table() {
        let table = ReferenceTable::empty();
        let err = Converter::new(&table).hex_to_ral("#12").unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidFormat(ParseColorError::InvalidLength)
        );
    }

    #[test]
    fn test_hex_to_rgb_entry_point() {
        let table = ReferenceTable::empty();
        let converter = Converter::new(&table);
        let rgb = converter.hex_to_rgb("#0A0B0C").unwrap();
        assert_eq!(rgb, Rgb::new(10, 11, 12));
        assert!(matches!(
            converter.hex_to_rgb("#zzzzzz"),
            Err(ConvertError::InvalidFormat(ParseColorError::InvalidHex(_)))
        ));
    }

    #[test]
    fn test_match_uses_entry_rgb_not_entry_hex() {
        // hex and rgb disagree; matching must use the rgb column
        let table = ReferenceTable::build(&[
            RawRow::new("near", "#000000", "250-250-250", None),
            RawRow::new("far", "#FFFFFF", "0-0-0", None),
        ]);
        let found = Converter::new(&table).hex_to_ral("#FFFFFF").unwrap();
        assert_eq!(found.code, "near");
        assert_eq!(found.rgb, Rgb::new(250, 250, 250));
    }

    #[test]
    fn test_match_carries_stored_hex() {
        let table = ReferenceTable::build(&[
            RawRow::new("lower", " #fafafa ", "250-250-250", None),
            RawRow::new("dark", "#000000", "0-0-0", None),
        ]);
        let found = Converter::new(&table).hex_to_ral("#FFFFFF").unwrap();
        assert_eq!(found.code, "lower");
        assert_eq!(found.hex, "#fafafa");
        assert_ne!(found.hex, found.rgb.to_hex());
    }
}
