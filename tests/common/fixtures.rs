//! Test fixtures and constants.

use ral_palette::{RawRow, ReferenceTable};

/// Excerpt of the published RAL classic table, header included.
///
/// `RAL 7000` appears twice; the second row carries the newer values.
/// The last three rows are malformed and get dropped.
pub const SAMPLE_CSV: &str = "\
RAL,RGB,HEX,CMYK,LRV,English,German
RAL 1000,205-186-136,#CDBA88,0-9-34-20,50,Green beige,Grünbeige
RAL 3000,175-43-30,#AF2B1E,0-75-83-31,11,Flame red,Feuerrot
RAL 5002,32-33-79,#20214F,59-58-0-69,3,Ultramarine blue,Ultramarinblau
RAL 6018,87-166-57,#57A639,48-0-66-35,28,Yellow green,Gelbgrün
RAL 7000,120-133-139,#78858B,14-4-0-45,22,Squirrel grey,Fehgrau
RAL 9005,10-10-13,#0A0A0D,23-23-0-95,1,Jet black,Tiefschwarz
RAL 9010,255-255-255,#FFFFFF,0-0-0-0,90,,Reinweiß
RAL 7000,126-139-146,#7E8B92,14-5-0-43,23,Squirrel grey,Fehgrau
RAL 9999,1-2,#010203,,,Broken,Kaputt
,0-0-0,#000000,,,No code,
RAL 8888,300-0-0,#FF0000,,,Out of range,
";

/// Number of distinct valid codes in [`SAMPLE_CSV`]
pub const SAMPLE_ENTRIES: usize = 7;

/// Path the mock server publishes [`SAMPLE_CSV`] under
pub const CSV_PATH: &str = "/ral_classic.csv";

/// Well-known codes and their expected values
pub mod codes {
    pub const FLAME_RED: &str = "RAL 3000";
    pub const FLAME_RED_HEX: &str = "#AF2B1E";
    pub const SQUIRREL_GREY: &str = "RAL 7000";
    pub const JET_BLACK: &str = "RAL 9005";
    pub const PURE_WHITE: &str = "RAL 9010";
    pub const MISSING: &str = "RAL 0000";
}

/// Rows equivalent to [`SAMPLE_CSV`]
pub fn sample_rows() -> Vec<RawRow> {
    ralmatch::services::parse_csv(SAMPLE_CSV.as_bytes()).expect("fixture CSV must parse")
}

/// Reference table built from [`SAMPLE_CSV`]
pub fn sample_table() -> ReferenceTable {
    ReferenceTable::build(&sample_rows())
}
