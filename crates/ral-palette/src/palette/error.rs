//! Error types for conversions
//!
//! This module provides error types for hex parsing and table lookups.

use std::fmt;

/// Why a hex color string was rejected.
///
/// Checked after trimming surrounding whitespace and removing one leading
/// `#`; what remains must be 3 or 6 hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Neither 3 nor 6 characters left after trimming and removing `#`
    InvalidLength,
    /// First character that is not a hex digit (a sign counts as one)
    InvalidHex(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for conversions against a reference table.
///
/// Every failure of the [`Converter`](super::Converter) is one of these
/// variants; no conversion panics.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The RAL code has no entry in the table
    NotFound,
    /// The hex input could not be parsed
    InvalidFormat(ParseColorError),
    /// Nearest-match search against a table with no entries
    NoEntries,
}

impl From<ParseColorError> for ConvertError {
    fn from(err: ParseColorError) -> Self {
        ConvertError::InvalidFormat(err)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::NotFound => write!(f, "RAL code not found."),
            ConvertError::InvalidFormat(err) => write!(f, "invalid hex color: {}", err),
            ConvertError::NoEntries => write!(f, "reference table has no entries"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InvalidFormat(err) => Some(err),
            _ => None,
        }
    }
}
