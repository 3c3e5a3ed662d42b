//! 8-bit RGB color type
//!
//! RAL reference entries and query colors are both plain 8-bit sRGB
//! triples. Matching happens directly on these values, no gamma decoding.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// Length of the diagonal of the RGB cube, `sqrt(3 * 255²)`.
///
/// This is the largest Euclidean distance two valid colors can have.
pub const MAX_DISTANCE: f64 = 441.672_955_930_063_7;

/// A color as three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    ///
    /// # Example
    /// ```
    /// use ral_palette::Rgb;
    /// let white = Rgb::from_bytes([255, 255, 255]);
    /// assert_eq!(white.g, 255);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as `#RRGGBB` with uppercase digits.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Euclidean distance between two colors in RGB space.
    ///
    /// # Example
    /// ```
    /// use ral_palette::{Rgb, MAX_DISTANCE};
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert!((black.distance(white) - MAX_DISTANCE).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(other.r) - f64::from(self.r);
        let dg = f64::from(other.g) - f64::from(self.g);
        let db = f64::from(other.b) - f64::from(self.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_bytes()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Strip the optional `#`, validate, and expand shorthand to six digits.
///
/// Letter case is kept as written.
fn expand_digits(input: &str) -> Result<String, ParseColorError> {
    let s = input.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    let expanded = match s.chars().count() {
        3 => s.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => s.to_string(),
        _ => return Err(ParseColorError::InvalidLength),
    };

    if let Some(bad) = expanded.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHex(bad));
    }

    Ok(expanded)
}

/// Normalize a hex color to `#` followed by exactly six hex digits.
///
/// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`; shorthand is expanded by
/// doubling each digit. Surrounding whitespace is ignored and letter case
/// is preserved, so normalizing twice gives the same result as once.
///
/// # Errors
///
/// [`ParseColorError::InvalidLength`] unless there are 3 or 6 digits,
/// [`ParseColorError::InvalidHex`] for any non-hex character.
///
/// # Example
/// ```
/// use ral_palette::normalize_hex;
/// assert_eq!(normalize_hex("fA0").unwrap(), "#ffAA00");
/// assert_eq!(normalize_hex("#123456").unwrap(), "#123456");
/// ```
pub fn normalize_hex(input: &str) -> Result<String, ParseColorError> {
    expand_digits(input).map(|digits| format!("#{digits}"))
}

/// Convert a hex color string to its RGB channels.
///
/// The input is normalized first, so every format accepted by
/// [`normalize_hex`] works here.
pub fn hex_to_rgb(input: &str) -> Result<Rgb, ParseColorError> {
    input.parse()
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = expand_digits(s)?;
        let value = digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0u32, |acc, d| (acc << 4) | d);
        Ok(Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        })
    }
}
