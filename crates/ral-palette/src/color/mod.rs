//! Color value type and hex conversions
//!
//! # Example
//!
//! ```
//! use ral_palette::{hex_to_rgb, normalize_hex, Rgb};
//!
//! assert_eq!(normalize_hex("#f80").unwrap(), "#ff8800");
//! assert_eq!(hex_to_rgb("#f80").unwrap(), Rgb::new(255, 136, 0));
//! ```

mod rgb;

pub use rgb::{hex_to_rgb, normalize_hex, Rgb, MAX_DISTANCE};
