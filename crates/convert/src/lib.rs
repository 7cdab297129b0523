//! Editor color theme to terminal color scheme conversion.
//!
//! Takes the text of an editor theme (relaxed JSON: comments, trailing
//! commas and unquoted keys are fine) and produces the flat palette a
//! terminal color scheme expects:
//!
//! ```
//! # let theme = include_str!("../tests/fixtures/tokyo-night.jsonc");
//! let palette = termtheme_convert::convert("Tokyo Night", theme).unwrap();
//! assert_eq!(palette.name, "Tokyo Night");
//! assert_eq!(palette.background.as_str(), "#16161e");
//! ```
//!
//! # Pipeline
//!
//! 1. [`parse`] reads the text into an untyped tree; anything that is not a
//!    relaxed-JSON object is a [`SyntaxError`].
//! 2. [`resolve`] walks [`schema::COLOR_FIELDS`] over the `colors` object,
//!    stripping alpha channels, validating hex colors and substituting
//!    fallbacks. The first bad field is a [`ValidationError`].
//!
//! Conversion is pure: no I/O, no shared state, safe to call from any number
//! of threads at once.

pub mod color;
pub mod error;
pub mod palette;
pub mod parse;
pub mod resolve;
pub mod schema;

pub use color::{HexColor, InvalidColor};
pub use error::{ConvertError, Result, SyntaxError, ValidationError};
pub use palette::OutputPalette;
pub use schema::{COLOR_FIELDS, ColorField, Presence, Slot};

/// Converts editor theme text into a terminal palette named `theme_name`.
///
/// The name is copied verbatim; nothing in the document is used for it.
pub fn convert(theme_name: &str, theme_text: &str) -> Result<OutputPalette> {
	let document = parse::parse_object(theme_text)?;
	let palette = resolve::resolve_palette(theme_name, &document)?;
	tracing::debug!(theme = theme_name, "converted theme");
	Ok(palette)
}
