//! Hex color normalization.
//!
//! Editor themes write colors as `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
//! Terminal schemes only take the opaque forms, so the alpha digits are cut
//! off before the remaining string is checked.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A string that is not a hex color after alpha stripping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{0}\" is not a valid color")]
pub struct InvalidColor(pub String);

/// An opaque hex color, always `#RGB` or `#RRGGBB`.
///
/// Letter case is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
	/// Strips an alpha suffix from `raw` and validates what is left.
	///
	/// The error carries `raw` unchanged, not the truncated form.
	pub fn normalize(raw: &str) -> Result<Self, InvalidColor> {
		let opaque = strip_alpha(raw);
		if is_opaque_hex(opaque) {
			Ok(Self(opaque.to_string()))
		} else {
			Err(InvalidColor(raw.to_string()))
		}
	}

	/// The normalized color, including the leading `#`.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl FromStr for HexColor {
	type Err = InvalidColor;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::normalize(s)
	}
}

impl fmt::Display for HexColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for HexColor {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// Drops the alpha digit(s) of a `#RGBA` or `#RRGGBBAA` string.
///
/// Only the length in characters decides; the dropped characters are not
/// looked at.
pub fn strip_alpha(raw: &str) -> &str {
	let keep = match raw.chars().count() {
		5 => 4,
		9 => 7,
		_ => return raw,
	};
	match raw.char_indices().nth(keep) {
		Some((end, _)) => &raw[..end],
		None => raw,
	}
}

/// `#` followed by exactly 3 or 6 hex digits.
fn is_opaque_hex(value: &str) -> bool {
	let Some(digits) = value.strip_prefix('#') else {
		return false;
	};
	matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("#abc", "#abc")]
	#[case("#A1b2C3", "#A1b2C3")]
	#[case("#1234", "#123")]
	#[case("#11223344", "#112233")]
	#[case("#16161e", "#16161e")]
	#[case("#515c7e4d", "#515c7e")]
	fn normalize_accepts(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(HexColor::normalize(raw).unwrap().as_str(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("#")]
	#[case("abc")]
	#[case("123456")]
	#[case("#12")]
	#[case("#12345")]
	#[case("#1234567")]
	#[case("#1234567890")]
	#[case("#ggg")]
	#[case("#12345g")]
	#[case("notacolor")]
	#[case(" #123")]
	#[case("#12é")]
	fn normalize_rejects(#[case] raw: &str) {
		assert_eq!(HexColor::normalize(raw), Err(InvalidColor(raw.to_string())));
	}

	#[test]
	fn alpha_digits_are_not_inspected() {
		assert_eq!(HexColor::normalize("#123z").unwrap().as_str(), "#123");
		assert_eq!(HexColor::normalize("#abcdefzz").unwrap().as_str(), "#abcdef");
		assert_eq!(HexColor::normalize("#123é").unwrap().as_str(), "#123");
		assert_eq!(HexColor::normalize("#abcdefzé").unwrap().as_str(), "#abcdef");
	}

	#[rstest]
	#[case("#1234", "#123")]
	#[case("#123é", "#123")]
	#[case("#éééé", "#ééé")]
	#[case("#abcdefzé", "#abcdef")]
	#[case("#abc", "#abc")]
	#[case("#12é", "#12é")]
	fn strip_alpha_counts_characters(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(strip_alpha(raw), expected);
	}

	#[test]
	fn error_reports_original_string() {
		let err = HexColor::normalize("#zzzzzz80").unwrap_err();
		assert_eq!(err.to_string(), "\"#zzzzzz80\" is not a valid color");
	}

	#[test]
	fn serializes_as_plain_string() {
		let color: HexColor = "#7aa2f7".parse().unwrap();
		assert_eq!(serde_json::to_string(&color).unwrap(), "\"#7aa2f7\"");
	}

	fn arb_opaque() -> impl Strategy<Value = String> {
		prop_oneof!["#[0-9a-fA-F]{3}", "#[0-9a-fA-F]{6}"]
	}

	proptest! {
		/// Normalizing a normalized color is a no-op.
		#[test]
		fn prop_normalize_idempotent(raw in arb_opaque()) {
			let once = HexColor::normalize(&raw).unwrap();
			let twice = HexColor::normalize(once.as_str()).unwrap();
			prop_assert_eq!(once.as_str(), raw.as_str());
			prop_assert_eq!(twice, once);
		}

		/// Appending an alpha group is undone by normalization.
		#[test]
		fn prop_alpha_is_stripped(short in "[0-9a-fA-F]{3}", long in "[0-9a-fA-F]{6}", a in "[0-9a-fA-F]", aa in "[0-9a-fA-F]{2}") {
			let stripped = HexColor::normalize(&format!("#{short}{a}")).unwrap();
			prop_assert_eq!(stripped.as_str(), format!("#{short}"));

			let stripped = HexColor::normalize(&format!("#{long}{aa}")).unwrap();
			prop_assert_eq!(stripped.as_str(), format!("#{long}"));
		}
	}
}
