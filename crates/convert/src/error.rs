//! Error types for theme conversion.

use thiserror::Error;

/// Any failure of [`convert`](crate::convert).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
	/// The theme text is not a relaxed-JSON object.
	#[error(transparent)]
	Syntax(#[from] SyntaxError),

	/// A color field is missing or unusable.
	#[error(transparent)]
	Validation(#[from] ValidationError),
}

/// The theme text could not be read as a relaxed-JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
	/// Diagnostic reported by the relaxed-JSON parser.
	#[error("{message}")]
	Parse {
		/// Parser message, verbatim.
		message: String,
		/// 1-based line of the failure, when the parser reports one.
		line: Option<usize>,
		/// 1-based column of the failure, when the parser reports one.
		column: Option<usize>,
	},

	/// The document parsed, but its top-level value is not an object.
	#[error("top-level value must be an object, found {found}")]
	NotAnObject {
		/// JSON type of the top-level value.
		found: &'static str,
	},
}

/// A color field failed validation.
///
/// Only the first failing field in schema order is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// A required field is absent.
	#[error("missing required field: {field}")]
	Missing {
		/// Key of the absent field.
		field: &'static str,
	},

	/// The value is a string but not a hex color, even after alpha stripping.
	#[error("{field}: \"{value}\" is not a valid color")]
	Malformed {
		/// Key of the offending field.
		field: &'static str,
		/// The value as written in the document.
		value: String,
	},

	/// The value is present but is not a string.
	#[error("{field}: expected a color string, found {found}")]
	WrongType {
		/// Key of the offending field.
		field: &'static str,
		/// JSON type of the value.
		found: &'static str,
	},
}

impl ValidationError {
	/// Key of the field this error is about.
	pub fn field(&self) -> &'static str {
		match *self {
			Self::Missing { field } | Self::Malformed { field, .. } | Self::WrongType { field, .. } => {
				field
			}
		}
	}
}

/// Result type for conversion operations.
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
