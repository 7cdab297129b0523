//! Relaxed-JSON reading.
//!
//! Editor themes are routinely written with comments, trailing commas and
//! unquoted keys, so the text goes through a JSON5 reader rather than a strict
//! JSON one. The tree comes back as a plain [`serde_json::Value`].

use serde_json::{Map, Value};

use crate::error::SyntaxError;

/// Parses relaxed-JSON text into an untyped tree.
pub fn parse_document(input: &str) -> Result<Value, SyntaxError> {
	json5::from_str::<Value>(input).map_err(syntax_error)
}

/// Parses relaxed-JSON text and requires the top-level value to be an object.
pub fn parse_object(input: &str) -> Result<Map<String, Value>, SyntaxError> {
	match parse_document(input)? {
		Value::Object(map) => Ok(map),
		other => Err(SyntaxError::NotAnObject {
			found: json_type(&other),
		}),
	}
}

/// Name of a value's JSON type, for diagnostics.
pub fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

fn syntax_error(err: json5::Error) -> SyntaxError {
	let json5::Error::Message { msg, location } = err;
	SyntaxError::Parse {
		message: msg,
		line: location.as_ref().map(|loc| loc.line),
		column: location.as_ref().map(|loc| loc.column),
	}
}
