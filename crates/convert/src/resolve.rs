//! Walks the schema over a parsed document.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::color::HexColor;
use crate::error::ValidationError;
use crate::palette::{OutputPalette, SlotValues};
use crate::parse::json_type;
use crate::schema::{COLOR_FIELDS, COLORS_KEY, ColorField, Presence};

/// Validates the `colors` object of `document` and builds the palette.
///
/// Fields are checked in [`COLOR_FIELDS`] order; the first failure is
/// returned and nothing after it is looked at.
pub fn resolve_palette(
	theme_name: &str,
	document: &Map<String, Value>,
) -> Result<OutputPalette, ValidationError> {
	let colors = colors_object(document)?;

	let mut resolved: HashMap<&'static str, HexColor> = HashMap::with_capacity(COLOR_FIELDS.len());
	let mut slots = SlotValues::default();

	for field in &COLOR_FIELDS {
		let color = match (colors.get(field.key), field.presence) {
			(Some(value), _) => normalize_field(field, value)?,
			(None, Presence::Required) => return Err(ValidationError::Missing { field: field.key }),
			(None, Presence::Optional { fallback }) => {
				let color = resolved
					.get(fallback)
					.cloned()
					.ok_or(ValidationError::Missing { field: fallback })?;
				debug!(field = field.key, fallback, color = %color, "substituted fallback color");
				color
			}
		};

		if let Some(slot) = field.slot {
			slots.set(slot, color.clone());
		}
		resolved.insert(field.key, color);
	}

	slots.into_palette(theme_name)
}

fn colors_object(document: &Map<String, Value>) -> Result<&Map<String, Value>, ValidationError> {
	match document.get(COLORS_KEY) {
		Some(Value::Object(colors)) => Ok(colors),
		Some(other) => Err(ValidationError::WrongType {
			field: COLORS_KEY,
			found: json_type(other),
		}),
		None => Err(ValidationError::Missing { field: COLORS_KEY }),
	}
}

fn normalize_field(field: &ColorField, value: &Value) -> Result<HexColor, ValidationError> {
	let Value::String(raw) = value else {
		return Err(ValidationError::WrongType {
			field: field.key,
			found: json_type(value),
		});
	};
	HexColor::normalize(raw).map_err(|err| ValidationError::Malformed {
		field: field.key,
		value: err.0,
	})
}
