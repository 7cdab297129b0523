//! The terminal color scheme produced by a conversion.

use serde::Serialize;

use crate::color::HexColor;
use crate::error::ValidationError;
use crate::schema::Slot;

/// A terminal color scheme.
///
/// Serializes with the scheme's own camelCase field names, `name` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputPalette {
	/// Display name, as supplied by the caller.
	pub name: String,
	pub background: HexColor,
	pub foreground: HexColor,
	pub black: HexColor,
	pub blue: HexColor,
	pub bright_black: HexColor,
	pub bright_blue: HexColor,
	pub bright_cyan: HexColor,
	pub bright_green: HexColor,
	pub bright_purple: HexColor,
	pub bright_red: HexColor,
	pub bright_white: HexColor,
	pub bright_yellow: HexColor,
	pub cyan: HexColor,
	pub green: HexColor,
	pub purple: HexColor,
	pub red: HexColor,
	pub white: HexColor,
	pub yellow: HexColor,
	pub cursor_color: HexColor,
	pub selection_background: HexColor,
}

impl OutputPalette {
	/// Color assigned to `slot`.
	pub fn get(&self, slot: Slot) -> &HexColor {
		match slot {
			Slot::Background => &self.background,
			Slot::Foreground => &self.foreground,
			Slot::Black => &self.black,
			Slot::Blue => &self.blue,
			Slot::BrightBlack => &self.bright_black,
			Slot::BrightBlue => &self.bright_blue,
			Slot::BrightCyan => &self.bright_cyan,
			Slot::BrightGreen => &self.bright_green,
			Slot::BrightPurple => &self.bright_purple,
			Slot::BrightRed => &self.bright_red,
			Slot::BrightWhite => &self.bright_white,
			Slot::BrightYellow => &self.bright_yellow,
			Slot::Cyan => &self.cyan,
			Slot::Green => &self.green,
			Slot::Purple => &self.purple,
			Slot::Red => &self.red,
			Slot::White => &self.white,
			Slot::Yellow => &self.yellow,
			Slot::CursorColor => &self.cursor_color,
			Slot::SelectionBackground => &self.selection_background,
		}
	}

	/// Iterates `(slot, color)` pairs in output order.
	pub fn iter(&self) -> impl Iterator<Item = (Slot, &HexColor)> {
		Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
	}
}

/// Colors collected per slot while the schema is walked.
#[derive(Debug, Default)]
pub(crate) struct SlotValues {
	values: [Option<HexColor>; Slot::COUNT],
}

impl SlotValues {
	pub(crate) fn set(&mut self, slot: Slot, color: HexColor) {
		self.values[slot as usize] = Some(color);
	}

	/// Takes the color for `slot`.
	///
	/// Every slot has exactly one field in the schema, so after a successful
	/// walk this only fails if the schema itself is broken.
	fn take(&mut self, slot: Slot) -> Result<HexColor, ValidationError> {
		self.values[slot as usize]
			.take()
			.ok_or(ValidationError::Missing { field: slot.name() })
	}

	pub(crate) fn into_palette(mut self, name: &str) -> Result<OutputPalette, ValidationError> {
		Ok(OutputPalette {
			name: name.to_string(),
			background: self.take(Slot::Background)?,
			foreground: self.take(Slot::Foreground)?,
			black: self.take(Slot::Black)?,
			blue: self.take(Slot::Blue)?,
			bright_black: self.take(Slot::BrightBlack)?,
			bright_blue: self.take(Slot::BrightBlue)?,
			bright_cyan: self.take(Slot::BrightCyan)?,
			bright_green: self.take(Slot::BrightGreen)?,
			bright_purple: self.take(Slot::BrightPurple)?,
			bright_red: self.take(Slot::BrightRed)?,
			bright_white: self.take(Slot::BrightWhite)?,
			bright_yellow: self.take(Slot::BrightYellow)?,
			cyan: self.take(Slot::Cyan)?,
			green: self.take(Slot::Green)?,
			purple: self.take(Slot::Purple)?,
			red: self.take(Slot::Red)?,
			white: self.take(Slot::White)?,
			yellow: self.take(Slot::Yellow)?,
			cursor_color: self.take(Slot::CursorColor)?,
			selection_background: self.take(Slot::SelectionBackground)?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled(color: &str) -> SlotValues {
		let mut values = SlotValues::default();
		for slot in Slot::ALL {
			values.set(slot, HexColor::normalize(color).unwrap());
		}
		values
	}

	#[test]
	fn slot_indices_follow_declaration_order() {
		for (idx, slot) in Slot::ALL.into_iter().enumerate() {
			assert_eq!(slot as usize, idx);
		}
	}

	#[test]
	fn serialized_keys_match_slot_names() {
		let palette = filled("#000").into_palette("Test").unwrap();
		let json = serde_json::to_value(&palette).unwrap();
		let object = json.as_object().unwrap();

		assert_eq!(object.len(), Slot::COUNT + 1);
		assert_eq!(object["name"], "Test");
		for (slot, color) in palette.iter() {
			assert_eq!(object[slot.name()], color.as_str(), "slot {slot}");
		}
	}

	#[test]
	fn serialized_order_starts_with_name() {
		let palette = filled("#fff").into_palette("Order").unwrap();
		let text = serde_json::to_string(&palette).unwrap();
		assert!(text.starts_with(r##"{"name":"Order","background":"#fff","foreground":"#fff","black""##));
		assert!(text.ends_with(r##""cursorColor":"#fff","selectionBackground":"#fff"}"##));
	}

	#[test]
	fn unfilled_slot_is_reported() {
		let mut values = filled("#123");
		values.values[Slot::Cyan as usize] = None;
		assert_eq!(
			values.into_palette("x"),
			Err(ValidationError::Missing { field: "cyan" })
		);
	}
}
