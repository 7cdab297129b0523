//! The color field schema.
//!
//! [`COLOR_FIELDS`] is the single source of truth for which editor keys are
//! read, in which order they are checked, which of them may be absent, and
//! which terminal scheme slot each one fills. Validation walks it front to
//! back and stops at the first failure, so its order is the error precedence.

use std::fmt;

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
	/// Absence is a validation error.
	Required,
	/// Absence is filled with the value of another, required, field.
	Optional {
		/// Key of the field whose normalized value is substituted.
		fallback: &'static str,
	},
}

/// A named color slot of the terminal scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
	Background,
	Foreground,
	Black,
	Blue,
	BrightBlack,
	BrightBlue,
	BrightCyan,
	BrightGreen,
	BrightPurple,
	BrightRed,
	BrightWhite,
	BrightYellow,
	Cyan,
	Green,
	Purple,
	Red,
	White,
	Yellow,
	CursorColor,
	SelectionBackground,
}

impl Slot {
	/// Number of slots.
	pub const COUNT: usize = 20;

	/// Every slot, in output order.
	pub const ALL: [Slot; Slot::COUNT] = [
		Slot::Background,
		Slot::Foreground,
		Slot::Black,
		Slot::Blue,
		Slot::BrightBlack,
		Slot::BrightBlue,
		Slot::BrightCyan,
		Slot::BrightGreen,
		Slot::BrightPurple,
		Slot::BrightRed,
		Slot::BrightWhite,
		Slot::BrightYellow,
		Slot::Cyan,
		Slot::Green,
		Slot::Purple,
		Slot::Red,
		Slot::White,
		Slot::Yellow,
		Slot::CursorColor,
		Slot::SelectionBackground,
	];

	/// Field name in the terminal scheme.
	pub const fn name(self) -> &'static str {
		match self {
			Slot::Background => "background",
			Slot::Foreground => "foreground",
			Slot::Black => "black",
			Slot::Blue => "blue",
			Slot::BrightBlack => "brightBlack",
			Slot::BrightBlue => "brightBlue",
			Slot::BrightCyan => "brightCyan",
			Slot::BrightGreen => "brightGreen",
			Slot::BrightPurple => "brightPurple",
			Slot::BrightRed => "brightRed",
			Slot::BrightWhite => "brightWhite",
			Slot::BrightYellow => "brightYellow",
			Slot::Cyan => "cyan",
			Slot::Green => "green",
			Slot::Purple => "purple",
			Slot::Red => "red",
			Slot::White => "white",
			Slot::Yellow => "yellow",
			Slot::CursorColor => "cursorColor",
			Slot::SelectionBackground => "selectionBackground",
		}
	}
}

impl fmt::Display for Slot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// One entry of the document's `colors` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorField {
	/// Key inside `colors`, e.g. `terminal.ansiBlack`.
	pub key: &'static str,
	pub presence: Presence,
	/// Terminal slot filled by this field. `None` for fields that are only
	/// read as a fallback source.
	pub slot: Option<Slot>,
}

impl ColorField {
	const fn required(key: &'static str, slot: Option<Slot>) -> Self {
		Self {
			key,
			presence: Presence::Required,
			slot,
		}
	}

	const fn optional(key: &'static str, fallback: &'static str, slot: Slot) -> Self {
		Self {
			key,
			presence: Presence::Optional { fallback },
			slot: Some(slot),
		}
	}
}

/// Key of the object holding all color fields.
pub const COLORS_KEY: &str = "colors";

/// Every color field, in validation order.
///
/// Fallback sources come first so they are always resolved before the
/// optional fields that read them.
pub static COLOR_FIELDS: [ColorField; 23] = [
	ColorField::required("editor.background", None),
	ColorField::required("foreground", None),
	ColorField::required("editor.selectionBackground", None),
	ColorField::required("editorCursor.foreground", Some(Slot::CursorColor)),
	ColorField::required("terminal.ansiBlack", Some(Slot::Black)),
	ColorField::required("terminal.ansiBlue", Some(Slot::Blue)),
	ColorField::required("terminal.ansiBrightBlack", Some(Slot::BrightBlack)),
	ColorField::required("terminal.ansiBrightBlue", Some(Slot::BrightBlue)),
	ColorField::required("terminal.ansiBrightCyan", Some(Slot::BrightCyan)),
	ColorField::required("terminal.ansiBrightGreen", Some(Slot::BrightGreen)),
	ColorField::required("terminal.ansiBrightMagenta", Some(Slot::BrightPurple)),
	ColorField::required("terminal.ansiBrightRed", Some(Slot::BrightRed)),
	ColorField::required("terminal.ansiBrightWhite", Some(Slot::BrightWhite)),
	ColorField::required("terminal.ansiBrightYellow", Some(Slot::BrightYellow)),
	ColorField::required("terminal.ansiCyan", Some(Slot::Cyan)),
	ColorField::required("terminal.ansiGreen", Some(Slot::Green)),
	ColorField::required("terminal.ansiMagenta", Some(Slot::Purple)),
	ColorField::required("terminal.ansiRed", Some(Slot::Red)),
	ColorField::required("terminal.ansiWhite", Some(Slot::White)),
	ColorField::required("terminal.ansiYellow", Some(Slot::Yellow)),
	ColorField::optional("terminal.background", "editor.background", Slot::Background),
	ColorField::optional("terminal.foreground", "foreground", Slot::Foreground),
	ColorField::optional(
		"terminal.selectionBackground",
		"editor.selectionBackground",
		Slot::SelectionBackground,
	),
];
