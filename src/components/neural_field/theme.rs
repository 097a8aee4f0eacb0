//! Color mode and visual styling for the neural field.
//!
//! The field knows exactly two looks: a dark mode with green nodes and a
//! light mode with blue nodes. Switching modes recolors the live session in
//! place; it never rebuilds geometry.

/// RGB color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// CSS `rgba(...)` string with the given alpha.
	pub fn to_css_rgba(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}

/// The two recognized color modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
	#[default]
	Dark,
	Light,
}

impl ColorMode {
	/// Stored preference value for this mode.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dark => "dark",
			Self::Light => "light",
		}
	}

	/// Parse a stored preference value. Unrecognized values fall back to dark.
	pub fn parse(value: &str) -> Self {
		match value {
			"light" => Self::Light,
			_ => Self::Dark,
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Dark => Self::Light,
			Self::Light => Self::Dark,
		}
	}
}

/// Shared appearance of the field: one node style and one line opacity for
/// the whole session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldTheme {
	/// Fill color shared by every node.
	pub node_color: Color,
	/// Node fill opacity.
	pub node_opacity: f64,
	/// Rendering radius of a node, in world units.
	pub node_radius: f64,
	/// Base opacity multiplied into every connection line.
	pub line_opacity: f64,
}

impl FieldTheme {
	pub fn for_mode(mode: ColorMode) -> Self {
		match mode {
			ColorMode::Dark => Self {
				node_color: Color::rgb(0x00, 0xff, 0x00),
				node_opacity: 0.8,
				node_radius: 0.8,
				line_opacity: 0.5,
			},
			ColorMode::Light => Self {
				node_color: Color::rgb(0x00, 0x00, 0xff),
				node_opacity: 0.8,
				node_radius: 0.8,
				line_opacity: 0.2,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_recognizes_both_modes() {
		assert_eq!(ColorMode::parse("dark"), ColorMode::Dark);
		assert_eq!(ColorMode::parse("light"), ColorMode::Light);
	}

	#[test]
	fn parse_defaults_to_dark_on_unrecognized_value() {
		assert_eq!(ColorMode::parse(""), ColorMode::Dark);
		assert_eq!(ColorMode::parse("solarized"), ColorMode::Dark);
	}

	#[test]
	fn toggled_round_trips() {
		assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
		assert_eq!(ColorMode::Light.toggled().toggled(), ColorMode::Light);
	}

	#[test]
	fn modes_differ_only_in_color_state() {
		let dark = FieldTheme::for_mode(ColorMode::Dark);
		let light = FieldTheme::for_mode(ColorMode::Light);
		assert_eq!(dark.node_color, Color::rgb(0, 255, 0));
		assert_eq!(light.node_color, Color::rgb(0, 0, 255));
		assert!(dark.line_opacity > light.line_opacity);
		assert_eq!(dark.node_radius, light.node_radius);
	}

	#[test]
	fn css_rgba_formats_channels_and_alpha() {
		assert_eq!(
			Color::rgb(0, 255, 0).to_css_rgba(0.8),
			"rgba(0, 255, 0, 0.8)"
		);
	}
}
