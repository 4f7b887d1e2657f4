//! Colors used when painting snow.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Plain white, the color of every flake.
	pub const SNOW: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self {
			a: a.clamp(0.0, 1.0),
			..self
		}
	}

	/// CSS color string. Translucent colors always use `rgba()`.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl Default for Color {
	fn default() -> Self {
		Color::SNOW
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::SNOW.to_css(), "#ffffff");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(Color::SNOW.with_alpha(0.5).to_css(), "rgba(255, 255, 255, 0.5)");
	}

	#[test]
	fn alpha_is_clamped() {
		assert_eq!(Color::SNOW.with_alpha(3.0).a, 1.0);
		assert_eq!(Color::SNOW.with_alpha(-1.0).a, 0.0);
	}
}
