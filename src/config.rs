//! Page-level configuration.
//!
//! Defaults describe the stock page. A host page may override any field with
//! a JSON block:
//!
//! ```html
//! <script id="snow-config" type="application/json">
//!   { "background": { "count": 120 }, "modal": { "sway": 0.8 } }
//! </script>
//! ```

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::snow::{Band, Color, FallModel, PresetError, SnowPreset};

/// Id of the optional configuration script element.
pub const CONFIG_ELEMENT_ID: &str = "snow-config";

/// Why a configuration block was not applied.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Not JSON, or keys the overrides do not know.
	#[error("malformed JSON: {0}")]
	Json(#[from] serde_json::Error),
	/// A merged preset failed [`SnowPreset::validate`].
	#[error("{effect} preset rejected: {source}")]
	Preset {
		effect: &'static str,
		#[source]
		source: PresetError,
	},
}

/// Snow presets for every effect on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
	pub background: SnowPreset,
	pub modal: SnowPreset,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			background: SnowPreset::full_page(),
			modal: SnowPreset::modal(),
		}
	}
}

/// Fields a page may override on top of a stock preset.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PresetOverrides {
	count: Option<usize>,
	radius: Option<Band>,
	opacity: Option<Band>,
	speed: Option<Band>,
	fall: Option<FallModel>,
	sway: Option<f64>,
	phase_step: Option<f64>,
	color: Option<Color>,
}

impl PresetOverrides {
	fn apply(self, base: SnowPreset) -> SnowPreset {
		SnowPreset {
			count: self.count.unwrap_or(base.count),
			radius: self.radius.unwrap_or(base.radius),
			opacity: self.opacity.unwrap_or(base.opacity),
			speed: self.speed.or(base.speed),
			fall: self.fall.unwrap_or(base.fall),
			sway: self.sway.unwrap_or(base.sway),
			phase_step: self.phase_step.unwrap_or(base.phase_step),
			color: self.color.unwrap_or(base.color),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PageOverrides {
	background: PresetOverrides,
	modal: PresetOverrides,
}

impl PageConfig {
	/// Parse overrides and merge them over the stock presets. The merged
	/// presets must pass [`SnowPreset::validate`].
	pub fn from_json(text: &str) -> Result<Self, ConfigError> {
		let overrides: PageOverrides = serde_json::from_str(text)?;
		let stock = Self::default();
		let config = Self {
			background: overrides.background.apply(stock.background),
			modal: overrides.modal.apply(stock.modal),
		};
		for (effect, preset) in [("background", &config.background), ("modal", &config.modal)] {
			preset
				.validate()
				.map_err(|source| ConfigError::Preset { effect, source })?;
		}
		Ok(config)
	}

	/// Read overrides from the DOM, falling back to defaults.
	pub fn load() -> Self {
		let Some(text) = config_text() else {
			return Self::default();
		};
		match Self::from_json(&text) {
			Ok(config) => {
				info!("config: loaded overrides from #{}", CONFIG_ELEMENT_ID);
				config
			}
			Err(e) => {
				warn!("config: ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
				Self::default()
			}
		}
	}
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_yields_stock_page() {
		assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
	}

	#[test]
	fn overrides_merge_with_presets() {
		let config = PageConfig::from_json(
			r#"{ "background": { "count": 120 }, "modal": { "sway": 0.8 } }"#,
		)
		.unwrap();
		assert_eq!(config.background.count, 120);
		assert!(matches!(config.background.fall, FallModel::Oscillating { .. }));
		assert_eq!(config.modal.sway, 0.8);
		assert_eq!(config.modal.count, 50);
		assert!(matches!(config.modal.fall, FallModel::Linear { .. }));
	}

	#[test]
	fn fall_model_is_tagged_by_kind() {
		let config = PageConfig::from_json(
			r#"{ "modal": { "fall": { "kind": "oscillating", "base": 2.0, "radius_factor": 0.0 } } }"#,
		)
		.unwrap();
		assert_eq!(config.modal.fall.displacement(1.0, 0.0), 3.0);
	}

	#[test]
	fn unknown_keys_are_rejected() {
		assert!(PageConfig::from_json(r#"{ "background": { "flakes": 3 } }"#).is_err());
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(matches!(
			PageConfig::from_json("{ background: "),
			Err(ConfigError::Json(_))
		));
	}

	fn rejection(text: &str) -> (&'static str, PresetError) {
		match PageConfig::from_json(text) {
			Err(ConfigError::Preset { effect, source }) => (effect, source),
			other => panic!("expected a rejected preset, got {other:?}"),
		}
	}

	#[test]
	fn rising_fall_is_rejected() {
		let (effect, err) = rejection(
			r#"{ "modal": { "fall": { "kind": "linear", "base": -2.0, "radius_factor": 0.25 } } }"#,
		);
		assert_eq!(effect, "modal");
		assert!(matches!(err, PresetError::StalledFall(_)));
	}

	#[test]
	fn negative_speed_is_rejected() {
		let (effect, err) = rejection(r#"{ "background": { "speed": { "min": -3.0, "max": -1.0 } } }"#);
		assert_eq!(effect, "background");
		assert!(matches!(err, PresetError::OutOfRange { field: "speed", .. }));
	}

	#[test]
	fn oversized_radius_is_rejected() {
		let (_, err) = rejection(r#"{ "background": { "radius": { "min": 40, "max": 90 } } }"#);
		assert!(matches!(err, PresetError::OutOfRange { field: "radius", .. }));
	}

	#[test]
	fn unsampleable_band_is_rejected() {
		let (_, err) = rejection(r#"{ "background": { "radius": { "min": -1e308, "max": 1e308 } } }"#);
		assert!(matches!(err, PresetError::MalformedBand { field: "radius", .. }));
	}

	#[test]
	fn inverted_band_is_rejected() {
		let (_, err) = rejection(r#"{ "modal": { "opacity": { "min": 0.6, "max": 0.2 } } }"#);
		assert!(matches!(err, PresetError::MalformedBand { field: "opacity", .. }));
	}

	#[test]
	fn opacity_above_one_is_rejected() {
		let (_, err) = rejection(r#"{ "modal": { "opacity": { "min": 0.5, "max": 4.0 } } }"#);
		assert!(matches!(err, PresetError::OutOfRange { field: "opacity", .. }));
	}

	#[test]
	fn overflowing_phase_step_is_rejected() {
		assert!(PageConfig::from_json(r#"{ "background": { "phase_step": 1e400 } }"#).is_err());
	}

	#[test]
	fn accepted_overrides_keep_flakes_on_screen() {
		use crate::components::snow::{ParticleField, SurfaceSize};
		use rand::SeedableRng;
		use rand::rngs::StdRng;

		let config = PageConfig::from_json(
			r#"{ "modal": { "radius": { "min": 2.0, "max": 3.0 }, "fall": { "kind": "linear", "base": 0.1, "radius_factor": 0.0 } } }"#,
		)
		.unwrap();
		let size = SurfaceSize::new(100.0, 100.0);
		let mut field = ParticleField::new(config.modal, size, StdRng::seed_from_u64(9));
		for _ in 0..2000 {
			field.advance(size);
			for p in field.particles() {
				assert!((-10.0..=100.0).contains(&p.y), "y {}", p.y);
				assert!((2.0..3.0).contains(&p.radius));
			}
		}
	}
}
