//! Tunable parameters for a snow effect.
//!
//! The page runs the same engine in two flavours: a dense full-page
//! background and a lighter, slower effect confined to modal cards. Both are
//! plain [`SnowPreset`] values.

use rand::Rng;
use serde::Deserialize;

use super::theme::Color;

/// Radii the renderer is tuned for.
pub const RADIUS_LIMITS: Band = Band::new(0.5, 3.0);

/// Why a preset cannot drive a particle field.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PresetError {
	/// Non-finite or inverted bounds, or a width the sampler cannot represent.
	#[error("{field} band [{min}, {max}) is not a finite ascending range")]
	MalformedBand {
		field: &'static str,
		min: f64,
		max: f64,
	},
	/// A well-formed band outside the range the field allows.
	#[error("{field} band [{min}, {max}) leaves [{lo}, {hi}]")]
	OutOfRange {
		field: &'static str,
		min: f64,
		max: f64,
		lo: f64,
		hi: f64,
	},
	/// Some flake could stand still or rise.
	#[error("slowest flake falls {0} px per frame, flakes must always move down")]
	StalledFall(f64),
	/// Some flake's fall overflows.
	#[error("fastest flake falls {0} px per frame")]
	UnboundedFall(f64),
	/// A per-frame step is NaN or infinite.
	#[error("{0} must be finite")]
	NotFinite(&'static str),
}

/// Half-open range `[min, max)` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Band {
	pub min: f64,
	pub max: f64,
}

impl Band {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Draw a value from the band. Empty, inverted or unbounded bands yield
	/// `min`.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		if self.max > self.min && (self.max - self.min).is_finite() {
			rng.gen_range(self.min..self.max)
		} else {
			self.min
		}
	}

	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value < self.max
	}

	/// Finite, ascending and narrow enough for its width to be representable.
	pub fn is_well_formed(&self) -> bool {
		self.min.is_finite()
			&& self.max.is_finite()
			&& self.min <= self.max
			&& (self.max - self.min).is_finite()
	}

	fn check(&self, field: &'static str, lo: f64, hi: f64) -> Result<(), PresetError> {
		let Band { min, max } = *self;
		if !self.is_well_formed() {
			return Err(PresetError::MalformedBand { field, min, max });
		}
		if min < lo || max > hi {
			return Err(PresetError::OutOfRange {
				field,
				min,
				max,
				lo,
				hi,
			});
		}
		Ok(())
	}
}

/// Per-frame vertical displacement of a flake.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallModel {
	/// `cos(phase) + base + radius * radius_factor`. Flakes surge and slow.
	Oscillating { base: f64, radius_factor: f64 },
	/// `base + radius * radius_factor`. Constant per flake.
	Linear { base: f64, radius_factor: f64 },
}

impl FallModel {
	pub fn displacement(&self, radius: f64, phase: f64) -> f64 {
		match *self {
			FallModel::Oscillating {
				base,
				radius_factor,
			} => phase.cos() + base + radius * radius_factor,
			FallModel::Linear {
				base,
				radius_factor,
			} => base + radius * radius_factor,
		}
	}
}

/// Full configuration of one snow effect instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SnowPreset {
	/// Number of flakes. Fixed for the lifetime of a field.
	pub count: usize,
	pub radius: Band,
	pub opacity: Band,
	/// Optional per-flake fall-speed multiplier.
	pub speed: Option<Band>,
	pub fall: FallModel,
	/// Horizontal sway amplitude in pixels per frame.
	pub sway: f64,
	/// Phase advance per frame.
	pub phase_step: f64,
	pub color: Color,
}

impl SnowPreset {
	/// Dense background snow for the whole viewport.
	pub fn full_page() -> Self {
		Self {
			count: 200,
			radius: Band::new(1.0, 3.0),
			opacity: Band::new(0.3, 0.8),
			speed: None,
			fall: FallModel::Oscillating {
				base: 1.0,
				radius_factor: 0.5,
			},
			sway: 1.0,
			phase_step: 0.01,
			color: Color::SNOW,
		}
	}

	/// Light snow confined to a modal card.
	pub fn modal() -> Self {
		Self {
			count: 50,
			radius: RADIUS_LIMITS,
			opacity: Band::new(0.2, 0.6),
			speed: None,
			fall: FallModel::Linear {
				base: 0.5,
				radius_factor: 0.25,
			},
			sway: 0.5,
			phase_step: 0.01,
			color: Color::SNOW,
		}
	}
}

impl SnowPreset {
	/// Check that every flake this preset spawns stays drawable and keeps
	/// falling, so `y` never leaves `[-10, height]`.
	pub fn validate(&self) -> Result<(), PresetError> {
		self.radius
			.check("radius", RADIUS_LIMITS.min, RADIUS_LIMITS.max)?;
		self.opacity.check("opacity", 0.0, 1.0)?;
		if let Some(speed) = self.speed {
			speed.check("speed", 0.0, f64::MAX)?;
		}
		for (name, value) in [("sway", self.sway), ("phase_step", self.phase_step)] {
			if !value.is_finite() {
				return Err(PresetError::NotFinite(name));
			}
		}
		let (slowest, fastest) = self.fall.extremes(self.radius);
		if !(slowest > 0.0) {
			return Err(PresetError::StalledFall(slowest));
		}
		if !fastest.is_finite() {
			return Err(PresetError::UnboundedFall(fastest));
		}
		Ok(())
	}
}

impl Default for SnowPreset {
	fn default() -> Self {
		Self::full_page()
	}
}
