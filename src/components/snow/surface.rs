//! Seams between the engine and whatever it renders into.
//!
//! [`SurfaceAdapter`] only reports dimensions; [`DrawTarget`] only paints.
//! Keeping them apart lets the simulation run against in-memory fakes.

use super::theme::Color;

/// Pixel dimensions of a drawable region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
	pub width: f64,
	pub height: f64,
}

impl SurfaceSize {
	/// Build a size, mapping negative and non-finite values to zero.
	pub fn new(width: f64, height: f64) -> Self {
		fn sane(v: f64) -> f64 {
			if v.is_finite() && v > 0.0 { v } else { 0.0 }
		}
		Self {
			width: sane(width),
			height: sane(height),
		}
	}

	/// Zero-area surfaces are valid but nothing drawn on them is visible.
	pub fn is_empty(&self) -> bool {
		self.width == 0.0 || self.height == 0.0
	}
}

/// A drawable region that reports its current pixel size.
pub trait SurfaceAdapter {
	fn current_size(&self) -> SurfaceSize;
}

/// Something particles can be painted onto.
pub trait DrawTarget {
	/// Reallocate the backing pixel buffer. Existing pixels are lost.
	fn resize_backing(&mut self, size: SurfaceSize);
	fn clear(&mut self, size: SurfaceSize);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_dimensions_collapse_to_zero() {
		let size = SurfaceSize::new(-4.0, f64::NAN);
		assert_eq!(size, SurfaceSize::default());
		assert!(size.is_empty());
	}

	#[test]
	fn positive_dimensions_are_kept() {
		let size = SurfaceSize::new(800.0, 600.0);
		assert_eq!(size.width, 800.0);
		assert_eq!(size.height, 600.0);
		assert!(!size.is_empty());
	}
}
