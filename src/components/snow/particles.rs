//! Snowflake simulation.
//!
//! A [`ParticleField`] owns a fixed number of [`Particle`]s. Flakes that fall
//! past the bottom edge are reseeded in place at the top, so the field never
//! grows or shrinks.

use rand::Rng;
use rand::rngs::StdRng;

use super::preset::SnowPreset;
use super::surface::{DrawTarget, SurfaceSize};
use super::theme::Color;

/// Vertical coordinate flakes respawn at, just above the visible area.
pub const SPAWN_Y: f64 = -10.0;

/// A single snowflake.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	/// Drift accumulator. Drives sway and, for oscillating presets, fall speed.
	pub phase: f64,
	pub alpha: f64,
	pub speed: Option<f64>,
}

impl Particle {
	/// A freshly seeded flake at the spawn line.
	pub fn spawn<R: Rng + ?Sized>(preset: &SnowPreset, size: SurfaceSize, rng: &mut R) -> Self {
		let mut p = Self {
			x: 0.0,
			y: SPAWN_Y,
			radius: 0.0,
			phase: 0.0,
			alpha: 0.0,
			speed: None,
		};
		p.reset(preset, size, rng);
		p
	}

	/// Reseed in place at the top of the surface.
	pub fn reset<R: Rng + ?Sized>(&mut self, preset: &SnowPreset, size: SurfaceSize, rng: &mut R) {
		self.x = if size.width > 0.0 {
			rng.gen_range(0.0..size.width)
		} else {
			0.0
		};
		self.y = SPAWN_Y;
		self.radius = preset.radius.sample(rng);
		self.phase = if preset.count > 0 {
			rng.gen_range(0.0..preset.count as f64)
		} else {
			0.0
		};
		self.alpha = preset.opacity.sample(rng);
		self.speed = preset.speed.map(|band| band.sample(rng));
	}

	/// Advance one frame. Returns `true` if the flake left the surface and was reseeded.
	pub fn update<R: Rng + ?Sized>(
		&mut self,
		preset: &SnowPreset,
		size: SurfaceSize,
		rng: &mut R,
	) -> bool {
		let fall = preset.fall.displacement(self.radius, self.phase) * self.speed.unwrap_or(1.0);
		self.y += fall;
		self.x += self.phase.sin() * preset.sway;
		self.phase += preset.phase_step;

		if self.y > size.height {
			self.reset(preset, size, rng);
			return true;
		}
		false
	}

	/// Paint this flake as a circle tinted with its own alpha.
	pub fn draw(&self, target: &mut impl DrawTarget, color: Color) {
		target.fill_circle(self.x, self.y, self.radius, color.with_alpha(self.alpha));
	}
}

/// Fixed-size collection of flakes advanced together each frame.
pub struct ParticleField {
	preset: SnowPreset,
	particles: Vec<Particle>,
	size: SurfaceSize,
	rng: StdRng,
}

impl ParticleField {
	/// Seed `preset.count` flakes scattered over the surface so the first
	/// frame is already populated.
	pub fn new(preset: SnowPreset, size: SurfaceSize, mut rng: StdRng) -> Self {
		let particles = (0..preset.count)
			.map(|_| {
				let mut p = Particle::spawn(&preset, size, &mut rng);
				if size.height > 0.0 {
					p.y = rng.gen_range(0.0..size.height);
				}
				p
			})
			.collect();

		Self {
			preset,
			particles,
			size,
			rng,
		}
	}

	/// Update then draw every flake, in order.
	pub fn advance_and_draw(&mut self, target: &mut impl DrawTarget, size: SurfaceSize) {
		self.size = size;
		let color = self.preset.color;
		for p in &mut self.particles {
			p.update(&self.preset, self.size, &mut self.rng);
			p.draw(target, color);
		}
	}

	/// Simulation step without rendering. Returns how many flakes were reseeded.
	pub fn advance(&mut self, size: SurfaceSize) -> usize {
		self.size = size;
		let mut reset = 0;
		for p in &mut self.particles {
			if p.update(&self.preset, self.size, &mut self.rng) {
				reset += 1;
			}
		}
		reset
	}

	/// Change the bounds used by future updates. Existing flakes keep their
	/// positions.
	pub fn resize(&mut self, size: SurfaceSize) {
		self.size = size;
	}

	pub fn size(&self) -> SurfaceSize {
		self.size
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Mutable view of the flakes. The slice cannot change the field's size.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}
}
