//! Lifecycle and frame loop of one snow effect instance.
//!
//! ```text
//! Idle --start()--> Running --tick()--> Running
//!                      |
//!                   stop() / drop
//!                      v
//!                   Stopped
//! ```
//!
//! There is no way back from `Stopped`; a remounted view builds a new
//! controller.

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::frames::{FrameHandle, FrameScheduler};
use super::particles::ParticleField;
use super::preset::SnowPreset;
use super::surface::{DrawTarget, SurfaceAdapter, SurfaceSize};
use crate::error::{Error, Result};

/// Where a controller is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Running,
	Stopped,
}

/// Drives a [`ParticleField`] on a surface, one tick per display frame.
pub struct AnimationController<A, D, F>
where
	A: SurfaceAdapter,
	D: DrawTarget,
	F: FrameScheduler,
{
	preset: SnowPreset,
	adapter: A,
	target: D,
	frames: F,
	phase: Phase,
	field: Option<ParticleField>,
	size: SurfaceSize,
	pending: Option<FrameHandle>,
	rng: Option<StdRng>,
	ticks: u64,
}

impl<A, D, F> AnimationController<A, D, F>
where
	A: SurfaceAdapter,
	D: DrawTarget,
	F: FrameScheduler,
{
	pub fn new(preset: SnowPreset, adapter: A, target: D, frames: F) -> Self {
		Self {
			preset,
			adapter,
			target,
			frames,
			phase: Phase::Idle,
			field: None,
			size: SurfaceSize::default(),
			pending: None,
			rng: None,
			ticks: 0,
		}
	}

	/// Use a fixed seed instead of OS entropy for the particle field.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.rng = Some(StdRng::seed_from_u64(seed));
		self
	}

	/// Bind to the surface, seed the field and schedule the first frame.
	pub fn start(&mut self) -> Result<()> {
		match self.phase {
			Phase::Running => {
				warn!("snow: start() called on a running controller");
				return Err(Error::AlreadyRunning);
			}
			Phase::Stopped => return Err(Error::Stopped),
			Phase::Idle => {}
		}

		self.size = self.adapter.current_size();
		self.target.resize_backing(self.size);
		let rng = self.rng.take().unwrap_or_else(StdRng::from_entropy);
		let field = ParticleField::new(self.preset.clone(), self.size, rng);
		self.pending = Some(self.frames.request_frame()?);
		self.field = Some(field);
		self.phase = Phase::Running;

		debug!(
			"snow: started {} flakes on {}x{}",
			self.preset.count, self.size.width, self.size.height
		);
		Ok(())
	}

	/// One frame: clear, advance and draw every flake, reschedule.
	///
	/// Frames delivered after `stop()` are ignored. If the next frame cannot
	/// be scheduled the loop is dead, so the controller stops.
	pub fn tick(&mut self) -> Result<()> {
		self.pending = None;
		if self.phase != Phase::Running {
			return Ok(());
		}
		let Some(field) = self.field.as_mut() else {
			return Ok(());
		};

		self.target.clear(self.size);
		field.advance_and_draw(&mut self.target, self.size);
		self.ticks += 1;

		match self.frames.request_frame() {
			Ok(handle) => {
				self.pending = Some(handle);
				Ok(())
			}
			Err(e) => {
				warn!("snow: could not schedule the next frame, stopping: {}", e);
				self.stop();
				Err(e)
			}
		}
	}

	/// Cancel any pending frame. Safe to call repeatedly.
	pub fn stop(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.frames.cancel_frame(handle);
		}
		if self.phase != Phase::Stopped {
			debug!("snow: stopped after {} ticks", self.ticks);
			self.phase = Phase::Stopped;
		}
	}

	/// Adapt to a new surface size. The backing buffer is reallocated, flakes
	/// keep their logical positions and reseed against the new bounds.
	pub fn on_resize(&mut self, size: SurfaceSize) {
		if self.phase == Phase::Stopped {
			return;
		}
		debug!("snow: resize to {}x{}", size.width, size.height);
		self.size = size;
		self.target.resize_backing(size);
		if let Some(field) = self.field.as_mut() {
			field.resize(size);
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn is_running(&self) -> bool {
		self.phase == Phase::Running
	}

	pub fn field(&self) -> Option<&ParticleField> {
		self.field.as_ref()
	}

	pub fn field_mut(&mut self) -> Option<&mut ParticleField> {
		self.field.as_mut()
	}

	pub fn adapter(&self) -> &A {
		&self.adapter
	}

	pub fn target(&self) -> &D {
		&self.target
	}

	pub fn size(&self) -> SurfaceSize {
		self.size
	}

	/// Number of frames drawn so far.
	pub fn ticks(&self) -> u64 {
		self.ticks
	}
}

impl<A, D, F> Drop for AnimationController<A, D, F>
where
	A: SurfaceAdapter,
	D: DrawTarget,
	F: FrameScheduler,
{
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::snow::testing::{FixedSurface, ManualFrames, RecordingTarget};

	type TestController = AnimationController<FixedSurface, RecordingTarget, ManualFrames>;

	fn controller(frames: &ManualFrames) -> TestController {
		AnimationController::new(
			SnowPreset::modal(),
			FixedSurface::new(320.0, 200.0),
			RecordingTarget::default(),
			frames.clone(),
		)
		.with_seed(11)
	}

	#[test]
	fn start_seeds_field_and_schedules_first_frame() {
		let frames = ManualFrames::default();
		let mut c = controller(&frames);
		assert_eq!(c.phase(), Phase::Idle);
		c.start().unwrap();

		assert!(c.is_running());
		assert_eq!(c.field().map(ParticleField::len), Some(50));
		assert_eq!(c.target().backing, Some(SurfaceSize::new(320.0, 200.0)));
		assert_eq!(frames.pending_count(), 1);
		assert!(c.target().circles.is_empty());
	}

	#[test]
	fn second_start_fails_without_double_scheduling() {
		let frames = ManualFrames::default();
		let mut c = controller(&frames);
		c.start().unwrap();
		assert!(matches!(c.start(), Err(Error::AlreadyRunning)));
		assert_eq!(frames.pending_count(), 1);
	}

	#[test]
	fn tick_clears_draws_and_reschedules() {
		let frames = ManualFrames::default();
		let mut c = controller(&frames);
		c.start().unwrap();

		assert!(frames.fire(&mut c));
		assert_eq!(c.target().clears, 1);
		assert_eq!(c.target().circles.len(), 50);
		assert_eq!(frames.pending_count(), 1);
		assert_eq!(c.ticks(), 1);
	}

	#[test]
	fn stop_is_idempotent() {
		let frames = ManualFrames::default();
		let mut c = controller(&frames);
		c.start().unwrap();
		for _ in 0..5 {
			c.stop();
		}
		assert_eq!(c.phase(), Phase::Stopped);
		assert_eq!(frames.cancelled(), 1);
	}

	#[test]
	fn stop_before_start_is_a_no_op_cancel() {
		let frames = ManualFrames::default();
		let mut c = controller(&frames);
		c.stop();
		assert_eq!(frames.cancelled(), 0);
		assert!(matches!(c.start(), Err(Error::Stopped)));
	}

	#[test]
	fn no_draw_after_stop() {
		let frames = ManualFrames::default();
		let mut c = controller(&frames);
		c.start().unwrap();
		frames.fire(&mut c);
		let drawn = c.target().circles.len();
		c.stop();

		for _ in 0..10 {
			assert!(!frames.fire(&mut c));
		}
		// A frame that slipped through the host is still ignored.
		c.tick().unwrap();
		assert_eq!(c.target().circles.len(), drawn);
		assert_eq!(frames.pending_count(), 0);
	}

	#[test]
	fn restart_after_stop_is_rejected() {
		let frames = ManualFrames::default();
		let mut c = controller(&frames);
		c.start().unwrap();
		c.stop();
		assert!(matches!(c.start(), Err(Error::Stopped)));
	}

	#[test]
	fn drop_cancels_pending_frame() {
		let frames = ManualFrames::default();
		{
			let mut c = controller(&frames);
			c.start().unwrap();
		}
		assert_eq!(frames.pending_count(), 0);
		assert_eq!(frames.cancelled(), 1);
	}

	#[test]
	fn zero_sized_surface_runs_without_error() {
		let frames = ManualFrames::default();
		let mut c = AnimationController::new(
			SnowPreset::full_page(),
			FixedSurface::new(0.0, 0.0),
			RecordingTarget::default(),
			frames.clone(),
		)
		.with_seed(1);
		c.start().unwrap();
		for _ in 0..20 {
			assert!(frames.fire(&mut c));
		}
		assert_eq!(c.field().map(ParticleField::len), Some(200));
	}

	#[test]
	fn failed_schedule_leaves_controller_idle() {
		let frames = ManualFrames::default();
		frames.fail_next();
		let mut c = controller(&frames);
		assert!(matches!(c.start(), Err(Error::Unavailable(_))));
		assert_eq!(c.phase(), Phase::Idle);
	}

	#[test]
	fn failed_reschedule_stops_controller() {
		let frames = ManualFrames::default();
		let mut c = controller(&frames);
		c.start().unwrap();
		assert!(frames.fire(&mut c));

		frames.fail_next();
		assert!(matches!(frames.try_fire(&mut c), Some(Err(Error::Unavailable(_)))));
		assert_eq!(c.phase(), Phase::Stopped);
		assert!(!c.is_running());
		assert_eq!(frames.pending_count(), 0);

		let drawn = c.target().circles.len();
		c.tick().unwrap();
		assert_eq!(c.target().circles.len(), drawn);
		assert!(matches!(c.start(), Err(Error::Stopped)));
	}
}
