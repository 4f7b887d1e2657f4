//! In-memory stand-ins for the browser.
//!
//! Compiled for unit tests and, with the `testing` feature, for the
//! integration tests under `tests/`.

use std::cell::RefCell;
use std::rc::Rc;

use super::controller::AnimationController;
use super::frames::{FrameHandle, FrameScheduler};
use super::surface::{DrawTarget, SurfaceAdapter, SurfaceSize};
use super::theme::Color;
use crate::error::{Error, Result};

/// Surface with a size set by the test.
pub struct FixedSurface {
	/// Size reported to the controller on `start()`.
	pub size: SurfaceSize,
}

impl FixedSurface {
	/// A surface of `width` x `height` pixels.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			size: SurfaceSize::new(width, height),
		}
	}
}

impl SurfaceAdapter for FixedSurface {
	fn current_size(&self) -> SurfaceSize {
		self.size
	}
}

/// Records every drawing call.
#[derive(Default)]
pub struct RecordingTarget {
	/// Last backing buffer size.
	pub backing: Option<SurfaceSize>,
	/// Number of `clear` calls.
	pub clears: usize,
	/// Every filled circle as `(x, y, radius, color)`.
	pub circles: Vec<(f64, f64, f64, Color)>,
}

impl DrawTarget for RecordingTarget {
	fn resize_backing(&mut self, size: SurfaceSize) {
		self.backing = Some(size);
	}

	fn clear(&mut self, _size: SurfaceSize) {
		self.clears += 1;
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.circles.push((x, y, radius, color));
	}
}

#[derive(Default)]
struct FrameQueue {
	next_id: i32,
	pending: Vec<FrameHandle>,
	cancelled: usize,
	fail_next: bool,
}

/// Frame pump advanced explicitly by the test.
#[derive(Clone, Default)]
pub struct ManualFrames {
	queue: Rc<RefCell<FrameQueue>>,
}

impl ManualFrames {
	/// Frames requested and neither delivered nor cancelled.
	pub fn pending_count(&self) -> usize {
		self.queue.borrow().pending.len()
	}

	/// Frames cancelled while pending.
	pub fn cancelled(&self) -> usize {
		self.queue.borrow().cancelled
	}

	/// Make the next `request_frame` fail.
	pub fn fail_next(&self) {
		self.queue.borrow_mut().fail_next = true;
	}

	/// Deliver the oldest pending frame and return what the tick returned,
	/// or `None` if no frame was pending.
	pub fn try_fire<A, D>(
		&self,
		controller: &mut AnimationController<A, D, ManualFrames>,
	) -> Option<Result<()>>
	where
		A: SurfaceAdapter,
		D: DrawTarget,
	{
		let due = {
			let mut q = self.queue.borrow_mut();
			if q.pending.is_empty() {
				None
			} else {
				Some(q.pending.remove(0))
			}
		};
		due.map(|_| controller.tick())
	}

	/// Deliver the oldest pending frame. Returns `false` if none was pending.
	///
	/// Panics if the tick fails.
	pub fn fire<A, D>(&self, controller: &mut AnimationController<A, D, ManualFrames>) -> bool
	where
		A: SurfaceAdapter,
		D: DrawTarget,
	{
		match self.try_fire(controller) {
			Some(result) => {
				if let Err(e) = result {
					panic!("tick failed: {e}");
				}
				true
			}
			None => false,
		}
	}

	/// Deliver up to `n` frames, stopping early once none is pending.
	/// Returns how many were delivered.
	pub fn pump<A, D>(&self, controller: &mut AnimationController<A, D, ManualFrames>, n: usize) -> usize
	where
		A: SurfaceAdapter,
		D: DrawTarget,
	{
		(0..n).take_while(|_| self.fire(controller)).count()
	}
}

impl FrameScheduler for ManualFrames {
	fn request_frame(&mut self) -> Result<FrameHandle> {
		let mut q = self.queue.borrow_mut();
		if std::mem::take(&mut q.fail_next) {
			return Err(Error::Unavailable("frame pump"));
		}
		q.next_id += 1;
		let handle = FrameHandle(q.next_id);
		q.pending.push(handle);
		Ok(handle)
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		let mut q = self.queue.borrow_mut();
		if let Some(pos) = q.pending.iter().position(|h| *h == handle) {
			q.pending.remove(pos);
			q.cancelled += 1;
		}
	}
}
