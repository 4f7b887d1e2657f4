//! Frame pump abstraction.
//!
//! The controller asks for "one more frame" after each tick and cancels the
//! outstanding request on teardown. In the browser that maps onto
//! `requestAnimationFrame`, which also pauses hidden tabs for free.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::error::{Error, Result};

/// Opaque id of a scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Host facility that invokes the controller's tick once per display frame.
pub trait FrameScheduler {
	/// Ask for one call to the tick on the next frame.
	fn request_frame(&mut self) -> Result<FrameHandle>;
	/// Withdraw a pending request. Unknown or delivered handles are ignored.
	fn cancel_frame(&mut self, handle: FrameHandle);
}

/// `requestAnimationFrame`-backed scheduler.
///
/// Clones share one callback slot. The callback must be installed with
/// [`AnimationFrames::bind`] before the first request.
#[derive(Clone)]
pub struct AnimationFrames {
	window: Window,
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationFrames {
	/// A scheduler on `window` with no callback bound yet.
	pub fn new(window: Window) -> Self {
		Self {
			window,
			callback: Rc::new(RefCell::new(None)),
		}
	}

	/// Install the function run on every animation frame.
	pub fn bind(&self, tick: impl FnMut() + 'static) {
		*self.callback.borrow_mut() = Some(Closure::new(tick));
	}
}

impl FrameScheduler for AnimationFrames {
	fn request_frame(&mut self) -> Result<FrameHandle> {
		let slot = self.callback.borrow();
		let cb = slot.as_ref().ok_or(Error::Unavailable("frame callback"))?;
		let id = self
			.window
			.request_animation_frame(cb.as_ref().unchecked_ref())?;
		Ok(FrameHandle(id))
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle.0);
	}
}
