//! Small DOM helpers shared by the components.

use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, Window};

use crate::error::{Error, Result};

/// The global `window`, or [`Error::Unavailable`] outside a browser.
pub fn window() -> Result<Window> {
	web_sys::window().ok_or(Error::Unavailable("window"))
}

/// `innerWidth` x `innerHeight`, zero where unreadable.
pub fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: std::result::Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// An event listener that is removed when this value is dropped.
pub struct EventSubscription {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
	/// Add `handler` for `event` on `target` until the subscription is dropped.
	pub fn listen(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event,
			callback,
		})
	}
}

impl Drop for EventSubscription {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}
