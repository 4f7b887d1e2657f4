//! Errors raised by the snow engine and its browser glue.

use wasm_bindgen::JsValue;

use crate::components::greeting::GreetingError;

/// Failures of the animation engine and the DOM bindings around it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// `start()` was called on a controller that is already running.
	#[error("animation controller is already running")]
	AlreadyRunning,
	/// `start()` was called after teardown. Create a fresh controller instead.
	#[error("animation controller was stopped and cannot be restarted")]
	Stopped,
	/// A browser object the engine needs is missing.
	#[error("{0} is not available")]
	Unavailable(&'static str),
	/// A greeting could not be encoded.
	#[error(transparent)]
	Greeting(#[from] GreetingError),
	/// A JavaScript call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
