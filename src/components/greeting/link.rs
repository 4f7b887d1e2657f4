//! Reading and writing greetings in the page URL.

use log::info;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

use super::codec::{self, Greeting, QUERY_PARAM};
use crate::dom;
use crate::error::Result;

/// Greeting carried by the current URL, if any.
///
/// A decodable greeting is removed from the address bar without reloading.
/// Undecodable tokens are ignored.
pub fn take_received_greeting() -> Option<Greeting> {
	let window = dom::window().ok()?;
	let location = window.location();
	let search = location.search().ok()?;
	let params = UrlSearchParams::new_with_str(&search).ok()?;
	let token = params.get(QUERY_PARAM)?;
	let greeting = codec::decode_lenient(&token)?;

	if let (Ok(history), Ok(path)) = (window.history(), location.pathname()) {
		let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
	}
	info!("greeting: received a card");
	Some(greeting)
}

/// Absolute link to this page carrying `greeting`.
pub fn share_link(greeting: &Greeting) -> Result<String> {
	let token = codec::encode(greeting)?;
	let location = dom::window()?.location();
	let params = UrlSearchParams::new()?;
	params.set(QUERY_PARAM, &token);
	let query: String = params.to_string().into();
	Ok(format!(
		"{}{}?{}",
		location.origin()?,
		location.pathname()?,
		query
	))
}
