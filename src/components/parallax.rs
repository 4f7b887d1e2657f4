//! Decorations that drift against the mouse pointer.

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::dom::{self, EventSubscription};

/// Translation for a pointer at `pointer` in a `viewport`-sized window.
///
/// Larger `speed` moves the element further; negative speeds move it the
/// other way.
pub fn parallax_offset(viewport: (f64, f64), pointer: (f64, f64), speed: f64) -> (f64, f64) {
	(
		(viewport.0 - pointer.0 * speed) / 100.0,
		(viewport.1 - pointer.1 * speed) / 100.0,
	)
}

/// Wraps children in a div translated by [`parallax_offset`].
#[component]
pub fn Parallax(
	#[prop(default = 1.0)] speed: f64,
	#[prop(default = "")] class: &'static str,
	children: Children,
) -> impl IntoView {
	let (offset, set_offset) = signal((0.0, 0.0));

	let listener = dom::window().and_then(|window| {
		let win = window.clone();
		EventSubscription::listen(&window, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let viewport = dom::viewport_size(&win);
			let pointer = (ev.page_x() as f64, ev.page_y() as f64);
			set_offset.set(parallax_offset(viewport, pointer, speed));
		})
	});
	match listener {
		Ok(sub) => {
			let sub = SendWrapper::new(sub);
			on_cleanup(move || drop(sub));
		}
		Err(e) => warn!("parallax: {}", e),
	}

	let style = move || {
		let (x, y) = offset.get();
		format!("transform: translate({x}px, {y}px); transition: transform 0.1s ease-out;")
	};

	view! {
		<div class=class style=style>
			{children()}
		</div>
	}
}
