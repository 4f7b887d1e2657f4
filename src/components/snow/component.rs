//! Leptos component hosting one snow effect.
//!
//! The controller is created once the canvas is attached and torn down in
//! the component's cleanup, so no animation frame can fire against a canvas
//! that has left the document.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use web_sys::HtmlCanvasElement;

use super::canvas::{CanvasPainter, CanvasRegion};
use super::controller::AnimationController;
use super::frames::AnimationFrames;
use super::preset::SnowPreset;
use crate::dom::{self, EventSubscription};
use crate::error::Result;

type CanvasController = AnimationController<CanvasRegion, CanvasPainter, AnimationFrames>;

/// A running effect plus the listeners that feed it.
struct Mounted {
	controller: Rc<RefCell<CanvasController>>,
	_resize: Option<EventSubscription>,
}

impl Mounted {
	fn attach(canvas: HtmlCanvasElement, preset: SnowPreset, fullscreen: bool) -> Result<Self> {
		let window = dom::window()?;
		let region = if fullscreen {
			CanvasRegion::Viewport(window.clone())
		} else {
			CanvasRegion::container(&canvas)
		};
		let painter = CanvasPainter::new(canvas)?;
		let frames = AnimationFrames::new(window);

		let controller = Rc::new(RefCell::new(AnimationController::new(
			preset,
			region,
			painter,
			frames.clone(),
		)));

		let weak = Rc::downgrade(&controller);
		frames.bind(move || {
			let Some(c) = weak.upgrade() else {
				return;
			};
			if let Err(e) = c.borrow_mut().tick() {
				warn!("snow: frame failed: {}", e);
			}
		});

		let weak = Rc::downgrade(&controller);
		let resize = controller.borrow().adapter().on_resize(move |size| {
			if let Some(c) = weak.upgrade() {
				c.borrow_mut().on_resize(size);
			}
		})?;

		controller.borrow_mut().start()?;

		Ok(Self {
			controller,
			_resize: resize,
		})
	}
}

impl Drop for Mounted {
	fn drop(&mut self) {
		self.controller.borrow_mut().stop();
	}
}

/// Falling snow drawn on a canvas.
///
/// With `fullscreen = true` the canvas follows the viewport and resizes with
/// the window. Otherwise it takes the size of its laid-out box at mount,
/// which suits effects confined to a card or modal.
#[component]
pub fn SnowCanvas(
	#[prop(default = SnowPreset::full_page())] preset: SnowPreset,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = "snow-canvas")] class: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));
	let mounted_init = mounted.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mounted_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match Mounted::attach(canvas, preset.clone(), fullscreen) {
			Ok(m) => {
				info!("snow: mounted {} flakes", preset.count);
				*mounted_init.borrow_mut() = Some(m);
			}
			Err(e) => warn!("snow: failed to start: {}", e),
		}
	});

	let mounted = SendWrapper::new(mounted);
	on_cleanup(move || {
		mounted.borrow_mut().take();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			style="display: block; pointer-events: none;"
		/>
	}
}
