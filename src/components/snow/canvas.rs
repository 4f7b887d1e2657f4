//! HTML canvas bindings for the snow engine.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::surface::{DrawTarget, SurfaceAdapter, SurfaceSize};
use super::theme::Color;
use crate::dom::{self, EventSubscription};
use crate::error::{Error, Result};

/// Paints onto a canvas through its 2D context.
pub struct CanvasPainter {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
		let ctx = canvas
			.get_context("2d")?
			.ok_or(Error::Unavailable("2d canvas context"))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| Error::Unavailable("2d canvas context"))?;
		Ok(Self { canvas, ctx })
	}
}

impl DrawTarget for CanvasPainter {
	fn resize_backing(&mut self, size: SurfaceSize) {
		self.canvas.set_width(size.width as u32);
		self.canvas.set_height(size.height as u32);
	}

	fn clear(&mut self, size: SurfaceSize) {
		self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
	}
}

/// The region a snow canvas covers.
pub enum CanvasRegion {
	/// The whole browser viewport, followed through window resizes.
	Viewport(Window),
	/// A container measured once at mount.
	Container(SurfaceSize),
}

impl CanvasRegion {
	/// Measure the canvas' laid-out box.
	pub fn container(canvas: &HtmlCanvasElement) -> Self {
		let rect = canvas.get_bounding_client_rect();
		CanvasRegion::Container(SurfaceSize::new(rect.width(), rect.height()))
	}

	/// Call `callback` with the new size whenever the viewport is resized.
	/// Containers do not track resizes and return `None`.
	pub fn on_resize(
		&self,
		mut callback: impl FnMut(SurfaceSize) + 'static,
	) -> Result<Option<EventSubscription>> {
		let CanvasRegion::Viewport(window) = self else {
			return Ok(None);
		};
		let win = window.clone();
		let sub = EventSubscription::listen(window, "resize", move |_| {
			let (w, h) = dom::viewport_size(&win);
			callback(SurfaceSize::new(w, h));
		})?;
		Ok(Some(sub))
	}
}

impl SurfaceAdapter for CanvasRegion {
	fn current_size(&self) -> SurfaceSize {
		match self {
			CanvasRegion::Viewport(window) => {
				let (w, h) = dom::viewport_size(window);
				SurfaceSize::new(w, h)
			}
			CanvasRegion::Container(size) => *size,
		}
	}
}
