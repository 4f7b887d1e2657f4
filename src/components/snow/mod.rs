//! Falling-snow particle engine.
//!
//! One engine serves every snow effect on the page; instances differ only in
//! their [`SnowPreset`]:
//! - [`particles`]: flake state and the fixed-size field they live in
//! - [`controller`]: start/tick/stop lifecycle and resize handling
//! - [`surface`] and [`frames`]: seams to the host surface and frame pump
//! - [`canvas`]: HTML canvas and `requestAnimationFrame` bindings
//!
//! # Example
//!
//! ```ignore
//! view! {
//!     <SnowCanvas preset=SnowPreset::full_page() fullscreen=true />
//! }
//! ```

pub mod canvas;
mod component;
pub mod controller;
pub mod frames;
pub mod particles;
pub mod preset;
pub mod surface;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod theme;

pub use component::SnowCanvas;
pub use controller::{AnimationController, Phase};
pub use frames::{FrameHandle, FrameScheduler};
pub use particles::{Particle, ParticleField};
pub use preset::{Band, FallModel, PresetError, SnowPreset};
pub use surface::{DrawTarget, SurfaceAdapter, SurfaceSize};
pub use theme::Color;
