//! Drawing surface abstraction
//!
//! The simulation only ever fades the surface and paints filled discs.

pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use recorder::{DrawCommand, FrameRecorder};

use glam::Vec2;

use crate::sim::Rgb;

/// A surface the field paints onto once per tick
pub trait Renderer {
    /// Start a frame: paint a black overlay at `alpha` (1.0 clears outright)
    fn clear_or_fade(&mut self, alpha: f32);

    /// Fill a disc
    fn draw_disc(&mut self, center: Vec2, radius: f32, color: Rgb);

    /// Surface size in pixels, used as the field bounds
    fn frame_size(&self) -> (f32, f32);
}
