//! Headless renderer that keeps the last frame's draw calls

use glam::Vec2;

use super::Renderer;
use crate::sim::Rgb;

/// A single draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Fade { alpha: f32 },
    Disc { center: Vec2, radius: f32, color: Rgb },
}

/// Records draw calls instead of painting them
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    width: f32,
    height: f32,
    frames: u64,
    commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            frames: 0,
            commands: Vec::new(),
        }
    }

    /// Number of frames started so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw calls of the current frame, in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn disc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
            .count()
    }
}

impl Renderer for FrameRecorder {
    fn clear_or_fade(&mut self, alpha: f32) {
        self.frames += 1;
        self.commands.clear();
        self.commands.push(DrawCommand::Fade { alpha });
    }

    fn draw_disc(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }

    fn frame_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
