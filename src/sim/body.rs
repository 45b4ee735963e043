//! Field bounds and the kinematic body shared by every entity

use glam::{BVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::collision::wall_reflection;
use super::random::Rgb;
use crate::renderer::Renderer;

/// The visible rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True if the whole disc lies inside the field
    pub fn contains_disc(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius >= 0.0
            && center.x + radius <= self.width
            && center.y - radius >= 0.0
            && center.y + radius <= self.height
    }

    /// Pull a disc center back inside the field.
    ///
    /// Returns the corrected center and which axes had to move.
    pub fn clamp_disc(&self, center: Vec2, radius: f32) -> (Vec2, BVec2) {
        let (x, clamped_x) = clamp_axis(center.x, radius, self.width);
        let (y, clamped_y) = clamp_axis(center.y, radius, self.height);
        (Vec2::new(x, y), BVec2::new(clamped_x, clamped_y))
    }
}

#[inline]
fn clamp_axis(pos: f32, radius: f32, max: f32) -> (f32, bool) {
    if pos + radius > max {
        (max - radius, true)
    } else if pos - radius < 0.0 {
        (radius, true)
    } else {
        (pos, false)
    }
}

/// Position, velocity, size and color of a disc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Fixed at creation
    pub radius: f32,
    pub color: Rgb,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Discs overlap when their centers are closer than the sum of the radii
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }
}

/// Per-tick behavior of an entity.
///
/// Balls reflect off walls, the player decelerates and stops at them. The field calls
/// both through static dispatch.
pub trait Motion {
    fn body(&self) -> &Body;

    /// Advance one tick inside `bounds`
    fn step(&mut self, bounds: &Bounds);

    /// Paint the disc at its current position
    fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let body = self.body();
        renderer.draw_disc(body.pos, body.radius, body.color);
    }
}

/// An autonomous ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub body: Body,
}

impl Ball {
    pub fn new(id: u32, body: Body) -> Self {
        Self { id, body }
    }
}

impl Motion for Ball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn step(&mut self, bounds: &Bounds) {
        let body = &mut self.body;
        // Reflection is decided on the pre-move position
        body.vel = wall_reflection(body.pos, body.vel, body.radius, bounds);
        body.pos += body.vel;
        body.pos = bounds.clamp_disc(body.pos, body.radius).0;
    }
}
