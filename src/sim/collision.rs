//! Wall reflection and ball-to-ball contact detection
//!
//! Walls flip the sign of one velocity component. Contacts between balls are purely
//! cosmetic: the pair is repainted, positions and velocities stay as they are.

use glam::Vec2;
use rand::Rng;

use super::body::{Ball, Bounds};
use super::random::random_color;

/// Velocity after predictive wall reflection.
///
/// Each axis is checked independently against the position *before* the move. A disc
/// whose edge touches or passes a wall gets that component pointed back inward.
/// Only signs change, so speed is conserved.
pub fn wall_reflection(pos: Vec2, vel: Vec2, radius: f32, bounds: &Bounds) -> Vec2 {
    Vec2::new(
        reflect_axis(pos.x, vel.x, radius, bounds.width),
        reflect_axis(pos.y, vel.y, radius, bounds.height),
    )
}

#[inline]
fn reflect_axis(pos: f32, vel: f32, radius: f32, max: f32) -> f32 {
    let mut vel = vel;
    if pos + radius >= max {
        vel = -vel.abs();
    }
    if pos - radius <= 0.0 {
        vel = vel.abs();
    }
    vel
}

/// Repaint every ball touching `balls[index]`.
///
/// For each overlapping partner a fresh color is drawn; the initiator takes it first
/// and the partner copies it, so both end with the same color. The initiator is
/// excluded by index, never by value. Returns the number of contacts.
pub fn detect_collisions(balls: &mut [Ball], index: usize, rng: &mut impl Rng) -> u32 {
    let mut contacts = 0;
    for other in 0..balls.len() {
        if other == index {
            continue;
        }
        if balls[index].body.overlaps(&balls[other].body) {
            let color = random_color(rng);
            balls[index].body.color = color;
            balls[other].body.color = balls[index].body.color;
            contacts += 1;
        }
    }
    contacts
}
