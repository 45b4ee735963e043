//! Simulation tick
//!
//! One call advances the field by exactly one step and paints it as it goes.

use super::body::Motion;
use super::collision::detect_collisions;
use super::field::Field;
use super::player::Direction;
use crate::renderer::Renderer;

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steering presses in arrival order
    pub directions: Vec<Direction>,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummary {
    /// Tick number after the step (1 for the first tick)
    pub tick: u64,
    /// Ball-to-ball contacts that repainted a pair
    pub contacts: u32,
}

/// Advance the field by one tick.
///
/// Order matters and is fixed:
/// 1. apply queued steering
/// 2. fade the surface
/// 3. draw, then step, the player
/// 4. for each ball in order: draw, step, repaint contacts
///
/// Entities are drawn before they move, so a frame shows pre-step positions.
pub fn tick<R: Renderer + ?Sized>(
    field: &mut Field,
    input: &TickInput,
    renderer: &mut R,
) -> TickSummary {
    for &direction in &input.directions {
        field.player.handle_input(direction);
    }

    renderer.clear_or_fade(field.fade_alpha);

    field.player.draw(renderer);
    field.player.step(&field.bounds);

    let mut contacts = 0;
    for i in 0..field.balls.len() {
        field.balls[i].draw(renderer);
        field.balls[i].step(&field.bounds);
        contacts += detect_collisions(&mut field.balls, i, &mut field.rng);
    }

    field.time_ticks += 1;

    TickSummary {
        tick: field.time_ticks,
        contacts,
    }
}
