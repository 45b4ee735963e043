//! The keyboard-steered player ball

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds, Motion};
use super::random::Rgb;
use crate::consts::*;

/// Steering direction from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` name; anything else is not a steering key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit step in screen coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Handling constants for the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Velocity added per key press
    pub acceleration: f32,
    /// Velocity multiplier applied every tick, in (0, 1)
    pub friction: f32,
    /// Cap on each velocity component
    pub max_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            acceleration: PLAYER_ACCELERATION,
            friction: PLAYER_FRICTION,
            max_speed: PLAYER_MAX_SPEED,
        }
    }
}

/// The player: a body that coasts to a stop and halts dead at walls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub tuning: PlayerTuning,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32, color: Rgb, tuning: PlayerTuning) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO, radius, color),
            tuning,
        }
    }

    /// Accelerate in `direction`, then cap each component at `max_speed`
    pub fn handle_input(&mut self, direction: Direction) {
        self.body.vel += direction.unit() * self.tuning.acceleration;
        let max = self.tuning.max_speed;
        self.body.vel = self.body.vel.clamp(Vec2::splat(-max), Vec2::splat(max));
    }

    /// Steer from a key name. Returns false for keys that don't steer.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.handle_input(direction);
                true
            }
            None => false,
        }
    }
}

impl Motion for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn step(&mut self, bounds: &Bounds) {
        let body = &mut self.body;
        body.pos += body.vel;
        body.vel *= self.tuning.friction;

        let (pos, clamped) = bounds.clamp_disc(body.pos, body.radius);
        body.pos = pos;
        // Hard stop on any axis that hit a wall
        if clamped.x {
            body.vel.x = 0.0;
        }
        if clamped.y {
            body.vel.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(
            Vec2::new(x, y),
            PLAYER_RADIUS,
            Rgb::default(),
            PlayerTuning::default(),
        )
    }

    #[test]
    fn test_input_clamps_to_max_speed() {
        let mut player = player_at(100.0, 100.0);
        player.tuning = PlayerTuning {
            acceleration: 1.5,
            friction: 0.95,
            max_speed: 7.0,
        };
        player.body.vel = Vec2::new(6.5, 0.0);
        player.handle_input(Direction::Right);
        assert_eq!(player.body.vel, Vec2::new(7.0, 0.0));
    }

    #[test]
    fn test_input_directions() {
        let mut player = player_at(100.0, 100.0);
        player.handle_input(Direction::Left);
        player.handle_input(Direction::Down);
        assert_eq!(player.body.vel, Vec2::new(-1.5, 1.5));
        player.handle_input(Direction::Right);
        player.handle_input(Direction::Up);
        assert_eq!(player.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut player = player_at(100.0, 100.0);
        assert!(!player.handle_key("Space"));
        assert!(!player.handle_key("a"));
        assert_eq!(player.body.vel, Vec2::ZERO);
        assert!(player.handle_key("ArrowUp"));
        assert_eq!(player.body.vel, Vec2::new(0.0, -1.5));
    }

    #[test]
    fn test_friction_decays_velocity() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut player = player_at(300.0, 300.0);
        player.body.vel = Vec2::new(4.0, -2.0);
        player.step(&bounds);
        assert_eq!(player.body.pos, Vec2::new(304.0, 298.0));
        assert!((player.body.vel.x - 3.8).abs() < 1e-6);
        assert!((player.body.vel.y + 1.9).abs() < 1e-6);
    }

    #[test]
    fn test_left_wall_stops_player() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut player = player_at(0.0, 300.0);
        player.body.vel = Vec2::new(-2.0, 1.0);
        player.step(&bounds);
        assert_eq!(player.body.pos.x, PLAYER_RADIUS);
        assert_eq!(player.body.vel.x, 0.0);
        assert!((player.body.vel.y - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_bottom_right_corner_stops_both_axes() {
        let bounds = Bounds::new(200.0, 100.0);
        let mut player = player_at(178.0, 78.0);
        player.body.vel = Vec2::new(5.0, 5.0);
        player.step(&bounds);
        assert_eq!(player.body.pos, Vec2::new(180.0, 80.0));
        assert_eq!(player.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("arrowdown"), None);
    }
}
