//! Field state and construction
//!
//! The field exclusively owns every ball, the player and the RNG. Outside code gets
//! read-only access or a `FieldSnapshot`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Ball, Body, Bounds};
use super::player::{Direction, Player};
use super::random::{Rgb, random_color, random_int};
use crate::config::FieldConfig;
use crate::error::ConfigError;

/// The bounded region and everything moving in it
#[derive(Debug, Clone)]
pub struct Field {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) bounds: Bounds,
    /// Balls in creation order (ids ascending)
    pub(crate) balls: Vec<Ball>,
    pub(crate) player: Player,
    pub(crate) rng: Pcg32,
    pub(crate) fade_alpha: f32,
}

impl Field {
    /// Validate `config` and spawn the balls and player
    pub fn new(config: &FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let bounds = Bounds::new(config.width, config.height);
        let mut rng = Pcg32::seed_from_u64(seed);

        let balls: Vec<Ball> = (0..config.ball_count)
            .map(|i| spawn_ball(i as u32, config, &mut rng))
            .collect();

        let player_color = random_color(&mut rng);
        let player = Player::new(
            config.player_start,
            config.player_radius,
            player_color,
            config.player,
        );

        log::info!(
            "Field {}x{} spawned {} balls (seed {})",
            bounds.width,
            bounds.height,
            balls.len(),
            seed
        );

        Ok(Self {
            seed,
            time_ticks: 0,
            bounds,
            balls,
            player,
            rng,
            fade_alpha: config.fade_alpha,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn fade_alpha(&self) -> f32 {
        self.fade_alpha
    }

    /// Steer the player; the only mutation allowed outside a tick
    pub fn handle_input(&mut self, direction: Direction) {
        self.player.handle_input(direction);
    }

    /// Read-only picture of the current state
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            tick: self.time_ticks,
            width: self.bounds.width,
            height: self.bounds.height,
            player: DiscSnapshot::of(&self.player.body),
            balls: self
                .balls
                .iter()
                .map(|b| DiscSnapshot::of(&b.body))
                .collect(),
        }
    }
}

/// Draw a ball whose whole disc starts inside the field.
///
/// Positions and radii are whole pixels; `FieldConfig::validate` guarantees the
/// ranges are non-empty.
fn spawn_ball(id: u32, config: &FieldConfig, rng: &mut Pcg32) -> Ball {
    let radius = random_int(rng, config.ball_min_radius, config.ball_max_radius);
    let max_x = config.width.floor() as i32 - radius;
    let max_y = config.height.floor() as i32 - radius;
    let pos = Vec2::new(
        random_int(rng, radius, max_x) as f32,
        random_int(rng, radius, max_y) as f32,
    );
    let vel = Vec2::new(
        random_int(rng, config.ball_min_velocity, config.ball_max_velocity) as f32,
        random_int(rng, config.ball_min_velocity, config.ball_max_velocity) as f32,
    );
    let color = random_color(rng);
    Ball::new(id, Body::new(pos, vel, radius as f32, color))
}

/// One disc as handed to a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscSnapshot {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

impl DiscSnapshot {
    fn of(body: &Body) -> Self {
        Self {
            pos: body.pos,
            radius: body.radius,
            color: body.color,
        }
    }
}

/// Drawable state of the whole field at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub tick: u64,
    pub width: f32,
    pub height: f32,
    pub player: DiscSnapshot,
    pub balls: Vec<DiscSnapshot>,
}
