//! Ball Field - bouncing balls and a steerable player on a canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, wall reflection, contact coloring)
//! - `renderer`: Drawing surface abstraction (2D canvas, headless recorder)
//! - `platform`: Frame scheduling and keyboard input plumbing
//! - `config`: Data-driven field setup, loaded from JSON

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::FieldConfig;
pub use error::ConfigError;
pub use platform::Simulation;

/// Field configuration constants
pub mod consts {
    /// Number of autonomous balls spawned with the field
    pub const BALL_COUNT: usize = 25;
    /// Ball radius range (inclusive, pixels)
    pub const BALL_MIN_RADIUS: i32 = 10;
    pub const BALL_MAX_RADIUS: i32 = 20;
    /// Per-axis ball velocity range (inclusive, pixels per tick)
    pub const BALL_MIN_VELOCITY: i32 = -7;
    pub const BALL_MAX_VELOCITY: i32 = 7;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    /// Velocity added per key press
    pub const PLAYER_ACCELERATION: f32 = 1.5;
    /// Per-tick velocity multiplier
    pub const PLAYER_FRICTION: f32 = 0.95;
    /// Per-axis speed cap
    pub const PLAYER_MAX_SPEED: f32 = 7.0;

    /// Alpha of the black overlay painted each frame (leaves motion trails)
    pub const FADE_ALPHA: f32 = 0.25;

    /// Field size used when no canvas is available (headless runs)
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Ticks run by the headless binary when no count is given
    pub const HEADLESS_TICKS: u64 = 600;
}
