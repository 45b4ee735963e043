//! Deterministic simulation module
//!
//! All field logic lives here. This module must stay deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No platform dependencies; drawing goes through the `Renderer` trait

pub mod body;
pub mod collision;
pub mod field;
pub mod player;
pub mod random;
pub mod tick;

pub use body::{Ball, Body, Bounds, Motion};
pub use collision::{detect_collisions, wall_reflection};
pub use field::{DiscSnapshot, Field, FieldSnapshot};
pub use player::{Direction, Player, PlayerTuning};
pub use random::{Rgb, random_color, random_int};
pub use tick::{TickInput, TickSummary, tick};
