//! Random draws used for spawning and contact coloring
//!
//! Everything takes the caller's RNG so a seeded `Pcg32` reproduces a run exactly.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string for canvas fill styles
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Integer drawn uniformly from `[min, max]` inclusive (caller guarantees `min <= max`)
#[inline]
pub fn random_int(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Color with every channel drawn uniformly from `[0, 255]`
pub fn random_color(rng: &mut impl Rng) -> Rgb {
    Rgb::new(
        random_int(rng, 0, 255) as u8,
        random_int(rng, 0, 255) as u8,
        random_int(rng, 0, 255) as u8,
    )
}
