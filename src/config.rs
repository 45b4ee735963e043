//! Field configuration
//!
//! Defaults come from `consts`. In the browser the config is persisted in
//! LocalStorage; natively it can be read from a JSON file.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Bounds, PlayerTuning};

/// Everything needed to build a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Field size in pixels (replaced by the canvas size in the browser)
    pub width: f32,
    pub height: f32,

    // === Balls ===
    pub ball_count: usize,
    /// Inclusive radius range
    pub ball_min_radius: i32,
    pub ball_max_radius: i32,
    /// Inclusive range for each velocity component
    pub ball_min_velocity: i32,
    pub ball_max_velocity: i32,

    // === Player ===
    pub player_start: Vec2,
    pub player_radius: f32,
    pub player: PlayerTuning,

    // === Presentation ===
    /// Alpha of the per-frame fade overlay (1.0 = hard clear)
    pub fade_alpha: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            ball_count: BALL_COUNT,
            ball_min_radius: BALL_MIN_RADIUS,
            ball_max_radius: BALL_MAX_RADIUS,
            ball_min_velocity: BALL_MIN_VELOCITY,
            ball_max_velocity: BALL_MAX_VELOCITY,

            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_radius: PLAYER_RADIUS,
            player: PlayerTuning::default(),

            fade_alpha: FADE_ALPHA,
        }
    }
}

impl FieldConfig {
    /// Same config with the field resized (e.g. to the canvas)
    pub fn with_frame_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Resize to the frame the field will actually run in, then validate
    pub fn for_frame(self, width: f32, height: f32) -> Result<Self, ConfigError> {
        let config = self.with_frame_size(width, height);
        config.validate()?;
        Ok(config)
    }

    /// Parse from JSON; missing keys take their defaults.
    ///
    /// Not validated here: the frame size may still be replaced by the canvas.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::invalid("width", "must be a positive number"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::invalid("height", "must be a positive number"));
        }

        if self.ball_min_radius <= 0 {
            return Err(ConfigError::invalid("ball_min_radius", "must be positive"));
        }
        if self.ball_max_radius < self.ball_min_radius {
            return Err(ConfigError::invalid(
                "ball_max_radius",
                "must not be below ball_min_radius",
            ));
        }
        // Spawn positions are whole pixels, so the largest ball must fit in the
        // truncated field
        let diameter = 2 * i64::from(self.ball_max_radius);
        if diameter > self.width.floor() as i64 || diameter > self.height.floor() as i64 {
            return Err(ConfigError::invalid(
                "ball_max_radius",
                format!(
                    "a ball of radius {} does not fit in {}x{}",
                    self.ball_max_radius, self.width, self.height
                ),
            ));
        }
        if self.ball_max_velocity < self.ball_min_velocity {
            return Err(ConfigError::invalid(
                "ball_max_velocity",
                "must not be below ball_min_velocity",
            ));
        }

        if !(self.player_radius > 0.0) {
            return Err(ConfigError::invalid("player_radius", "must be positive"));
        }
        let tuning = &self.player;
        if !(tuning.acceleration >= 0.0) {
            return Err(ConfigError::invalid("player.acceleration", "must not be negative"));
        }
        if !(tuning.friction > 0.0 && tuning.friction < 1.0) {
            return Err(ConfigError::invalid("player.friction", "must be within (0, 1)"));
        }
        if !(tuning.max_speed > 0.0) {
            return Err(ConfigError::invalid("player.max_speed", "must be positive"));
        }
        let bounds = Bounds::new(self.width, self.height);
        if !bounds.contains_disc(self.player_start, self.player_radius) {
            return Err(ConfigError::invalid(
                "player_start",
                "player disc must start inside the field",
            ));
        }

        if !(0.0..=1.0).contains(&self.fade_alpha) {
            return Err(ConfigError::invalid("fade_alpha", "must be within [0, 1]"));
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ball_field_config";

    /// Load config from LocalStorage (WASM only) for a `width` x `height` canvas,
    /// falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load(width: f32, height: f32) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json).and_then(|c| c.for_frame(width, height)) {
                    Ok(config) => {
                        log::info!("Loaded field config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored field config: {}", e),
                }
            }
        }

        log::info!("Using default field config");
        Self::default().with_frame_size(width, height)
    }

    /// Read and validate a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        config.validate()?;
        log::info!("Loaded field config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = FieldConfig::from_json(r#"{ "ball_count": 3, "player": { "max_speed": 4.0 } }"#)
            .unwrap();
        assert_eq!(config.ball_count, 3);
        assert_eq!(config.player.max_speed, 4.0);
        assert_eq!(config.player.friction, PLAYER_FRICTION);
        assert_eq!(config.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_player_start_as_array() {
        let config = FieldConfig::from_json(r#"{ "player_start": [50.0, 60.0] }"#).unwrap();
        assert_eq!(config.player_start, Vec2::new(50.0, 60.0));
    }

    #[test]
    fn test_huge_radius_from_json_is_invalid() {
        let config =
            FieldConfig::from_json(r#"{"ball_min_radius":1,"ball_max_radius":2000000000}"#)
                .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "ball_max_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_validated_against_canvas_size() {
        // Fits a 1920x1080 canvas but not the 800x600 default
        let config = FieldConfig::from_json(r#"{ "player_start": [1000.0, 500.0] }"#).unwrap();
        assert!(config.validate().is_err());

        let config = config.for_frame(1920.0, 1080.0).unwrap();
        assert_eq!((config.width, config.height), (1920.0, 1080.0));
        assert_eq!(config.player_start, Vec2::new(1000.0, 500.0));
    }

    #[test]
    fn test_for_frame_rejects_tiny_canvas() {
        let err = FieldConfig::default().for_frame(30.0, 30.0).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = FieldConfig::from_json("{ ball_count: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases: Vec<(&str, FieldConfig)> = vec![
            ("width", FieldConfig::default().with_frame_size(0.0, 600.0)),
            ("height", FieldConfig::default().with_frame_size(800.0, f32::NAN)),
            (
                "ball_min_radius",
                FieldConfig {
                    ball_min_radius: 0,
                    ..Default::default()
                },
            ),
            (
                "ball_max_radius",
                FieldConfig {
                    ball_max_radius: 5,
                    ..Default::default()
                },
            ),
            ("ball_max_radius", FieldConfig::default().with_frame_size(30.0, 600.0)),
            (
                "ball_max_velocity",
                FieldConfig {
                    ball_min_velocity: 3,
                    ball_max_velocity: 1,
                    ..Default::default()
                },
            ),
            (
                "player.friction",
                FieldConfig {
                    player: PlayerTuning {
                        friction: 1.0,
                        ..Default::default()
                    },
                    ..Default::default()
                },
            ),
            (
                "player.max_speed",
                FieldConfig {
                    player: PlayerTuning {
                        max_speed: 0.0,
                        ..Default::default()
                    },
                    ..Default::default()
                },
            ),
            (
                "player_start",
                FieldConfig {
                    player_start: Vec2::new(5.0, 100.0),
                    ..Default::default()
                },
            ),
            (
                "fade_alpha",
                FieldConfig {
                    fade_alpha: 1.5,
                    ..Default::default()
                },
            ),
            (
                "ball_max_radius",
                FieldConfig {
                    ball_min_radius: 1,
                    ball_max_radius: i32::MAX,
                    ..Default::default()
                },
            ),
        ];

        for (expected, config) in cases {
            match config.validate() {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected invalid `{expected}`, got {other:?}"),
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_is_io_error() {
        let err = FieldConfig::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_config_is_validated() {
        let path = std::env::temp_dir().join(format!("ball_field_bad_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "fade_alpha": 2.0 }"#).unwrap();
        let result = FieldConfig::load_from_path(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "fade_alpha",
                ..
            })
        ));
    }
}
