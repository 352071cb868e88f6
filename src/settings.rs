//! Scene settings
//!
//! Loaded from a JSON file by the native binary; every field has a default so
//! partial files are fine.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SceneError;

/// How the hero moves once it has a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MotionPolicy {
    /// Keep velocity forever, reflecting off the edges of the active rect
    #[default]
    Bounce,
    /// Stop exactly on the target once it is reachable this frame
    SnapToTarget,
}

impl MotionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionPolicy::Bounce => "bounce",
            MotionPolicy::SnapToTarget => "snap_to_target",
        }
    }
}

/// How the hero sprite turns to face its direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    Instant,
    /// Turn at most `hero_rotate_rate * dt` per frame
    #[default]
    RateLimited,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub scene_width: f32,
    pub scene_height: f32,

    // === Hero ===
    pub hero_start: Vec2,
    pub hero_size: Vec2,
    /// Points per second
    pub hero_speed: f32,
    /// Radians per second
    pub hero_rotate_rate: f32,
    pub motion_policy: MotionPolicy,
    pub facing_mode: FacingMode,

    // === Camera ===
    /// Scroll the camera and background (otherwise the playable rect is fixed)
    pub scrolling: bool,
    pub camera_speed: f32,
    /// Width of one background tile; `None` means twice the scene width
    pub tile_width: Option<f32>,

    // === Coins ===
    pub coin_size: f32,
    pub coin_spawn_interval: f64,
    pub coin_appear_secs: f64,
    pub coin_idle_secs: f64,
    pub coin_disappear_secs: f64,
    /// Coins still scaling in can be picked up
    pub collect_while_appearing: bool,

    // === Debug ===
    /// Emit an outline sprite for the playable area
    pub debug_playable_area: bool,
    /// Seed for coin placement
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scene_width: SCENE_WIDTH,
            scene_height: SCENE_HEIGHT,

            hero_start: Vec2::new(HERO_START_X, HERO_START_Y),
            hero_size: Vec2::new(HERO_WIDTH, HERO_HEIGHT),
            hero_speed: HERO_SPEED,
            hero_rotate_rate: HERO_ROTATE_RATE,
            motion_policy: MotionPolicy::Bounce,
            facing_mode: FacingMode::RateLimited,

            scrolling: true,
            camera_speed: CAMERA_SPEED,
            tile_width: None,

            coin_size: COIN_SIZE,
            coin_spawn_interval: COIN_SPAWN_INTERVAL,
            coin_appear_secs: COIN_APPEAR_SECS,
            coin_idle_secs: COIN_IDLE_SECS,
            coin_disappear_secs: COIN_DISAPPEAR_SECS,
            collect_while_appearing: true,

            debug_playable_area: false,
            seed: 0,
        }
    }
}

impl SceneConfig {
    pub fn scene_size(&self) -> Vec2 {
        Vec2::new(self.scene_width, self.scene_height)
    }

    /// Effective background tile width
    pub fn tile_width(&self) -> f32 {
        self.tile_width.unwrap_or(self.scene_width * 2.0)
    }

    /// Total coin lifetime when never collected
    pub fn coin_lifetime(&self) -> f64 {
        self.coin_appear_secs + self.coin_idle_secs + self.coin_disappear_secs
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(config) => {
                log::info!("Loaded scene config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Using default scene config ({})", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            SceneConfig::from_json(r#"{ "hero_speed": 300.0, "motion_policy": "snap_to_target" }"#)
                .unwrap();
        assert_eq!(config.hero_speed, 300.0);
        assert_eq!(config.motion_policy, MotionPolicy::SnapToTarget);
        assert_eq!(config.camera_speed, CAMERA_SPEED);
        assert_eq!(config.facing_mode, FacingMode::RateLimited);
        assert!(config.scrolling);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = SceneConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SceneError::Config(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = SceneConfig::load("/definitely/not/here/scene.json");
        assert_eq!(config.scene_width, SCENE_WIDTH);
        assert!(matches!(
            SceneConfig::read("/definitely/not/here/scene.json"),
            Err(SceneError::Io(_))
        ));
    }

    #[test]
    fn test_tile_width_defaults_to_two_screens() {
        let config = SceneConfig::default();
        assert_eq!(config.tile_width(), 4096.0);
        assert!((config.coin_lifetime() - 11.0).abs() < 1e-9);
    }
}
