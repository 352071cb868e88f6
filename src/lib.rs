//! Coin Chase - a scrolling 2D scene where a hero chases the player's touch
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, bounds, coins, camera scroll)
//! - `view`: Flattened sprite list for a host renderer
//! - `settings`: Data-driven scene configuration
//! - `error`: Crate error type

pub mod error;
pub mod settings;
pub mod sim;
pub mod view;

pub use error::SceneError;
pub use settings::{FacingMode, MotionPolicy, SceneConfig};

use std::f32::consts::{PI, TAU};

/// Scene configuration constants
pub mod consts {
    /// Playable area keeps a 16:9 safe region of the scene
    pub const MAX_ASPECT_RATIO: f32 = 16.0 / 9.0;

    /// Default scene size (points)
    pub const SCENE_WIDTH: f32 = 2048.0;
    pub const SCENE_HEIGHT: f32 = 1536.0;

    /// Hero defaults
    pub const HERO_START_X: f32 = 400.0;
    pub const HERO_START_Y: f32 = 400.0;
    pub const HERO_WIDTH: f32 = 66.0;
    pub const HERO_HEIGHT: f32 = 92.0;
    /// Points per second
    pub const HERO_SPEED: f32 = 480.0;
    /// Radians per second (two full turns)
    pub const HERO_ROTATE_RATE: f32 = 4.0 * std::f32::consts::PI;

    /// Camera scroll speed (points per second)
    pub const CAMERA_SPEED: f32 = 200.0;
    /// Camera travel after which the world is shifted back toward the
    /// origin, keeping f32 steps exact to well under a point
    pub const WORLD_REBASE_DISTANCE: f32 = 65_536.0;

    /// Coin defaults
    pub const COIN_SIZE: f32 = 70.0;
    pub const COIN_SPAWN_INTERVAL: f64 = 1.0;
    pub const COIN_APPEAR_SECS: f64 = 0.5;
    pub const COIN_IDLE_SECS: f64 = 10.0;
    pub const COIN_DISAPPEAR_SECS: f64 = 0.5;

    /// Starting lives
    pub const START_LIVES: i32 = 3;

    /// Z ordering used by the sprite view
    pub const Z_BACKGROUND: i32 = -1;
    pub const Z_HERO: i32 = 0;
    pub const Z_COIN: i32 = 50;
    pub const Z_DEBUG: i32 = 100;
}

/// Normalize angle to (-π, π]
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}

/// Signed shortest turn from `from` to `to`, in (-π, π]
#[inline]
pub fn shortest_angle_between(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}
