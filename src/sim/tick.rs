//! Per-frame scene update
//!
//! One call per rendered frame. Stages run in a fixed order so the pickup
//! pass always sees final positions.

use glam::Vec2;

use super::coins::{run_lifecycle, run_spawner};
use super::collision::check_collisions;
use super::scroll::step_camera;
use super::state::{GameEvent, GameState};

/// Input gathered since the previous frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Latest touch point (scene coordinates); later touches overwrite earlier
    pub touch: Option<Vec2>,
}

impl FrameInput {
    pub fn touch(point: Vec2) -> Self {
        Self { touch: Some(point) }
    }

    /// Record a touch-down or touch-move; last write wins
    pub fn record(&mut self, point: Vec2) {
        self.touch = Some(point);
    }
}

/// Advance the scene to frame clock time `now` (seconds, monotonic)
pub fn tick(state: &mut GameState, input: &FrameInput, now: f64) {
    let dt = match state.last_update_time {
        Some(last) => (now - last).max(0.0),
        None => 0.0,
    };
    state.last_update_time = Some(now);
    state.dt = dt;
    state.time += dt;
    let dt = dt as f32;

    // Touch first: the host delivers it between frames
    if let Some(point) = input.touch {
        let speed = state.config.hero_speed;
        state.hero.set_target(point, speed);
    }

    // Hero
    let bounds = state.visible_rect();
    let config = &state.config;
    state
        .hero
        .advance(dt, bounds, config.motion_policy, config.hero_speed);
    state
        .hero
        .face(dt, config.facing_mode, config.hero_rotate_rate);

    if state.lives <= 0 && !state.game_over {
        state.game_over = true;
        log::info!("You lose!");
        state.events.push(GameEvent::GameOver);
    }

    if state.config.scrolling {
        step_camera(state, dt);
    }

    // Timed actions
    run_spawner(state);
    run_lifecycle(state);

    // After everything has moved
    check_collisions(state);
}
