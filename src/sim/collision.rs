//! Axis-aligned bounds and the hero/coin pickup pass
//!
//! Runs once per frame after everything else has moved, so the test always
//! sees final positions.

use glam::Vec2;
use serde::Serialize;

use super::state::{CoinPhase, GameEvent, GameState};

/// Axis-aligned rectangle in scene coordinates (y up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rectangle from its bottom-left corner and size
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// True when the overlap has positive area. Touching edges and
    /// zero-size rects never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let overlap = self.max.min(other.max) - self.min.max(other.min);
        overlap.x > 0.0 && overlap.y > 0.0
    }
}

/// Bounding box of a `size` sprite centred on `center` and rotated by `angle`
pub fn rotated_bounds(center: Vec2, size: Vec2, angle: f32) -> Rect {
    let (sin, cos) = angle.sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let extent = Vec2::new(
        cos * size.x + sin * size.y,
        sin * size.x + cos * size.y,
    );
    Rect::from_center(center, extent)
}

/// Collect every coin overlapping the hero. Returns the number collected.
pub fn check_collisions(state: &mut GameState) -> usize {
    let hero_frame = state.hero.frame();
    let allow_appearing = state.config.collect_while_appearing;

    let hits: Vec<u32> = state
        .coins
        .iter()
        .filter(|c| allow_appearing || c.phase != CoinPhase::Spawning)
        .filter(|c| c.frame().intersects(&hero_frame))
        .map(|c| c.id)
        .collect();

    collect_coins(state, &hits)
}

/// Remove the given coins, abandoning their pending lifecycle cues.
///
/// Ids that are repeated or already gone are ignored, so a coin is only ever
/// removed once.
pub fn collect_coins(state: &mut GameState, ids: &[u32]) -> usize {
    let mut collected = 0;
    for &id in ids {
        let Some(idx) = state.coins.iter().position(|c| c.id == id) else {
            continue;
        };
        let coin = state.coins.remove(idx);
        state.timeline.retain(|cue| cue.coin_id != id);
        log::debug!("Collected coin {} at ({:.0}, {:.0})", id, coin.pos.x, coin.pos.y);
        state.events.push(GameEvent::CoinCollected { id, pos: coin.pos });
        collected += 1;
    }
    collected
}
