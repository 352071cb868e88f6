//! Camera scrolling and background tile recycling

use glam::Vec2;
use serde::Serialize;

use super::collision::Rect;
use super::state::{GameEvent, GameState};
use crate::consts::WORLD_REBASE_DISTANCE;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Camera {
    /// Centre of the view in scene coordinates
    pub pos: Vec2,
}

impl Camera {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Scroll right at `speed` points per second
    pub fn advance(&mut self, dt: f32, speed: f32) {
        self.pos.x += speed * dt;
    }

    /// The playable area as seen through this camera
    pub fn visible_rect(&self, scene_size: Vec2, playable_size: Vec2) -> Rect {
        let x = self.pos.x - scene_size.x / 2.0 + (scene_size.x - playable_size.x) / 2.0;
        let y = self.pos.y - scene_size.y / 2.0 + (scene_size.y - playable_size.y) / 2.0;
        Rect::new(Vec2::new(x, y), playable_size)
    }
}

/// One background strip, anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BackgroundTile {
    pub pos: Vec2,
    pub size: Vec2,
}

impl BackgroundTile {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Move any tile that has scrolled fully past `left_edge` to follow the
/// rightmost tile. Returns the indices moved, in order.
///
/// Coverage comes from the tiles together: afterwards they span one tile
/// width past `left_edge` with no gap, but the visible rect may straddle the
/// seam between two tiles rather than sit inside one.
pub fn recycle_tiles(tiles: &mut [BackgroundTile], left_edge: f32) -> Vec<usize> {
    let mut moved = Vec::new();
    if tiles.iter().any(|t| t.size.x <= 0.0) {
        return moved;
    }
    loop {
        let Some(leftmost) = (0..tiles.len()).min_by(|&a, &b| tiles[a].pos.x.total_cmp(&tiles[b].pos.x))
        else {
            break;
        };
        if tiles[leftmost].right() >= left_edge {
            break;
        }
        let end = tiles.iter().map(BackgroundTile::right).fold(f32::MIN, f32::max);
        tiles[leftmost].pos.x = end;
        moved.push(leftmost);
    }
    moved
}

/// Advance the camera and keep the background covering it
pub fn step_camera(state: &mut GameState, dt: f32) {
    let speed = state.config.camera_speed;
    state.camera.advance(dt, speed);
    state.scroll_distance += speed as f64 * dt as f64;

    let left_edge = state.visible_rect().min.x;
    for index in recycle_tiles(&mut state.tiles, left_edge) {
        let x = state.tiles[index].pos.x;
        log::debug!("Background tile {} recycled to x={:.0}", index, x);
        state.events.push(GameEvent::TileRecycled { index, x });
    }

    rebase_world(state);
}

/// Once the camera is far from where it started, shift the whole scene back
/// by whole tile widths. Positions stay small enough that a frame's worth of
/// scrolling is never lost to f32 rounding. Returns the shift applied.
pub fn rebase_world(state: &mut GameState) -> f32 {
    let travelled = state.camera.pos.x - state.config.scene_width / 2.0;
    let tile_width = state.config.tile_width();
    if travelled < WORLD_REBASE_DISTANCE || tile_width <= 0.0 {
        return 0.0;
    }
    let shift = (travelled / tile_width).floor() * tile_width;
    if shift <= 0.0 {
        return 0.0;
    }

    let dx = -shift;
    state.camera.pos.x += dx;
    for tile in &mut state.tiles {
        tile.pos.x += dx;
    }
    state.hero.pos.x += dx;
    if let Some(target) = &mut state.hero.target {
        target.x += dx;
    }
    for coin in &mut state.coins {
        coin.pos.x += dx;
    }

    log::debug!("World shifted by {:.0}", dx);
    state.events.push(GameEvent::WorldShifted { dx });
    dx
}
