//! Sprite list for a host renderer
//!
//! Flattens the scene into textured quads sorted back to front. The host owns
//! texture loading and drawing; this only says what goes where.

use glam::Vec2;
use serde::Serialize;

use crate::consts::{Z_BACKGROUND, Z_COIN, Z_DEBUG, Z_HERO};
use crate::sim::GameState;

pub const BACKGROUND_TEXTURE: &str = "bg";
pub const COIN_TEXTURE: &str = "coinGold";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Background,
    Hero,
    Coin,
    /// Outline of the playable area
    DebugOutline,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Texture name, empty for untextured outlines
    pub texture: &'static str,
    pub pos: Vec2,
    pub size: Vec2,
    /// Where `pos` sits inside the sprite: (0,0) bottom-left, (0.5,0.5) centre
    pub anchor: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub z: i32,
}

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct SceneView {
    pub camera: Vec2,
    pub sprites: Vec<Sprite>,
}

pub fn scene_view(state: &GameState) -> SceneView {
    SceneView {
        camera: state.camera.pos,
        sprites: sprites(state),
    }
}

pub fn sprites(state: &GameState) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(state.coins.len() + 4);

    for tile in &state.tiles {
        sprites.push(Sprite {
            kind: SpriteKind::Background,
            texture: BACKGROUND_TEXTURE,
            pos: tile.pos,
            size: tile.size,
            anchor: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
            z: Z_BACKGROUND,
        });
    }

    let hero = &state.hero;
    sprites.push(Sprite {
        kind: SpriteKind::Hero,
        texture: hero.walk.texture(),
        pos: hero.pos,
        size: hero.size,
        anchor: Vec2::splat(0.5),
        rotation: hero.facing,
        scale: 1.0,
        z: Z_HERO,
    });

    for coin in &state.coins {
        sprites.push(Sprite {
            kind: SpriteKind::Coin,
            texture: COIN_TEXTURE,
            pos: coin.pos,
            size: Vec2::splat(coin.size),
            anchor: Vec2::splat(0.5),
            rotation: 0.0,
            scale: coin.scale,
            z: Z_COIN,
        });
    }

    if state.config.debug_playable_area {
        let rect = state.playable_rect;
        sprites.push(Sprite {
            kind: SpriteKind::DebugOutline,
            texture: "",
            pos: rect.min,
            size: rect.size(),
            anchor: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
            z: Z_DEBUG,
        });
    }

    // Stable: equal z keeps insertion order
    sprites.sort_by_key(|s| s.z);
    sprites
}
