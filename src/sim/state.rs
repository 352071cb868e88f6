//! Scene state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::animation::WalkCycle;
use super::collision::{Rect, rotated_bounds};
use super::scroll::{BackgroundTile, Camera};
use super::timeline::Timeline;
use crate::consts::*;
use crate::error::SceneError;
use crate::settings::SceneConfig;

/// Coin lifecycle, driven purely by elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CoinPhase {
    /// Scaling in from nothing
    Spawning,
    Visible,
    /// Scaling back out
    Despawning,
    /// Gone from the scene
    Removed,
}

/// Things that happened during a frame, drained by the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    CoinSpawned { id: u32, pos: Vec2 },
    /// Hook point for scoring and sound
    CoinCollected { id: u32, pos: Vec2 },
    /// Coin timed out without being picked up
    CoinExpired { id: u32 },
    /// A background tile jumped ahead of the camera
    TileRecycled { index: usize, x: f32 },
    /// Every position in the scene moved by `dx` (camera included)
    WorldShifted { dx: f32 },
    GameOver,
}

/// The player's character
#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub pos: Vec2,
    /// Points per second
    pub vel: Vec2,
    /// Sprite rotation (radians)
    pub facing: f32,
    pub size: Vec2,
    /// Last touch point, if any
    pub target: Option<Vec2>,
    pub walk: WalkCycle,
}

impl Hero {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            facing: 0.0,
            size,
            target: None,
            walk: WalkCycle::default(),
        }
    }

    /// Bounding box of the rotated sprite
    pub fn frame(&self) -> Rect {
        rotated_bounds(self.pos, self.size, self.facing)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    /// Unscaled edge length
    pub size: f32,
    /// Scene time the coin appeared
    pub spawned_at: f64,
    pub phase: CoinPhase,
    /// 0 while hidden, 1 when fully shown
    pub scale: f32,
}

impl Coin {
    /// Current bounding box (shrinks with scale)
    pub fn frame(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.size * self.scale))
    }
}

/// A lifecycle step for one coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoinCue {
    pub coin_id: u32,
    pub enter: CoinPhase,
}

/// Complete scene state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub config: SceneConfig,
    /// Fixed at construction: full width, 16:9 tall, vertically centred
    pub playable_rect: Rect,
    pub hero: Hero,
    /// Active coins (sorted by id)
    pub coins: Vec<Coin>,
    pub camera: Camera,
    /// Total camera travel; unlike `camera.pos` this is never rebased
    pub scroll_distance: f64,
    pub tiles: [BackgroundTile; 2],
    pub lives: i32,
    pub game_over: bool,
    /// Seconds since the first frame
    pub time: f64,
    /// Length of the last frame
    pub dt: f64,
    /// Frame clock value seen last frame
    pub last_update_time: Option<f64>,
    /// Scene time of the next coin spawn
    pub next_spawn_at: f64,
    /// Pending coin lifecycle cues
    pub timeline: Timeline<CoinCue>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    rng: Pcg32,
    next_id: u32,
}

/// Playable area for a scene of the given size
pub fn playable_rect(scene_size: Vec2) -> Rect {
    let playable_height = scene_size.x / MAX_ASPECT_RATIO;
    let margin = (scene_size.y - playable_height) / 2.0;
    Rect::new(
        Vec2::new(0.0, margin),
        Vec2::new(scene_size.x, playable_height),
    )
}

impl GameState {
    pub fn new(config: SceneConfig) -> Self {
        let scene_size = config.scene_size();
        let tile_size = Vec2::new(config.tile_width(), scene_size.y);
        let state = Self {
            playable_rect: playable_rect(scene_size),
            hero: Hero::new(config.hero_start, config.hero_size),
            coins: Vec::new(),
            camera: Camera::new(scene_size * 0.5),
            scroll_distance: 0.0,
            tiles: [
                BackgroundTile::new(Vec2::ZERO, tile_size),
                BackgroundTile::new(Vec2::new(tile_size.x, 0.0), tile_size),
            ],
            lives: START_LIVES,
            game_over: false,
            time: 0.0,
            dt: 0.0,
            last_update_time: None,
            next_spawn_at: 0.0,
            timeline: Timeline::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(config.seed),
            next_id: 1,
            config,
        };
        log::info!(
            "Scene {}x{} (playable {}x{}, {}, {})",
            state.config.scene_width,
            state.config.scene_height,
            state.playable_rect.width(),
            state.playable_rect.height(),
            state.config.motion_policy.as_str(),
            if state.config.scrolling { "scrolling" } else { "fixed camera" },
        );
        state
    }

    /// Scenes can't be rebuilt from archived data
    pub fn restore(_archived: &[u8]) -> Result<Self, SceneError> {
        Err(SceneError::RestoreUnsupported)
    }

    /// Playable rect as seen through the camera
    pub fn visible_rect(&self) -> Rect {
        self.camera
            .visible_rect(self.config.scene_size(), self.playable_rect.size())
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Add a coin that started appearing at scene time `at` and queue its
    /// lifecycle. Returns its id.
    pub fn insert_coin(&mut self, pos: Vec2, at: f64) -> u32 {
        let id = self.next_entity_id();
        let config = &self.config;
        let visible_at = at + config.coin_appear_secs;
        let despawn_at = visible_at + config.coin_idle_secs;
        let remove_at = despawn_at + config.coin_disappear_secs;

        self.coins.push(Coin {
            id,
            pos,
            size: config.coin_size,
            spawned_at: at,
            phase: CoinPhase::Spawning,
            scale: 0.0,
        });
        for (deadline, enter) in [
            (visible_at, CoinPhase::Visible),
            (despawn_at, CoinPhase::Despawning),
            (remove_at, CoinPhase::Removed),
        ] {
            self.timeline.schedule(deadline, CoinCue { coin_id: id, enter });
        }
        self.events.push(GameEvent::CoinSpawned { id, pos });
        id
    }

    pub fn coin(&self, id: u32) -> Option<&Coin> {
        self.coins.iter().find(|c| c.id == id)
    }

    /// Take a life. Nothing in the scene calls this yet; it is the hook for
    /// future loss conditions.
    pub fn lose_life(&mut self) {
        self.lives -= 1;
    }

    /// Take every event since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
