//! Deterministic scene simulation
//!
//! All gameplay logic lives here:
//! - Frame clock only (no wall-clock reads)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod animation;
pub mod coins;
pub mod collision;
pub mod motion;
pub mod scroll;
pub mod state;
pub mod tick;
pub mod timeline;

pub use animation::WalkCycle;
pub use collision::{Rect, check_collisions, collect_coins};
pub use scroll::{BackgroundTile, Camera};
pub use state::{Coin, CoinCue, CoinPhase, GameEvent, GameState, Hero, playable_rect};
pub use tick::{FrameInput, tick};
pub use timeline::Timeline;
