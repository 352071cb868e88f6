//! Coin Chase headless runner
//!
//! Drives the scene at 60 fps with a scripted touch track and logs what
//! happens. A host renderer would call `tick` and `scene_view` the same way.
//!
//! Usage: `coin-chase [config.json] [--seconds N] [--restore FILE]`

use glam::Vec2;

use coin_chase::sim::{FrameInput, GameEvent, GameState, tick};
use coin_chase::view::scene_view;
use coin_chase::{SceneConfig, SceneError};

const FRAME_SECS: f64 = 1.0 / 60.0;
/// Seconds between scripted touches
const TOUCH_EVERY: f64 = 1.5;

struct Args {
    config: Option<String>,
    seconds: f64,
    restore: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        config: None,
        seconds: 30.0,
        restore: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seconds" => {
                if let Some(secs) = it.next().and_then(|s| s.parse().ok()) {
                    args.seconds = secs;
                }
            }
            "--restore" => args.restore = it.next(),
            _ => args.config = Some(arg),
        }
    }
    args
}

/// Touch point for scripted step `step`, inside the currently visible rect
fn scripted_touch(state: &GameState, step: u32) -> Vec2 {
    // Walk the corners of an inset box so the hero crosses the whole view
    const PATH: [(f32, f32); 5] = [(0.8, 0.5), (0.2, 0.8), (0.5, 0.2), (0.9, 0.9), (0.1, 0.1)];
    let rect = state.visible_rect();
    let (fx, fy) = PATH[step as usize % PATH.len()];
    rect.min + rect.size() * Vec2::new(fx, fy)
}

fn run(args: Args) -> Result<(), SceneError> {
    if let Some(path) = &args.restore {
        let archived = std::fs::read(path)?;
        GameState::restore(&archived)?;
    }

    let config = match &args.config {
        Some(path) => SceneConfig::load(path),
        None => SceneConfig::default(),
    };
    let mut state = GameState::new(config);

    let mut collected = 0u32;
    let mut expired = 0u32;
    let mut recycled = 0u32;
    let mut touches = 0u32;
    let mut next_touch = 0.0;

    let frames = (args.seconds / FRAME_SECS).ceil() as u64;
    for frame in 0..frames {
        let now = frame as f64 * FRAME_SECS;
        let mut input = FrameInput::default();
        if state.time >= next_touch {
            input.record(scripted_touch(&state, touches));
            touches += 1;
            next_touch += TOUCH_EVERY;
        }

        tick(&mut state, &input, now);

        for event in state.drain_events() {
            match event {
                GameEvent::CoinCollected { id, pos } => {
                    collected += 1;
                    log::info!("Collected coin {} at ({:.0}, {:.0})", id, pos.x, pos.y);
                }
                GameEvent::CoinExpired { .. } => expired += 1,
                GameEvent::TileRecycled { .. } => recycled += 1,
                GameEvent::WorldShifted { dx } => log::debug!("World shifted by {}", dx),
                GameEvent::GameOver => log::info!("Game over at t={:.2}s", state.time),
                GameEvent::CoinSpawned { .. } => {}
            }
        }
    }

    log::info!(
        "Ran {:.1}s: scrolled {:.0}, {} touches, {} coins collected, {} expired, {} active, {} tile recycles",
        state.time,
        state.scroll_distance,
        touches,
        collected,
        expired,
        state.coins.len(),
        recycled,
    );

    let view = scene_view(&state);
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Coin Chase (headless) starting...");

    if let Err(err) = run(parse_args()) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
