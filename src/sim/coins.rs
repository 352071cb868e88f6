//! Coin spawning and lifecycle

use glam::Vec2;
use rand::Rng;

use super::state::{CoinPhase, GameEvent, GameState};

/// Spawn every coin due by the current scene time.
///
/// Runs off the scene clock rather than frame count, so a long frame catches
/// up; each coin is stamped with the time it was due. Spawns whose whole
/// lifetime already ended are skipped outright, so a long suspend costs no
/// more than the coins still alive. A non-positive interval disables
/// spawning.
pub fn run_spawner(state: &mut GameState) -> usize {
    let interval = state.config.coin_spawn_interval;
    if interval <= 0.0 {
        return 0;
    }

    // A coin due at `at` is still on screen while `at + lifetime > time`
    let lifetime = state.config.coin_lifetime();
    let expired_span = state.time - lifetime - state.next_spawn_at;
    if expired_span >= 0.0 {
        let skipped = (expired_span / interval).floor() + 1.0;
        state.next_spawn_at += skipped * interval;
        log::debug!("Skipped {} coin spawns that would already have expired", skipped);
    }

    let mut spawned = 0;
    while state.next_spawn_at <= state.time {
        let at = state.next_spawn_at;
        spawn_coin(state, at);
        state.next_spawn_at += interval;
        spawned += 1;
    }
    spawned
}

/// Drop a coin at a random point in the visible rect
pub fn spawn_coin(state: &mut GameState, at: f64) -> u32 {
    let rect = state.visible_rect();
    let rng = state.rng();
    let pos = Vec2::new(
        rng.random_range(rect.min.x..=rect.max.x),
        rng.random_range(rect.min.y..=rect.max.y),
    );
    let id = state.insert_coin(pos, at);
    log::debug!("Spawned coin {} at ({:.0}, {:.0})", id, pos.x, pos.y);
    id
}

/// Apply due lifecycle cues, then refresh every coin's scale
pub fn run_lifecycle(state: &mut GameState) {
    let due = state
        .timeline
        .next_deadline()
        .is_some_and(|at| at <= state.time);
    let cues = if due { state.timeline.pop_due(state.time) } else { Vec::new() };
    for cue in cues {
        let Some(idx) = state.coins.iter().position(|c| c.id == cue.coin_id) else {
            continue;
        };
        if cue.enter == CoinPhase::Removed {
            let coin = state.coins.remove(idx);
            log::debug!("Coin {} expired", coin.id);
            state.events.push(GameEvent::CoinExpired { id: coin.id });
        } else {
            state.coins[idx].phase = cue.enter;
        }
    }

    let config = &state.config;
    let appear = config.coin_appear_secs;
    let despawn_start = config.coin_appear_secs + config.coin_idle_secs;
    let disappear = config.coin_disappear_secs;
    let now = state.time;
    for coin in &mut state.coins {
        let age = now - coin.spawned_at;
        coin.scale = match coin.phase {
            CoinPhase::Spawning => ramp(age, appear),
            CoinPhase::Visible => 1.0,
            CoinPhase::Despawning => 1.0 - ramp(age - despawn_start, disappear),
            CoinPhase::Removed => 0.0,
        };
    }
}

/// Linear 0..1 progress through a span of `duration` seconds
fn ramp(elapsed: f64, duration: f64) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SceneConfig;

    fn fixed_scene() -> GameState {
        GameState::new(SceneConfig {
            scrolling: false,
            seed: 42,
            ..Default::default()
        })
    }

    fn at(state: &mut GameState, time: f64) {
        state.time = time;
        run_lifecycle(state);
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut state = fixed_scene();
        let id = state.insert_coin(Vec2::new(1000.0, 700.0), 0.0);

        at(&mut state, 0.25);
        let coin = state.coin(id).unwrap();
        assert_eq!(coin.phase, CoinPhase::Spawning);
        assert!((coin.scale - 0.5).abs() < 1e-6);

        at(&mut state, 0.49);
        assert_eq!(state.coin(id).unwrap().phase, CoinPhase::Spawning);
        at(&mut state, 0.5);
        assert_eq!(state.coin(id).unwrap().phase, CoinPhase::Visible);
        assert_eq!(state.coin(id).unwrap().scale, 1.0);

        at(&mut state, 10.49);
        assert_eq!(state.coin(id).unwrap().phase, CoinPhase::Visible);
        at(&mut state, 10.5);
        assert_eq!(state.coin(id).unwrap().phase, CoinPhase::Despawning);

        at(&mut state, 10.75);
        assert!((state.coin(id).unwrap().scale - 0.5).abs() < 1e-6);

        at(&mut state, 10.99);
        assert!(state.coin(id).is_some());
        at(&mut state, 11.0);
        assert!(state.coin(id).is_none());
        assert!(state.drain_events().contains(&GameEvent::CoinExpired { id }));
    }

    #[test]
    fn test_long_frame_runs_every_step() {
        let mut state = fixed_scene();
        let id = state.insert_coin(Vec2::new(1000.0, 700.0), 0.0);
        at(&mut state, 30.0);
        assert!(state.coin(id).is_none());
        assert!(state.timeline.is_empty());
    }

    #[test]
    fn test_spawner_runs_on_fixed_period() {
        let mut state = fixed_scene();

        // First coin on the very first frame
        assert_eq!(run_spawner(&mut state), 1);
        assert_eq!(run_spawner(&mut state), 0);

        state.time = 0.99;
        assert_eq!(run_spawner(&mut state), 0);
        state.time = 1.0;
        assert_eq!(run_spawner(&mut state), 1);

        // A 3.5s hitch catches up on every missed spawn
        state.time = 4.5;
        assert_eq!(run_spawner(&mut state), 3);
        let stamps: Vec<f64> = state.coins.iter().map(|c| c.spawned_at).collect();
        assert_eq!(stamps, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(state.next_spawn_at, 5.0);
    }

    #[test]
    fn test_spawns_inside_visible_rect() {
        let mut state = GameState::new(SceneConfig { seed: 7, ..Default::default() });
        state.camera.pos.x += 5000.0;
        let rect = state.visible_rect();
        for i in 0..200 {
            spawn_coin(&mut state, i as f64);
        }
        assert!(state.coins.iter().all(|c| {
            c.pos.cmpge(rect.min).all() && c.pos.cmple(rect.max).all()
        }));
        // Actually spread out, not pinned to a corner
        let min_x = state.coins.iter().map(|c| c.pos.x).fold(f32::MAX, f32::min);
        let max_x = state.coins.iter().map(|c| c.pos.x).fold(f32::MIN, f32::max);
        assert!(max_x - min_x > rect.width() * 0.5);
    }

    #[test]
    fn test_same_seed_same_coins() {
        let mut a = fixed_scene();
        let mut b = fixed_scene();
        for i in 0..10 {
            spawn_coin(&mut a, i as f64);
            spawn_coin(&mut b, i as f64);
        }
        let pa: Vec<Vec2> = a.coins.iter().map(|c| c.pos).collect();
        let pb: Vec<Vec2> = b.coins.iter().map(|c| c.pos).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_long_suspend_only_spawns_live_coins() {
        let mut state = fixed_scene();
        run_spawner(&mut state);
        run_lifecycle(&mut state);
        state.drain_events();

        state.time = 40_000.0;
        let spawned = run_spawner(&mut state);
        run_lifecycle(&mut state);

        // 11s lifetime at one coin a second
        assert!(spawned <= 12, "spawned {}", spawned);
        assert!(state.coins.len() <= 12);
        assert!(state.coins.len() >= 10);
        assert!(state
            .coins
            .iter()
            .all(|c| c.spawned_at + state.config.coin_lifetime() > state.time));
        // Stamps still land on the spawn grid
        assert!(state.coins.iter().all(|c| c.spawned_at.fract() == 0.0));
        assert!(state.next_spawn_at > state.time);
        // Only the first coin's expiry and the live spawns
        assert!(state.drain_events().len() <= 13);
    }

    #[test]
    fn test_short_hitch_is_not_skipped() {
        let mut state = fixed_scene();
        run_spawner(&mut state);
        // Coin due at 0 is still alive at 10.9
        state.time = 10.9;
        assert_eq!(run_spawner(&mut state), 10);
        assert_eq!(state.coins.len(), 11);
        assert_eq!(state.coins[0].spawned_at, 0.0);
    }

    #[test]
    fn test_zero_interval_disables_spawning() {
        let mut state = GameState::new(SceneConfig {
            coin_spawn_interval: 0.0,
            ..Default::default()
        });
        state.time = 100.0;
        assert_eq!(run_spawner(&mut state), 0);
    }
}
