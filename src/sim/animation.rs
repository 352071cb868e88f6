//! Hero walk cycle

use serde::Serialize;

/// Texture shown while standing still
pub const IDLE_TEXTURE: &str = "p1_front";

/// Seconds each walk frame stays on screen
pub const WALK_FRAME_SECS: f32 = 0.1;

/// Walk frames: 1-11, then back through 3 and 2 before looping
pub const WALK_FRAMES: [&str; 13] = [
    "p1_walk01",
    "p1_walk02",
    "p1_walk03",
    "p1_walk04",
    "p1_walk05",
    "p1_walk06",
    "p1_walk07",
    "p1_walk08",
    "p1_walk09",
    "p1_walk10",
    "p1_walk11",
    "p1_walk03",
    "p1_walk02",
];

#[derive(Debug, Clone, Default, Serialize)]
pub struct WalkCycle {
    running: bool,
    elapsed: f32,
}

impl WalkCycle {
    /// Start looping; a cycle already running keeps its current frame
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.elapsed = 0.0;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn advance(&mut self, dt: f32) {
        if self.running {
            let period = WALK_FRAME_SECS * WALK_FRAMES.len() as f32;
            self.elapsed = (self.elapsed + dt) % period;
        }
    }

    pub fn frame_index(&self) -> usize {
        ((self.elapsed / WALK_FRAME_SECS) as usize).min(WALK_FRAMES.len() - 1)
    }

    pub fn texture(&self) -> &'static str {
        if self.running {
            WALK_FRAMES[self.frame_index()]
        } else {
            IDLE_TEXTURE
        }
    }
}
