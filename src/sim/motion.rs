//! Hero steering, integration, bounds clamping and facing

use glam::Vec2;

use super::collision::Rect;
use super::state::Hero;
use crate::settings::{FacingMode, MotionPolicy};
use crate::{normalize_angle, shortest_angle_between};

impl Hero {
    /// Head toward `point` at `speed`.
    ///
    /// The point becomes the current target either way; a point on top of the
    /// hero has no direction, so velocity is left alone. Returns whether the
    /// velocity changed.
    pub fn set_target(&mut self, point: Vec2, speed: f32) -> bool {
        self.target = Some(point);
        let offset = point - self.pos;
        let length = offset.length();
        if length <= f32::EPSILON {
            return false;
        }
        self.vel = offset / length * speed;
        self.walk.start();
        true
    }

    /// Integrate one frame and keep the hero inside `bounds`
    pub fn advance(&mut self, dt: f32, bounds: Rect, policy: MotionPolicy, speed: f32) {
        match policy {
            MotionPolicy::Bounce => {
                self.pos += self.vel * dt;
                self.clamp_bounce(bounds);
            }
            MotionPolicy::SnapToTarget => {
                match self.target {
                    Some(target) if self.pos.distance(target) <= speed * dt => {
                        self.pos = target;
                        self.vel = Vec2::ZERO;
                        self.walk.stop();
                    }
                    _ => self.pos += self.vel * dt,
                }
                self.pos = self.pos.clamp(bounds.min, bounds.max);
            }
        }
        self.walk.advance(dt);
    }

    /// Clamp to `bounds`, reflecting velocity on the axis that was hit.
    ///
    /// Left edge forces `vx` positive; every other edge flips the sign of the
    /// component, so the top and bottom edges behave the same way.
    pub fn clamp_bounce(&mut self, bounds: Rect) {
        if self.pos.x <= bounds.min.x {
            self.pos.x = bounds.min.x;
            self.vel.x = self.vel.x.abs();
        }
        if self.pos.x >= bounds.max.x {
            self.pos.x = bounds.max.x;
            self.vel.x = -self.vel.x;
        }
        if self.pos.y <= bounds.min.y {
            self.pos.y = bounds.min.y;
            self.vel.y = -self.vel.y;
        }
        if self.pos.y >= bounds.max.y {
            self.pos.y = bounds.max.y;
            self.vel.y = -self.vel.y;
        }
    }

    /// Turn toward the direction of travel. Standing still keeps the facing.
    pub fn face(&mut self, dt: f32, mode: FacingMode, max_rate: f32) {
        if self.vel.length_squared() <= f32::EPSILON {
            return;
        }
        let heading = self.vel.y.atan2(self.vel.x);
        match mode {
            FacingMode::Instant => self.facing = heading,
            FacingMode::RateLimited => {
                let shortest = shortest_angle_between(self.facing, heading);
                let amount = (max_rate * dt).min(shortest.abs());
                self.facing = normalize_angle(self.facing + shortest.signum() * amount);
            }
        }
    }
}
