// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-tick entity motion: acceleration → velocity → position.

use crate::collidable::Collidable;
use crate::math::Vec2;
use crate::rect::Rect;
use crate::tick::TickStep;

/// Kinematic state of an entity.
///
/// A body is a point (its top-left corner) with an optional visual extent.
/// Bodies without a sprite have a zero-sized bounding box at their position.
///
/// Integration order per tick (see [`Body::integrate`]):
/// 1. `velocity += acceleration * step`
/// 2. `position += velocity * step`
///
/// Containment against scene borders is a look-ahead check performed before
/// integration ([`Body::bounce_within`]), so a body reflects off a border on
/// the tick its predicted box would leave the scene rather than one tick late.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    width: i32,
    height: i32,
}

impl Body {
    /// Creates a stationary, zero-sized body at `position`.
    pub const fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            width: 0,
            height: 0,
        }
    }

    /// Returns a copy with the visual extent set (negative values clamp to zero).
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.set_size(width, height);
        self
    }

    /// Returns a copy with the velocity set.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Returns a copy with the acceleration set.
    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Current position (top-left corner).
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Sets the position.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Current velocity in pixels per step.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Sets the velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Current acceleration in pixels per step squared.
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Sets the acceleration.
    pub fn set_acceleration(&mut self, acceleration: Vec2) {
        self.acceleration = acceleration;
    }

    /// Visual extent `(width, height)`.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Sets the visual extent; negative values clamp to zero.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
    }

    /// Magnitude of the velocity.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Rescales the velocity to `speed`, keeping its direction.
    ///
    /// A stationary body has no direction; it starts moving along +X.
    pub fn set_speed(&mut self, speed: f32) {
        if self.velocity.is_zero() {
            self.velocity = Vec2::UNIT_X.scale(speed);
        } else {
            self.velocity = self.velocity.normalize().scale(speed);
        }
    }

    /// Heading in radians, `atan2(-vy, vx)`: `0` is +X, `π/2` is screen-up.
    ///
    /// Returns `0` for a stationary body.
    pub fn direction(&self) -> f32 {
        if self.velocity.is_zero() {
            return 0.0;
        }
        (-self.velocity.y()).atan2(self.velocity.x())
    }

    /// Rotates the velocity to `angle` radians, keeping the speed.
    pub fn set_direction(&mut self, angle: f32) {
        self.velocity = Vec2::from_polar(angle, self.speed());
    }

    /// Advances the body by one tick of `step`.
    pub fn integrate(&mut self, step: TickStep) {
        let dt = step.get();
        self.velocity = self.velocity.add(&self.acceleration.scale(dt));
        self.position = self.position.add(&self.velocity.scale(dt));
    }

    /// Reflects the velocity off the edges of `bounds` that the body would
    /// cross on its next unit step.
    ///
    /// The prediction is the box at `position + velocity`, truncated once, so
    /// sub-pixel velocities that [`Collidable::next_bounding_box`] rounds away
    /// still trigger a reflection before the box leaves. Horizontal velocity
    /// flips for the left or right edge, vertical for the top or bottom edge.
    /// Returns `true` if any component was reflected. Call before
    /// [`Body::integrate`].
    pub fn bounce_within(&mut self, bounds: &Rect) -> bool {
        let ahead = self.position.add(&self.velocity);
        let next = Rect::new(
            to_pixel(ahead.x()),
            to_pixel(ahead.y()),
            self.width,
            self.height,
        );
        if bounds.contains(&next) {
            return false;
        }
        let mut reflected = false;
        if next.left() < bounds.left() || next.right() > bounds.right() {
            self.velocity = self.velocity.with_x(-self.velocity.x());
            reflected = true;
        }
        if next.top() < bounds.top() || next.bottom() > bounds.bottom() {
            self.velocity = self.velocity.with_y(-self.velocity.y());
            reflected = true;
        }
        reflected
    }
}

// Float → integer conversion truncates toward zero and saturates; NaN maps to 0.
#[allow(
    clippy::cast_possible_truncation,
    reason = "pixel coordinates truncate toward zero"
)]
fn to_pixel(value: f32) -> i32 {
    value as i32
}

impl Collidable for Body {
    fn bounding_box(&self) -> Rect {
        Rect::new(
            to_pixel(self.position.x()),
            to_pixel(self.position.y()),
            self.width,
            self.height,
        )
    }

    fn next_bounding_box(&self) -> Rect {
        self.bounding_box()
            .offset(to_pixel(self.velocity.x()), to_pixel(self.velocity.y()))
    }

    fn is_moving(&self) -> bool {
        !self.velocity.is_zero()
    }
}
