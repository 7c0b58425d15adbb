// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::rect::Rect;

/// Geometry contract for anything that participates in spatial queries.
///
/// Implementors expose where they are now and where they will be after one
/// more tick at their current velocity. Spatial indices only ever borrow
/// collidables; lifetimes stay with the scene layer.
///
/// Implementations should return non-negative extents; [`Rect::new`] clamps
/// them, so building boxes through it is enough.
pub trait Collidable {
    /// Axis-aligned box at the current position.
    fn bounding_box(&self) -> Rect;

    /// Current box translated by the per-tick velocity.
    fn next_bounding_box(&self) -> Rect;

    /// `true` when the velocity is non-zero.
    fn is_moving(&self) -> bool;
}

impl<T: Collidable + ?Sized> Collidable for &T {
    fn bounding_box(&self) -> Rect {
        (**self).bounding_box()
    }

    fn next_bounding_box(&self) -> Rect {
        (**self).next_bounding_box()
    }

    fn is_moving(&self) -> bool {
        (**self).is_moving()
    }
}

impl<T: Collidable + ?Sized> Collidable for Box<T> {
    fn bounding_box(&self) -> Rect {
        (**self).bounding_box()
    }

    fn next_bounding_box(&self) -> Rect {
        (**self).next_bounding_box()
    }

    fn is_moving(&self) -> bool {
        (**self).is_moving()
    }
}

/// A static box never moves: its next box is its current box.
impl Collidable for Rect {
    fn bounding_box(&self) -> Rect {
        *self
    }

    fn next_bounding_box(&self) -> Rect {
        *self
    }

    fn is_moving(&self) -> bool {
        false
    }
}
