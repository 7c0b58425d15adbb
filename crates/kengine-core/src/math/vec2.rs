// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::EPSILON;

/// 2D vector used for positions, velocities and accelerations.
///
/// * Components are scene pixels (positions) or pixels per tick (velocities).
/// * The Y axis points down, matching screen space.
/// * Arithmetic uses `f32`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Returns a copy with the X component replaced.
    pub fn with_x(&self, x: f32) -> Self {
        Self::new(x, self.y())
    }

    /// Returns a copy with the Y component replaced.
    pub fn with_y(&self, y: f32) -> Self {
        Self::new(self.x(), y)
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Returns `true` when both components are exactly zero.
    ///
    /// Negative zero counts as zero.
    pub fn is_zero(&self) -> bool {
        self.x() == 0.0 && self.y() == 0.0
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Builds a vector of length `magnitude` pointing at `angle` radians.
    ///
    /// Angles follow the screen convention used by [`crate::Body::direction`]:
    /// `0` points along +X and positive angles turn towards screen-up (-Y).
    pub fn from_polar(angle: f32, magnitude: f32) -> Self {
        Self::new(angle.cos() * magnitude, -angle.sin() * magnitude)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_degenerate_returns_zero() {
        assert_eq!(Vec2::new(1e-9, 0.0).normalize(), Vec2::ZERO);
    }

    #[test]
    fn from_polar_points_up_for_quarter_turn() {
        let v = Vec2::from_polar(std::f32::consts::FRAC_PI_2, 2.0);
        assert!(v.x().abs() < 1e-6, "x should vanish: {v:?}");
        assert!((v.y() + 2.0).abs() < 1e-6, "y should be -2: {v:?}");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert!(Vec2::new(-0.0, 0.0).is_zero());
    }
}
