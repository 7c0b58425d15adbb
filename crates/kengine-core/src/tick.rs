// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Discrete simulation tick.
///
/// The engine advances in integer ticks; each tick integrates motion by one
/// [`TickStep`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    index: u64,
}

impl Tick {
    /// Creates a new tick with the given index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self { index }
    }

    /// Returns the tick index.
    #[must_use]
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// Returns the following tick (saturating).
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            index: self.index.saturating_add(1),
        }
    }
}

/// Time scale applied to one tick of motion integration.
///
/// Velocities are expressed in pixels per unit step; the default step is `1`,
/// so a body moves by exactly its velocity each tick.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TickStep(f32);

impl TickStep {
    /// The unit step.
    pub const UNIT: Self = Self(1.0);

    /// Creates a step; non-finite or negative values fall back to zero.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_finite() && step >= 0.0 {
            Self(step)
        } else {
            Self(0.0)
        }
    }

    /// Returns the raw step value.
    #[must_use]
    pub const fn get(&self) -> f32 {
        self.0
    }
}

impl Default for TickStep {
    fn default() -> Self {
        Self::UNIT
    }
}
