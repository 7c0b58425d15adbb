// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-frame input snapshots with press and release edge detection.
//!
//! The scene never polls devices. The host collects whatever is held down
//! at the start of a tick into an [`InputFrame`] and hands it to
//! [`crate::Scene::update`]; edges are derived by comparing against the
//! previous frame.

use std::hash::Hash;

use kengine_core::math::Vec2;
use rustc_hash::FxHashSet;

/// Keyboard keys the engine knows by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Space bar.
    Space,
    /// Enter / return.
    Enter,
    /// Escape.
    Escape,
    /// A printable character key, lowercase.
    Char(char),
}

/// Pointer buttons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
}

/// Held-down state of a set of buttons across two consecutive frames.
#[derive(Debug, Clone)]
pub struct InputState<K> {
    current: FxHashSet<K>,
    previous: FxHashSet<K>,
}

impl<K> Default for InputState<K> {
    fn default() -> Self {
        Self {
            current: FxHashSet::default(),
            previous: FxHashSet::default(),
        }
    }
}

impl<K> InputState<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates a state with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls the current snapshot into the previous one and records `pressed`
    /// as the new current snapshot.
    pub fn update<I>(&mut self, pressed: I)
    where
        I: IntoIterator<Item = K>,
    {
        std::mem::swap(&mut self.previous, &mut self.current);
        self.current.clear();
        self.current.extend(pressed);
    }

    /// Held this frame.
    pub fn is_down(&self, key: K) -> bool {
        self.current.contains(&key)
    }

    /// Not held this frame.
    pub fn is_up(&self, key: K) -> bool {
        !self.is_down(key)
    }

    /// Held this frame but not the previous one.
    pub fn is_pressed(&self, key: K) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }

    /// Held the previous frame but not this one.
    pub fn is_released(&self, key: K) -> bool {
        !self.current.contains(&key) && self.previous.contains(&key)
    }

    /// Number of buttons held this frame.
    pub fn held_count(&self) -> usize {
        self.current.len()
    }
}

/// Raw input sampled by the host for one tick.
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    /// Keys held down.
    pub keys: Vec<Key>,
    /// Pointer buttons held down.
    pub buttons: Vec<MouseButton>,
    /// Pointer position in scene coordinates.
    pub pointer: Vec2,
    /// Wall-clock milliseconds since the previous frame; drives sprite
    /// animation only, never motion.
    pub elapsed_ms: u32,
}

/// Keyboard, pointer buttons and pointer position as seen by behaviors.
#[derive(Debug, Clone, Default)]
pub struct Input {
    keys: InputState<Key>,
    buttons: InputState<MouseButton>,
    pointer: Vec2,
    previous_pointer: Vec2,
}

impl Input {
    /// Applies one host frame.
    pub fn update(&mut self, frame: &InputFrame) {
        self.keys.update(frame.keys.iter().copied());
        self.buttons.update(frame.buttons.iter().copied());
        self.previous_pointer = self.pointer;
        self.pointer = frame.pointer;
    }

    /// Keyboard state.
    pub fn keys(&self) -> &InputState<Key> {
        &self.keys
    }

    /// Pointer button state.
    pub fn buttons(&self) -> &InputState<MouseButton> {
        &self.buttons
    }

    /// Pointer position this frame.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Pointer movement since the previous frame.
    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer.sub(&self.previous_pointer)
    }
}
