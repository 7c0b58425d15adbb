// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sprite-sheet animation timing.
//!
//! A [`Sprite`] knows the layout of its frames inside a sheet and which frame
//! is current. It never touches pixels; the host uses [`Sprite::source_rect`]
//! to blit.

use kengine_core::Rect;
use thiserror::Error;

/// Errors emitted when describing a sprite sheet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpriteError {
    /// Frame size, frame count or row length is not positive.
    #[error("invalid sprite layout: {0}")]
    InvalidLayout(&'static str),
}

/// Animated view into a sprite sheet.
///
/// Frames are laid out row-major starting at `offset`, `row_len` frames per
/// row, each `width × height` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: i32,
    height: i32,
    image_count: u32,
    row_len: u32,
    offset: (i32, i32),
    image_time_ms: u32,
    image_index: u32,
    since_last_ms: u32,
}

impl Sprite {
    /// Describes an animated strip.
    ///
    /// `image_time_ms` is how long each frame stays current; `0` freezes the
    /// animation on the current frame.
    pub fn new(
        width: i32,
        height: i32,
        image_count: u32,
        row_len: u32,
        offset: (i32, i32),
        image_time_ms: u32,
    ) -> Result<Self, SpriteError> {
        if width <= 0 || height <= 0 {
            return Err(SpriteError::InvalidLayout("frame size must be positive"));
        }
        if image_count == 0 {
            return Err(SpriteError::InvalidLayout("image_count must be at least 1"));
        }
        if row_len == 0 {
            return Err(SpriteError::InvalidLayout("row_len must be at least 1"));
        }
        Ok(Self {
            width,
            height,
            image_count,
            row_len,
            offset,
            image_time_ms,
            image_index: 0,
            since_last_ms: 0,
        })
    }

    /// A single still frame at the sheet origin.
    pub fn still(width: i32, height: i32) -> Result<Self, SpriteError> {
        Self::new(width, height, 1, 1, (0, 0), 0)
    }

    /// Frame width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of frames in the animation.
    pub fn image_count(&self) -> u32 {
        self.image_count
    }

    /// Index of the current frame.
    pub fn image_index(&self) -> u32 {
        self.image_index
    }

    /// Jumps to frame `index` (wrapping) and restarts its display time.
    pub fn set_image_index(&mut self, index: u32) {
        self.image_index = index % self.image_count;
        self.since_last_ms = 0;
    }

    /// Milliseconds each frame stays current.
    pub fn image_time_ms(&self) -> u32 {
        self.image_time_ms
    }

    /// Sets the per-frame display time; `0` freezes the animation.
    pub fn set_image_time_ms(&mut self, ms: u32) {
        self.image_time_ms = ms;
    }

    /// Frames per second, `0` when frozen.
    pub fn image_rate(&self) -> u32 {
        1000u32.checked_div(self.image_time_ms).unwrap_or(0)
    }

    /// Sets frames per second; `0` freezes the animation.
    pub fn set_image_rate(&mut self, fps: u32) {
        self.image_time_ms = 1000u32.checked_div(fps).unwrap_or(0);
    }

    /// Fraction of the animation already shown, in `[0, 1)`.
    #[allow(clippy::cast_precision_loss, reason = "frame counts are small")]
    pub fn completion(&self) -> f32 {
        self.image_index as f32 / self.image_count as f32
    }

    /// Jumps to the frame nearest `fraction` of the way through the animation.
    pub fn set_completion(&mut self, fraction: f32) {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss,
            reason = "saturating float to frame index; negatives and NaN map to 0"
        )]
        let index = (fraction * self.image_count as f32).round() as u32;
        self.set_image_index(index);
    }

    /// Region of the sheet holding the current frame.
    pub fn source_rect(&self) -> Rect {
        let column = i32::try_from(self.image_index % self.row_len).unwrap_or(i32::MAX);
        let row = i32::try_from(self.image_index / self.row_len).unwrap_or(i32::MAX);
        Rect::new(
            column.saturating_mul(self.width).saturating_add(self.offset.0),
            row.saturating_mul(self.height).saturating_add(self.offset.1),
            self.width,
            self.height,
        )
    }

    /// Accumulates `elapsed_ms` of display time and steps forward however
    /// many frames have fully elapsed.
    ///
    /// Leftover time carries into the next frame. Returns `true` if the
    /// current frame changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.image_count <= 1 || self.image_time_ms == 0 {
            return false;
        }
        self.since_last_ms = self.since_last_ms.saturating_add(elapsed_ms);
        let frames = self.since_last_ms / self.image_time_ms;
        if frames == 0 {
            return false;
        }
        self.since_last_ms -= frames * self.image_time_ms;
        let before = self.image_index;
        let step = frames % self.image_count;
        let room = self.image_count - self.image_index;
        self.image_index = if step >= room {
            step - room
        } else {
            self.image_index + step
        };
        self.image_index != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_layouts() {
        assert!(Sprite::new(0, 8, 1, 1, (0, 0), 0).is_err());
        assert!(Sprite::new(8, 8, 0, 1, (0, 0), 0).is_err());
        assert!(Sprite::new(8, 8, 4, 0, (0, 0), 0).is_err());
    }

    #[test]
    fn frozen_sprite_never_advances() {
        let mut s = Sprite::new(8, 8, 4, 4, (0, 0), 0).unwrap();
        assert!(!s.advance(10_000));
        assert_eq!(s.image_index(), 0);
        assert_eq!(s.image_rate(), 0);
    }
}
