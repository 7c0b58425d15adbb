// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kengine_core::Rect;
use thiserror::Error;

/// Errors emitted while constructing a quad-tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuadTreeError {
    /// The root region has zero width or height.
    #[error("invalid root bounds {0}: width and height must be positive")]
    InvalidBounds(Rect),
    /// A configuration value is out of range.
    #[error("invalid quad-tree config: {0}")]
    InvalidConfig(&'static str),
}
