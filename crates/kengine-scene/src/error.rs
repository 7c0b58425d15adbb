// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kengine_geom::QuadTreeError;
use thiserror::Error;

/// Errors emitted by the scene layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// An entity type with this name is already registered.
    #[error("entity type already registered: {0}")]
    DuplicateEntityType(String),
    /// No entity type with this name has been registered.
    #[error("entity type not registered: {0}")]
    UnknownEntityType(String),
    /// The scene bounds or index tuning are invalid.
    #[error(transparent)]
    Index(#[from] QuadTreeError),
}
