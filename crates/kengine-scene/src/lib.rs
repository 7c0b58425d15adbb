// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene layer for KEngine.
//!
//! Owns entities, drives the per-tick update loop and answers collision
//! queries by rebuilding a [`kengine_geom::SpatialIndex`] over the live
//! entity set whenever one is needed. Entity types are registered explicitly
//! by name in an [`EntityRegistry`]; nothing is discovered at runtime.
//!
//! Rendering, audio and asset loading live outside this crate. Sprites here
//! only track which animation frame is current.

mod entity;
mod error;
pub mod input;
mod registry;
mod scene;
pub mod sprite;

pub use entity::{Behavior, BorderPolicy, Entity, EntityId, TickContext};
pub use error::SceneError;
pub use input::{Input, InputFrame, InputState, Key, MouseButton};
pub use registry::{EntityFactory, EntityRegistry};
pub use scene::{Scene, SceneSettings};
pub use sprite::{Sprite, SpriteError};
