// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Broad-phase spatial indexing for KEngine.

This crate provides:
- An adaptive, lazily-splitting quad-tree over [`kengine_core::Collidable`]
  items (`QuadTree`).
- A per-frame `SpatialIndex` facade with current and predictive range
  queries plus canonical candidate pairs.

Design notes:
- Arena storage: nodes live in a `Vec` and refer to each other by `NodeId`;
  the parent link is a plain index, never an ownership edge.
- Items are borrowed handles; the tree cannot outlive the frame that built it.
- Deterministic: child traversal is always NW, NE, SW, SE.
- Splits are one-way. Rebuild the tree each tick instead of shrinking it.
"]

/// Quad-tree and spatial index.
pub mod broad;
mod config;
mod error;

pub use broad::index::{build_index, build_index_with, SpatialIndex};
pub use broad::quad_tree::{Node, NodeId, QuadTree, Quadrant};
pub use config::QuadTreeConfig;
pub use error::QuadTreeError;
