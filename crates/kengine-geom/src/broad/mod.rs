// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Broad-phase structures.
//!
//! Query contract (applies to everything in this module):
//! - Overlap is strict (`Rect::intersects`): touching edges do not collide.
//! - Node acceptance: the root accepts anything that intersects its bounds;
//!   every other node accepts only boxes it wholly contains.
//! - Each stored item lives in exactly one node, so query results never
//!   contain duplicates.
//! - Traversal order is NW, NE, SW, SE, pre-order.

#[doc = "Per-frame index facade: build, query and pair candidates."]
pub mod index;
#[doc = "Arena quad-tree with lazy one-way splits."]
pub mod quad_tree;
