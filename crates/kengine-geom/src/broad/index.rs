// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeSet;

use kengine_core::{Collidable, Rect};
use tracing::{debug, trace};

use crate::broad::quad_tree::QuadTree;
use crate::config::QuadTreeConfig;
use crate::error::QuadTreeError;

/// Borrowed item tagged with its insertion position.
#[derive(Debug)]
struct Indexed<'a, T: ?Sized> {
    slot: usize,
    item: &'a T,
}

impl<T: ?Sized> Clone for Indexed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Indexed<'_, T> {}

impl<T: Collidable + ?Sized> Collidable for Indexed<'_, T> {
    fn bounding_box(&self) -> Rect {
        self.item.bounding_box()
    }

    fn next_bounding_box(&self) -> Rect {
        self.item.next_bounding_box()
    }

    fn is_moving(&self) -> bool {
        self.item.is_moving()
    }
}

/// Spatial index over one frame's worth of collidables.
///
/// Built once per tick from the live entity set and dropped before the
/// entities change; the borrow on `'a` enforces that discipline.
#[derive(Debug)]
pub struct SpatialIndex<'a, T: ?Sized> {
    tree: QuadTree<Indexed<'a, T>>,
    items: Vec<&'a T>,
    rejected: usize,
}

/// Builds an index over `items` with default tuning.
///
/// Items whose boxes miss `bounds` entirely are counted in
/// [`SpatialIndex::rejected`] and never returned by queries.
pub fn build_index<'a, T, I>(bounds: Rect, items: I) -> Result<SpatialIndex<'a, T>, QuadTreeError>
where
    T: Collidable + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    build_index_with(bounds, QuadTreeConfig::default(), items)
}

/// Builds an index over `items` using `config`.
pub fn build_index_with<'a, T, I>(
    bounds: Rect,
    config: QuadTreeConfig,
    items: I,
) -> Result<SpatialIndex<'a, T>, QuadTreeError>
where
    T: Collidable + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut index = SpatialIndex {
        tree: QuadTree::with_config(bounds, config)?,
        items: Vec::new(),
        rejected: 0,
    };
    for item in items {
        index.insert(item);
    }
    debug!(
        items = index.items.len(),
        rejected = index.rejected,
        nodes = index.tree.node_count(),
        depth = index.tree.depth(),
        "spatial index built"
    );
    Ok(index)
}

impl<'a, T> SpatialIndex<'a, T>
where
    T: Collidable + ?Sized,
{
    /// Adds one more item. Returns `false` if it lies outside the root.
    pub fn insert(&mut self, item: &'a T) -> bool {
        let slot = self.items.len();
        if self.tree.insert(Indexed { slot, item }) {
            self.items.push(item);
            true
        } else {
            self.rejected += 1;
            false
        }
    }

    /// Items whose current (or, with `predictive`, next-tick) box intersects `test`.
    ///
    /// Each indexed item appears at most once.
    pub fn query_collisions(&self, test: &Rect, predictive: bool) -> Vec<&'a T> {
        let hits = self.tree.query(test, predictive);
        trace!(%test, predictive, hits = hits.len(), "spatial query");
        hits.into_iter().map(|h| h.item).collect()
    }

    /// Canonical candidate pairs among indexed items.
    ///
    /// A pair `(a, b)` refers to positions in [`SpatialIndex::items`] with
    /// `a < b`; the list is sorted ascending and free of duplicates. Each
    /// item's box (current or predicted) is used as a tree query, so the work
    /// scales with local density rather than the square of the population.
    pub fn candidate_pairs(&self, predictive: bool) -> Vec<(usize, usize)> {
        let mut pairs = BTreeSet::new();
        let mut hits = Vec::new();
        for (slot, item) in self.items.iter().enumerate() {
            let query_box = if predictive {
                item.next_bounding_box()
            } else {
                item.bounding_box()
            };
            hits.clear();
            self.tree.query_into(&query_box, predictive, &mut hits);
            for hit in &hits {
                if hit.slot != slot {
                    pairs.insert((slot.min(hit.slot), slot.max(hit.slot)));
                }
            }
        }
        pairs.into_iter().collect()
    }

    /// Indexed items in insertion order (rejected items excluded).
    #[must_use]
    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items the root rejected.
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// Region covered by the index.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.tree.bounds()
    }

    /// Number of quad-tree nodes created so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    /// Depth of the deepest quad-tree node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Visits every quad-tree node's bounds with its depth (debug overlay hook).
    pub fn visit_bounds<F>(&self, f: F)
    where
        F: FnMut(Rect, usize),
    {
        self.tree.visit_bounds(f);
    }
}
