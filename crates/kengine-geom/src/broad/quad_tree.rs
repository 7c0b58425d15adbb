// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kengine_core::{Collidable, Rect};
use tracing::debug;

use crate::config::QuadTreeConfig;
use crate::error::QuadTreeError;

/// Handle of a node inside a [`QuadTree`] arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: Self = Self(0);

    /// Position of the node in the arena.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Child slot of a split node. Children are always visited in this order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    /// Top-left.
    NorthWest = 0,
    /// Top-right.
    NorthEast = 1,
    /// Bottom-left.
    SouthWest = 2,
    /// Bottom-right.
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in traversal order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];
}

/// One quadrant of the partitioned region.
///
/// Invariants:
/// - `bounds` never changes after construction.
/// - `children` is either absent or exactly four nodes tiling `bounds`.
/// - Before a split every local item fits inside `bounds` (non-root nodes);
///   after a split the local items are those no child wholly contains.
/// - `reach` covers `bounds` plus the predicted box of every item accepted
///   into the subtree; predictive queries prune on it.
#[derive(Debug, Clone)]
pub struct Node<H> {
    bounds: Rect,
    reach: Rect,
    parent: Option<NodeId>,
    children: Option<[NodeId; 4]>,
    items: Vec<H>,
    item_count: usize,
    can_split: bool,
}

impl<H> Node<H> {
    fn new(bounds: Rect, parent: Option<NodeId>, config: &QuadTreeConfig) -> Self {
        Self {
            bounds,
            reach: bounds,
            parent,
            children: None,
            items: Vec::new(),
            item_count: 0,
            can_split: bounds.width() >= config.min_split_width
                && bounds.height() >= config.min_split_height,
        }
    }

    /// Region covered by this node.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Region swept by the subtree's items over the next tick.
    ///
    /// Always contains `bounds`. Items near a node edge may be predicted to
    /// leave it, so predictive queries test this instead of `bounds`.
    #[must_use]
    pub const fn reach(&self) -> Rect {
        self.reach
    }

    /// Enclosing node, `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns `true` for the tree root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Child handles in NW, NE, SW, SE order, once split.
    #[must_use]
    pub const fn children(&self) -> Option<[NodeId; 4]> {
        self.children
    }

    /// Child handle for one quadrant, once split.
    #[must_use]
    pub fn child(&self, quadrant: Quadrant) -> Option<NodeId> {
        self.children.map(|c| c[quadrant as usize])
    }

    /// Items stored directly at this node.
    #[must_use]
    pub fn items(&self) -> &[H] {
        &self.items
    }

    /// Number of items ever accepted by this node, including ones later
    /// delegated to children. Drives the split trigger only.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether the node is large enough to split.
    #[must_use]
    pub const fn can_split(&self) -> bool {
        self.can_split
    }

    /// Whether the node has split. Splits are never undone.
    #[must_use]
    pub const fn has_split(&self) -> bool {
        self.children.is_some()
    }

    fn accepts(&self, item_box: &Rect) -> bool {
        if self.is_root() {
            self.bounds.intersects(item_box)
        } else {
            self.bounds.contains(item_box)
        }
    }
}

/// Adaptive quad-tree over borrowed collidables.
///
/// `H` is the stored handle: typically `&'a T` for some `T: Collidable`, so
/// the tree borrows the scene's entities for one frame. Handles are copied
/// into nodes, never owned.
///
/// Inserting the same handle twice stores it twice; callers must not do so.
#[derive(Debug, Clone)]
pub struct QuadTree<H> {
    nodes: Vec<Node<H>>,
    config: QuadTreeConfig,
}

impl<H> QuadTree<H>
where
    H: Collidable + Copy,
{
    /// Creates an empty tree covering `bounds` with default tuning.
    pub fn new(bounds: Rect) -> Result<Self, QuadTreeError> {
        Self::with_config(bounds, QuadTreeConfig::default())
    }

    /// Creates an empty tree covering `bounds`.
    pub fn with_config(bounds: Rect, config: QuadTreeConfig) -> Result<Self, QuadTreeError> {
        if bounds.is_empty() {
            return Err(QuadTreeError::InvalidBounds(bounds));
        }
        config.validate()?;
        Ok(Self {
            nodes: vec![Node::new(bounds, None, &config)],
            config,
        })
    }

    /// Tuning in effect for this tree.
    #[must_use]
    pub const fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Region covered by the root.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.root().bounds
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &Node<H> {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Looks up a node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<H>> {
        self.nodes.get(id.0)
    }

    /// All nodes with their handles, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<H>)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of items stored anywhere in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.iter().map(|n| n.items.len()).sum()
    }

    /// Returns `true` if no item is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|n| n.items.is_empty())
    }

    /// Depth of the deepest node; a lone root has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut max = 0;
        self.visit_bounds(|_, depth| max = max.max(depth));
        max
    }

    /// Inserts `item`, returning `true` if it now lives somewhere in the tree.
    ///
    /// `false` means the item's box does not overlap the root at all.
    pub fn insert(&mut self, item: H) -> bool {
        self.insert_at(NodeId::ROOT, item, &item.bounding_box())
    }

    fn insert_at(&mut self, id: NodeId, item: H, item_box: &Rect) -> bool {
        let node = &mut self.nodes[id.0];
        if !node.accepts(item_box) {
            return false;
        }
        node.item_count += 1;
        node.reach = node.reach.union(&item.next_bounding_box());
        if !node.has_split() && node.can_split && node.item_count > self.config.max_items {
            self.split(id);
        }
        if let Some(children) = self.nodes[id.0].children {
            for child in children {
                if self.insert_at(child, item, item_box) {
                    return true;
                }
            }
        }
        self.nodes[id.0].items.push(item);
        true
    }

    /// Splits node `id` into four children and pushes its items down.
    ///
    /// No-op when the node has already split or is too small to split.
    /// Items no child wholly contains stay at `id`.
    pub fn split(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        if node.has_split() || !node.can_split {
            return;
        }
        let quadrants = node.bounds.quadrants();
        debug!(node = id.0, bounds = %node.bounds, items = node.items.len(), "quad-tree split");

        let first = self.nodes.len();
        for q in quadrants {
            self.nodes.push(Node::new(q, Some(id), &self.config));
        }
        let children = [
            NodeId(first),
            NodeId(first + 1),
            NodeId(first + 2),
            NodeId(first + 3),
        ];
        self.nodes[id.0].children = Some(children);

        let pending = std::mem::take(&mut self.nodes[id.0].items);
        let mut kept = Vec::new();
        for item in pending {
            let item_box = item.bounding_box();
            let placed = children
                .iter()
                .any(|&child| self.insert_at(child, item, &item_box));
            if !placed {
                kept.push(item);
            }
        }
        self.nodes[id.0].items = kept;
    }

    /// Returns every stored item whose box intersects `test`.
    ///
    /// With `predictive` set, items are tested by their next-tick box instead
    /// of their current one. Subtrees whose bounds (or, for predictive
    /// queries, reach) miss `test` are skipped; the root itself is always
    /// examined so that items straddling its edge are still found.
    pub fn query(&self, test: &Rect, predictive: bool) -> Vec<H> {
        let mut out = Vec::new();
        self.query_into(test, predictive, &mut out);
        out
    }

    /// Like [`QuadTree::query`] but appends into a caller-provided buffer.
    pub fn query_into(&self, test: &Rect, predictive: bool, out: &mut Vec<H>) {
        self.collect(NodeId::ROOT, test, predictive, out);
    }

    fn collect(&self, id: NodeId, test: &Rect, predictive: bool, out: &mut Vec<H>) {
        let node = &self.nodes[id.0];
        let extent = if predictive { node.reach } else { node.bounds };
        if !node.is_root() && !extent.intersects(test) {
            return;
        }
        for item in &node.items {
            let item_box = if predictive {
                item.next_bounding_box()
            } else {
                item.bounding_box()
            };
            if item_box.intersects(test) {
                out.push(*item);
            }
        }
        if let Some(children) = node.children {
            for child in children {
                self.collect(child, test, predictive, out);
            }
        }
    }

    /// Visits every node's bounds with its depth, pre-order NW, NE, SW, SE.
    ///
    /// This is the hook for debug overlays; the tree itself draws nothing.
    pub fn visit_bounds<F>(&self, mut f: F)
    where
        F: FnMut(Rect, usize),
    {
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0];
            f(node.bounds, depth);
            if let Some(children) = node.children {
                for child in children.into_iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }
    }
}
