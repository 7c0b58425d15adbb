// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Property tests: tiling, acceptance and query/linear-scan agreement.

use kengine_core::{Collidable, Rect};
use kengine_geom::{build_index_with, QuadTree, QuadTreeConfig};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Mover {
    id: usize,
    bb: Rect,
    dx: i32,
    dy: i32,
}

impl Collidable for Mover {
    fn bounding_box(&self) -> Rect {
        self.bb
    }

    fn next_bounding_box(&self) -> Rect {
        self.bb.offset(self.dx, self.dy)
    }

    fn is_moving(&self) -> bool {
        self.dx != 0 || self.dy != 0
    }
}

const WORLD: Rect = Rect::new(0, 0, 257, 191);

fn movers(max: usize) -> impl Strategy<Value = Vec<Mover>> {
    prop::collection::vec(
        (-20i32..270, -20i32..200, 0i32..40, 0i32..40, -8i32..8, -8i32..8),
        0..max,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(id, (x, y, w, h, dx, dy))| Mover {
                id,
                bb: Rect::new(x, y, w, h),
                dx,
                dy,
            })
            .collect()
    })
}

fn query_rect() -> impl Strategy<Value = Rect> {
    (-30i32..280, -30i32..210, 0i32..200, 0i32..200).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn small_config() -> QuadTreeConfig {
    QuadTreeConfig {
        max_items: 4,
        min_split_width: 16,
        min_split_height: 16,
        ..QuadTreeConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn split_children_tile_their_parent(items in movers(120)) {
        let mut tree = QuadTree::with_config(WORLD, small_config()).unwrap();
        for m in &items {
            tree.insert(m);
        }
        for (_, node) in tree.nodes() {
            let Some(children) = node.children() else { continue };
            let rects: Vec<Rect> = children.iter().map(|&c| tree.node(c).unwrap().bounds()).collect();
            let area: i64 = rects.iter().map(Rect::area).sum();
            prop_assert_eq!(area, node.bounds().area());
            for (i, a) in rects.iter().enumerate() {
                prop_assert!(node.bounds().contains(a));
                for b in rects.iter().skip(i + 1) {
                    prop_assert!(a.intersection(b).is_none());
                }
            }
        }
    }

    #[test]
    fn stored_items_respect_acceptance(items in movers(120)) {
        let mut tree = QuadTree::with_config(WORLD, small_config()).unwrap();
        for m in &items {
            tree.insert(m);
        }
        for (_, node) in tree.nodes() {
            for m in node.items() {
                if !node.is_root() {
                    prop_assert!(node.bounds().contains(&m.bb), "{} outside {}", m.bb, node.bounds());
                }
                if let Some(children) = node.children() {
                    for c in children {
                        prop_assert!(
                            !tree.node(c).unwrap().bounds().contains(&m.bb),
                            "item {} should have been pushed down", m.id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn query_matches_linear_scan(items in movers(150), test in query_rect(), predictive in any::<bool>()) {
        let index = build_index_with(WORLD, small_config(), &items).unwrap();

        let mut got: Vec<usize> = index.query_collisions(&test, predictive).iter().map(|m| m.id).collect();
        let before = got.len();
        got.sort_unstable();
        got.dedup();
        prop_assert_eq!(before, got.len(), "duplicate hits");

        let mut expected: Vec<usize> = items
            .iter()
            .filter(|m| WORLD.intersects(&m.bb))
            .filter(|m| {
                let b = if predictive { m.next_bounding_box() } else { m.bb };
                b.intersects(&test)
            })
            .map(|m| m.id)
            .collect();
        expected.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn every_overlapping_item_is_indexed(items in movers(150)) {
        let index = build_index_with(WORLD, small_config(), &items).unwrap();
        let inside = items.iter().filter(|m| WORLD.intersects(&m.bb)).count();
        prop_assert_eq!(index.len(), inside);
        prop_assert_eq!(index.rejected(), items.len() - inside);
    }

    #[test]
    fn candidate_pairs_match_brute_force(items in movers(60)) {
        let index = build_index_with(WORLD, small_config(), &items).unwrap();
        let indexed = index.items();
        let mut expected = Vec::new();
        for i in 0..indexed.len() {
            for j in (i + 1)..indexed.len() {
                if indexed[i].bb.intersects(&indexed[j].bb) {
                    expected.push((i, j));
                }
            }
        }
        prop_assert_eq!(index.candidate_pairs(false), expected);
    }
}
