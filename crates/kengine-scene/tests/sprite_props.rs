// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Sprite timing does not depend on how elapsed time is chunked.

use kengine_scene::Sprite;
use proptest::prelude::*;

proptest! {
    #[test]
    fn chunked_advance_matches_single_advance(
        count in 1u32..12,
        row_len in 1u32..6,
        image_time in 1u32..200,
        chunks in prop::collection::vec(0u32..500, 0..40),
    ) {
        let mut stepped = Sprite::new(8, 8, count, row_len, (0, 0), image_time).unwrap();
        let mut once = stepped.clone();
        for ms in &chunks {
            stepped.advance(*ms);
        }
        once.advance(chunks.iter().sum());
        prop_assert_eq!(stepped.image_index(), once.image_index());
        prop_assert_eq!(stepped.source_rect(), once.source_rect());
        prop_assert!(stepped.image_index() < count);
    }
}
