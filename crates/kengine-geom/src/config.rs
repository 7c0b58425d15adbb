// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::QuadTreeError;

/// Tuning knobs for [`crate::QuadTree`].
///
/// - `max_items`: a node splits once more than this many items have been
///   accepted along its subtree path.
/// - `min_items`: reserved threshold for merging children back. Trees never
///   merge; the value is carried for configuration compatibility only.
/// - `min_split_width` / `min_split_height`: nodes smaller than this in either
///   dimension are leaves forever.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadTreeConfig {
    /// Split threshold.
    pub max_items: usize,
    /// Advisory merge threshold (unused).
    pub min_items: usize,
    /// Minimum node width eligible for splitting.
    pub min_split_width: i32,
    /// Minimum node height eligible for splitting.
    pub min_split_height: i32,
}

impl QuadTreeConfig {
    /// Default split threshold.
    pub const DEFAULT_MAX_ITEMS: usize = 20;
    /// Default (advisory) merge threshold.
    pub const DEFAULT_MIN_ITEMS: usize = 5;
    /// Default minimum splittable width and height.
    pub const DEFAULT_MIN_SPLIT: i32 = 32;

    /// Checks that every field is in range.
    pub fn validate(&self) -> Result<(), QuadTreeError> {
        if self.max_items == 0 {
            return Err(QuadTreeError::InvalidConfig("max_items must be at least 1"));
        }
        if self.min_split_width <= 0 || self.min_split_height <= 0 {
            return Err(QuadTreeError::InvalidConfig(
                "minimum split dimensions must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_items: Self::DEFAULT_MAX_ITEMS,
            min_items: Self::DEFAULT_MIN_ITEMS,
            min_split_width: Self::DEFAULT_MIN_SPLIT,
            min_split_height: Self::DEFAULT_MIN_SPLIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validates() {
        assert_eq!(QuadTreeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_max_items_rejected() {
        let cfg = QuadTreeConfig {
            max_items: 0,
            ..QuadTreeConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(QuadTreeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn non_positive_split_size_rejected() {
        let cfg = QuadTreeConfig {
            min_split_height: 0,
            ..QuadTreeConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
