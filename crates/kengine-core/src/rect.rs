// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Axis-aligned integer rectangle in scene pixels.
///
/// Invariants:
/// - `width >= 0` and `height >= 0`; [`Rect::new`] clamps negative extents to
///   zero instead of storing an inverted box.
/// - `right = x + width` and `bottom = y + height` are exclusive edges.
///
/// Overlap semantics:
/// - [`Rect::intersects`] is strict: boxes that only touch along an edge do
///   not intersect, while a zero-sized box strictly inside another does.
/// - [`Rect::contains`] is inclusive: a box contains itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extent.
    ///
    /// Negative `width`/`height` are clamped to zero.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Creates a rectangle from its edges; inverted edges yield an empty box.
    ///
    /// Extents wider than `i32::MAX` saturate.
    pub const fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    /// X coordinate of the top-left corner.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Y coordinate of the top-left corner.
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Horizontal extent.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Vertical extent.
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Left edge (inclusive).
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (inclusive).
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive), saturating at `i32::MAX`.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive), saturating at `i32::MAX`.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns `true` when the rectangle has zero area.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Area in square pixels.
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Returns `true` if the two rectangles strictly overlap.
    pub const fn intersects(&self, other: &Self) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// Returns `true` if `other` lies entirely inside this rectangle.
    pub const fn contains(&self, other: &Self) -> bool {
        self.left() <= other.left()
            && other.right() <= self.right()
            && self.top() <= other.top()
            && other.bottom() <= self.bottom()
    }

    /// Returns this rectangle translated by `(dx, dy)`.
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            width: self.width,
            height: self.height,
        }
    }

    /// Overlapping region, or `None` when the rectangles do not intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self::from_edges(
            self.left().max(other.left()),
            self.top().max(other.top()),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        ))
    }

    /// Smallest rectangle containing both inputs.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_edges(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Splits the rectangle into quadrants `[NW, NE, SW, SE]`.
    ///
    /// West/north halves take `extent / 2`; the east/south halves take the
    /// remainder, so odd extents never lose or duplicate a pixel.
    pub const fn quadrants(&self) -> [Self; 4] {
        let west = self.width / 2;
        let north = self.height / 2;
        let east = self.width - west;
        let south = self.height - north;
        let mid_x = self.x.saturating_add(west);
        let mid_y = self.y.saturating_add(north);
        [
            Self::new(self.x, self.y, west, north),
            Self::new(mid_x, self.y, east, north),
            Self::new(self.x, mid_y, west, south),
            Self::new(mid_x, mid_y, east, south),
        ]
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}
