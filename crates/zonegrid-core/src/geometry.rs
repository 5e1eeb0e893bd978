#![forbid(unsafe_code)]

//! Normalized geometry primitives.
//!
//! All coordinates live in the integer range `[0, multiplier]` on both axes,
//! independent of the pixel size of the work area they describe. Zones are
//! half-open: a zone covers `[left, right) x [top, bottom)`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default normalization scale for both axes.
pub const DEFAULT_MULTIPLIER: u32 = 10_000;

/// Orientation of a boundary line or split cut.
///
/// A `Horizontal` line runs left to right at a fixed `y`; a `Vertical` line
/// runs top to bottom at a fixed `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// An axis-aligned rectangle in normalized coordinates.
///
/// Field order matches the persisted layout format: `top, left, bottom, right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Zone {
    /// Top edge (inclusive).
    pub top: u32,
    /// Left edge (inclusive).
    pub left: u32,
    /// Bottom edge (exclusive).
    pub bottom: u32,
    /// Right edge (exclusive).
    pub right: u32,
}

impl Zone {
    /// Create a zone from its four edges.
    #[inline]
    #[must_use]
    pub const fn new(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The zone covering the whole normalized work area.
    #[inline]
    #[must_use]
    pub const fn full(multiplier: u32) -> Self {
        Self::new(0, 0, multiplier, multiplier)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Area in normalized units squared.
    #[inline]
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if the zone has zero area.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Range crossed by a line of the given orientation.
    ///
    /// A horizontal line cuts through `[top, bottom]`, a vertical one through
    /// `[left, right]`.
    #[inline]
    #[must_use]
    pub const fn span(&self, orientation: Orientation) -> (u32, u32) {
        match orientation {
            Orientation::Horizontal => (self.top, self.bottom),
            Orientation::Vertical => (self.left, self.right),
        }
    }

    /// Range covered along a line of the given orientation.
    #[inline]
    #[must_use]
    pub const fn extent(&self, orientation: Orientation) -> (u32, u32) {
        self.span(orientation.perpendicular())
    }

    /// Size measured across a line of the given orientation.
    #[inline]
    #[must_use]
    pub const fn dimension(&self, orientation: Orientation) -> u32 {
        let (start, end) = self.span(orientation);
        end.saturating_sub(start)
    }

    /// Check if a point is inside the zone.
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Check that every edge lies within `[0, multiplier]` and the area is positive.
    #[inline]
    #[must_use]
    pub const fn fits_within(&self, multiplier: u32) -> bool {
        !self.is_empty() && self.right <= multiplier && self.bottom <= multiplier
    }

    /// Intersection with another zone, or `None` when the overlap has no area.
    ///
    /// Zones that only share an edge do not intersect.
    #[must_use]
    pub fn intersection_opt(&self, other: &Zone) -> Option<Zone> {
        let overlap = Zone::new(
            self.top.max(other.top),
            self.left.max(other.left),
            self.bottom.min(other.bottom),
            self.right.min(other.right),
        );
        (!overlap.is_empty()).then_some(overlap)
    }

    /// Whether the interiors of the two zones overlap.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Zone) -> bool {
        self.intersection_opt(other).is_some()
    }

    /// Whether `other` lies entirely inside this zone.
    #[inline]
    #[must_use]
    pub const fn encloses(&self, other: &Zone) -> bool {
        other.top >= self.top
            && other.left >= self.left
            && other.bottom <= self.bottom
            && other.right <= self.right
    }

    /// Smallest zone containing both.
    #[must_use]
    pub fn union(&self, other: &Zone) -> Zone {
        Zone::new(
            self.top.min(other.top),
            self.left.min(other.left),
            self.bottom.max(other.bottom),
            self.right.max(other.right),
        )
    }

    /// Bounding rectangle of a sequence of zones, or `None` for an empty sequence.
    pub fn bounding<I>(zones: I) -> Option<Zone>
    where
        I: IntoIterator<Item = Zone>,
    {
        zones.into_iter().reduce(|acc, zone| acc.union(&zone))
    }

    /// Cut the zone at `offset` with a line of the given orientation.
    ///
    /// Returns `(near, far)` where `near` keeps the top (horizontal cut) or
    /// left (vertical cut) edge. `None` unless `offset` is strictly interior.
    #[must_use]
    pub fn split_at(&self, offset: u32, orientation: Orientation) -> Option<(Zone, Zone)> {
        let (start, end) = self.span(orientation);
        if offset <= start || offset >= end {
            return None;
        }
        let mut near = *self;
        let mut far = *self;
        match orientation {
            Orientation::Horizontal => {
                near.bottom = offset;
                far.top = offset;
            }
            Orientation::Vertical => {
                near.right = offset;
                far.left = offset;
            }
        }
        Some((near, far))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.top, self.left, self.bottom, self.right
        )
    }
}
