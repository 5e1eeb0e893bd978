//! Shared-boundary derivation.
//!
//! A [`Resizer`] is one interior boundary line of the tiling together with the
//! zones on each side of it. Resizers are a pure function of the zone list and
//! are rebuilt from scratch after every mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zonegrid_core::{Orientation, Zone};

/// A movable boundary line and the zones it separates.
///
/// For a horizontal line at `y`, the positive side holds zones whose `top` is
/// `y` (interior below the line) and the negative side zones whose `bottom`
/// is `y`. Vertical lines use `left`/`right` the same way. Both lists are
/// ordered by position along the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resizer {
    pub orientation: Orientation,
    /// Coordinate of the line: `y` for horizontal, `x` for vertical.
    pub position: u32,
    pub positive_side_indices: Vec<usize>,
    pub negative_side_indices: Vec<usize>,
}

impl Resizer {
    /// Every zone index touching the line, positive side first.
    pub fn zone_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.positive_side_indices
            .iter()
            .chain(&self.negative_side_indices)
            .copied()
    }

    /// First contiguous segment of the line, where the drag handle goes.
    ///
    /// A line interrupted by a zone crossing it has several segments; the
    /// gaps are not draggable, so only the earliest one is returned.
    /// Returns `None` if any index is out of range for `zones`.
    #[must_use]
    pub fn line(&self, zones: &[Zone]) -> Option<ResizerLine> {
        self.segments(zones)?.into_iter().next()
    }

    /// Every contiguous segment of the line, ordered along it.
    ///
    /// Returns `None` if any index is out of range for `zones`.
    #[must_use]
    pub fn segments(&self, zones: &[Zone]) -> Option<Vec<ResizerLine>> {
        let mut extents = self
            .zone_indices()
            .map(|index| zones.get(index).map(|zone| zone.extent(self.orientation)))
            .collect::<Option<Vec<_>>>()?;
        extents.sort_unstable();

        let mut segments: Vec<ResizerLine> = Vec::new();
        for (start, end) in extents {
            match segments.last_mut() {
                Some(last) if start <= last.end => last.end = last.end.max(end),
                _ => segments.push(ResizerLine {
                    orientation: self.orientation,
                    position: self.position,
                    start,
                    end,
                }),
            }
        }
        Some(segments)
    }
}

/// One contiguous stretch of a resizer, for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizerLine {
    pub orientation: Orientation,
    pub position: u32,
    /// First covered coordinate along the line.
    pub start: u32,
    /// One past the last covered coordinate along the line.
    pub end: u32,
}

impl ResizerLine {
    /// Midpoint along the line, where a drag handle is usually drawn.
    #[must_use]
    pub const fn midpoint(&self) -> u32 {
        self.start + (self.end - self.start) / 2
    }
}

#[derive(Default)]
struct LineSides {
    positive: Vec<usize>,
    negative: Vec<usize>,
}

/// Derive every resizer of a tiling.
///
/// Lines on the work-area border are skipped. Output order is horizontal
/// lines by ascending `y`, then vertical lines by ascending `x`.
#[must_use]
pub fn derive_resizers(zones: &[Zone], multiplier: u32) -> Vec<Resizer> {
    let mut lines: BTreeMap<(Orientation, u32), LineSides> = BTreeMap::new();
    for (index, zone) in zones.iter().enumerate() {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let (start, end) = zone.span(orientation);
            if start > 0 {
                lines
                    .entry((orientation, start))
                    .or_default()
                    .positive
                    .push(index);
            }
            if end < multiplier {
                lines
                    .entry((orientation, end))
                    .or_default()
                    .negative
                    .push(index);
            }
        }
    }

    lines
        .into_iter()
        .filter(|(_, sides)| !sides.positive.is_empty() && !sides.negative.is_empty())
        .map(|((orientation, position), mut sides)| {
            let along = |index: &usize| (zones[*index].extent(orientation).0, *index);
            sides.positive.sort_unstable_by_key(along);
            sides.negative.sort_unstable_by_key(along);
            Resizer {
                orientation,
                position,
                positive_side_indices: sides.positive,
                negative_side_indices: sides.negative,
            }
        })
        .collect()
}
