//! Zone grid editing model.
//!
//! [`GridData`] owns an ordered zone list that always tiles the normalized
//! work area exactly, plus the resizers derived from it. Zone and resizer
//! indices are positional and stay valid only until the next mutation.
//!
//! Every command has a pure predicate (`can_split`, `can_drag`) and a
//! mutating form that re-checks the same precondition. A failed command
//! returns before touching the store, so callers only ever observe complete
//! tilings.
//!
//! ```
//! use zonegrid_core::{GridConfig, Orientation, Zone};
//! use zonegrid_layout::GridData;
//!
//! let mut grid = GridData::new(GridConfig::default()).unwrap();
//! let right = grid.split(0, 5_000, Orientation::Vertical).unwrap();
//! assert_eq!(grid.zones()[right], Zone::new(0, 5_000, 10_000, 10_000));
//! assert_eq!(grid.resizers().len(), 1);
//!
//! let closure = grid.merge_closure_indices([0]).unwrap();
//! assert_eq!(closure.len(), 1);
//! grid.do_merge([0, right]).unwrap();
//! assert_eq!(grid.zones(), &[Zone::full(10_000)]);
//! ```

use std::collections::BTreeSet;

use zonegrid_core::{GridConfig, Orientation, Zone};

use crate::error::{ConstraintViolation, GridError, IndexKind};
use crate::model::{GridLayoutModel, even_sizes};
use crate::resizer::{Resizer, ResizerLine, derive_resizers};
use crate::snapshot::GridLayoutSnapshot;
use crate::tiling::validate_tiling;

const LOG_TARGET: &str = "zonegrid.grid";

/// Result of a [`GridData::drag`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The boundary now sits at `position`.
    Applied { position: u32 },
    /// The delta would shrink a zone below the minimum size; nothing changed.
    Rejected(ConstraintViolation),
}

impl DragOutcome {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Zone partition of the work area and its derived resizers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridData {
    multiplier: u32,
    min_size: u32,
    zones: Vec<Zone>,
    resizers: Vec<Resizer>,
}

impl GridData {
    // =====================================================================
    // Construction
    // =====================================================================

    /// One zone covering the whole work area.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self::from_valid_zones(
            config,
            vec![Zone::full(config.multiplier)],
        ))
    }

    /// Evenly spaced `rows x columns` grid, zones numbered row-major.
    pub fn with_rows_columns(
        rows: usize,
        columns: usize,
        config: GridConfig,
    ) -> Result<Self, GridError> {
        config.validate()?;
        let max_cells = (config.multiplier / config.min_size) as usize;
        if rows > max_cells || columns > max_cells {
            return Err(GridError::InvalidDimensions {
                rows,
                columns,
                min_size: config.min_size,
            });
        }
        let row_sizes = even_sizes(rows, config.multiplier);
        let column_sizes = even_sizes(columns, config.multiplier);
        let too_small = |sizes: &[u32]| sizes.iter().any(|&size| size < config.min_size);
        if rows == 0
            || columns == 0
            || too_small(row_sizes.as_slice())
            || too_small(column_sizes.as_slice())
        {
            return Err(GridError::InvalidDimensions {
                rows,
                columns,
                min_size: config.min_size,
            });
        }
        let zones = GridLayoutModel::uniform(rows, columns, config.multiplier)
            .to_zones(config.multiplier)?;
        Ok(Self::from_valid_zones(config, zones))
    }

    /// Adopt a previously persisted zone list.
    ///
    /// The zones must tile the work area and respect the minimum size.
    pub fn from_zones(zones: Vec<Zone>, config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        validate_tiling(config.multiplier, &zones)?;
        if let Some(violation) = undersized_zone(&zones, config.min_size) {
            return Err(violation.into());
        }
        Ok(Self::from_valid_zones(config, zones))
    }

    /// Build from a legacy row/column model; zone ids become indices.
    pub fn from_grid_model(model: &GridLayoutModel, config: GridConfig) -> Result<Self, GridError> {
        let zones = model.to_zones(config.multiplier)?;
        Self::from_zones(zones, config)
    }

    /// Restore a persisted snapshot; the snapshot's multiplier wins.
    pub fn from_snapshot(snapshot: &GridLayoutSnapshot, min_size: u32) -> Result<Self, GridError> {
        snapshot.validate()?;
        let config = GridConfig::with_multiplier(snapshot.multiplier).min_size(min_size);
        Self::from_zones(snapshot.zones.clone(), config)
    }

    fn from_valid_zones(config: GridConfig, zones: Vec<Zone>) -> Self {
        let resizers = derive_resizers(&zones, config.multiplier);
        Self {
            multiplier: config.multiplier,
            min_size: config.min_size,
            zones,
            resizers,
        }
    }

    // =====================================================================
    // Read surface
    // =====================================================================

    #[must_use]
    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }

    #[must_use]
    pub const fn min_size(&self) -> u32 {
        self.min_size
    }

    /// Zones in index order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[must_use]
    pub fn zone(&self, index: usize) -> Option<&Zone> {
        self.zones.get(index)
    }

    /// Resizers in derivation order.
    #[must_use]
    pub fn resizers(&self) -> &[Resizer] {
        &self.resizers
    }

    #[must_use]
    pub fn resizer(&self, index: usize) -> Option<&Resizer> {
        self.resizers.get(index)
    }

    /// Line segment of a resizer, for placing its drag handle.
    #[must_use]
    pub fn resizer_line(&self, index: usize) -> Option<ResizerLine> {
        self.resizers.get(index)?.line(&self.zones)
    }

    /// Index of the zone containing the point, if any.
    #[must_use]
    pub fn zone_at(&self, x: u32, y: u32) -> Option<usize> {
        self.zones.iter().position(|zone| zone.contains(x, y))
    }

    /// Indices of zones whose interior overlaps `area`.
    ///
    /// Turns a selection rectangle into a merge selection.
    #[must_use]
    pub fn zones_intersecting(&self, area: Zone) -> BTreeSet<usize> {
        self.zones
            .iter()
            .enumerate()
            .filter(|(_, zone)| zone.intersects(&area))
            .map(|(index, _)| index)
            .collect()
    }

    /// Re-check the tiling, minimum size, and resizer derivation.
    pub fn validate(&self) -> Result<(), GridError> {
        validate_tiling(self.multiplier, &self.zones)?;
        if let Some(violation) = undersized_zone(&self.zones, self.min_size) {
            return Err(violation.into());
        }
        debug_assert_eq!(
            self.resizers,
            derive_resizers(&self.zones, self.multiplier),
            "resizers drifted from zones"
        );
        Ok(())
    }

    /// Export the persisted form, including legacy row/column metadata.
    #[must_use]
    pub fn to_snapshot(&self) -> GridLayoutSnapshot {
        GridLayoutSnapshot::new(self.multiplier, self.zones.clone())
            .with_grid_model(self.to_grid_model())
    }

    /// Describe the current tiling as a legacy row/column model.
    #[must_use]
    pub fn to_grid_model(&self) -> GridLayoutModel {
        GridLayoutModel::from_zones(&self.zones, self.multiplier)
    }

    // =====================================================================
    // Split
    // =====================================================================

    /// Whether `split` would succeed.
    #[must_use]
    pub fn can_split(&self, zone_index: usize, offset: u32, orientation: Orientation) -> bool {
        self.plan_split(zone_index, offset, orientation).is_ok()
    }

    /// Cut a zone in two at `offset`.
    ///
    /// The top (horizontal cut) or left (vertical cut) half keeps
    /// `zone_index`; the other half is appended and its index returned.
    pub fn split(
        &mut self,
        zone_index: usize,
        offset: u32,
        orientation: Orientation,
    ) -> Result<usize, GridError> {
        let (near, far) = self.plan_split(zone_index, offset, orientation)?;
        self.zones[zone_index] = near;
        self.zones.push(far);
        let new_index = self.zones.len() - 1;
        self.rebuild_resizers();
        tracing::debug!(
            target: LOG_TARGET,
            zone_index,
            new_index,
            offset,
            orientation = %orientation,
            zones = self.zones.len(),
            "zone split"
        );
        Ok(new_index)
    }

    fn plan_split(
        &self,
        zone_index: usize,
        offset: u32,
        orientation: Orientation,
    ) -> Result<(Zone, Zone), GridError> {
        let zone = self.check_zone_index(zone_index)?;
        let Some((near, far)) = zone.split_at(offset, orientation) else {
            let (start, end) = zone.span(orientation);
            return Err(GridError::InvalidOffset {
                zone_index,
                offset,
                orientation,
                start,
                end,
            });
        };
        for half in [near, far] {
            let dimension = half.dimension(orientation);
            if dimension < self.min_size {
                return Err(GridError::ConstraintViolation(ConstraintViolation {
                    zone_index,
                    orientation,
                    dimension: i64::from(dimension),
                    min_size: self.min_size,
                }));
            }
        }
        Ok((near, far))
    }

    // =====================================================================
    // Drag
    // =====================================================================

    /// Whether moving the resizer by `delta` keeps every adjacent zone at or
    /// above the minimum size. False for an out-of-range index.
    #[must_use]
    pub fn can_drag(&self, resizer_index: usize, delta: i32) -> bool {
        matches!(
            self.plan_drag(resizer_index, delta),
            Ok(DragOutcome::Applied { .. })
        )
    }

    /// Move a resizer by `delta` normalized units.
    ///
    /// Positive-side zones give up `delta` units and negative-side zones gain
    /// them. A delta that would breach the minimum size is reported as
    /// [`DragOutcome::Rejected`] and leaves the grid untouched.
    pub fn drag(&mut self, resizer_index: usize, delta: i32) -> Result<DragOutcome, GridError> {
        let outcome = self.plan_drag(resizer_index, delta)?;
        match outcome {
            DragOutcome::Applied { position } => {
                if delta != 0 {
                    let resizer = &self.resizers[resizer_index];
                    let orientation = resizer.orientation;
                    for &index in &resizer.positive_side_indices {
                        let zone = &mut self.zones[index];
                        match orientation {
                            Orientation::Horizontal => zone.top = position,
                            Orientation::Vertical => zone.left = position,
                        }
                    }
                    for &index in &resizer.negative_side_indices {
                        let zone = &mut self.zones[index];
                        match orientation {
                            Orientation::Horizontal => zone.bottom = position,
                            Orientation::Vertical => zone.right = position,
                        }
                    }
                    self.rebuild_resizers();
                }
                tracing::trace!(target: LOG_TARGET, resizer_index, delta, position, "resizer dragged");
            }
            DragOutcome::Rejected(violation) => {
                tracing::trace!(
                    target: LOG_TARGET,
                    resizer_index,
                    delta,
                    zone_index = violation.zone_index,
                    dimension = violation.dimension,
                    "drag rejected"
                );
            }
        }
        Ok(outcome)
    }

    fn plan_drag(&self, resizer_index: usize, delta: i32) -> Result<DragOutcome, GridError> {
        let resizer = self
            .resizers
            .get(resizer_index)
            .ok_or(GridError::InvalidIndex {
                kind: IndexKind::Resizer,
                index: resizer_index,
                len: self.resizers.len(),
            })?;
        let orientation = resizer.orientation;
        let change = i64::from(delta);
        let min_size = i64::from(self.min_size);
        let sides = [
            (&resizer.positive_side_indices, -change),
            (&resizer.negative_side_indices, change),
        ];
        for (indices, shift) in sides {
            for &zone_index in indices {
                let dimension = i64::from(self.zones[zone_index].dimension(orientation)) + shift;
                if dimension < min_size {
                    return Ok(DragOutcome::Rejected(ConstraintViolation {
                        zone_index,
                        orientation,
                        dimension,
                        min_size: self.min_size,
                    }));
                }
            }
        }
        match resizer.position.checked_add_signed(delta) {
            Some(position) => Ok(DragOutcome::Applied { position }),
            // Only reachable with a zero min size, which config validation forbids.
            None => Ok(DragOutcome::Rejected(ConstraintViolation {
                zone_index: resizer.negative_side_indices.first().copied().unwrap_or_default(),
                orientation,
                dimension: i64::from(resizer.position) + change,
                min_size: self.min_size,
            })),
        }
    }

    // =====================================================================
    // Merge
    // =====================================================================

    /// Grow a selection to the smallest superset whose union is a rectangle.
    ///
    /// Repeatedly adds every zone overlapping the bounding rectangle of the
    /// current set until nothing changes. An empty selection stays empty.
    pub fn merge_closure_indices(
        &self,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<BTreeSet<usize>, GridError> {
        let mut selected = self.collect_selection(indices)?;
        let Some(mut bounds) = Zone::bounding(selected.iter().map(|&index| self.zones[index]))
        else {
            return Ok(selected);
        };
        loop {
            let mut grown = false;
            for (index, zone) in self.zones.iter().enumerate() {
                if !selected.contains(&index) && zone.intersects(&bounds) {
                    selected.insert(index);
                    bounds = bounds.union(zone);
                    grown = true;
                }
            }
            if !grown {
                return Ok(selected);
            }
        }
    }

    /// Collapse a closed selection into one zone.
    ///
    /// Fewer than two distinct indices is a no-op returning `None`. Otherwise
    /// the lowest selected index survives with the bounding rectangle, the
    /// rest are removed, and the surviving index is returned.
    pub fn do_merge(
        &mut self,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<Option<usize>, GridError> {
        let selected = self.collect_selection(indices)?;
        let Some(&survivor) = selected.first() else {
            return Ok(None);
        };
        if selected.len() < 2 {
            return Ok(None);
        }

        let bounds = Zone::bounding(selected.iter().map(|&index| self.zones[index]))
            .unwrap_or(self.zones[survivor]);
        let covered_area: u64 = selected.iter().map(|&index| self.zones[index].area()).sum();
        let foreign_overlap = self
            .zones
            .iter()
            .enumerate()
            .any(|(index, zone)| !selected.contains(&index) && zone.intersects(&bounds));
        if covered_area != bounds.area() || foreign_overlap {
            tracing::warn!(
                target: LOG_TARGET,
                bounds = %bounds,
                covered_area,
                selected = selected.len(),
                "merge selection is not a closed rectangle"
            );
            return Err(GridError::MalformedClosure {
                bounds,
                covered_area,
            });
        }

        self.zones[survivor] = bounds;
        let mut index = 0;
        self.zones.retain(|_| {
            let keep = index == survivor || !selected.contains(&index);
            index += 1;
            keep
        });
        self.rebuild_resizers();
        tracing::debug!(
            target: LOG_TARGET,
            survivor,
            merged = selected.len(),
            bounds = %bounds,
            zones = self.zones.len(),
            "zones merged"
        );
        Ok(Some(survivor))
    }

    // =====================================================================
    // Internals
    // =====================================================================

    fn check_zone_index(&self, index: usize) -> Result<Zone, GridError> {
        self.zones
            .get(index)
            .copied()
            .ok_or(GridError::InvalidIndex {
                kind: IndexKind::Zone,
                index,
                len: self.zones.len(),
            })
    }

    fn collect_selection(
        &self,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<BTreeSet<usize>, GridError> {
        indices
            .into_iter()
            .map(|index| self.check_zone_index(index).map(|_| index))
            .collect()
    }

    fn rebuild_resizers(&mut self) {
        self.resizers = derive_resizers(&self.zones, self.multiplier);
        debug_assert_eq!(validate_tiling(self.multiplier, &self.zones), Ok(()));
    }
}

fn undersized_zone(zones: &[Zone], min_size: u32) -> Option<ConstraintViolation> {
    zones.iter().enumerate().find_map(|(zone_index, zone)| {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .find(|&orientation| zone.dimension(orientation) < min_size)
            .map(|orientation| ConstraintViolation {
                zone_index,
                orientation,
                dimension: i64::from(zone.dimension(orientation)),
                min_size,
            })
    })
}
