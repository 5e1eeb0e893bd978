//! Legacy row/column grid description.
//!
//! Older saved layouts describe a grid as row and column percentages (in
//! normalized units, summing to the multiplier) plus a cell map naming the
//! zone that covers each cell. A zone spanning several cells repeats its id
//! across a rectangular block of the map.

use std::fmt;

use serde::{Deserialize, Serialize};
use zonegrid_core::Zone;

/// Row/column grid layout with a cell-to-zone map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GridLayoutModel {
    pub rows: usize,
    pub columns: usize,
    /// Height of each row in normalized units.
    pub rows_percentage: Vec<u32>,
    /// Width of each column in normalized units.
    pub columns_percentage: Vec<u32>,
    /// `rows x columns` matrix of zone ids.
    pub cell_child_map: Vec<Vec<usize>>,
}

/// Which axis of the model a problem was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    Rows,
    Columns,
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => f.write_str("rows"),
            Self::Columns => f.write_str("columns"),
        }
    }
}

/// Inconsistencies in a [`GridLayoutModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridModelError {
    ZeroDimension {
        axis: GridAxis,
    },
    PercentCount {
        axis: GridAxis,
        expected: usize,
        found: usize,
    },
    ZeroPercent {
        axis: GridAxis,
        index: usize,
    },
    PercentSum {
        axis: GridAxis,
        sum: u64,
        multiplier: u32,
    },
    CellMapShape {
        row: Option<usize>,
        expected: usize,
        found: usize,
    },
    MissingChild {
        child: usize,
    },
    /// A zone id no smaller than `rows * columns`.
    ChildOutOfRange {
        child: usize,
        cells: usize,
    },
    NonRectangularChild {
        child: usize,
    },
    /// The model does not describe the zone list it was stored with.
    ZoneMismatch {
        zone: Option<Zone>,
    },
}

impl fmt::Display for GridModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { axis } => write!(f, "grid has zero {axis}"),
            Self::PercentCount {
                axis,
                expected,
                found,
            } => write!(f, "expected {expected} {axis} percentages, found {found}"),
            Self::ZeroPercent { axis, index } => {
                write!(f, "{axis} percentage {index} is zero")
            }
            Self::PercentSum {
                axis,
                sum,
                multiplier,
            } => write!(f, "{axis} percentages sum to {sum}, expected {multiplier}"),
            Self::CellMapShape {
                row: None,
                expected,
                found,
            } => write!(f, "cell map has {found} rows, expected {expected}"),
            Self::CellMapShape {
                row: Some(row),
                expected,
                found,
            } => write!(f, "cell map row {row} has {found} cells, expected {expected}"),
            Self::MissingChild { child } => {
                write!(f, "zone id {child} does not appear in the cell map")
            }
            Self::ChildOutOfRange { child, cells } => {
                write!(f, "zone id {child} exceeds the {cells} cells of the grid")
            }
            Self::NonRectangularChild { child } => {
                write!(f, "cells of zone id {child} do not form a rectangle")
            }
            Self::ZoneMismatch { zone: Some(zone) } => {
                write!(f, "zone {zone} is not described by the grid model")
            }
            Self::ZoneMismatch { zone: None } => {
                f.write_str("grid model describes a different number of zones")
            }
        }
    }
}

impl std::error::Error for GridModelError {}

impl GridLayoutModel {
    /// Evenly spaced grid with one zone per cell, numbered row-major.
    #[must_use]
    pub fn uniform(rows: usize, columns: usize, multiplier: u32) -> Self {
        Self {
            rows,
            columns,
            rows_percentage: even_sizes(rows, multiplier),
            columns_percentage: even_sizes(columns, multiplier),
            cell_child_map: (0..rows)
                .map(|row| (0..columns).map(|column| row * columns + column).collect())
                .collect(),
        }
    }

    /// Convert to a zone list ordered by zone id.
    pub fn to_zones(&self, multiplier: u32) -> Result<Vec<Zone>, GridModelError> {
        let row_cuts = cut_lines(GridAxis::Rows, self.rows, &self.rows_percentage, multiplier)?;
        let column_cuts = cut_lines(
            GridAxis::Columns,
            self.columns,
            &self.columns_percentage,
            multiplier,
        )?;
        if self.cell_child_map.len() != self.rows {
            return Err(GridModelError::CellMapShape {
                row: None,
                expected: self.rows,
                found: self.cell_child_map.len(),
            });
        }
        for (row, cells) in self.cell_child_map.iter().enumerate() {
            if cells.len() != self.columns {
                return Err(GridModelError::CellMapShape {
                    row: Some(row),
                    expected: self.columns,
                    found: cells.len(),
                });
            }
        }

        // Every id names a distinct zone, so ids are bounded by the cell count.
        let cells = self.rows.checked_mul(self.columns).unwrap_or(usize::MAX);
        if let Some(&child) = self.cell_child_map.iter().flatten().find(|&&child| child >= cells) {
            return Err(GridModelError::ChildOutOfRange { child, cells });
        }

        // Cell block (min row, min col, max row, max col) and cell count per id.
        let child_count = self.cell_child_map.iter().flatten().max().map_or(0, |max| max + 1);
        let mut blocks: Vec<Option<(usize, usize, usize, usize, usize)>> = vec![None; child_count];
        for (row, cells) in self.cell_child_map.iter().enumerate() {
            for (column, &child) in cells.iter().enumerate() {
                let block = blocks[child].get_or_insert((row, column, row, column, 0));
                block.0 = block.0.min(row);
                block.1 = block.1.min(column);
                block.2 = block.2.max(row);
                block.3 = block.3.max(column);
                block.4 += 1;
            }
        }

        blocks
            .into_iter()
            .enumerate()
            .map(|(child, block)| {
                let Some((min_row, min_col, max_row, max_col, cells)) = block else {
                    return Err(GridModelError::MissingChild { child });
                };
                if cells != (max_row - min_row + 1) * (max_col - min_col + 1) {
                    return Err(GridModelError::NonRectangularChild { child });
                }
                Ok(Zone::new(
                    row_cuts[min_row],
                    column_cuts[min_col],
                    row_cuts[max_row + 1],
                    column_cuts[max_col + 1],
                ))
            })
            .collect()
    }

    /// Build the model describing an existing tiling.
    ///
    /// Rows and columns are the distinct horizontal and vertical edge
    /// coordinates of `zones`; zone ids are their indices.
    #[must_use]
    pub fn from_zones(zones: &[Zone], multiplier: u32) -> Self {
        let mut row_cuts: Vec<u32> = zones.iter().flat_map(|z| [z.top, z.bottom]).collect();
        let mut column_cuts: Vec<u32> = zones.iter().flat_map(|z| [z.left, z.right]).collect();
        row_cuts.extend([0, multiplier]);
        column_cuts.extend([0, multiplier]);
        row_cuts.sort_unstable();
        row_cuts.dedup();
        column_cuts.sort_unstable();
        column_cuts.dedup();

        let rows = row_cuts.len() - 1;
        let columns = column_cuts.len() - 1;
        let mut cell_child_map = vec![vec![0; columns]; rows];
        let locate = |cuts: &[u32], value: u32| cuts.binary_search(&value).unwrap_or_else(|i| i);
        for (index, zone) in zones.iter().enumerate() {
            let (first_row, last_row) = (locate(&row_cuts, zone.top), locate(&row_cuts, zone.bottom));
            let (first_col, last_col) = (
                locate(&column_cuts, zone.left),
                locate(&column_cuts, zone.right),
            );
            for cells in &mut cell_child_map[first_row..last_row] {
                for cell in &mut cells[first_col..last_col] {
                    *cell = index;
                }
            }
        }

        Self {
            rows,
            columns,
            rows_percentage: row_cuts.windows(2).map(|w| w[1] - w[0]).collect(),
            columns_percentage: column_cuts.windows(2).map(|w| w[1] - w[0]).collect(),
            cell_child_map,
        }
    }
}

/// Split `multiplier` into `count` near-equal sizes; rounding goes to later cells.
pub(crate) fn even_sizes(count: usize, multiplier: u32) -> Vec<u32> {
    let boundary = |i: usize| (u64::from(multiplier) * i as u64 / count.max(1) as u64) as u32;
    (0..count).map(|i| boundary(i + 1) - boundary(i)).collect()
}

fn cut_lines(
    axis: GridAxis,
    count: usize,
    sizes: &[u32],
    multiplier: u32,
) -> Result<Vec<u32>, GridModelError> {
    if count == 0 {
        return Err(GridModelError::ZeroDimension { axis });
    }
    if sizes.len() != count {
        return Err(GridModelError::PercentCount {
            axis,
            expected: count,
            found: sizes.len(),
        });
    }
    if let Some(index) = sizes.iter().position(|&size| size == 0) {
        return Err(GridModelError::ZeroPercent { axis, index });
    }
    let sum: u64 = sizes.iter().copied().map(u64::from).sum();
    if sum != u64::from(multiplier) {
        return Err(GridModelError::PercentSum {
            axis,
            sum,
            multiplier,
        });
    }
    let mut cuts = Vec::with_capacity(count + 1);
    let mut position = 0;
    cuts.push(position);
    for size in sizes {
        position += size;
        cuts.push(position);
    }
    Ok(cuts)
}
