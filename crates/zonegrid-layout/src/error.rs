//! Error types for grid construction and editing.

use std::fmt;

use zonegrid_core::{GridConfigError, Orientation, Zone};

use crate::model::GridModelError;
use crate::tiling::TilingViolation;

/// Which index space an out-of-range index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Zone,
    Resizer,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zone => f.write_str("zone"),
            Self::Resizer => f.write_str("resizer"),
        }
    }
}

/// A zone that would end up below the minimum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// Zone index in the store at the time of the check.
    pub zone_index: usize,
    /// Axis the dimension is measured across.
    pub orientation: Orientation,
    /// Dimension the zone would have had.
    pub dimension: i64,
    pub min_size: u32,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zone {} would be {} units across the {} line, below minimum {}",
            self.zone_index, self.dimension, self.orientation, self.min_size
        )
    }
}

/// Structured reasons for grid operation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zone or resizer index out of range.
    InvalidIndex {
        kind: IndexKind,
        index: usize,
        len: usize,
    },
    /// Split offset not strictly inside the target zone.
    InvalidOffset {
        zone_index: usize,
        offset: u32,
        orientation: Orientation,
        start: u32,
        end: u32,
    },
    /// A zone would fall below the minimum size.
    ConstraintViolation(ConstraintViolation),
    /// Merge selection does not cover its bounding rectangle exactly.
    MalformedClosure { bounds: Zone, covered_area: u64 },
    /// Input zones do not tile the work area.
    InvalidLayout(TilingViolation),
    /// Legacy row/column model is inconsistent.
    InvalidModel(GridModelError),
    /// Row/column counts cannot produce zones of at least the minimum size.
    InvalidDimensions {
        rows: usize,
        columns: usize,
        min_size: u32,
    },
    /// Configuration failed validation.
    InvalidConfig(Vec<String>),
    /// Persisted snapshot carries an unknown schema version.
    UnsupportedSchemaVersion { found: u16, expected: u16 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { kind, index, len } => {
                write!(f, "{kind} index {index} out of range (len {len})")
            }
            Self::InvalidOffset {
                zone_index,
                offset,
                orientation,
                start,
                end,
            } => write!(
                f,
                "{orientation} split offset {offset} not strictly inside zone {zone_index} ({start}..{end})"
            ),
            Self::ConstraintViolation(violation) => write!(f, "{violation}"),
            Self::MalformedClosure {
                bounds,
                covered_area,
            } => write!(
                f,
                "merge selection covers {covered_area} of bounding rectangle {bounds} (area {})",
                bounds.area()
            ),
            Self::InvalidLayout(violation) => write!(f, "invalid layout: {violation}"),
            Self::InvalidModel(err) => write!(f, "invalid grid model: {err}"),
            Self::InvalidDimensions {
                rows,
                columns,
                min_size,
            } => write!(
                f,
                "{rows}x{columns} grid cannot keep zones at least {min_size} units wide"
            ),
            Self::InvalidConfig(errors) => {
                write!(f, "invalid grid config: {}", errors.join("; "))
            }
            Self::UnsupportedSchemaVersion { found, expected } => write!(
                f,
                "unsupported grid layout schema version {found} (expected {expected})"
            ),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLayout(violation) => Some(violation),
            Self::InvalidModel(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConstraintViolation> for GridError {
    fn from(violation: ConstraintViolation) -> Self {
        Self::ConstraintViolation(violation)
    }
}

impl From<TilingViolation> for GridError {
    fn from(violation: TilingViolation) -> Self {
        Self::InvalidLayout(violation)
    }
}

impl From<GridModelError> for GridError {
    fn from(err: GridModelError) -> Self {
        Self::InvalidModel(err)
    }
}

impl From<GridConfigError> for GridError {
    fn from(err: GridConfigError) -> Self {
        match err {
            GridConfigError::Validation(errors) => Self::InvalidConfig(errors),
            other => Self::InvalidConfig(vec![other.to_string()]),
        }
    }
}
