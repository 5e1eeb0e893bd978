#![forbid(unsafe_code)]

//! zonegrid public facade crate.
//!
//! Re-exports the zone geometry, configuration, and grid editing types from
//! the internal crates and offers a prelude for editor hosts.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use zonegrid_core::{
    DEFAULT_MIN_ZONE_SIZE, DEFAULT_MULTIPLIER, GridConfig, GridConfigError, Orientation, Zone,
};

#[cfg(feature = "tracing-json")]
pub use zonegrid_core::logging::{LoggingInitError, init_json_logging};

// --- Layout re-exports -----------------------------------------------------

pub use zonegrid_layout::{
    ConstraintViolation, DragOutcome, GRID_LAYOUT_SCHEMA_VERSION, GridData, GridError,
    GridLayoutModel, GridLayoutSnapshot, Resizer, ResizerLine, TilingViolation, validate_tiling,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for zonegrid hosts.
#[derive(Debug)]
pub enum Error {
    /// Configuration could not be read or is invalid.
    Config(GridConfigError),
    /// A grid command or layout load failed.
    Grid(GridError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Grid(err) => write!(f, "grid: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Grid(err) => Some(err),
        }
    }
}

impl From<GridConfigError> for Error {
    fn from(err: GridConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<GridError> for Error {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

/// Standard result type for zonegrid APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Loading ---------------------------------------------------------------

/// Read a TOML config file and restore `snapshot` under its minimum size.
///
/// Without a snapshot the grid starts as a single full zone.
#[cfg(feature = "grid-config")]
pub fn load_grid(
    config_path: impl AsRef<std::path::Path>,
    snapshot: Option<&GridLayoutSnapshot>,
) -> Result<GridData> {
    let config = GridConfig::from_toml_file(config_path)?;
    let grid = match snapshot {
        Some(snapshot) => GridData::from_snapshot(snapshot, config.min_size)?,
        None => GridData::new(config)?,
    };
    Ok(grid)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DragOutcome, Error, GridConfig, GridData, GridError, GridLayoutSnapshot, Orientation,
        Resizer, Result, Zone,
    };

    pub use crate::{core, layout};
}

pub use zonegrid_core as core;
pub use zonegrid_layout as layout;
