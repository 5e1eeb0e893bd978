//! Persisted grid layout schema.
//!
//! A [`GridLayoutSnapshot`] is what the persistence collaborator stores once
//! an editing session ends: the ordered zone list, the multiplier it was
//! expressed in, and optionally the legacy row/column description.
//!
//! # Schema Versioning Policy
//!
//! - Additive fields must be optional with serde defaults.
//! - Breaking changes require incrementing [`GRID_LAYOUT_SCHEMA_VERSION`];
//!   loaders reject unknown versions.

use serde::{Deserialize, Serialize};
use zonegrid_core::Zone;

use crate::error::GridError;
use crate::model::{GridLayoutModel, GridModelError};
use crate::tiling::validate_tiling;

/// Current grid layout schema version.
pub const GRID_LAYOUT_SCHEMA_VERSION: u16 = 1;

/// Persisted zone layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayoutSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u16,
    pub multiplier: u32,
    pub zones: Vec<Zone>,
    /// Legacy row/column metadata for older consumers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridLayoutModel>,
}

fn default_schema_version() -> u16 {
    GRID_LAYOUT_SCHEMA_VERSION
}

impl GridLayoutSnapshot {
    /// Create a current-version snapshot without legacy metadata.
    #[must_use]
    pub fn new(multiplier: u32, zones: Vec<Zone>) -> Self {
        Self {
            schema_version: GRID_LAYOUT_SCHEMA_VERSION,
            multiplier,
            zones,
            grid: None,
        }
    }

    /// Attach legacy row/column metadata.
    #[must_use]
    pub fn with_grid_model(mut self, model: GridLayoutModel) -> Self {
        self.grid = Some(model);
        self
    }

    /// Validate schema version, tiling, and legacy metadata consistency.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.schema_version != GRID_LAYOUT_SCHEMA_VERSION {
            return Err(GridError::UnsupportedSchemaVersion {
                found: self.schema_version,
                expected: GRID_LAYOUT_SCHEMA_VERSION,
            });
        }
        validate_tiling(self.multiplier, &self.zones)?;
        if let Some(model) = &self.grid {
            // The model describes the same tiling, possibly with zones in a
            // different order.
            let mut from_model = model.to_zones(self.multiplier)?;
            let mut zones = self.zones.clone();
            let key = |zone: &Zone| (zone.top, zone.left);
            from_model.sort_unstable_by_key(key);
            zones.sort_unstable_by_key(key);
            if from_model != zones {
                let zone = zones.iter().find(|zone| !from_model.contains(zone)).copied();
                return Err(GridModelError::ZoneMismatch { zone }.into());
            }
        }
        Ok(())
    }
}
