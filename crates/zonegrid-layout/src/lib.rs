#![forbid(unsafe_code)]

//! Zone grid layout engine.
//!
//! Maintains a normalized work area as an exact partition of rectangular
//! zones and supports the interactive edits of a zone-layout editor:
//!
//! - [`GridData::split`]: cut one zone in two.
//! - [`GridData::drag`]: move a shared boundary under a minimum-size bound.
//! - [`GridData::merge_closure_indices`] and [`GridData::do_merge`]: grow a
//!   selection to a rectangle and collapse it into one zone.
//!
//! Resizers (shared boundary lines) are derived from the zone list after
//! every mutation and are never edited directly. Rendering, pointer capture,
//! and persistence I/O belong to the host; this crate exposes only
//! index-addressable data.

pub mod error;
pub mod grid;
pub mod model;
pub mod resizer;
pub mod snapshot;
pub mod tiling;

pub use error::{ConstraintViolation, GridError, IndexKind};
pub use grid::{DragOutcome, GridData};
pub use model::{GridAxis, GridLayoutModel, GridModelError};
pub use resizer::{Resizer, ResizerLine, derive_resizers};
pub use snapshot::{GRID_LAYOUT_SCHEMA_VERSION, GridLayoutSnapshot};
pub use tiling::{TilingViolation, validate_tiling};
pub use zonegrid_core::{GridConfig, Orientation, Zone};
