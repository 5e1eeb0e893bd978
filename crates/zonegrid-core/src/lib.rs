#![forbid(unsafe_code)]

//! Core: normalized coordinate space, zone geometry, and configuration.
//!
//! # Role in zonegrid
//! `zonegrid-core` holds the leaf types every other crate builds on. It has
//! no knowledge of grids, resizers, or editing operations.
//!
//! # Primary responsibilities
//! - **Zone**: half-open axis-aligned rectangle in normalized units.
//! - **Orientation**: horizontal/vertical lines and cuts.
//! - **GridConfig**: multiplier and minimum zone size, loadable from files.
//! - **logging**: tracing re-exports and an optional JSON subscriber.

pub mod config;
pub mod geometry;
pub mod logging;

pub use config::{DEFAULT_MIN_ZONE_SIZE, GridConfig, GridConfigError};
pub use geometry::{DEFAULT_MULTIPLIER, Orientation, Zone};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
