//! Core engine for astroplot-rs.
//!
//! This crate holds everything with real numeric content and no rendering
//! dependency:
//! - [`CameraModel`] orbiting the origin in spherical coordinates
//! - [`project`], the perspective projection into viewport space
//! - [`SeriesStore`] holding point series together with their projections
//! - [`InteractionController`] mapping pointer and wheel input to the camera
//! - [`PlotOptions`] with the documented defaults

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors mirror field names
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod error;
pub mod interaction;
pub mod options;
pub mod projection;
pub mod series;

pub use camera::{CameraModel, MIN_DISTANCE};
pub use error::{PlotError, Result};
pub use interaction::{DragState, InteractionController, PointerButton};
pub use options::PlotOptions;
pub use projection::{project, to_view_axes, CameraBasis, ProjectionParams, Viewport};
pub use series::{Series, SeriesKey, SeriesKind, SeriesStore, ANCHOR_VECTORS};

// Re-export glam types for convenience
pub use glam::{DVec2, DVec3};
