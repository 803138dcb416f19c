//! astroplot-rs: an interactive 3D point and orbit plotter.
//!
//! A plot holds series of 3D points, keeps a camera orbiting the origin, and
//! projects everything into viewport pixels. The host feeds it pointer, wheel
//! and resize events and paints the resulting draw list.
//!
//! # Quick Start
//!
//! ```
//! use astroplot::*;
//!
//! let mut plot = AstroPlot::new(Viewport::new(400.0, 400.0));
//! plot.add_scatter_point(DVec3::ZERO, 0).unwrap();
//!
//! let key = SeriesKey::new(SeriesKind::Scatter, 0);
//! let center = plot.store().projected(key).unwrap()[0];
//! assert!((center - DVec2::new(200.0, 200.0)).length() < 1e-9);
//!
//! // Drag to orbit, scroll to zoom.
//! plot.pointer_down(PointerButton::Primary, DVec2::new(10.0, 10.0));
//! plot.pointer_move(DVec2::new(40.0, 10.0));
//! plot.pointer_up(PointerButton::Primary);
//! plot.wheel(120.0);
//!
//! for command in plot.draw_list().commands() {
//!     // hand each command to the host surface
//!     let _ = command;
//! }
//! ```
//!
//! # Series kinds
//!
//! - [`SeriesKind::Scatter`] - independent points drawn as small dots
//! - [`SeriesKind::Anchor`] - the three vectors of the axis widget
//! - [`SeriesKind::Orbit`] - samples along an orbit around a central marker

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod demo;
mod viewer;

pub use astroplot_core::{
    camera::{CameraModel, MIN_DISTANCE},
    error::{PlotError, Result},
    interaction::{DragState, InteractionController, PointerButton},
    options::PlotOptions,
    projection::{project, ProjectionParams, Viewport},
    series::{Series, SeriesKey, SeriesKind, SeriesStore},
    DVec2, DVec3,
};
pub use astroplot_render::{DrawCommand, DrawList, DrawStyle, DotInstance, ScreenVertex};
pub use viewer::{AstroPlot, ListenerId, ProjectionUpdate, UpdateReason};

/// Initializes logging from `RUST_LOG`. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
