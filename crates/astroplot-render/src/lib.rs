//! Draw-list generation for astroplot-rs.
//!
//! This crate turns projected series into primitives a host surface can paint:
//! - [`DrawList`] of dots and lines in viewport pixels
//! - The series palette and axis colors
//! - [`bytemuck`] vertex layouts for hosts that upload to the GPU
//!
//! It never touches pixels itself.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod draw_list;
pub mod vertex;

pub use color::{axis_color, series_color, AXIS_COLORS, ORBIT_CENTER_COLOR, SERIES_PALETTE};
pub use draw_list::{DrawCommand, DrawList, DrawStyle};
pub use vertex::{DotInstance, ScreenVertex};
