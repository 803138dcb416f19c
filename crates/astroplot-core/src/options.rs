//! Configuration options for the plotter.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default focal length of the camera.
pub const DEFAULT_FOCAL_LENGTH: f64 = 900.0;
/// Default distance between the camera and the origin.
pub const DEFAULT_DISTANCE: f64 = 6.0;
/// Default azimuth and elevation, in radians.
pub const DEFAULT_ANGLE: f64 = 0.3;
/// Pixels of pointer travel per radian of orbit.
pub const DEFAULT_MOVEMENT_SENSITIVITY: f64 = 150.0;
/// Wheel units per unit of camera distance.
pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 300.0;

/// Plain numeric and boolean settings of a plot.
///
/// None of the values are validated here. Degenerate sensitivities (such as
/// zero) are accepted and simply produce erratic camera motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Perspective scale factor.
    pub focal_length: f64,

    /// Initial camera distance from the origin.
    pub distance: f64,

    /// Initial horizontal orbit angle, in radians.
    pub azimuth: f64,

    /// Initial vertical orbit angle, in radians.
    pub elevation: f64,

    /// Diameter of scatter dots.
    pub small_dot_size: u32,

    /// Diameter of orbiting bodies.
    pub medium_dot_size: u32,

    /// Diameter of the central orbit marker.
    pub large_dot_size: u32,

    /// Line width of each axis in the axis widget.
    pub axes_thickness: u32,

    /// Arm length used when building the axis widget.
    pub axes_length: u32,

    /// Whether the axis widget is shown.
    pub show_axes_widget: bool,

    /// Pointer travel, in pixels, that turns the camera by one radian.
    pub movement_sensitivity: f64,

    /// Wheel delta that moves the camera by one unit of distance.
    pub wheel_sensitivity: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            focal_length: DEFAULT_FOCAL_LENGTH,
            distance: DEFAULT_DISTANCE,
            azimuth: DEFAULT_ANGLE,
            elevation: DEFAULT_ANGLE,
            small_dot_size: 3,
            medium_dot_size: 6,
            large_dot_size: 9,
            axes_thickness: 3,
            axes_length: 50,
            show_axes_widget: true,
            movement_sensitivity: DEFAULT_MOVEMENT_SENSITIVITY,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
        }
    }
}

impl PlotOptions {
    /// Parses options from JSON. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
