//! Perspective projection from world space to viewport space.
//!
//! The projection is a pinhole model looking at the origin. World points are
//! first moved into the camera's view axes (Y up, forward along negated world X
//! at zero azimuth), expressed in the look-at basis derived from azimuth and
//! elevation, divided by depth, scaled by the focal length, and finally
//! translated so that the origin lands on the viewport center.
//!
//! Nothing here depends on the camera or series types; every function takes
//! plain numbers and vectors.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Size of the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport of the given size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the viewport center, where the world origin is projected.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(400.0, 400.0)
    }
}

/// Converts a world-space vector into the camera's view axes.
///
/// This is the same `(-y, z, -x)` permutation applied to the camera position,
/// so both live in one frame before the look-at basis is applied.
#[must_use]
pub fn to_view_axes(p: DVec3) -> DVec3 {
    DVec3::new(-p.y, p.z, -p.x)
}

/// Orthonormal look-at-origin basis of an orbiting camera, in view axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Screen-right direction.
    pub right: DVec3,
    /// Screen-up direction.
    pub up: DVec3,
    /// Viewing direction, from the camera toward the origin.
    pub forward: DVec3,
}

impl CameraBasis {
    /// Builds the basis for a camera at the given orbit angles.
    #[must_use]
    pub fn from_angles(azimuth: f64, elevation: f64) -> Self {
        let (sin_a, cos_a) = azimuth.sin_cos();
        let (sin_e, cos_e) = elevation.sin_cos();
        Self {
            right: DVec3::new(-cos_a, 0.0, sin_a),
            up: DVec3::new(sin_e * sin_a, cos_e, sin_e * cos_a),
            forward: DVec3::new(cos_e * sin_a, -sin_e, cos_e * cos_a),
        }
    }

    /// Expresses a view-axes offset from the camera in camera coordinates
    /// `(right, up, depth)`.
    #[must_use]
    pub fn to_camera_space(&self, offset: DVec3) -> DVec3 {
        DVec3::new(
            offset.dot(self.right),
            offset.dot(self.up),
            offset.dot(self.forward),
        )
    }
}

/// Everything the projection needs, bundled for repeated use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Target viewport.
    pub viewport: Viewport,
    /// Perspective scale factor.
    pub focal_length: f64,
    /// Camera position, already in view axes.
    pub camera_position: DVec3,
    /// Horizontal orbit angle.
    pub azimuth: f64,
    /// Vertical orbit angle.
    pub elevation: f64,
}

impl ProjectionParams {
    /// Projects a sequence of points with these parameters.
    #[must_use]
    pub fn project(&self, points: &[DVec3]) -> Vec<DVec2> {
        project(
            points,
            self.viewport.width,
            self.viewport.height,
            self.focal_length,
            self.camera_position,
            self.azimuth,
            self.elevation,
        )
    }
}

/// Projects world points to viewport coordinates.
///
/// The output has the same length and order as `points`; an empty input gives
/// an empty output. Screen `y` grows downward. Coordinates are not validated:
/// a NaN input, or a point lying in the camera plane, yields a non-finite
/// screen point that the renderer is expected to skip.
#[must_use]
pub fn project(
    points: &[DVec3],
    viewport_width: f64,
    viewport_height: f64,
    focal_length: f64,
    camera_position: DVec3,
    azimuth: f64,
    elevation: f64,
) -> Vec<DVec2> {
    let basis = CameraBasis::from_angles(azimuth, elevation);
    let center = DVec2::new(viewport_width / 2.0, viewport_height / 2.0);

    points
        .iter()
        .map(|&p| {
            let cam = basis.to_camera_space(to_view_axes(p) - camera_position);
            let scale = focal_length / cam.z;
            DVec2::new(center.x + cam.x * scale, center.y - cam.y * scale)
        })
        .collect()
}
