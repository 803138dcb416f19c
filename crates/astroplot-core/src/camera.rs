//! Orbiting camera model.
//!
//! The camera always looks at the world origin from a point on a sphere
//! described by azimuth, elevation and distance.

use glam::DVec3;

use crate::options::PlotOptions;
use crate::projection::{ProjectionParams, Viewport};

/// Smallest allowed distance between the camera and the origin.
pub const MIN_DISTANCE: f64 = 0.1;

/// Spherical camera parameters plus the derived Cartesian position.
///
/// Every setter recomputes the position and raises the dirty flag. The owner
/// drains the flag with [`CameraModel::take_dirty`] and re-projects once.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraModel {
    azimuth: f64,
    elevation: f64,
    distance: f64,
    focal_length: f64,
    position: DVec3,
    dirty: bool,
}

impl CameraModel {
    /// Creates a camera from spherical parameters.
    ///
    /// The distance is clamped to [`MIN_DISTANCE`].
    #[must_use]
    pub fn new(azimuth: f64, elevation: f64, distance: f64, focal_length: f64) -> Self {
        let mut camera = Self {
            azimuth,
            elevation,
            distance: clamp_distance(distance),
            focal_length,
            position: DVec3::ZERO,
            dirty: true,
        };
        camera.update_position();
        camera
    }

    /// Creates a camera from the initial values in `options`.
    #[must_use]
    pub fn from_options(options: &PlotOptions) -> Self {
        Self::new(
            options.azimuth,
            options.elevation,
            options.distance,
            options.focal_length,
        )
    }

    #[must_use]
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    #[must_use]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[must_use]
    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Returns the camera position in view axes.
    #[must_use]
    pub fn camera_position(&self) -> DVec3 {
        self.position
    }

    /// Sets the horizontal orbit angle. Any value is accepted.
    pub fn set_azimuth(&mut self, azimuth: f64) {
        self.azimuth = azimuth;
        self.update_position();
    }

    /// Sets the vertical orbit angle. Any value is accepted.
    pub fn set_elevation(&mut self, elevation: f64) {
        self.elevation = elevation;
        self.update_position();
    }

    /// Sets both orbit angles with a single recomputation.
    pub fn set_angles(&mut self, azimuth: f64, elevation: f64) {
        self.azimuth = azimuth;
        self.elevation = elevation;
        self.update_position();
    }

    /// Sets the distance from the origin, clamped to [`MIN_DISTANCE`].
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = clamp_distance(distance);
        self.update_position();
    }

    /// Moves the camera toward or away from the origin.
    pub fn add_distance(&mut self, delta: f64) {
        self.set_distance(self.distance + delta);
    }

    /// Sets the perspective scale factor.
    pub fn set_focal_length(&mut self, focal_length: f64) {
        self.focal_length = focal_length;
        self.update_position();
    }

    /// Overrides the position with an explicit view-axes point.
    ///
    /// The override holds until the next spherical setter, which recomputes
    /// the position from azimuth, elevation and distance again.
    pub fn set_camera_position(&mut self, position: DVec3) {
        self.position = position;
        self.dirty = true;
    }

    /// Returns whether the projection is out of date with this camera.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Bundles this camera with a viewport for the projection engine.
    #[must_use]
    pub fn projection_params(&self, viewport: Viewport) -> ProjectionParams {
        ProjectionParams {
            viewport,
            focal_length: self.focal_length,
            camera_position: self.position,
            azimuth: self.azimuth,
            elevation: self.elevation,
        }
    }

    // The (-y, z, -x) permutation maps the spherical frame onto the projection's
    // view axes. Changing it mirrors geometry against the axis widget.
    fn update_position(&mut self) {
        let x = self.distance * self.elevation.cos() * self.azimuth.cos();
        let y = self.distance * self.elevation.cos() * self.azimuth.sin();
        let z = self.distance * self.elevation.sin();
        self.position = DVec3::new(-y, z, -x);
        self.dirty = true;
    }
}

impl Default for CameraModel {
    fn default() -> Self {
        Self::from_options(&PlotOptions::default())
    }
}

fn clamp_distance(distance: f64) -> f64 {
    // f64::max also maps NaN to the floor.
    distance.max(MIN_DISTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_camera_defaults() {
        let camera = CameraModel::default();
        assert_eq!(camera.azimuth(), 0.3);
        assert_eq!(camera.elevation(), 0.3);
        assert_eq!(camera.distance(), 6.0);
        assert_eq!(camera.focal_length(), 900.0);
        assert!(camera.is_dirty());
    }

    #[test]
    fn test_position_permutation() {
        let camera = CameraModel::new(0.0, 0.0, 2.0, 900.0);
        assert!((camera.camera_position() - DVec3::new(0.0, 0.0, -2.0)).length() < 1e-12);

        let camera = CameraModel::new(std::f64::consts::FRAC_PI_2, 0.0, 2.0, 900.0);
        assert!((camera.camera_position() - DVec3::new(-2.0, 0.0, 0.0)).length() < 1e-12);

        let camera = CameraModel::new(0.0, std::f64::consts::FRAC_PI_2, 2.0, 900.0);
        assert!((camera.camera_position() - DVec3::new(0.0, 2.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_position_length_is_distance() {
        let camera = CameraModel::new(1.3, -0.8, 4.5, 900.0);
        assert!((camera.camera_position().length() - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_setters_raise_dirty() {
        let mut camera = CameraModel::default();
        assert!(camera.take_dirty());
        assert!(!camera.take_dirty());

        camera.set_azimuth(1.0);
        assert!(camera.take_dirty());
        camera.set_elevation(-1.0);
        assert!(camera.take_dirty());
        camera.set_distance(3.0);
        assert!(camera.take_dirty());
        camera.set_focal_length(400.0);
        assert!(camera.take_dirty());
        camera.set_camera_position(DVec3::ONE);
        assert!(camera.take_dirty());
    }

    #[test]
    fn test_manual_position_overridden_by_spherical_setter() {
        let mut camera = CameraModel::default();
        camera.set_camera_position(DVec3::new(9.0, 9.0, 9.0));
        assert_eq!(camera.camera_position(), DVec3::new(9.0, 9.0, 9.0));

        camera.set_distance(6.0);
        assert_eq!(camera.camera_position(), CameraModel::default().camera_position());
    }

    #[test]
    fn test_distance_nan_clamps_to_floor() {
        let mut camera = CameraModel::default();
        camera.set_distance(f64::NAN);
        assert_eq!(camera.distance(), MIN_DISTANCE);
    }

    #[test]
    fn test_add_distance_clamps() {
        let mut camera = CameraModel::new(0.0, 0.0, 1.0, 900.0);
        camera.add_distance(-5.0);
        assert_eq!(camera.distance(), MIN_DISTANCE);
        camera.add_distance(2.0);
        assert!((camera.distance() - 2.1).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_distance_never_below_floor(distance in -1.0e6..1.0e6f64) {
            let mut camera = CameraModel::default();
            camera.set_distance(distance);
            prop_assert!(camera.distance() >= MIN_DISTANCE);
            if distance < MIN_DISTANCE {
                prop_assert_eq!(camera.distance(), MIN_DISTANCE);
            } else {
                prop_assert_eq!(camera.distance(), distance);
            }
        }
    }
}
