//! Pointer and wheel input mapped onto the orbit camera.

use glam::DVec2;

use crate::camera::CameraModel;
use crate::options::{PlotOptions, DEFAULT_MOVEMENT_SENSITIVITY, DEFAULT_WHEEL_SENSITIVITY};
use crate::projection::Viewport;
use crate::series::SeriesStore;

/// Pointer button reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button on most devices; starts an orbit drag.
    Primary,
    Secondary,
    Middle,
}

/// Drag-to-orbit state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// The primary button is held. Angles are measured from the press.
    Dragging {
        press: DVec2,
        base_azimuth: f64,
        base_elevation: f64,
    },
}

/// Converts raw pointer and wheel deltas into camera updates.
///
/// Sensitivities are not validated; a zero sensitivity produces infinite
/// deltas rather than an error.
#[derive(Debug, Clone)]
pub struct InteractionController {
    movement_sensitivity: f64,
    wheel_sensitivity: f64,
    state: DragState,
}

impl InteractionController {
    #[must_use]
    pub fn new(movement_sensitivity: f64, wheel_sensitivity: f64) -> Self {
        Self {
            movement_sensitivity,
            wheel_sensitivity,
            state: DragState::Idle,
        }
    }

    #[must_use]
    pub fn from_options(options: &PlotOptions) -> Self {
        Self::new(options.movement_sensitivity, options.wheel_sensitivity)
    }

    #[must_use]
    pub fn movement_sensitivity(&self) -> f64 {
        self.movement_sensitivity
    }

    pub fn set_movement_sensitivity(&mut self, sensitivity: f64) {
        self.movement_sensitivity = sensitivity;
    }

    #[must_use]
    pub fn wheel_sensitivity(&self) -> f64 {
        self.wheel_sensitivity
    }

    pub fn set_wheel_sensitivity(&mut self, sensitivity: f64) {
        self.wheel_sensitivity = sensitivity;
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Handles a button press. A primary press starts a drag from the
    /// camera's current angles; other buttons are ignored.
    pub fn pointer_down(&mut self, button: PointerButton, position: DVec2, camera: &CameraModel) {
        if button != PointerButton::Primary {
            return;
        }
        self.state = DragState::Dragging {
            press: position,
            base_azimuth: camera.azimuth(),
            base_elevation: camera.elevation(),
        };
    }

    /// Handles pointer motion. While dragging, sets the camera angles from the
    /// displacement since the press and returns `true`.
    pub fn pointer_move(&mut self, position: DVec2, camera: &mut CameraModel) -> bool {
        let DragState::Dragging {
            press,
            base_azimuth,
            base_elevation,
        } = self.state
        else {
            return false;
        };

        let azimuth = base_azimuth - (press.x - position.x) / self.movement_sensitivity;
        let elevation = base_elevation + (press.y - position.y) / self.movement_sensitivity;
        camera.set_angles(azimuth, elevation);
        log::trace!("orbit drag: azimuth {azimuth:.4}, elevation {elevation:.4}");
        true
    }

    /// Handles a button release. Releasing the primary button ends the drag.
    pub fn pointer_up(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.state = DragState::Idle;
        }
    }

    /// Applies a wheel delta to the camera distance. Positive deltas move the
    /// camera closer; the distance floor still applies.
    pub fn wheel(&self, delta: f64, camera: &mut CameraModel) {
        camera.add_distance(-delta / self.wheel_sensitivity);
        log::trace!("wheel {delta}: distance {:.4}", camera.distance());
    }

    /// Re-projects everything for a new viewport without touching the camera.
    pub fn resize(&self, store: &mut SeriesStore, camera: &CameraModel, viewport: Viewport) {
        store.refresh_all(camera, viewport);
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(DEFAULT_MOVEMENT_SENSITIVITY, DEFAULT_WHEEL_SENSITIVITY)
    }
}
