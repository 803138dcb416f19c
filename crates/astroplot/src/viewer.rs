//! The plot instance a host embeds.
//!
//! [`AstroPlot`] owns the camera, the series store, the input controller and
//! the options. Every public mutation runs to completion, including any
//! re-projection it causes, before returning; listeners are then told that
//! the projection caches changed so the host can repaint.

use astroplot_core::{
    CameraModel, DVec2, DVec3, InteractionController, PlotError, PlotOptions, PointerButton,
    Result, Series, SeriesKey, SeriesKind, SeriesStore, Viewport,
};
use astroplot_render::{DrawList, DrawStyle};

/// Why the projection caches changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateReason {
    /// A camera parameter changed, by setter, drag or wheel.
    Camera,
    /// The viewport was resized.
    Resize,
    /// A point was appended to an existing or new series.
    PointAdded(SeriesKey),
    /// A whole series was appended.
    SeriesAdded(SeriesKey),
    /// Series were removed.
    Cleared,
    /// Options were replaced.
    Options,
}

/// Notification sent to listeners after the caches are consistent again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionUpdate {
    pub reason: UpdateReason,
    /// Number of series held after the update.
    pub series: usize,
    pub viewport: Viewport,
}

/// Handle returned by [`AstroPlot::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ProjectionUpdate)>;

/// An interactive 3D point and orbit plot.
pub struct AstroPlot {
    options: PlotOptions,
    camera: CameraModel,
    store: SeriesStore,
    controller: InteractionController,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl AstroPlot {
    /// Creates a plot with default options.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_options(PlotOptions::default(), viewport)
    }

    /// Creates a plot with the given options.
    #[must_use]
    pub fn with_options(options: PlotOptions, viewport: Viewport) -> Self {
        let mut camera = CameraModel::from_options(&options);
        let store = SeriesStore::new(&camera, viewport);
        camera.take_dirty();
        log::info!(
            "astroplot created: {}x{}, distance {}, focal length {}",
            viewport.width,
            viewport.height,
            camera.distance(),
            camera.focal_length()
        );
        Self {
            controller: InteractionController::from_options(&options),
            options,
            camera,
            store,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    /// Replaces the options, resetting the camera to their initial values.
    pub fn set_options(&mut self, options: PlotOptions) {
        self.camera = CameraModel::from_options(&options);
        self.controller = InteractionController::from_options(&options);
        self.options = options;
        self.camera.take_dirty();
        self.refresh(UpdateReason::Options);
    }

    #[must_use]
    pub fn camera(&self) -> &CameraModel {
        &self.camera
    }

    #[must_use]
    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.store.viewport()
    }

    /// Registers a listener called after every projection update.
    pub fn subscribe(&mut self, listener: impl FnMut(&ProjectionUpdate) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    // Camera

    pub fn set_azimuth(&mut self, azimuth: f64) {
        self.camera.set_azimuth(azimuth);
        self.apply_camera();
    }

    pub fn set_elevation(&mut self, elevation: f64) {
        self.camera.set_elevation(elevation);
        self.apply_camera();
    }

    /// Sets the camera distance; values below the floor are clamped.
    pub fn set_distance(&mut self, distance: f64) {
        self.camera.set_distance(distance);
        self.apply_camera();
    }

    pub fn set_focal_length(&mut self, focal_length: f64) {
        self.camera.set_focal_length(focal_length);
        self.options.focal_length = focal_length;
        self.apply_camera();
    }

    /// Overrides the camera position until the next spherical change.
    pub fn set_camera_position(&mut self, position: DVec3) {
        self.camera.set_camera_position(position);
        self.apply_camera();
    }

    pub fn set_movement_sensitivity(&mut self, sensitivity: f64) {
        self.controller.set_movement_sensitivity(sensitivity);
        self.options.movement_sensitivity = sensitivity;
    }

    pub fn set_wheel_sensitivity(&mut self, sensitivity: f64) {
        self.controller.set_wheel_sensitivity(sensitivity);
        self.options.wheel_sensitivity = sensitivity;
    }

    /// Shows or hides the axis widget. Anchor caches stay current either way.
    pub fn set_show_axes_widget(&mut self, show: bool) {
        self.options.show_axes_widget = show;
        self.notify(UpdateReason::Options);
    }

    // Host events

    pub fn pointer_down(&mut self, button: PointerButton, position: DVec2) {
        self.controller.pointer_down(button, position, &self.camera);
    }

    pub fn pointer_move(&mut self, position: DVec2) {
        if self.controller.pointer_move(position, &mut self.camera) {
            self.apply_camera();
        }
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        self.controller.pointer_up(button);
    }

    pub fn wheel(&mut self, delta: f64) {
        self.controller.wheel(delta, &mut self.camera);
        self.apply_camera();
    }

    /// Re-projects for a new viewport size. The camera is left untouched.
    pub fn resize(&mut self, viewport: Viewport) {
        self.controller.resize(&mut self.store, &self.camera, viewport);
        self.notify(UpdateReason::Resize);
    }

    // Series

    pub fn add_scatter_point(&mut self, point: DVec3, index: usize) -> Result<()> {
        self.store.add_scatter_point(point, index)?;
        self.notify(UpdateReason::PointAdded(SeriesKey::new(SeriesKind::Scatter, index)));
        Ok(())
    }

    pub fn add_scatter_series(&mut self, points: Vec<DVec3>) -> SeriesKey {
        let key = self.store.add_scatter_series(points);
        self.refresh(UpdateReason::SeriesAdded(key));
        key
    }

    pub fn add_axis_anchor(&mut self, point: DVec3, index: usize) -> Result<()> {
        self.store.add_axis_anchor(point, index)?;
        self.notify(UpdateReason::PointAdded(SeriesKey::new(SeriesKind::Anchor, index)));
        Ok(())
    }

    pub fn add_axis_anchor_series(&mut self, vectors: Vec<DVec3>) -> Result<SeriesKey> {
        let key = self.store.add_axis_anchor_series(vectors)?;
        self.refresh(UpdateReason::SeriesAdded(key));
        Ok(key)
    }

    pub fn add_orbit_point(&mut self, point: DVec3, index: usize) -> Result<()> {
        self.store.add_orbit_point(point, index)?;
        self.notify(UpdateReason::PointAdded(SeriesKey::new(SeriesKind::Orbit, index)));
        Ok(())
    }

    pub fn add_orbit_series(&mut self, points: Vec<DVec3>) -> SeriesKey {
        let key = self.store.add_orbit_series(points);
        self.refresh(UpdateReason::SeriesAdded(key));
        key
    }

    /// Appends a named series of any kind.
    pub fn add_named_series(
        &mut self,
        kind: SeriesKind,
        name: impl Into<String>,
        points: Vec<DVec3>,
    ) -> Result<SeriesKey> {
        let key = self.store.add_named_series(kind, name, points)?;
        self.refresh(UpdateReason::SeriesAdded(key));
        Ok(key)
    }

    /// Adds the axis widget: an anchor series with arms of half `length`
    /// along +X, -Y and +Z. Does nothing while the widget is hidden.
    pub fn draw_axes(&mut self, length: u32) -> Result<Option<SeriesKey>> {
        if !self.options.show_axes_widget {
            return Ok(None);
        }
        let half = f64::from(length) * 0.5;
        let key = self.add_axis_anchor_series(vec![
            DVec3::new(half, 0.0, 0.0),
            DVec3::new(0.0, -half, 0.0),
            DVec3::new(0.0, 0.0, half),
        ])?;
        Ok(Some(key))
    }

    /// Looks up a series by name.
    pub fn series_by_name(&self, name: &str) -> Result<&Series> {
        self.store
            .find_by_name(name)
            .ok_or_else(|| PlotError::SeriesNotFound(name.to_string()))
    }

    /// Removes every scatter series. Anchors and orbits are kept.
    pub fn clear(&mut self) {
        self.store.clear();
        log::info!("cleared scatter series");
        self.notify(UpdateReason::Cleared);
    }

    pub fn clear_anchors(&mut self) {
        self.store.clear_anchors();
        self.notify(UpdateReason::Cleared);
    }

    pub fn clear_orbits(&mut self) {
        self.store.clear_orbits();
        self.notify(UpdateReason::Cleared);
    }

    pub fn clear_all(&mut self) {
        self.store.clear_all();
        log::info!("cleared all series");
        self.notify(UpdateReason::Cleared);
    }

    /// Builds the draw commands for the current frame.
    #[must_use]
    pub fn draw_list(&self) -> DrawList {
        DrawList::build(&self.store, &DrawStyle::from_options(&self.options))
    }

    fn apply_camera(&mut self) {
        if self.camera.take_dirty() {
            self.refresh(UpdateReason::Camera);
        }
    }

    fn refresh(&mut self, reason: UpdateReason) {
        let viewport = self.store.viewport();
        self.store.refresh_all(&self.camera, viewport);
        self.notify(reason);
    }

    fn notify(&mut self, reason: UpdateReason) {
        let update = ProjectionUpdate {
            reason,
            series: self.store.len(),
            viewport: self.store.viewport(),
        };
        for (_, listener) in &mut self.listeners {
            listener(&update);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn plot() -> AstroPlot {
        AstroPlot::new(Viewport::new(400.0, 400.0))
    }

    #[test]
    fn test_listener_sees_consistent_update() {
        let mut plot = plot();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        plot.subscribe(move |u| sink.borrow_mut().push(*u));

        plot.add_scatter_point(DVec3::ONE, 0).unwrap();
        plot.set_azimuth(1.0);
        plot.resize(Viewport::new(200.0, 100.0));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[0].reason,
            UpdateReason::PointAdded(SeriesKey::new(SeriesKind::Scatter, 0))
        );
        assert_eq!(seen[1].reason, UpdateReason::Camera);
        assert_eq!(seen[2].reason, UpdateReason::Resize);
        assert_eq!(seen[2].viewport, Viewport::new(200.0, 100.0));
    }

    #[test]
    fn test_rejected_point_does_not_notify() {
        let mut plot = plot();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        plot.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(plot.add_orbit_point(DVec3::ONE, 4).is_err());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut plot = plot();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = plot.subscribe(move |_| *sink.borrow_mut() += 1);

        plot.wheel(30.0);
        assert!(plot.unsubscribe(id));
        assert!(!plot.unsubscribe(id));
        plot.wheel(30.0);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_draw_axes_respects_visibility() {
        let mut plot = plot();
        let key = plot.draw_axes(50).unwrap().unwrap();
        let anchors = plot.store().get(key).unwrap();
        assert_eq!(anchors.points()[1], DVec3::new(0.0, -25.0, 0.0));

        plot.set_show_axes_widget(false);
        assert_eq!(plot.draw_axes(50).unwrap(), None);
        assert_eq!(plot.store().count(SeriesKind::Anchor), 1);
        assert!(plot.draw_list().is_empty());
    }

    #[test]
    fn test_set_options_resets_camera() {
        let mut plot = plot();
        plot.set_azimuth(2.0);
        plot.set_options(PlotOptions {
            distance: 10.0,
            ..PlotOptions::default()
        });
        assert_eq!(plot.camera().azimuth(), 0.3);
        assert_eq!(plot.camera().distance(), 10.0);
    }

    #[test]
    fn test_series_by_name() {
        let mut plot = plot();
        plot.add_named_series(SeriesKind::Scatter, "stars", vec![DVec3::ONE])
            .unwrap();
        assert!(plot.series_by_name("stars").is_ok());
        assert!(matches!(
            plot.series_by_name("planets"),
            Err(PlotError::SeriesNotFound(_))
        ));
    }
}
