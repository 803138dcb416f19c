//! Point series and their projection caches.
//!
//! A [`Series`] owns both its world-space points and their screen-space
//! projections, so the two can never drift apart. The [`SeriesStore`] keeps
//! every series keyed by kind and index and remembers the projection
//! parameters it last applied, which it reuses when points are added.

use std::collections::BTreeMap;
use std::fmt;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::camera::CameraModel;
use crate::error::{PlotError, Result};
use crate::projection::{ProjectionParams, Viewport};

/// Number of vectors in an axis-widget anchor series.
pub const ANCHOR_VECTORS: usize = 3;

/// How a series is drawn. The kind never affects projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeriesKind {
    /// Independent points drawn as small dots.
    Scatter,
    /// The X/Y/Z vectors of the axis widget, drawn as lines from the center.
    Anchor,
    /// Samples along an orbital path, drawn as bodies around a central marker.
    Orbit,
}

impl SeriesKind {
    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::Scatter => "scatter",
            SeriesKind::Anchor => "anchor",
            SeriesKind::Orbit => "orbit",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of a series: its kind and its position among series of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesKey {
    pub kind: SeriesKind,
    pub index: usize,
}

impl SeriesKey {
    #[must_use]
    pub fn new(kind: SeriesKind, index: usize) -> Self {
        Self { kind, index }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.index)
    }
}

/// An ordered set of world points together with their current projection.
#[derive(Debug, Clone)]
pub struct Series {
    key: SeriesKey,
    name: String,
    points: Vec<DVec3>,
    projected: Vec<DVec2>,
}

impl Series {
    fn new(key: SeriesKey, name: String, points: Vec<DVec3>, params: &ProjectionParams) -> Self {
        let projected = params.project(&points);
        Self {
            key,
            name,
            points,
            projected,
        }
    }

    #[must_use]
    pub fn key(&self) -> SeriesKey {
        self.key
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.key.kind
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.key.index
    }

    /// Returns the series name. Unnamed series are called after their key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the world-space points.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the screen-space projection, parallel to [`Series::points`].
    #[must_use]
    pub fn projected(&self) -> &[DVec2] {
        &self.projected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn reproject(&mut self, params: &ProjectionParams) {
        self.projected = params.project(&self.points);
    }
}

/// Owner of every series and its projection cache.
pub struct SeriesStore {
    series: BTreeMap<SeriesKey, Series>,
    params: ProjectionParams,
}

impl SeriesStore {
    /// Creates an empty store projecting with `camera` into `viewport`.
    #[must_use]
    pub fn new(camera: &CameraModel, viewport: Viewport) -> Self {
        Self {
            series: BTreeMap::new(),
            params: camera.projection_params(viewport),
        }
    }

    /// Returns the parameters the caches were last projected with.
    #[must_use]
    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    /// Returns the viewport the caches were last projected into.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.params.viewport
    }

    /// Appends a point to a scatter series.
    ///
    /// `index` must name an existing scatter series or the next one in
    /// sequence, which is then created. Only the touched series is re-projected.
    pub fn add_scatter_point(&mut self, point: DVec3, index: usize) -> Result<()> {
        self.add_point(SeriesKind::Scatter, index, point)
    }

    /// Appends a whole new scatter series and returns its key.
    pub fn add_scatter_series(&mut self, points: Vec<DVec3>) -> SeriesKey {
        self.push_series(SeriesKind::Scatter, None, points)
    }

    /// Appends a vector to an axis-anchor series.
    ///
    /// Fails if the series is out of sequence or already holds three vectors.
    pub fn add_axis_anchor(&mut self, point: DVec3, index: usize) -> Result<()> {
        self.add_point(SeriesKind::Anchor, index, point)
    }

    /// Appends a new anchor series made of exactly three axis vectors.
    pub fn add_axis_anchor_series(&mut self, vectors: Vec<DVec3>) -> Result<SeriesKey> {
        self.add_series(SeriesKind::Anchor, vectors)
    }

    /// Appends a sample to an orbit series.
    pub fn add_orbit_point(&mut self, point: DVec3, index: usize) -> Result<()> {
        self.add_point(SeriesKind::Orbit, index, point)
    }

    /// Appends a whole new orbit series and returns its key.
    pub fn add_orbit_series(&mut self, points: Vec<DVec3>) -> SeriesKey {
        self.push_series(SeriesKind::Orbit, None, points)
    }

    /// Appends a point to the series `(kind, index)`.
    pub fn add_point(&mut self, kind: SeriesKind, index: usize, point: DVec3) -> Result<()> {
        let expected = self.count(kind);
        if index > expected {
            log::warn!("rejected {kind} point: index {index} out of sequence (next is {expected})");
            return Err(PlotError::IndexOutOfSequence {
                kind,
                index,
                expected,
            });
        }

        let key = SeriesKey::new(kind, index);
        if kind == SeriesKind::Anchor
            && self
                .series
                .get(&key)
                .is_some_and(|s| s.len() >= ANCHOR_VECTORS)
        {
            log::warn!("rejected anchor vector: series {index} is full");
            return Err(PlotError::AnchorSeriesFull { index });
        }

        let params = self.params;
        let series = self
            .series
            .entry(key)
            .or_insert_with(|| Series::new(key, key.to_string(), Vec::new(), &params));
        series.points.push(point);
        series.reproject(&params);
        Ok(())
    }

    /// Appends a new series of any kind.
    ///
    /// Anchor series must hold exactly three vectors.
    pub fn add_series(&mut self, kind: SeriesKind, points: Vec<DVec3>) -> Result<SeriesKey> {
        check_anchor_count(kind, &points)?;
        Ok(self.push_series(kind, None, points))
    }

    /// Appends a new series carrying an explicit name.
    pub fn add_named_series(
        &mut self,
        kind: SeriesKind,
        name: impl Into<String>,
        points: Vec<DVec3>,
    ) -> Result<SeriesKey> {
        check_anchor_count(kind, &points)?;
        Ok(self.push_series(kind, Some(name.into()), points))
    }

    fn push_series(
        &mut self,
        kind: SeriesKind,
        name: Option<String>,
        points: Vec<DVec3>,
    ) -> SeriesKey {
        let key = SeriesKey::new(kind, self.count(kind));
        let name = name.unwrap_or_else(|| key.to_string());
        self.series
            .insert(key, Series::new(key, name, points, &self.params));
        key
    }

    /// Re-projects every series from its world points.
    pub fn refresh_all(&mut self, camera: &CameraModel, viewport: Viewport) {
        self.params = camera.projection_params(viewport);
        for series in self.series.values_mut() {
            series.reproject(&self.params);
        }
        log::debug!(
            "re-projected {} series into {}x{}",
            self.series.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Removes every scatter series. Anchor and orbit series are kept.
    pub fn clear(&mut self) {
        self.clear_kind(SeriesKind::Scatter);
    }

    /// Removes every anchor series.
    pub fn clear_anchors(&mut self) {
        self.clear_kind(SeriesKind::Anchor);
    }

    /// Removes every orbit series.
    pub fn clear_orbits(&mut self) {
        self.clear_kind(SeriesKind::Orbit);
    }

    /// Removes every series of every kind.
    pub fn clear_all(&mut self) {
        self.series.clear();
    }

    /// Removes every series of one kind.
    pub fn clear_kind(&mut self, kind: SeriesKind) {
        self.series.retain(|key, _| key.kind != kind);
    }

    /// Returns the number of series of a kind, which is also the next index.
    #[must_use]
    pub fn count(&self, kind: SeriesKind) -> usize {
        self.iter_kind(kind).count()
    }

    /// Returns the total number of series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Gets a series by key.
    #[must_use]
    pub fn get(&self, key: SeriesKey) -> Option<&Series> {
        self.series.get(&key)
    }

    /// Gets the projection cache of a series.
    #[must_use]
    pub fn projected(&self, key: SeriesKey) -> Option<&[DVec2]> {
        self.series.get(&key).map(Series::projected)
    }

    /// Finds a series by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Series> {
        self.series.values().find(|s| s.name == name)
    }

    /// Iterates over the series of one kind in index order.
    pub fn iter_kind(&self, kind: SeriesKind) -> impl Iterator<Item = &Series> {
        self.series
            .range(SeriesKey::new(kind, 0)..=SeriesKey::new(kind, usize::MAX))
            .map(|(_, s)| s)
    }

    /// Iterates over all series, grouped by kind.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }
}

fn check_anchor_count(kind: SeriesKind, points: &[DVec3]) -> Result<()> {
    if kind == SeriesKind::Anchor && points.len() != ANCHOR_VECTORS {
        log::warn!("rejected anchor series with {} vectors", points.len());
        return Err(PlotError::AnchorCount {
            expected: ANCHOR_VECTORS,
            actual: points.len(),
        });
    }
    Ok(())
}
