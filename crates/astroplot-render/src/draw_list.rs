//! Draw commands built from the projection caches.
//!
//! The draw list is what a host surface needs to paint one frame: filled dots
//! and lines in viewport pixels. It holds no state between frames.

use astroplot_core::{PlotOptions, Series, SeriesKind, SeriesStore};
use glam::{DVec2, Vec4};

use crate::color::{axis_color, series_color, ORBIT_CENTER_COLOR};
use crate::vertex::{DotInstance, ScreenVertex};

/// Sizes and toggles that affect drawing only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    pub small_dot_size: f32,
    pub medium_dot_size: f32,
    pub large_dot_size: f32,
    pub axes_thickness: f32,
    pub show_axes_widget: bool,
}

impl DrawStyle {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_options(options: &PlotOptions) -> Self {
        Self {
            small_dot_size: options.small_dot_size as f32,
            medium_dot_size: options.medium_dot_size as f32,
            large_dot_size: options.large_dot_size as f32,
            axes_thickness: options.axes_thickness as f32,
            show_axes_widget: options.show_axes_widget,
        }
    }
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self::from_options(&PlotOptions::default())
    }
}

/// A single primitive in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A straight line segment.
    Line {
        from: DVec2,
        to: DVec2,
        width: f32,
        color: Vec4,
    },
    /// A filled circle.
    Dot {
        center: DVec2,
        diameter: f32,
        color: Vec4,
    },
}

/// Ordered draw commands for one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Builds the frame from every series in `store`.
    ///
    /// Anchors are drawn first as lines from the viewport center, then scatter
    /// dots, then orbits with one central marker per orbit series. Points with
    /// non-finite projections are skipped.
    #[must_use]
    pub fn build(store: &SeriesStore, style: &DrawStyle) -> Self {
        let center = store.viewport().center();
        let mut list = Self::default();

        if style.show_axes_widget {
            for series in store.iter_kind(SeriesKind::Anchor) {
                for (component, &p) in series.projected().iter().enumerate() {
                    if p.is_finite() {
                        list.commands.push(DrawCommand::Line {
                            from: center,
                            to: p,
                            width: style.axes_thickness,
                            color: axis_color(component),
                        });
                    }
                }
            }
        }

        for series in store.iter_kind(SeriesKind::Scatter) {
            list.push_dots(series, style.small_dot_size);
        }

        for series in store.iter_kind(SeriesKind::Orbit) {
            if series.is_empty() {
                continue;
            }
            list.commands.push(DrawCommand::Dot {
                center,
                diameter: style.large_dot_size,
                color: ORBIT_CENTER_COLOR,
            });
            list.push_dots(series, style.medium_dot_size);
        }

        log::trace!("built draw list with {} commands", list.commands.len());
        list
    }

    fn push_dots(&mut self, series: &Series, diameter: f32) {
        let color = series_color(series.index());
        self.commands.extend(
            series
                .projected()
                .iter()
                .filter(|p| p.is_finite())
                .map(|&center| DrawCommand::Dot {
                    center,
                    diameter,
                    color,
                }),
        );
    }

    /// Returns the commands in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns line endpoints as vertex pairs, ready for a line-list buffer.
    #[must_use]
    pub fn line_vertices(&self) -> Vec<ScreenVertex> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Line {
                    from, to, color, ..
                } => Some([ScreenVertex::new(from, color), ScreenVertex::new(to, color)]),
                DrawCommand::Dot { .. } => None,
            })
            .flatten()
            .collect()
    }

    /// Returns one instance per dot, ready for an instanced draw.
    #[must_use]
    pub fn dot_instances(&self) -> Vec<DotInstance> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Dot {
                    center,
                    diameter,
                    color,
                } => Some(DotInstance::new(center, diameter, color)),
                DrawCommand::Line { .. } => None,
            })
            .collect()
    }
}
