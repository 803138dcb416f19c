//! Integration tests for the plot viewer.
//!
//! These drive the public API the way a host would: add data, forward input
//! events, and read back the projection caches and draw list.

use astroplot::*;
use proptest::prelude::*;

fn plot() -> AstroPlot {
    AstroPlot::new(Viewport::new(400.0, 400.0))
}

fn scatter(index: usize) -> SeriesKey {
    SeriesKey::new(SeriesKind::Scatter, index)
}

/// Every cache must equal a fresh projection under the current camera.
fn assert_caches_fresh(plot: &AstroPlot) {
    let params = plot.camera().projection_params(plot.viewport());
    for series in plot.store().iter() {
        assert_eq!(
            series.projected(),
            params.project(series.points()),
            "stale cache in {}",
            series.key()
        );
    }
}

fn populated() -> AstroPlot {
    let mut plot = plot();
    plot.add_scatter_series(vec![
        DVec3::new(0.3, -0.7, 0.2),
        DVec3::new(-0.9, 0.1, 0.4),
        DVec3::new(0.0, 0.0, 1.0),
    ]);
    plot.add_orbit_series(vec![DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 1.0, 0.0)]);
    plot.draw_axes(2).unwrap();
    plot
}

#[test]
fn test_origin_projects_to_viewport_center() {
    let mut plot = plot();
    assert_eq!(plot.camera().distance(), 6.0);
    assert_eq!(plot.camera().azimuth(), 0.3);
    assert_eq!(plot.camera().elevation(), 0.3);
    assert_eq!(plot.camera().focal_length(), 900.0);

    plot.add_scatter_point(DVec3::ZERO, 0).unwrap();
    let p = plot.store().projected(scatter(0)).unwrap()[0];
    assert!((p - DVec2::new(200.0, 200.0)).length() < 1e-9);
}

#[test]
fn test_axis_anchors_are_distinct_and_off_center() {
    let mut plot = plot();
    let l = 1.5;
    let key = plot
        .add_axis_anchor_series(vec![
            DVec3::new(l, 0.0, 0.0),
            DVec3::new(0.0, -l, 0.0),
            DVec3::new(0.0, 0.0, l),
        ])
        .unwrap();

    let projected = plot.store().projected(key).unwrap();
    assert_eq!(projected.len(), 3);
    let center = DVec2::new(200.0, 200.0);
    for (i, a) in projected.iter().enumerate() {
        assert!((*a - center).length() > 1.0);
        for b in &projected[i + 1..] {
            assert!((*a - *b).length() > 1.0);
        }
    }
}

#[test]
fn test_caches_fresh_after_every_mutation() {
    let mut plot = populated();
    assert_caches_fresh(&plot);

    plot.set_azimuth(-1.2);
    assert_caches_fresh(&plot);
    plot.set_elevation(0.9);
    assert_caches_fresh(&plot);
    plot.set_distance(3.0);
    assert_caches_fresh(&plot);
    plot.set_focal_length(450.0);
    assert_caches_fresh(&plot);
    plot.resize(Viewport::new(1024.0, 768.0));
    assert_caches_fresh(&plot);

    plot.pointer_down(PointerButton::Primary, DVec2::new(500.0, 400.0));
    plot.pointer_move(DVec2::new(620.0, 310.0));
    assert_caches_fresh(&plot);
    plot.pointer_up(PointerButton::Primary);

    plot.wheel(-240.0);
    assert_caches_fresh(&plot);

    plot.add_scatter_point(DVec3::new(0.5, 0.5, 0.5), 0).unwrap();
    assert_caches_fresh(&plot);
}

#[test]
fn test_resize_shifts_by_center_delta_only() {
    let mut plot = populated();
    let before: Vec<Vec<DVec2>> = plot
        .store()
        .iter()
        .map(|s| s.projected().to_vec())
        .collect();
    let camera = plot.camera().clone();

    plot.resize(Viewport::new(900.0, 250.0));

    assert_eq!(plot.camera().azimuth(), camera.azimuth());
    assert_eq!(plot.camera().elevation(), camera.elevation());
    assert_eq!(plot.camera().distance(), camera.distance());

    let shift = DVec2::new(250.0, -75.0);
    for (old, series) in before.iter().zip(plot.store().iter()) {
        for (a, b) in old.iter().zip(series.projected()) {
            assert!((*b - (*a + shift)).length() < 1e-9);
        }
    }
}

#[test]
fn test_distance_floor_through_wheel_and_setter() {
    let mut plot = plot();
    plot.set_distance(-4.0);
    assert_eq!(plot.camera().distance(), MIN_DISTANCE);

    plot.set_distance(6.0);
    plot.wheel(1.0e6);
    assert_eq!(plot.camera().distance(), MIN_DISTANCE);
}

#[test]
fn test_sequencing_error_leaves_state_untouched() {
    let mut plot = populated();
    let before = plot.store().len();
    let err = plot.add_scatter_point(DVec3::ONE, 5).unwrap_err();
    assert!(matches!(err, PlotError::IndexOutOfSequence { index: 5, .. }));
    assert_eq!(plot.store().len(), before);
    assert_eq!(plot.store().get(scatter(0)).unwrap().len(), 3);
}

#[test]
fn test_clear_is_scatter_only() {
    let mut plot = populated();
    plot.clear();
    assert_eq!(plot.store().count(SeriesKind::Scatter), 0);
    assert_eq!(plot.store().count(SeriesKind::Orbit), 1);
    assert_eq!(plot.store().count(SeriesKind::Anchor), 1);

    plot.clear_anchors();
    plot.clear_orbits();
    assert!(plot.store().is_empty());
}

#[test]
fn test_draw_list_covers_all_kinds() {
    let plot = populated();
    let list = plot.draw_list();
    let lines = list
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    // 3 axis lines, 3 scatter dots, 1 central marker and 2 orbit bodies.
    assert_eq!(lines, 3);
    assert_eq!(list.len(), 9);
}

#[test]
fn test_options_from_json_drive_new_plot() {
    let options =
        PlotOptions::from_json_str(r#"{ "distance": 0.01, "movement_sensitivity": 75.0 }"#)
            .unwrap();
    let mut plot = AstroPlot::with_options(options, Viewport::new(400.0, 400.0));
    assert_eq!(plot.camera().distance(), MIN_DISTANCE);

    plot.pointer_down(PointerButton::Primary, DVec2::ZERO);
    plot.pointer_move(DVec2::new(75.0, 0.0));
    assert!((plot.camera().azimuth() - 1.3).abs() < 1e-12);
}

proptest! {
    #[test]
    fn prop_drag_without_displacement_keeps_azimuth(
        x in 0.0..400.0f64,
        y in 0.0..400.0f64,
        azimuth in -6.0..6.0f64,
    ) {
        let mut plot = plot();
        plot.set_azimuth(azimuth);
        plot.pointer_down(PointerButton::Primary, DVec2::new(x, y));
        plot.pointer_move(DVec2::new(x, y));
        prop_assert_eq!(plot.camera().azimuth(), azimuth);
    }

    #[test]
    fn prop_cache_length_matches_points(
        points in prop::collection::vec((-5.0..5.0f64, -5.0..5.0f64, -5.0..5.0f64), 0..40),
        azimuth in -6.0..6.0f64,
    ) {
        let mut plot = plot();
        let key = plot.add_scatter_series(
            points.iter().map(|&(x, y, z)| DVec3::new(x, y, z)).collect(),
        );
        plot.set_azimuth(azimuth);
        prop_assert_eq!(plot.store().get(key).unwrap().projected().len(), points.len());
    }
}
