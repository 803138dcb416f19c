//! Demo content: random stars on a sphere and a wavy ring.

use std::f64::consts::PI;

use astroplot_core::{DVec3, Result, SeriesKey};
use rand::Rng;

use crate::viewer::AstroPlot;

/// Returns `count` points uniformly sampled in angle on a sphere of `radius`.
pub fn sphere_points(rng: &mut impl Rng, count: usize, radius: f64) -> Vec<DVec3> {
    (0..count)
        .map(|_| {
            let theta = PI * rng.gen::<f64>();
            let phi = 2.0 * PI * rng.gen::<f64>();
            DVec3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.sin() * phi.sin(),
                radius * theta.cos(),
            )
        })
        .collect()
}

/// Returns `samples` points on a ring of `radius` that oscillates ten times
/// per revolution, up to 10 degrees above and below the equator.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn wavy_ring(samples: usize, radius: f64) -> Vec<DVec3> {
    let n = samples as f64;
    (0..samples)
        .map(|i| {
            let t = i as f64 / n;
            let theta = 10.0_f64.to_radians() * (10.0 * 2.0 * PI * t).sin();
            let phi = 2.0 * PI * t;
            DVec3::new(
                radius * theta.cos() * phi.cos(),
                radius * theta.cos() * phi.sin(),
                radius * theta.sin(),
            )
        })
        .collect()
}

/// Fills `plot` with the demo scene: an axis widget sized to the unit sphere,
/// five scatter series of a hundred stars each, and the wavy ring as a sixth
/// scatter series.
pub fn populate(plot: &mut AstroPlot, rng: &mut impl Rng) -> Result<Vec<SeriesKey>> {
    plot.clear();
    plot.draw_axes(3)?;

    let mut keys = Vec::with_capacity(6);
    for _ in 0..5 {
        keys.push(plot.add_scatter_series(sphere_points(&mut *rng, 100, 1.0)));
    }
    keys.push(plot.add_scatter_series(wavy_ring(200, 1.0)));
    log::info!("populated demo scene with {} series", keys.len());
    Ok(keys)
}
