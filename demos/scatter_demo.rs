//! Builds the demo scene and prints what a host would paint.
//!
//! Run with: `RUST_LOG=debug cargo run --example scatter_demo`

use astroplot::demo;
use astroplot::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    init_logging();

    let mut plot = AstroPlot::new(Viewport::new(800.0, 600.0));
    plot.subscribe(|update| {
        log::debug!(
            "{:?}: {} series in {}x{}",
            update.reason,
            update.series,
            update.viewport.width,
            update.viewport.height
        );
    });

    let mut rng = StdRng::seed_from_u64(2020);
    demo::populate(&mut plot, &mut rng)?;

    // A small circular orbit sampled every 30 degrees.
    let orbit = (0..12)
        .map(|i| {
            let t = f64::from(i) * std::f64::consts::TAU / 12.0;
            DVec3::new(0.6 * t.cos(), 0.6 * t.sin(), 0.0)
        })
        .collect();
    plot.add_orbit_series(orbit);

    // Simulate a user dragging a quarter turn and zooming in.
    plot.pointer_down(PointerButton::Primary, DVec2::new(400.0, 300.0));
    for step in 1..=10 {
        plot.pointer_move(DVec2::new(400.0 + f64::from(step) * 23.5, 300.0));
    }
    plot.pointer_up(PointerButton::Primary);
    plot.wheel(600.0);

    let list = plot.draw_list();
    println!(
        "azimuth {:.3}, elevation {:.3}, distance {:.2}",
        plot.camera().azimuth(),
        plot.camera().elevation(),
        plot.camera().distance()
    );
    println!(
        "{} draw commands ({} line vertices, {} dots)",
        list.len(),
        list.line_vertices().len(),
        list.dot_instances().len()
    );
    Ok(())
}
