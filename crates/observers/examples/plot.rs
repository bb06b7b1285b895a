//! Interactive visualizations of the saddle solvers.
//!
//! Each mode searches for the saddle point of `L(x, y) = x² − y²` from
//! `(1, 1)` and opens an interactive plot window showing what the solver did.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- surface
//! cargo run --example plot --features plot -- surface etgd
//! cargo run --example plot --features plot -- surface itgd
//! cargo run --example plot --features plot -- convergence
//! ```
//!
//! Set `RUST_LOG=saddle_solvers=trace` to see each step logged.
//!
//! # Modes
//!
//! - **surface [gda|etgd|itgd]** — Draw the saddle surface with the chosen
//!   algorithm's trajectory on top. Gradient descent ascent (the default)
//!   contracts both coordinates by 0.8 per step straight into the origin.
//!
//! - **convergence** — Plot the gradient norm per iteration for all three
//!   algorithms on a log scale.

use std::error::Error;

use saddle_core::{Loss, Point, functions::Hyperbolic};
use saddle_observers::{
    PlotObserver, ShowConfig, SurfacePlot,
    surface::{self, Mesh},
};
use saddle_solvers::saddle::{
    Algorithm, Config, Event, SaddlePoint, explicit_twisted, gradient_descent_ascent,
    implicit_twisted,
};

const START: Point = Point { x: 1.0, y: 1.0 };

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "surface".into());
    match mode.as_str() {
        "surface" => {
            let selector = std::env::args().nth(2).unwrap_or_else(|| "gda".into());
            surface(&selector)
        }
        "convergence" => convergence(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [surface [gda|etgd|itgd]|convergence]");
            std::process::exit(1);
        }
    }
}

// --- Surface -----------------------------------------------------------------

/// Solve with the named algorithm and draw its trajectory over the surface.
///
/// The twisted variants take smaller steps, so they use the shorter
/// [`Config::twisted`] budget.
fn surface(selector: &str) -> Result<(), Box<dyn Error>> {
    let algorithm: Algorithm = selector.parse()?;
    let config = match algorithm {
        Algorithm::GradientDescentAscent => Config::default(),
        Algorithm::ExplicitTwisted | Algorithm::ImplicitTwisted => Config::twisted(0.1)?,
    };

    let loss = Loss::new(Hyperbolic);
    let mut saddle = SaddlePoint::new(&loss);
    let solution = saddle.optimize(START, algorithm, &config)?;
    println!(
        "{algorithm}: {:?} after {} iterations at {} with ‖∇L‖ = {:.3e}",
        solution.status, solution.iters, solution.point, solution.gradient_norm
    );

    let trajectory = &solution.trajectory;
    let mesh = Mesh::around(trajectory, |x, y| loss.value_at(x, y));
    let path = surface::lift(trajectory, |x, y| loss.value_at(x, y));

    SurfacePlot::new(mesh)
        .trajectory(path)
        .title(format!("{algorithm} on L(x, y) = x² − y² from {START}"))
        .show()?;

    Ok(())
}

// --- Convergence -------------------------------------------------------------

/// Overlay the gradient norm histories of every algorithm.
///
/// GDA is recorded live through a closure observer; the twisted runs are
/// loaded from their stored trajectories afterwards.
fn convergence() -> Result<(), Box<dyn Error>> {
    let loss = Loss::new(Hyperbolic);
    let mut obs = PlotObserver::<3>::new(["GDA", "Explicit twisted", "Implicit twisted"]);

    gradient_descent_ascent::solve(&loss, START, &Config::default(), |event: &Event| {
        #[allow(clippy::cast_precision_loss)]
        let iter = event.iter as f64;
        obs.record(iter, [Some(event.gradient_norm), None, None]);
        None
    })?;

    let twisted = Config::twisted(0.1)?;
    let explicit = explicit_twisted::solve_unobserved(&loss, START, &twisted)?;
    let implicit = implicit_twisted::solve_unobserved(&loss, START, &twisted)?;
    for (i, norm) in explicit.trajectory.gradient_norms().iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        obs.record(i as f64, [None, Some(*norm), None]);
    }
    for (i, norm) in implicit.trajectory.gradient_norms().iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        obs.record(i as f64, [None, None, Some(*norm)]);
    }

    obs.show(
        ShowConfig::new()
            .title("Gradient norm: L(x, y) = x² − y² from (1, 1)")
            .x_label("Iteration")
            .y_label("‖∇L‖")
            .log_y()
            .legend(),
    )?;

    Ok(())
}
