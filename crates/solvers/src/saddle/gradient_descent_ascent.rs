//! Simultaneous gradient descent/ascent.
//!
//! Each step descends in `x` and ascends in `y` from a single gradient
//! evaluation:
//!
//! ```text
//! z_{i+1} = z_i − η · J · ∇L(z_i),   J = diag(1, −1)
//! ```
//!
//! The tolerance is checked **before** each update, so a starting point whose
//! gradient norm is already below tolerance returns a one-point trajectory.

use saddle_core::{Observer, Point, SaddleProblem};

use super::{
    Action, Config, Error, Event, Solution,
    evaluate::Gradient,
    iterate::{Check, iterate},
};

/// Runs gradient descent/ascent from `initial`.
///
/// The observer receives an [`Event`] for the initial point and after each
/// step, and may return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns an error if the problem fails. A run that overflows is not an
/// error and ends with [`Status::Diverged`](super::Status::Diverged).
pub fn solve<P, Obs>(
    problem: &P,
    initial: Point,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: SaddleProblem,
    Obs: Observer<Event, Action>,
{
    let lr = config.learning_rate();
    iterate(
        problem,
        initial,
        config,
        Check::BeforeStep,
        observer,
        |_, point, grad| Ok(step(point, grad, lr)),
    )
}

/// Runs gradient descent/ascent without observation.
///
/// # Errors
///
/// Returns an error if the problem fails. A run that overflows is not an
/// error and ends with [`Status::Diverged`](super::Status::Diverged).
pub fn solve_unobserved<P: SaddleProblem>(
    problem: &P,
    initial: Point,
    config: &Config,
) -> Result<Solution, Error> {
    solve(problem, initial, config, ())
}

fn step(point: Point, grad: &Gradient, lr: f64) -> Point {
    let [dx, dy] = grad.components;
    Point::new(point.x - lr * dx, point.y + lr * dy)
}
