//! Implicit twisted gradient descent (ITGD).
//!
//! From Essid, Tabak, and Trigila (2019). The implicit update would use the
//! gradient at the next point; linearizing that gradient with the current
//! Hessian turns each step into a 2×2 linear solve:
//!
//! ```text
//! z_{i+1} = z_i − η · (J + η · H(z_i))⁻¹ · ∇L(z_i),   J = diag(1, −1)
//! ```
//!
//! For quadratic `L` this is exactly the backward step
//! `z_{i+1} = z_i − η · J · ∇L(z_{i+1})`.
//!
//! The tolerance is checked **after** each update, as in
//! [`explicit_twisted`](super::explicit_twisted). A singular `J + η·H` aborts
//! the run; there is no regularization or fallback.

use nalgebra::{Matrix2, Vector2};
use saddle_core::{HessianProblem, Observer, Point};

use super::{
    Action, Config, Error, Event, Solution,
    evaluate::Gradient,
    iterate::{Check, iterate},
};

/// Runs implicit twisted gradient descent from `initial`.
///
/// The observer receives an [`Event`] for the initial point and after each
/// step, and may return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns an error if the problem fails or if `J + η·H` is singular at an
/// iterate. A run that overflows ends with [`Status::Diverged`](super::Status::Diverged).
pub fn solve<P, Obs>(
    problem: &P,
    initial: Point,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: HessianProblem,
    Obs: Observer<Event, Action>,
{
    let lr = config.learning_rate();
    iterate(
        problem,
        initial,
        config,
        Check::AfterStep,
        observer,
        |iter, point, grad| step(problem, iter, point, grad, lr),
    )
}

/// Runs implicit twisted gradient descent without observation.
///
/// # Errors
///
/// Returns an error if the problem fails or if `J + η·H` is singular at an
/// iterate. A run that overflows ends with [`Status::Diverged`](super::Status::Diverged).
pub fn solve_unobserved<P: HessianProblem>(
    problem: &P,
    initial: Point,
    config: &Config,
) -> Result<Solution, Error> {
    solve(problem, initial, config, ())
}

fn step<P: HessianProblem>(
    problem: &P,
    iter: usize,
    point: Point,
    grad: &Gradient,
    lr: f64,
) -> Result<Point, Error> {
    let [[hxx, hxy], [hyx, hyy]] = problem.hessian(point).map_err(Error::problem)?;
    let system = Matrix2::new(1.0 + lr * hxx, lr * hxy, lr * hyx, -1.0 + lr * hyy);
    let [dx, dy] = grad.components;

    let direction = system
        .lu()
        .solve(&Vector2::new(dx, dy))
        .ok_or(Error::SingularSystem { iter, point })?;

    Ok(Point::new(
        point.x - lr * direction.x,
        point.y - lr * direction.y,
    ))
}
