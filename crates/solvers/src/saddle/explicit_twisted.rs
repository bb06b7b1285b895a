//! Explicit twisted gradient descent (ETGD).
//!
//! From Essid, Tabak, and Trigila (2019), for `min_x max_y L(x, y)`:
//!
//! ```text
//! x_{i+1} = x_i − η · ∂L/∂x(x_i, y_i)
//! y_{i+1} = y_i + η · ∂L/∂y(x_i, y_i)
//! ```
//!
//! Both partials are read at the pre-update point. The tolerance is checked
//! **after** each update, against the gradient at the new point; the initial
//! gradient norm is recorded but never compared, so every run with a nonzero
//! iteration budget takes at least one step.

use saddle_core::{Observer, Point, SaddleProblem};

use super::{
    Action, Config, Error, Event, Solution,
    iterate::{Check, iterate},
};

/// Runs explicit twisted gradient descent from `initial`.
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
        Check::AfterStep,
        observer,
        |_, point, grad| {
            let [dx, dy] = grad.components;
            let x = point.x - lr * dx;
            let y = point.y + lr * dy;
            Ok(Point::new(x, y))
        },
    )
}

/// Runs explicit twisted gradient descent without observation.
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use saddle_core::{Loss, functions::Hyperbolic};

    use crate::saddle::Status;

    #[test]
    fn first_step_on_hyperbolic() {
        let loss = Loss::new(Hyperbolic);
        let config = Config::twisted(0.1).unwrap();

        let solution = solve_unobserved(&loss, Point::new(1.0, 1.0), &config).unwrap();

        let first = solution.trajectory.points()[1];
        assert_relative_eq!(first.x, 0.8);
        assert_relative_eq!(first.y, 0.8);
    }

    #[test]
    fn converged_start_still_takes_one_step() {
        let loss = Loss::new(Hyperbolic);
        let config = Config::twisted(0.1).unwrap();
        let start = Point::new(1e-6, 1e-6);

        let solution = solve_unobserved(&loss, start, &config).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.trajectory.points()[0], start);
        assert_relative_eq!(solution.point.x, 0.8e-6);
    }

    #[test]
    fn stops_on_post_update_norm() {
        // Post-update norms are 2√2 · 0.8^k; the first below 1e-3 is k = 36.
        let loss = Loss::new(Hyperbolic);
        let config = Config::twisted(0.1).unwrap();

        let solution = solve_unobserved(&loss, Point::new(1.0, 1.0), &config).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 36);
        assert!(solution.gradient_norm < 1e-3);
        assert!(solution.trajectory.gradient_norms()[35] >= 1e-3);
    }

    #[test]
    fn converges_on_last_budgeted_step() {
        let loss = Loss::new(Hyperbolic);
        let exact = Config::new(0.1, 1e-3, 36).unwrap();
        let short = Config::new(0.1, 1e-3, 35).unwrap();

        let converged = solve_unobserved(&loss, Point::new(1.0, 1.0), &exact).unwrap();
        let unconverged = solve_unobserved(&loss, Point::new(1.0, 1.0), &short).unwrap();

        assert_eq!(converged.status, Status::Converged);
        assert_eq!(converged.iters, 36);
        assert_eq!(unconverged.status, Status::MaxIters);
        assert_eq!(unconverged.iters, 35);
    }

    #[test]
    fn zero_budget_returns_initial_point() {
        let loss = Loss::new(Hyperbolic);
        let config = Config::new(0.1, 1e-3, 0).unwrap();

        let solution = solve_unobserved(&loss, Point::new(1.0, 1.0), &config).unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.trajectory.len(), 1);
    }
}
