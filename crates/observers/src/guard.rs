use saddle_core::Observer;

use crate::traits::{CanStopEarly, HasGradientNorm, HasPoint};

/// Stops a solve once the iterates have clearly run away.
///
/// The guard requests a stop when the gradient norm exceeds `max_norm`, when
/// the point leaves the box `|x|, |y| <= max_reach`, or when the gradient norm
/// has grown for `patience` consecutive events.
#[derive(Debug, Clone)]
pub struct DivergenceGuard {
    max_norm: f64,
    max_reach: f64,
    patience: usize,
    growing: usize,
    previous: Option<f64>,
}

impl DivergenceGuard {
    /// Creates a guard with no limits; enable them with the builder methods.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_norm: f64::INFINITY,
            max_reach: f64::INFINITY,
            patience: usize::MAX,
            growing: 0,
            previous: None,
        }
    }

    /// Stops once the gradient norm exceeds `max_norm`.
    #[must_use]
    pub fn max_norm(mut self, max_norm: f64) -> Self {
        self.max_norm = max_norm;
        self
    }

    /// Stops once `|x|` or `|y|` exceeds `max_reach`.
    #[must_use]
    pub fn max_reach(mut self, max_reach: f64) -> Self {
        self.max_reach = max_reach;
        self
    }

    /// Stops after the gradient norm grows for `patience` events in a row.
    #[must_use]
    pub fn patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }
}

impl Default for DivergenceGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for DivergenceGuard
where
    E: HasGradientNorm + HasPoint,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let norm = event.gradient_norm();

        self.growing = match self.previous {
            Some(previous) if norm > previous => self.growing + 1,
            _ => 0,
        };
        self.previous = Some(norm);

        let diverged = norm > self.max_norm
            || event.point().max_abs() > self.max_reach
            || self.growing >= self.patience;

        diverged.then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use saddle_core::{
        Loss, Point,
        functions::{Bilinear, Hyperbolic},
    };
    use saddle_solvers::saddle::{Config, Status, gradient_descent_ascent};

    #[test]
    fn stops_spiralling_gradient_descent_ascent() {
        let loss = Loss::new(Bilinear);
        let config = Config::new(0.1, 1e-5, 10_000).unwrap();
        let guard = DivergenceGuard::new().patience(25);

        let solution =
            gradient_descent_ascent::solve(&loss, Point::new(1.0, 1.0), &config, guard).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 25);
    }

    #[test]
    fn stops_when_point_leaves_box() {
        let loss = Loss::new(Bilinear);
        let config = Config::new(0.5, 1e-5, 10_000).unwrap();
        let guard = DivergenceGuard::new().max_reach(10.0);

        let solution =
            gradient_descent_ascent::solve(&loss, Point::new(1.0, 1.0), &config, guard).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.point.max_abs() > 10.0);
        let before_last = solution.trajectory.points()[solution.iters - 1];
        assert!(before_last.max_abs() <= 10.0);
    }

    #[test]
    fn stops_when_norm_exceeds_limit() {
        let loss = Loss::new(Hyperbolic);
        let config = Config::default();
        let guard = DivergenceGuard::new().max_norm(1.0);

        let solution =
            gradient_descent_ascent::solve(&loss, Point::new(1.0, 1.0), &config, guard).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn leaves_converging_runs_alone() {
        let loss = Loss::new(Hyperbolic);
        let config = Config::default();
        let guard = DivergenceGuard::new().max_norm(10.0).patience(3);

        let solution =
            gradient_descent_ascent::solve(&loss, Point::new(1.0, 1.0), &config, guard).unwrap();

        assert_eq!(solution.status, Status::Converged);
    }
}
