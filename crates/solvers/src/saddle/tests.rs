use std::convert::Infallible;

use approx::assert_relative_eq;
use saddle_core::{
    HessianProblem, Loss, Point, SaddleProblem,
    functions::{Bilinear, Hyperbolic, QuadraticSaddle},
};

use super::*;

fn run<P: HessianProblem>(
    algorithm: Algorithm,
    problem: &P,
    start: Point,
    config: &Config,
) -> Result<Solution, Error> {
    match algorithm {
        Algorithm::GradientDescentAscent => {
            gradient_descent_ascent::solve_unobserved(problem, start, config)
        }
        Algorithm::ExplicitTwisted => explicit_twisted::solve_unobserved(problem, start, config),
        Algorithm::ImplicitTwisted => implicit_twisted::solve_unobserved(problem, start, config),
    }
}

#[test]
fn trajectory_length_matches_iterations() {
    let loss = Loss::new(QuadraticSaddle::new(1.0, 0.5, 2.0));
    let configs = [
        Config::new(0.1, 1e-5, 1000).unwrap(),
        Config::new(0.1, 1e-5, 7).unwrap(),
        Config::new(0.1, 1e-5, 0).unwrap(),
    ];

    for algorithm in Algorithm::ALL {
        for config in &configs {
            let solution = run(algorithm, &loss, Point::new(1.0, -1.0), config).unwrap();
            assert_eq!(solution.trajectory.len(), solution.iters + 1, "{algorithm}");
            assert_eq!(
                solution.trajectory.gradient_norms().len(),
                solution.iters + 1,
                "{algorithm}"
            );
            assert!(solution.iters <= config.max_iters());
        }
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let loss = Loss::new(Bilinear);
    let config = Config::new(0.3, 1e-6, 250).unwrap();
    let start = Point::new(0.7, -1.3);

    for algorithm in Algorithm::ALL {
        let first = run(algorithm, &loss, start, &config).unwrap();
        let second = run(algorithm, &loss, start, &config).unwrap();
        assert_eq!(first.trajectory, second.trajectory, "{algorithm}");
        assert_eq!(first.status, second.status);
    }
}

#[test]
fn explicit_and_implicit_differ_after_one_step() {
    let loss = Loss::new(Hyperbolic);
    let config = Config::new(0.1, 1e-5, 1).unwrap();
    let start = Point::new(1.0, 1.0);

    let explicit = explicit_twisted::solve_unobserved(&loss, start, &config).unwrap();
    let implicit = implicit_twisted::solve_unobserved(&loss, start, &config).unwrap();

    assert_relative_eq!(explicit.point.x, 0.8, epsilon = 1e-12);
    assert!((explicit.point.x - implicit.point.x).abs() > 1e-3);
    assert!((explicit.point.y - implicit.point.y).abs() > 1e-3);
}

#[test]
fn explicit_twisted_matches_gradient_descent_ascent_updates() {
    // Same update rule; only the stopping check differs.
    let loss = Loss::new(QuadraticSaddle::new(1.0, 2.0, 1.0));
    let config = Config::new(0.05, 1e-12, 40).unwrap();
    let start = Point::new(1.0, 2.0);

    let explicit = explicit_twisted::solve_unobserved(&loss, start, &config).unwrap();
    let simultaneous = gradient_descent_ascent::solve_unobserved(&loss, start, &config).unwrap();

    assert_eq!(explicit.trajectory, simultaneous.trajectory);
}

#[test]
fn observer_can_stop_early() {
    let loss = Loss::new(Hyperbolic);
    let config = Config::default();

    let solution = gradient_descent_ascent::solve(
        &loss,
        Point::new(1.0, 1.0),
        &config,
        |event: &Event| (event.iter == 5).then_some(Action::StopEarly),
    )
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.trajectory.len(), 6);
}

#[test]
fn observer_can_stop_before_first_step() {
    let loss = Loss::new(Hyperbolic);
    let config = Config::twisted(0.1).unwrap();
    let start = Point::new(1.0, 1.0);

    let solution = implicit_twisted::solve(&loss, start, &config, |_: &Event| {
        Some(Action::StopEarly)
    })
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.point, start);
}

#[test]
fn events_carry_trajectory_points_and_norms() {
    let loss = Loss::new(Hyperbolic);
    let config = Config::new(0.1, 1e-5, 10).unwrap();
    let mut events = Vec::new();

    let solution = explicit_twisted::solve(&loss, Point::new(1.0, 1.0), &config, |e: &Event| {
        events.push(*e);
        None
    })
    .unwrap();

    assert_eq!(events.len(), solution.trajectory.len());
    for (event, (point, norm)) in events.iter().zip(solution.trajectory.iter()) {
        assert_eq!(event.point, point);
        assert_eq!(event.gradient_norm, norm);
        assert_relative_eq!(event.gradient[0].hypot(event.gradient[1]), norm);
    }
}

#[derive(Debug, thiserror::Error)]
#[error("left the domain at {0}")]
struct OutOfDomain(Point);

/// `L(x, y) = x² − y²` on the disk of radius 2.
struct Disk;

impl SaddleProblem for Disk {
    type Error = OutOfDomain;

    fn value(&self, point: Point) -> Result<f64, Self::Error> {
        let [dx, dy] = self.gradient(point)?;
        Ok(0.25 * (dx * dx - dy * dy))
    }

    fn gradient(&self, point: Point) -> Result<[f64; 2], Self::Error> {
        if point.x.hypot(point.y) > 2.0 {
            return Err(OutOfDomain(point));
        }
        Ok([2.0 * point.x, -2.0 * point.y])
    }
}

impl HessianProblem for Disk {
    fn hessian(&self, _point: Point) -> Result<[[f64; 2]; 2], Self::Error> {
        Ok([[2.0, 0.0], [0.0, -2.0]])
    }
}

#[test]
fn problem_errors_propagate() {
    let config = Config::default();

    for algorithm in Algorithm::ALL {
        let err = run(algorithm, &Disk, Point::new(3.0, 0.0), &config).unwrap_err();
        let Error::Problem(source) = err else {
            panic!("expected problem error for {algorithm}");
        };
        assert!(source.downcast_ref::<OutOfDomain>().is_some());
    }
}

/// Gradient that blows up away from the y axis.
struct Blowup;

impl SaddleProblem for Blowup {
    type Error = Infallible;

    fn value(&self, _point: Point) -> Result<f64, Self::Error> {
        Ok(0.0)
    }

    fn gradient(&self, point: Point) -> Result<[f64; 2], Self::Error> {
        Ok([if point.x < 0.5 { f64::NAN } else { 1.0 }, 0.0])
    }
}

#[test]
fn non_finite_gradient_ends_run_as_diverged() {
    // One step of size 1 moves x from 1.0 to 0.0, where the gradient is NaN.
    let config = Config::new(1.0, 1e-5, 10).unwrap();

    let solutions = [
        gradient_descent_ascent::solve_unobserved(&Blowup, Point::new(1.0, 0.0), &config).unwrap(),
        explicit_twisted::solve_unobserved(&Blowup, Point::new(1.0, 0.0), &config).unwrap(),
    ];

    for solution in solutions {
        assert_eq!(solution.status, Status::Diverged);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.trajectory.len(), 2);
        assert_eq!(solution.point, Point::new(0.0, 0.0));
        assert!(solution.gradient_norm.is_nan());
    }
}

#[test]
fn non_finite_start_takes_no_steps() {
    let config = Config::default();

    let solution =
        gradient_descent_ascent::solve_unobserved(&Blowup, Point::new(0.0, 0.0), &config).unwrap();

    assert_eq!(solution.status, Status::Diverged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.trajectory.points(), [Point::new(0.0, 0.0)]);
}

#[test]
fn spiralling_run_keeps_trajectory_after_overflow() {
    // GDA rotates and stretches bilinear iterates by sqrt(1.25) per step
    // until the coordinates overflow.
    let loss = Loss::new(Bilinear);
    let config = Config::new(0.5, 1e-5, 10_000).unwrap();

    let solution =
        gradient_descent_ascent::solve_unobserved(&loss, Point::new(1.0, 1.0), &config).unwrap();

    assert_eq!(solution.status, Status::Diverged);
    assert!(solution.iters < config.max_iters());
    assert_eq!(solution.trajectory.len(), solution.iters + 1);
    assert_eq!(solution.trajectory.gradient_norms().len(), solution.iters + 1);
    assert!(!solution.point.is_finite() || !solution.gradient_norm.is_finite());

    let before_overflow = solution.trajectory.points()[solution.iters - 1];
    assert!(before_overflow.is_finite());
}

#[test]
fn errors_display_context() {
    let err = Error::SingularSystem {
        iter: 3,
        point: Point::new(1.0, 2.0),
    };
    assert_eq!(
        err.to_string(),
        "singular system J + ηH at iteration 3, point (1, 2)"
    );

    let err = Error::HessianRequired(Algorithm::ImplicitTwisted);
    assert_eq!(
        err.to_string(),
        "implicit_twisted_gradient_descent requires a Hessian"
    );
}
