use saddle_core::{Observer, Point, SaddleProblem};
use tracing::{debug, trace};

use super::{
    Action, Config, Error, Event, Solution, Status, Trajectory,
    evaluate::{Gradient, gradient},
};

/// When the tolerance is compared against the gradient norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Check {
    /// Before each update, at the current point. A converged initial point
    /// takes no steps.
    BeforeStep,

    /// After each update, at the new point. The initial point is never
    /// checked.
    AfterStep,
}

/// Core iteration shared by every update rule.
///
/// `step` maps the current iteration, point, and gradient to the next point.
/// The gradient at each point is evaluated exactly once and reused both for
/// the convergence check and for the following step.
pub(super) fn iterate<P, Obs, S>(
    problem: &P,
    initial: Point,
    config: &Config,
    check: Check,
    mut observer: Obs,
    mut step: S,
) -> Result<Solution, Error>
where
    P: SaddleProblem,
    Obs: Observer<Event, Action>,
    S: FnMut(usize, Point, &Gradient) -> Result<Point, Error>,
{
    let mut trajectory = Trajectory::with_capacity(config.max_iters());
    let mut point = initial;
    let mut grad = gradient(problem, point)?;
    trajectory.push(point, grad.norm);

    if observe(&mut observer, 0, point, &grad) {
        return Ok(finish(Status::StoppedByObserver, trajectory));
    }
    if diverged(point, &grad) {
        return Ok(finish(Status::Diverged, trajectory));
    }

    for iter in 1..=config.max_iters() {
        if check == Check::BeforeStep && grad.norm < config.tolerance() {
            return Ok(finish(Status::Converged, trajectory));
        }

        point = step(iter - 1, point, &grad)?;
        grad = gradient(problem, point)?;
        trajectory.push(point, grad.norm);
        trace!(iter, x = point.x, y = point.y, gradient_norm = grad.norm, "saddle step");

        if observe(&mut observer, iter, point, &grad) {
            return Ok(finish(Status::StoppedByObserver, trajectory));
        }
        if diverged(point, &grad) {
            return Ok(finish(Status::Diverged, trajectory));
        }

        if check == Check::AfterStep && grad.norm < config.tolerance() {
            return Ok(finish(Status::Converged, trajectory));
        }
    }

    let status = if check == Check::BeforeStep && grad.norm < config.tolerance() {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(status, trajectory))
}

/// A non-finite point or gradient cannot produce a meaningful next step.
fn diverged(point: Point, grad: &Gradient) -> bool {
    !point.is_finite() || !grad.is_finite()
}

/// Emits an event and reports whether the observer asked to stop.
fn observe<Obs>(observer: &mut Obs, iter: usize, point: Point, grad: &Gradient) -> bool
where
    Obs: Observer<Event, Action>,
{
    let event = Event {
        iter,
        point,
        gradient: grad.components,
        gradient_norm: grad.norm,
    };
    matches!(observer.observe(&event), Some(Action::StopEarly))
}

fn finish(status: Status, trajectory: Trajectory) -> Solution {
    // The initial point is always pushed before any exit.
    let (point, gradient_norm) = trajectory.last().unwrap_or_default();
    let iters = trajectory.len().saturating_sub(1);
    debug!(?status, iters, x = point.x, y = point.y, gradient_norm, "saddle solve finished");

    Solution {
        status,
        point,
        gradient_norm,
        trajectory,
        iters,
    }
}
