use saddle_core::Point;

use super::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gradient norm dropped below the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// This is not an error; inspect [`Solution::gradient_norm`] to judge
    /// how far from stationary the final point is.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// Reached a point where the point or gradient is not finite.
    ///
    /// The offending point is the last trajectory entry, so the run up to
    /// the overflow can still be inspected.
    Diverged,
}

/// The result of a saddle-point solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The final point.
    pub point: Point,

    /// Gradient norm at the final point.
    pub gradient_norm: f64,

    /// Every visited point, starting with the initial one.
    pub trajectory: Trajectory,

    /// Number of update steps taken.
    ///
    /// Always `trajectory.len() - 1`.
    pub iters: usize,
}

impl Solution {
    /// Returns `true` if the solver stopped because it met the tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
