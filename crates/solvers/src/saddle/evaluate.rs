use saddle_core::{Point, SaddleProblem};

use super::Error;

/// A gradient evaluated at a point, with its Euclidean norm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Gradient {
    pub(super) components: [f64; 2],
    pub(super) norm: f64,
}

impl Gradient {
    /// Returns `true` if both components are finite.
    pub(super) fn is_finite(&self) -> bool {
        self.components.iter().all(|c| c.is_finite())
    }
}

/// Evaluates the problem gradient at `point`.
///
/// Non-finite components are passed through; the caller decides how a
/// diverged iterate ends the run.
///
/// # Errors
///
/// Returns an error if the problem fails.
pub(super) fn gradient<P: SaddleProblem>(problem: &P, point: Point) -> Result<Gradient, Error> {
    let components = problem.gradient(point).map_err(Error::problem)?;
    let [dx, dy] = components;

    Ok(Gradient {
        components,
        norm: dx.hypot(dy),
    })
}
