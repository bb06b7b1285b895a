use saddle_core::{HessianProblem, Point, SaddleProblem};

use super::{
    Algorithm, Config, Error, Solution, Trajectory, explicit_twisted, gradient_descent_ascent,
    implicit_twisted,
};

/// A saddle problem paired with the result of its most recent solve.
///
/// The problem, typically a [`Loss`](saddle_core::Loss), is captured once at
/// construction; each solve only evaluates it. The last solution is kept so
/// its trajectory can be plotted afterwards.
#[derive(Debug, Clone)]
pub struct SaddlePoint<P> {
    problem: P,
    last: Option<Solution>,
}

impl<P: SaddleProblem> SaddlePoint<P> {
    /// Wraps `problem`; no solve has run yet, so [`history`](Self::history)
    /// is `None`.
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            last: None,
        }
    }

    /// Returns the wrapped problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Returns the trajectory of the most recent solve.
    #[must_use]
    pub fn history(&self) -> Option<&Trajectory> {
        self.last.as_ref().map(|solution| &solution.trajectory)
    }

    /// Runs a first-order algorithm from `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HessianRequired`] for [`Algorithm::ImplicitTwisted`],
    /// or any error from the solver itself. The previous solution is kept
    /// when the solve fails.
    pub fn optimize_first_order(
        &mut self,
        initial: Point,
        algorithm: Algorithm,
        config: &Config,
    ) -> Result<&Solution, Error> {
        let solution = match algorithm {
            Algorithm::GradientDescentAscent => {
                gradient_descent_ascent::solve_unobserved(&self.problem, initial, config)?
            }
            Algorithm::ExplicitTwisted => {
                explicit_twisted::solve_unobserved(&self.problem, initial, config)?
            }
            Algorithm::ImplicitTwisted => return Err(Error::HessianRequired(algorithm)),
        };
        Ok(&*self.last.insert(solution))
    }
}

impl<P: HessianProblem> SaddlePoint<P> {
    /// Runs `algorithm` from `initial`.
    ///
    /// # Errors
    ///
    /// Returns any error from the selected solver. The previous solution is
    /// kept when the solve fails.
    pub fn optimize(
        &mut self,
        initial: Point,
        algorithm: Algorithm,
        config: &Config,
    ) -> Result<&Solution, Error> {
        let solution = match algorithm {
            Algorithm::GradientDescentAscent => {
                gradient_descent_ascent::solve_unobserved(&self.problem, initial, config)?
            }
            Algorithm::ExplicitTwisted => {
                explicit_twisted::solve_unobserved(&self.problem, initial, config)?
            }
            Algorithm::ImplicitTwisted => {
                implicit_twisted::solve_unobserved(&self.problem, initial, config)?
            }
        };
        Ok(&*self.last.insert(solution))
    }

    /// Parses `selector` into an [`Algorithm`] and runs it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Selector`] before any evaluation if `selector` is not
    /// a known, implemented algorithm, or any error from the solver.
    pub fn optimize_named(
        &mut self,
        initial: Point,
        selector: &str,
        config: &Config,
    ) -> Result<&Solution, Error> {
        let algorithm = selector.parse()?;
        self.optimize(initial, algorithm, config)
    }
}
