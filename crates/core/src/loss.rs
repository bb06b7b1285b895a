use std::convert::Infallible;

use nalgebra::{Const, SVector};
use num_dual::{Dual2Vec, DualNum, DualVec};

use crate::{HessianProblem, Point, SaddleProblem};

/// A scalar function `L(x, y)` written once, generic over the number type.
///
/// The same definition is evaluated with plain `f64` for values, with dual
/// numbers for gradients, and with second-order dual numbers for Hessians.
/// Arithmetic on `D` follows [`DualNum`]; constants enter through `D::from`.
///
/// # Example
///
/// ```
/// use saddle_core::{DualNum, SaddleFunction};
///
/// /// `L(x, y) = x² − y²`
/// struct Hyperbolic;
///
/// impl SaddleFunction for Hyperbolic {
///     fn eval<D: DualNum<f64> + Clone>(&self, x: D, y: D) -> D {
///         x.powi(2) - y.powi(2)
///     }
/// }
/// ```
pub trait SaddleFunction {
    /// Evaluates the function at `(x, y)`.
    fn eval<D: DualNum<f64> + Clone>(&self, x: D, y: D) -> D;
}

type FirstOrder = DualVec<f64, f64, Const<2>>;
type SecondOrder = Dual2Vec<f64, f64, Const<2>>;

/// A [`SaddleProblem`] whose derivatives come from automatic differentiation.
///
/// The captured function is the only thing `Loss` owns. Each call to
/// [`gradient`](SaddleProblem::gradient) or [`hessian`](HessianProblem::hessian)
/// is a pure evaluation at the given point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Loss<F> {
    function: F,
}

impl<F: SaddleFunction> Loss<F> {
    /// Wraps a function for evaluation and differentiation.
    pub fn new(function: F) -> Self {
        Self { function }
    }

    /// Evaluates `L(x, y)` with plain floats.
    #[must_use]
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        self.function.eval(x, y)
    }

    /// Evaluates the value and gradient at `(x, y)` in one forward pass.
    #[must_use]
    pub fn value_and_gradient(&self, x: f64, y: f64) -> (f64, [f64; 2]) {
        let (value, gradient) = num_dual::gradient(
            |v: SVector<FirstOrder, 2>| self.function.eval(v[0].clone(), v[1].clone()),
            SVector::from([x, y]),
        );
        (value, [gradient[0], gradient[1]])
    }

    /// Evaluates the Hessian at `(x, y)`, in row-major order.
    #[must_use]
    pub fn hessian_at(&self, x: f64, y: f64) -> [[f64; 2]; 2] {
        let (_, _, hessian) = num_dual::hessian(
            |v: SVector<SecondOrder, 2>| self.function.eval(v[0].clone(), v[1].clone()),
            SVector::from([x, y]),
        );
        [
            [hessian[(0, 0)], hessian[(0, 1)]],
            [hessian[(1, 0)], hessian[(1, 1)]],
        ]
    }
}

impl<F: SaddleFunction> SaddleProblem for Loss<F> {
    type Error = Infallible;

    fn value(&self, point: Point) -> Result<f64, Self::Error> {
        Ok(self.value_at(point.x, point.y))
    }

    fn gradient(&self, point: Point) -> Result<[f64; 2], Self::Error> {
        Ok(self.value_and_gradient(point.x, point.y).1)
    }
}

impl<F: SaddleFunction> HessianProblem for Loss<F> {
    fn hessian(&self, point: Point) -> Result<[[f64; 2]; 2], Self::Error> {
        Ok(self.hessian_at(point.x, point.y))
    }
}
