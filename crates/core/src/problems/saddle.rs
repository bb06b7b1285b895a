use crate::Point;

/// Defines a saddle-point problem: minimize `L(x, y)` over `x` while
/// maximizing it over `y`.
///
/// Implementations provide the value and gradient of `L` at any real point.
/// They are treated as immutable capabilities; solvers only ever read them.
pub trait SaddleProblem {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates `L` at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if `L` cannot be evaluated at `point`.
    fn value(&self, point: Point) -> Result<f64, Self::Error>;

    /// Evaluates the gradient `[∂L/∂x, ∂L/∂y]` at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be evaluated at `point`.
    fn gradient(&self, point: Point) -> Result<[f64; 2], Self::Error>;
}

/// A saddle-point problem that also provides second derivatives.
///
/// Required by solvers that correct their step with local curvature, such as
/// implicit twisted gradient descent.
pub trait HessianProblem: SaddleProblem {
    /// Evaluates the Hessian `[[∂²L/∂x², ∂²L/∂x∂y], [∂²L/∂y∂x, ∂²L/∂y²]]`
    /// at `point`, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Hessian cannot be evaluated at `point`.
    fn hessian(&self, point: Point) -> Result<[[f64; 2]; 2], Self::Error>;
}

impl<P: SaddleProblem + ?Sized> SaddleProblem for &P {
    type Error = P::Error;

    fn value(&self, point: Point) -> Result<f64, Self::Error> {
        (**self).value(point)
    }

    fn gradient(&self, point: Point) -> Result<[f64; 2], Self::Error> {
        (**self).gradient(point)
    }
}

impl<P: HessianProblem + ?Sized> HessianProblem for &P {
    fn hessian(&self, point: Point) -> Result<[[f64; 2]; 2], Self::Error> {
        (**self).hessian(point)
    }
}
