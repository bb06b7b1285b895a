//! Saddle functions used in experiments, demos, and tests.
//!
//! Each type implements [`SaddleFunction`]; wrap it in [`Loss`](crate::Loss)
//! to evaluate values, gradients, and Hessians.

use num_dual::DualNum;

use crate::SaddleFunction;

/// `L(x, y) = x² − y²`, with its saddle at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hyperbolic;

impl SaddleFunction for Hyperbolic {
    fn eval<D: DualNum<f64> + Clone>(&self, x: D, y: D) -> D {
        x.powi(2) - y.powi(2)
    }
}

/// `L(x, y) = x·y`.
///
/// Plain simultaneous gradient descent/ascent spirals outward on this
/// function; the implicit twisted update does not.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bilinear;

impl SaddleFunction for Bilinear {
    fn eval<D: DualNum<f64> + Clone>(&self, x: D, y: D) -> D {
        x * y
    }
}

/// `L(x, y) = a·x²/2 + b·x·y − c·y²/2`.
///
/// Convex in `x` and concave in `y` whenever `a, c > 0`, with the saddle at
/// the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSaddle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticSaddle {
    /// Creates the saddle with coefficients `a`, `b`, `c`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl SaddleFunction for QuadraticSaddle {
    fn eval<D: DualNum<f64> + Clone>(&self, x: D, y: D) -> D {
        let xx = x.powi(2);
        let yy = y.powi(2);
        D::from(0.5 * self.a) * xx + D::from(self.b) * x * y - D::from(0.5 * self.c) * yy
    }
}
