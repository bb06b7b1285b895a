use saddle_core::Point;

/// Event emitted by the saddle solvers for each trajectory point.
///
/// Iteration 0 is the initial point before any update.
/// Iterations 1..N are emitted after each update step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The iteration number (0 for the initial point).
    pub iter: usize,

    /// The point reached at this iteration.
    pub point: Point,

    /// The gradient `[∂L/∂x, ∂L/∂y]` at `point`.
    pub gradient: [f64; 2],

    /// The Euclidean norm of `gradient`.
    pub gradient_norm: f64,
}
