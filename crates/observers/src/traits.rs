//! Capability traits for reusable saddle observers.
//!
//! These traits abstract over solver event and action types, so observers
//! such as [`DivergenceGuard`](crate::DivergenceGuard) need not name a
//! concrete solver.
//!
//! # Event traits
//!
//! - [`HasGradientNorm`] — events that carry a gradient norm
//! - [`HasPoint`] — events that carry the current `(x, y)` point
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use saddle_core::Observer;
//! use saddle_observers::traits::{CanStopEarly, HasGradientNorm};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasGradientNorm, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.gradient_norm() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use saddle_core::Point;
use saddle_solvers::saddle;

/// An event that carries the gradient norm at the current point.
pub trait HasGradientNorm {
    fn gradient_norm(&self) -> f64;
}

/// An event that carries the current point.
pub trait HasPoint {
    fn point(&self) -> Point;
}

/// An action type that can request early termination.
pub trait CanStopEarly {
    fn stop_early() -> Self;
}

impl HasGradientNorm for saddle::Event {
    fn gradient_norm(&self) -> f64 {
        self.gradient_norm
    }
}

impl HasPoint for saddle::Event {
    fn point(&self) -> Point {
        self.point
    }
}

impl CanStopEarly for saddle::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
