//! Numerical solvers for saddle-point problems.
//!
//! See [`saddle`] for the update rules and the [`SaddlePoint`](saddle::SaddlePoint)
//! front end.

pub mod saddle;
