//! Gradient-based solvers for saddle-point problems, `min_x max_y L(x, y)`.
//!
//! # Solvers
//!
//! - [`gradient_descent_ascent`] — simultaneous descent in `x` and ascent in
//!   `y` from one gradient evaluation, tolerance checked before each step
//! - [`explicit_twisted`] — explicit twisted gradient descent (ETGD),
//!   tolerance checked after each step
//! - [`implicit_twisted`] — implicit twisted gradient descent (ITGD), a
//!   Hessian-corrected linear solve per step, tolerance checked after each step
//!
//! Both twisted variants follow Essid, Tabak, and Trigila (2019). All three
//! use the sign-flip matrix `J = diag(1, −1)`.
//!
//! [`SaddlePoint`] wraps a problem and dispatches on an [`Algorithm`], which
//! can be parsed from a selector string.
//!
//! # Trajectories
//!
//! Every solver returns a [`Solution`] whose [`Trajectory`] starts with the
//! initial point and gains one entry per update step, so
//! `trajectory.len() == iters + 1`. Each entry carries the gradient norm at
//! that point. Reaching the iteration limit is reported as
//! [`Status::MaxIters`], not as an error, and a run whose point or gradient
//! overflows ends with [`Status::Diverged`].
//!
//! # Observer Events
//!
//! The solvers emit one [`Event`] for the initial point and one after every
//! step. Observers can return [`Action::StopEarly`] to end the run with
//! [`Status::StoppedByObserver`].

mod action;
mod algorithm;
mod config;
mod error;
mod evaluate;
mod event;
mod iterate;
mod saddle_point;
mod solution;
mod trajectory;

#[cfg(test)]
mod tests;

pub mod explicit_twisted;
pub mod gradient_descent_ascent;
pub mod implicit_twisted;

pub use action::Action;
pub use algorithm::{Algorithm, SelectorError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use saddle_point::SaddlePoint;
pub use solution::{Solution, Status};
pub use trajectory::Trajectory;
