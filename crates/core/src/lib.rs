//! Core traits and types for saddle-point optimization experiments.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Point`] — the `(x, y)` optimization state
//! - [`SaddleProblem`], [`HessianProblem`] — the loss/gradient provider traits
//!   a solver evaluates at each iterate
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`SaddleFunction`], [`Loss`] — a function written once, generic over the
//!   scalar type, and differentiated automatically

mod loss;
mod observer;
mod point;
mod problems;

pub mod functions;

pub use loss::{Loss, SaddleFunction};
pub use num_dual::DualNum;
pub use observer::Observer;
pub use point::Point;
pub use problems::{HessianProblem, SaddleProblem};
