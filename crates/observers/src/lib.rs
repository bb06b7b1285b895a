//! Reusable observers and visualizations for saddle-point solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver-agnostic observers
//!   ([`HasGradientNorm`], [`HasPoint`], [`CanStopEarly`])
//! - [`surface`] — Domains, meshes, and projections for drawing `L(x, y)`
//!
//! [`DivergenceGuard`] stops a solve whose gradient norm keeps growing or whose
//! iterates leave a bounded region.
//!
//! # Features
//!
//! - `plot` — Enables [`SurfacePlot`] and [`PlotObserver`] for viewing
//!   trajectories and convergence via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`HasGradientNorm`]: traits::HasGradientNorm
//! [`HasPoint`]: traits::HasPoint
//! [`CanStopEarly`]: traits::CanStopEarly

mod guard;

pub mod surface;
pub mod traits;

pub use guard::DivergenceGuard;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig, SurfacePlot};
