//! Geometry for rendering `L(x, y)` as a surface.
//!
//! A [`Domain`] bounds the evaluation rectangle, a [`Mesh`] samples the
//! function on a grid inside it, and a [`View`] projects 3D points onto the
//! screen from a given elevation and azimuth. Nothing here draws; see
//! `SurfacePlot` (feature `plot`) for the window.

use saddle_core::Point;
use saddle_solvers::saddle::Trajectory;
use thiserror::Error;

/// Margin applied around a trajectory by [`Domain::around`].
const TRAJECTORY_MARGIN: f64 = 1.1;

/// Default grid spacing for [`Mesh::with_step`].
pub const DEFAULT_FINENESS: f64 = 0.2;

/// Samples per axis used by [`Mesh::around`].
pub const DEFAULT_RESOLUTION: usize = 100;

/// Largest grid [`Mesh::with_step`] builds along one axis.
pub const MAX_SAMPLES_PER_AXIS: usize = 10_000;

/// Errors from building a [`Domain`] or [`Mesh`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SurfaceError {
    #[error("range [{0}, {1}] must be finite with min < max")]
    Range(f64, f64),

    #[error("step must be finite and positive, got {0}")]
    Step(f64),

    #[error("resolution must be at least 2, got {0}")]
    Resolution(usize),

    #[error("step {0} gives more than {max} samples per axis", max = MAX_SAMPLES_PER_AXIS)]
    TooFine(f64),
}

/// A rectangular evaluation domain `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    x: [f64; 2],
    y: [f64; 2],
}

impl Domain {
    /// Creates a domain from `[min, max]` ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if either range is non-finite or empty.
    pub fn new(x: [f64; 2], y: [f64; 2]) -> Result<Self, SurfaceError> {
        for [min, max] in [x, y] {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(SurfaceError::Range(min, max));
            }
        }
        Ok(Self { x, y })
    }

    /// Creates the square `[-half_width, half_width]²`.
    ///
    /// # Errors
    ///
    /// Returns an error if `half_width` is not finite and positive.
    pub fn square(half_width: f64) -> Result<Self, SurfaceError> {
        Self::new([-half_width, half_width], [-half_width, half_width])
    }

    /// Returns the square centered on the origin that contains every point of
    /// `trajectory` with a 10% margin.
    ///
    /// Falls back to the unit square if the trajectory never leaves the
    /// origin or is not finite.
    #[must_use]
    pub fn around(trajectory: &Trajectory) -> Self {
        let reach = TRAJECTORY_MARGIN * trajectory.reach();
        Self::square(reach).unwrap_or(Self {
            x: [-1.0, 1.0],
            y: [-1.0, 1.0],
        })
    }

    /// Returns `[x_min, x_max]`.
    #[must_use]
    pub fn x_range(&self) -> [f64; 2] {
        self.x
    }

    /// Returns `[y_min, y_max]`.
    #[must_use]
    pub fn y_range(&self) -> [f64; 2] {
        self.y
    }
}

impl Default for Domain {
    /// The square `[-50, 50]²`.
    fn default() -> Self {
        Self {
            x: [-50.0, 50.0],
            y: [-50.0, 50.0],
        }
    }
}

/// `L(x, y)` sampled on a rectangular grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Row-major: `values[j * xs.len() + i] = L(xs[i], ys[j])`.
    values: Vec<f64>,
}

impl Mesh {
    /// Samples `f` from each range minimum, in increments of `step`, up to
    /// but excluding the maximum.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive, if it is so
    /// large that fewer than two samples fit along an axis, or if it is so
    /// small that an axis would need more than [`MAX_SAMPLES_PER_AXIS`].
    pub fn with_step<F>(domain: &Domain, step: f64, f: F) -> Result<Self, SurfaceError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if !step.is_finite() || step <= 0.0 {
            return Err(SurfaceError::Step(step));
        }
        let xs = arange(domain.x, step).ok_or(SurfaceError::TooFine(step))?;
        let ys = arange(domain.y, step).ok_or(SurfaceError::TooFine(step))?;
        if xs.len() < 2 || ys.len() < 2 {
            return Err(SurfaceError::Resolution(xs.len().min(ys.len())));
        }
        Ok(Self::sample(xs, ys, f))
    }

    /// Samples `f` on `resolution` evenly spaced values along each axis,
    /// endpoints included.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution < 2`.
    pub fn with_resolution<F>(domain: &Domain, resolution: usize, f: F) -> Result<Self, SurfaceError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if resolution < 2 {
            return Err(SurfaceError::Resolution(resolution));
        }
        let xs = linspace(domain.x, resolution);
        let ys = linspace(domain.y, resolution);
        Ok(Self::sample(xs, ys, f))
    }

    /// Samples `f` at [`DEFAULT_RESOLUTION`] per axis over
    /// [`Domain::around`] the trajectory.
    pub fn around<F>(trajectory: &Trajectory, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let domain = Domain::around(trajectory);
        Self::sample(
            linspace(domain.x, DEFAULT_RESOLUTION),
            linspace(domain.y, DEFAULT_RESOLUTION),
            f,
        )
    }

    fn sample<F: Fn(f64, f64) -> f64>(xs: Vec<f64>, ys: Vec<f64>, f: F) -> Self {
        let values = ys
            .iter()
            .flat_map(|&y| xs.iter().map(move |&x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self { xs, ys, values }
    }

    /// Returns the sampled x values, in increasing order.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the sampled y values, in increasing order.
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns `L(xs[i], ys[j])`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[must_use]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.xs.len() && j < self.ys.len(), "mesh index out of bounds");
        self.values[j * self.xs.len() + i]
    }

    /// Returns the polylines of constant `y`, one per grid row.
    pub fn rows(&self) -> impl Iterator<Item = Vec<[f64; 3]>> + '_ {
        (0..self.ys.len()).map(move |j| {
            (0..self.xs.len())
                .map(|i| [self.xs[i], self.ys[j], self.value(i, j)])
                .collect()
        })
    }

    /// Returns the polylines of constant `x`, one per grid column.
    pub fn columns(&self) -> impl Iterator<Item = Vec<[f64; 3]>> + '_ {
        (0..self.xs.len()).map(move |i| {
            (0..self.ys.len())
                .map(|j| [self.xs[i], self.ys[j], self.value(i, j)])
                .collect()
        })
    }

    /// Returns the axis-aligned box containing every finite sample.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        for point in self.rows().flatten() {
            bounds.include(point);
        }
        bounds
    }
}

/// Lifts each trajectory point onto the surface `z = f(x, y)`.
pub fn lift<F>(trajectory: &Trajectory, f: F) -> Vec<[f64; 3]>
where
    F: Fn(f64, f64) -> f64,
{
    trajectory
        .points()
        .iter()
        .map(|&Point { x, y }| [x, y, f(x, y)])
        .collect()
}

/// An axis-aligned 3D box used to normalize coordinates before projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds {
    fn empty() -> Self {
        Self {
            min: [f64::INFINITY; 3],
            max: [f64::NEG_INFINITY; 3],
        }
    }

    /// Grows the box to contain `point`. Non-finite points are ignored.
    pub fn include(&mut self, point: [f64; 3]) {
        if point.iter().all(|c| c.is_finite()) {
            for axis in 0..3 {
                self.min[axis] = self.min[axis].min(point[axis]);
                self.max[axis] = self.max[axis].max(point[axis]);
            }
        }
    }

    /// Maps `point` into `[-1, 1]³`; a flat axis maps to 0.
    #[must_use]
    pub fn normalize(&self, point: [f64; 3]) -> [f64; 3] {
        std::array::from_fn(|axis| {
            let span = self.max[axis] - self.min[axis];
            if span > 0.0 && span.is_finite() {
                2.0 * (point[axis] - self.min[axis]) / span - 1.0
            } else {
                0.0
            }
        })
    }
}

/// Camera orientation for an orthographic view, in degrees.
///
/// `elevation` tilts the camera above the `xy` plane (90 looks straight down)
/// and `azimuth` rotates it around the `z` axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub elevation: f64,
    pub azimuth: f64,
}

impl View {
    /// Creates a view from `elevation` and `azimuth` in degrees.
    #[must_use]
    pub fn new(elevation: f64, azimuth: f64) -> Self {
        Self {
            elevation,
            azimuth,
        }
    }

    /// Projects a normalized 3D point to 2D screen coordinates.
    #[must_use]
    pub fn project(&self, [x, y, z]: [f64; 3]) -> [f64; 2] {
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();

        let u = -x * sin_az + y * cos_az;
        let v = -(x * cos_az + y * sin_az) * sin_el + z * cos_el;
        [u, v]
    }
}

impl Default for View {
    /// Elevation 30°, azimuth −60°.
    fn default() -> Self {
        Self::new(30.0, -60.0)
    }
}

/// `min, min + step, …` strictly below `max`, or `None` past
/// [`MAX_SAMPLES_PER_AXIS`].
fn arange([min, max]: [f64; 2], step: f64) -> Option<Vec<f64>> {
    let samples: Vec<f64> = (0..=MAX_SAMPLES_PER_AXIS)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let k = k as f64;
            min + k * step
        })
        .take_while(|&v| v < max)
        .collect();
    (samples.len() <= MAX_SAMPLES_PER_AXIS).then_some(samples)
}

/// `n` evenly spaced values from `min` to `max`, inclusive.
fn linspace([min, max]: [f64; 2], n: usize) -> Vec<f64> {
    #[allow(clippy::cast_precision_loss)]
    let last = (n - 1) as f64;
    (0..n)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let t = k as f64 / last;
            min + t * (max - min)
        })
        .collect()
}
