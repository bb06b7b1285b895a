//! Interactive egui windows for saddle solvers.
//!
//! [`SurfacePlot`] draws `L(x, y)` as a projected wireframe with the solver
//! trajectory on top. [`PlotObserver`] collects per-iteration traces, such as
//! the gradient norm, and draws them as line charts.

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use saddle_core::Observer;
use saddle_solvers::saddle;

use crate::surface::{Bounds, Mesh, View};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("GDA").x_label("Iteration").log_y())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no axis labels,
    /// no legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            legend: false,
            log_y: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x-axis title.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Sets the y-axis title.
    ///
    /// Combined with [`log_y`](Self::log_y), the label is prefixed with `log₁₀`.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// y values are transformed with log₁₀ before plotting. Non-positive
    /// values are silently skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    fn y_axis_title(&self) -> Option<String> {
        match (&self.y_label, self.log_y) {
            (Some(label), true) => Some(format!("log₁₀ {label}")),
            (Some(label), false) => Some(label.clone()),
            (None, true) => Some("log₁₀".to_owned()),
            (None, false) => None,
        }
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
///
/// Implemented for [`saddle::Event`] with the iteration on the x-axis and the
/// gradient norm as the single trace.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<1> for saddle::Event {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.gradient_norm)]
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Record data by either:
///
/// - **Direct path** — pass `&mut PlotObserver` as the solver observer when
///   the event type implements [`Plottable<N>`][Plottable].
/// - **Closure path** — wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record] with whatever the event carries.
///
/// A finished run can also be loaded with [`from_sequence`][Self::from_sequence].
///
/// # Example: gradient norm convergence
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["‖∇L‖"]);
/// gradient_descent_ascent::solve(&loss, start, &Config::default(), &mut obs)?;
/// obs.show(ShowConfig::new().x_label("Iteration").y_label("‖∇L‖").log_y())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let y_label = config.y_axis_title();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    x_label: config.x_label,
                    y_label,
                    legend: config.legend,
                    log_y: config.log_y,
                }))
            }),
        )
    }
}

impl PlotObserver<1> {
    /// Builds a single-trace observer from an existing sequence, using the
    /// position in the sequence as x.
    ///
    /// Used to plot a stored gradient norm history after the fact.
    pub fn from_sequence(name: &str, values: &[f64]) -> Self {
        let mut obs = Self::new([name]);
        for (i, &y) in values.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            obs.record(i as f64, [Some(y)]);
        }
        obs
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.clone());
            }
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = if log_y {
                        points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        points.iter().copied().collect()
                    };
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}

/// A projected wireframe of `L(x, y)` with an optional trajectory overlay.
///
/// # Example
///
/// ```ignore
/// let mesh = Mesh::around(&solution.trajectory, |x, y| loss.value_at(x, y));
/// let path = surface::lift(&solution.trajectory, |x, y| loss.value_at(x, y));
/// SurfacePlot::new(mesh).trajectory(path).title("GDA").show()?;
/// ```
pub struct SurfacePlot {
    mesh: Mesh,
    path: Vec<[f64; 3]>,
    view: View,
    title: Option<String>,
}

impl SurfacePlot {
    /// Creates a plot of `mesh` seen from the default [`View`].
    #[must_use]
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            path: Vec::new(),
            view: View::default(),
            title: None,
        }
    }

    /// Overlays a path of `(x, y, L)` points, drawn as red markers joined by
    /// a line.
    #[must_use]
    pub fn trajectory(mut self, path: Vec<[f64; 3]>) -> Self {
        self.path = path;
        self
    }

    /// Sets the camera orientation.
    #[must_use]
    pub fn view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Projects the wireframe and path with a shared normalization, so the
    /// path sits on the surface.
    fn scene(&self) -> Scene {
        let mut bounds = self.mesh.bounds();
        for &point in &self.path {
            bounds.include(point);
        }
        let project = |polyline: &[[f64; 3]]| -> Vec<[f64; 2]> {
            polyline
                .iter()
                .filter(|p| p.iter().all(|c| c.is_finite()))
                .map(|&p| self.view.project(bounds.normalize(p)))
                .collect()
        };

        let wires = self
            .mesh
            .rows()
            .chain(self.mesh.columns())
            .map(|polyline| Wire {
                height: mean_height(&bounds, &polyline),
                points: project(&polyline),
            })
            .collect();

        Scene {
            wires,
            path: project(&self.path),
        }
    }

    /// Opens a blocking egui window displaying the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = self.title.clone().unwrap_or_default();
        let scene = self.scene();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(SurfaceApp { scene }))),
        )
    }
}

/// A projected polyline with its mean normalized height in `[0, 1]`.
struct Wire {
    points: Vec<[f64; 2]>,
    height: f64,
}

struct Scene {
    wires: Vec<Wire>,
    path: Vec<[f64; 2]>,
}

fn mean_height(bounds: &Bounds, polyline: &[[f64; 3]]) -> f64 {
    let heights: Vec<f64> = polyline
        .iter()
        .map(|&p| bounds.normalize(p)[2])
        .filter(|z| z.is_finite())
        .collect();
    if heights.is_empty() {
        return 0.5;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = heights.iter().sum::<f64>() / heights.len() as f64;
    (mean + 1.0) / 2.0
}

/// Maps `t` in `[0, 1]` from dark blue through gray to yellow.
fn height_color(t: f64) -> Color32 {
    const LOW: [f64; 3] = [0.0, 34.0, 78.0];
    const MID: [f64; 3] = [124.0, 123.0, 120.0];
    const HIGH: [f64; 3] = [254.0, 232.0, 56.0];

    let t = t.clamp(0.0, 1.0);
    let (from, to, s) = if t < 0.5 {
        (LOW, MID, 2.0 * t)
    } else {
        (MID, HIGH, 2.0 * t - 1.0)
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let channel = |k: usize| (from[k] + s * (to[k] - from[k])).round() as u8;
    Color32::from_rgb(channel(0), channel(1), channel(2))
}

/// The egui [`eframe::App`] that renders a projected surface.
struct SurfaceApp {
    scene: Scene,
}

impl eframe::App for SurfaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("surface_plot")
                .data_aspect(1.0)
                .show_axes(false)
                .show_grid(false)
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    for wire in &self.scene.wires {
                        let points: PlotPoints = wire.points.iter().copied().collect();
                        plot_ui.line(Line::new(points).color(height_color(wire.height)).width(1.0));
                    }
                    if !self.scene.path.is_empty() {
                        let line: PlotPoints = self.scene.path.iter().copied().collect();
                        let markers: PlotPoints = self.scene.path.iter().copied().collect();
                        plot_ui.line(Line::new(line).color(Color32::RED).width(2.0).name("Trajectory"));
                        plot_ui.points(Points::new(markers).color(Color32::RED).radius(3.0));
                    }
                });
        });
    }
}
