use saddle_core::Point;

/// Upper bound on the capacity reserved up front.
const MAX_RESERVED: usize = 4096;

/// The ordered points visited by a solver, each paired with its gradient norm.
///
/// The first entry is always the initial point. Entries are only ever
/// appended, so `points()` and `gradient_norms()` have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<Point>,
    gradient_norms: Vec<f64>,
}

impl Trajectory {
    /// Creates an empty trajectory with room for `max_iters` steps plus the
    /// initial point.
    pub(crate) fn with_capacity(max_iters: usize) -> Self {
        let capacity = max_iters.min(MAX_RESERVED) + 1;
        Self {
            points: Vec::with_capacity(capacity),
            gradient_norms: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, point: Point, gradient_norm: f64) {
        self.points.push(point);
        self.gradient_norms.push(gradient_norm);
    }

    /// Returns the visited points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the gradient norm at each visited point.
    #[must_use]
    pub fn gradient_norms(&self) -> &[f64] {
        &self.gradient_norms
    }

    /// Returns the x coordinate of each visited point.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Returns the y coordinate of each visited point.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Returns the number of visited points, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if nothing has been recorded, which only holds before
    /// a solve pushes its initial point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the initial point and its gradient norm.
    #[must_use]
    pub fn first(&self) -> Option<(Point, f64)> {
        self.iter().next()
    }

    /// Returns the most recent point and its gradient norm.
    #[must_use]
    pub fn last(&self) -> Option<(Point, f64)> {
        self.iter().next_back()
    }

    /// Iterates over `(point, gradient_norm)` pairs.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Point, f64)> + '_ {
        self.points
            .iter()
            .copied()
            .zip(self.gradient_norms.iter().copied())
    }

    /// Returns the largest `|x|` or `|y|` over all points, or `0.0` if empty.
    #[must_use]
    pub fn reach(&self) -> f64 {
        self.points.iter().map(Point::max_abs).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        let mut trajectory = Trajectory::with_capacity(2);
        trajectory.push(Point::new(1.0, -2.0), 3.0);
        trajectory.push(Point::new(0.5, -1.0), 1.5);
        trajectory.push(Point::new(0.25, 3.5), 0.5);
        trajectory
    }

    #[test]
    fn keeps_points_and_norms_parallel() {
        let trajectory = sample();
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.gradient_norms().len(), 3);
        assert_eq!(trajectory.gradient_norms(), [3.0, 1.5, 0.5]);
    }

    #[test]
    fn splits_coordinates() {
        let trajectory = sample();
        assert_eq!(trajectory.xs(), vec![1.0, 0.5, 0.25]);
        assert_eq!(trajectory.ys(), vec![-2.0, -1.0, 3.5]);
    }

    #[test]
    fn first_and_last() {
        let trajectory = sample();
        assert_eq!(trajectory.first(), Some((Point::new(1.0, -2.0), 3.0)));
        assert_eq!(trajectory.last(), Some((Point::new(0.25, 3.5), 0.5)));
        assert_eq!(Trajectory::default().last(), None);
    }

    #[test]
    fn reach_is_largest_coordinate_magnitude() {
        assert_eq!(sample().reach(), 3.5);
        assert_eq!(Trajectory::default().reach(), 0.0);
    }

    #[test]
    fn huge_budgets_do_not_reserve_everything() {
        let trajectory = Trajectory::with_capacity(usize::MAX);
        assert!(trajectory.is_empty());
        assert!(trajectory.points.capacity() <= MAX_RESERVED + 1);
    }
}
