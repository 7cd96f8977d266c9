//! Append-only plotted series.
//!
//! Points are stored as `(x, y)` pairs so `xs` and `ys` can never drift
//! apart in length. Nothing is ever removed or reordered.

/// Ordered history of every plotted point, in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<(f64, f64)>,
}

impl Series {
    /// Creates an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one point.
    pub fn push(&mut self, x: f64, y: f64) {
        self.points.push((x, y));
    }

    /// Number of points; equal to both `xs().count()` and `ys().count()`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no point has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, oldest first.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The x coordinates, oldest first.
    pub fn xs(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.0)
    }

    /// The y coordinates, oldest first.
    pub fn ys(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.1)
    }

    /// The most recent point.
    #[must_use]
    pub fn latest(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    /// The last `n` points (all of them if fewer), oldest first.
    #[must_use]
    pub fn last_n(&self, n: usize) -> &[(f64, f64)] {
        let skip = self.points.len().saturating_sub(n);
        &self.points[skip..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let series = Series::new();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert_eq!(series.latest(), None);
    }

    #[test]
    fn test_push_keeps_arrival_order() {
        let mut series = Series::new();
        series.push(3.0, 30.0);
        series.push(1.0, 10.0);
        series.push(2.0, 20.0);

        assert_eq!(series.xs().collect::<Vec<_>>(), vec![3.0, 1.0, 2.0]);
        assert_eq!(series.ys().collect::<Vec<_>>(), vec![30.0, 10.0, 20.0]);
        assert_eq!(series.latest(), Some((2.0, 20.0)));
    }

    #[test]
    fn test_last_n() {
        let mut series = Series::new();
        for i in 0..10 {
            series.push(f64::from(i), 0.0);
        }

        let tail: Vec<f64> = series.last_n(3).iter().map(|p| p.0).collect();
        assert_eq!(tail, vec![7.0, 8.0, 9.0]);
        assert_eq!(series.last_n(50).len(), 10);
    }
}
