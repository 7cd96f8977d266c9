//! Running bounds and the display-limit padding policy.
//!
//! Bounds only ever widen. The first observed point initialises all four
//! values, so there is no sentinel bias before real data arrives.
//!
//! Display limits pad the bounds multiplicatively and additively:
//! `lo = min * 0.99 - 1`, `hi = max * 1.01 + 1`. The policy is fixed.

/// Multiplier applied to the lower bound.
pub const LOWER_SCALE: f64 = 0.99;

/// Multiplier applied to the upper bound.
pub const UPPER_SCALE: f64 = 1.01;

/// Constant subtracted from the lower bound and added to the upper bound.
pub const PAD: f64 = 1.0;

/// View shown before any record arrives.
pub const INITIAL_VIEW: [f64; 2] = [0.0, 1.0];

/// Padded lower display limit for a minimum value.
#[inline]
#[must_use]
pub fn pad_lower(min: f64) -> f64 {
    min * LOWER_SCALE - PAD
}

/// Padded upper display limit for a maximum value.
#[inline]
#[must_use]
pub fn pad_upper(max: f64) -> f64 {
    max * UPPER_SCALE + PAD
}

/// Visible axis ranges, as `[lo, hi]` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayLimits {
    /// X axis range.
    pub x: [f64; 2],
    /// Y axis range.
    pub y: [f64; 2],
}

impl DisplayLimits {
    /// The view shown before any record arrives.
    #[must_use]
    pub const fn initial() -> Self {
        Self { x: INITIAL_VIEW, y: INITIAL_VIEW }
    }
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self::initial()
    }
}

/// Running min/max of every x and y observed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    extent: Option<Extent>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    /// Creates empty bounds.
    #[must_use]
    pub const fn new() -> Self {
        Self { extent: None }
    }

    /// Widens the bounds to include `(x, y)`.
    pub fn observe(&mut self, x: f64, y: f64) {
        match &mut self.extent {
            None => self.extent = Some(Extent { x_min: x, x_max: x, y_min: y, y_max: y }),
            Some(e) => {
                if x > e.x_max {
                    e.x_max = x;
                }
                if x < e.x_min {
                    e.x_min = x;
                }
                if y > e.y_max {
                    e.y_max = y;
                }
                if y < e.y_min {
                    e.y_min = y;
                }
            }
        }
    }

    /// Whether nothing has been observed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    /// `(x_min, x_max)`, if anything has been observed.
    #[must_use]
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.extent.map(|e| (e.x_min, e.x_max))
    }

    /// `(y_min, y_max)`, if anything has been observed.
    #[must_use]
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.extent.map(|e| (e.y_min, e.y_max))
    }

    /// Padded view window. Pure: depends only on the current bounds.
    #[must_use]
    pub fn display_limits(&self) -> DisplayLimits {
        match self.extent {
            None => DisplayLimits::initial(),
            Some(e) => DisplayLimits {
                x: [pad_lower(e.x_min), pad_upper(e.x_max)],
                y: [pad_lower(e.y_min), pad_upper(e.y_max)],
            },
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Bounds equal the running min/max of everything observed.
        #[test]
        fn prop_bounds_track_running_extent(
            points in prop::collection::vec(any::<(u32, u32)>(), 1..200)
        ) {
            let mut bounds = Bounds::new();
            for (i, &(x, y)) in points.iter().enumerate() {
                bounds.observe(f64::from(x), f64::from(y));

                let seen = &points[..=i];
                let x_min = seen.iter().map(|p| p.0).min().unwrap();
                let x_max = seen.iter().map(|p| p.0).max().unwrap();
                let y_min = seen.iter().map(|p| p.1).min().unwrap();
                let y_max = seen.iter().map(|p| p.1).max().unwrap();

                prop_assert_eq!(bounds.x_range(), Some((f64::from(x_min), f64::from(x_max))));
                prop_assert_eq!(bounds.y_range(), Some((f64::from(y_min), f64::from(y_max))));
            }
        }

        /// The padded window always contains the bounds.
        #[test]
        fn prop_limits_contain_bounds(
            points in prop::collection::vec(any::<(u32, u32)>(), 1..50)
        ) {
            let mut bounds = Bounds::new();
            for &(x, y) in &points {
                bounds.observe(f64::from(x), f64::from(y));
            }
            let limits = bounds.display_limits();
            let (x_min, x_max) = bounds.x_range().unwrap();
            let (y_min, y_max) = bounds.y_range().unwrap();

            prop_assert!(limits.x[0] < x_min && x_max < limits.x[1]);
            prop_assert!(limits.y[0] < y_min && y_max < limits.y[1]);
        }
    }
}
