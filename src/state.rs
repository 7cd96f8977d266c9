//! Plot state: bounds plus series, folded one record at a time.

use crate::bounds::{Bounds, DisplayLimits};
use crate::record::Record;
use crate::series::Series;

/// Everything the renderer needs, owned in one place and mutated only by
/// [`PlotState::update`].
#[derive(Debug, Clone, Default)]
pub struct PlotState {
    bounds: Bounds,
    series: Series,
    latest: Option<Record>,
}

/// Result of folding one record: the grown series and the new view window.
#[derive(Debug, Clone, Copy)]
pub struct Update<'a> {
    /// Series including the new point.
    pub series: &'a Series,
    /// Display limits after widening the bounds.
    pub limits: DisplayLimits,
}

impl PlotState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a record into the state.
    ///
    /// Widens the bounds, derives the padded limits, then appends the point.
    pub fn update(&mut self, record: Record) -> Update<'_> {
        let (x, y) = record.as_point();

        self.bounds.observe(x, y);
        let limits = self.bounds.display_limits();
        self.series.push(x, y);
        self.latest = Some(record);

        Update { series: &self.series, limits }
    }

    /// Current display limits; the initial view until a record arrives.
    #[must_use]
    pub fn limits(&self) -> DisplayLimits {
        self.bounds.display_limits()
    }

    /// Current bounds.
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Current series.
    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Most recent record folded in.
    #[must_use]
    pub fn latest(&self) -> Option<Record> {
        self.latest
    }

    /// Number of records folded in.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if no record has been folded in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
