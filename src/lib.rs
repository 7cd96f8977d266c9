//! # frameplot
//!
//! Live terminal plot of a binary stream of `(x, y)` samples.
//!
//! The input is a sequence of 8-byte frames with no header or delimiter:
//!
//! | bytes | field | encoding             |
//! |-------|-------|----------------------|
//! | 0..4  | x     | `u32`, little-endian |
//! | 4..8  | y     | `u32`, little-endian |
//!
//! Every decoded record is appended to a growing series, and the chart view
//! is re-fitted to the data seen so far: the lower bound is scaled by 0.99
//! and lowered by 1, the upper bound scaled by 1.01 and raised by 1.
//!
//! ## Quick Start
//!
//! ```rust
//! use frameplot::prelude::*;
//!
//! let bytes = [1u8, 0, 0, 0, 2, 0, 0, 0];
//! let mut state = PlotState::new();
//! for record in RecordReader::new(&bytes[..]) {
//!     state.update(record?);
//! }
//!
//! assert_eq!(state.latest(), Some(Record::new(1, 2)));
//! # Ok::<(), frameplot::Error>(())
//! ```
//!
//! ## Binaries
//!
//! - `frameplot`: reads frames from stdin and plots them (or folds them
//!   headlessly with `--headless`)
//! - `frameplot-gen`: writes synthetic frames to stdout for testing

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Error types.
pub mod error;

/// Debug logging to stderr.
pub mod debug;

/// Frame decoding and the record reader.
pub mod record;

/// Running extent and padded display limits.
pub mod bounds;

/// The accumulated point series.
pub mod series;

/// Plot state: bounds and series updated together.
pub mod state;

// ============================================================================
// Front End
// ============================================================================

/// YAML configuration.
pub mod config;

/// Synthetic frame generator.
pub mod gen;

/// Terminal viewer and headless runner.
pub mod app;

pub use error::{Error, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::bounds::{Bounds, DisplayLimits};
    pub use crate::config::{Config, PlotStyle};
    pub use crate::error::{Error, Result};
    pub use crate::record::{Echo, Record, RecordReader, FRAME_LEN};
    pub use crate::series::Series;
    pub use crate::state::{PlotState, Update};
}
