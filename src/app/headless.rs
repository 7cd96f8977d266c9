//! Headless mode: fold the stream without a terminal UI.
//!
//! Used for pipelines and for checking a capture before plotting it. The
//! record echo is the only output; a summary goes to the debug log.

use std::io::Read;

use crate::error::Result;
use crate::record::RecordReader;
use crate::state::PlotState;

/// Installs a SIGINT handler that exits the process with status 0.
///
/// Accumulated state is not flushed or rolled back.
pub fn install_interrupt_exit() -> Result<()> {
    ctrlc::set_handler(|| {
        crate::info!("headless", "interrupted, exiting");
        std::process::exit(0);
    })?;
    Ok(())
}

/// Folds every record from `reader` into a fresh [`PlotState`] until end of
/// stream.
pub fn run<R: Read>(reader: RecordReader<R>) -> Result<PlotState> {
    crate::time_scope!("headless", "run");
    let mut state = PlotState::new();

    for record in reader {
        let update = state.update(record?);
        crate::trace!(
            "headless",
            "{} points, x {:?}, y {:?}",
            update.series.len(),
            update.limits.x,
            update.limits.y
        );
    }

    crate::info!(
        "headless",
        "{} records, x range {:?}, y range {:?}, limits {:?}",
        state.len(),
        state.bounds().x_range(),
        state.bounds().y_range(),
        state.limits()
    );
    Ok(state)
}
