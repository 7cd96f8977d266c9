//! Background record source for the interactive viewer.
//!
//! Reading stdin blocks until a full frame or EOF, so the reader runs on its
//! own thread and hands records to the UI thread over a channel. Order is
//! preserved; the UI drains whatever has arrived once per tick.

use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use crate::record::{Echo, Record, RecordReader};

/// Message from the reader thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    /// A decoded record.
    Record(Record),
    /// End of stream.
    End,
    /// The stream failed; no more records will arrive.
    Failed(String),
}

/// Lifecycle of the input stream as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StreamStatus {
    /// Records may still arrive.
    #[default]
    Live,
    /// The stream ended normally.
    Ended,
    /// The stream failed with the given message.
    Failed(String),
}

impl StreamStatus {
    /// Whether no more records will arrive.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !matches!(self, StreamStatus::Live)
    }
}

/// Receiving end of the reader thread.
#[derive(Debug)]
pub struct RecordSource {
    rx: Receiver<SourceEvent>,
    status: StreamStatus,
}

impl RecordSource {
    /// Spawns a reader thread over stdin.
    ///
    /// The stdin lock is taken on the reader thread, which owns it for the
    /// rest of the process.
    pub fn stdin(echo: Echo) -> io::Result<Self> {
        Self::spawn_with(move || RecordReader::new(io::stdin().lock()).with_echo(echo))
    }

    /// Spawns a reader thread over an arbitrary reader.
    pub fn spawn<R: Read + Send + 'static>(reader: RecordReader<R>) -> io::Result<Self> {
        Self::spawn_with(move || reader)
    }

    fn spawn_with<R, F>(make: F) -> io::Result<Self>
    where
        R: Read,
        F: FnOnce() -> RecordReader<R> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new().name("frameplot-reader".to_string()).spawn(move || {
            pump(make(), &tx);
        })?;
        Ok(Self { rx, status: StreamStatus::Live })
    }

    /// Builds a source from an existing channel, for driving the UI in tests.
    #[must_use]
    pub fn from_receiver(rx: Receiver<SourceEvent>) -> Self {
        Self { rx, status: StreamStatus::Live }
    }

    /// Hands up to `max` pending records to `f`, in arrival order, without
    /// blocking. Returns how many were handed over.
    pub fn drain(&mut self, max: usize, mut f: impl FnMut(Record)) -> usize {
        let mut handed = 0;
        while handed < max && !self.status.is_closed() {
            match self.rx.try_recv() {
                Ok(SourceEvent::Record(record)) => {
                    f(record);
                    handed += 1;
                }
                Ok(SourceEvent::End) => self.status = StreamStatus::Ended,
                Ok(SourceEvent::Failed(message)) => self.status = StreamStatus::Failed(message),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => self.status = StreamStatus::Ended,
            }
        }
        handed
    }

    /// Current stream status.
    #[must_use]
    pub fn status(&self) -> &StreamStatus {
        &self.status
    }
}

/// Runs the reader to completion, forwarding every item.
fn pump<R: Read>(reader: RecordReader<R>, tx: &Sender<SourceEvent>) {
    for item in reader {
        let event = match item {
            Ok(record) => SourceEvent::Record(record),
            Err(e) => SourceEvent::Failed(e.to_string()),
        };
        if tx.send(event).is_err() {
            crate::debug!("source", "receiver dropped, stopping reader");
            return;
        }
    }
    let _ = tx.send(SourceEvent::End);
}
