//! Frame decoding and the lazy record reader.
//!
//! A frame is exactly [`FRAME_LEN`] bytes: a little-endian `u32` x followed
//! by a little-endian `u32` y. There is no header, delimiter or checksum, so
//! any 8-byte frame decodes. A short read (fewer than 8 bytes before EOF)
//! ends the record sequence; trailing bytes are dropped.
//!
//! # Example
//!
//! ```rust
//! use frameplot::record::{Record, RecordReader};
//!
//! let bytes = [1, 0, 0, 0, 2, 0, 0, 0, 0xff];
//! let records: Vec<Record> = RecordReader::new(&bytes[..])
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(records, vec![Record::new(1, 2)]);
//! ```

use std::fmt;
use std::io::{self, Read, Write};
use std::iter::FusedIterator;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::Result;

/// Size of one frame on the wire.
pub const FRAME_LEN: usize = 8;

/// Raw bytes of one frame.
pub type Frame = [u8; FRAME_LEN];

/// A decoded `(x, y)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Record {
    /// Bytes 0..4 of the frame.
    pub x: u32,
    /// Bytes 4..8 of the frame.
    pub y: u32,
}

impl Record {
    /// Creates a record from its two components.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Decodes a frame as two little-endian `u32` values.
    #[must_use]
    pub fn decode(frame: &Frame) -> Self {
        Self { x: LittleEndian::read_u32(&frame[0..4]), y: LittleEndian::read_u32(&frame[4..8]) }
    }

    /// Encodes the record into its wire frame. Inverse of [`Record::decode`].
    #[must_use]
    pub fn encode(&self) -> Frame {
        let mut frame = [0u8; FRAME_LEN];
        LittleEndian::write_u32(&mut frame[0..4], self.x);
        LittleEndian::write_u32(&mut frame[4..8], self.y);
        frame
    }

    /// The record as plot coordinates.
    #[must_use]
    pub fn as_point(&self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Where decoded records are reported, one `(x, y)` line each.
pub enum Echo {
    /// No per-record output.
    Off,
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
    /// Any other writer.
    Writer(Box<dyn Write + Send>),
}

impl Echo {
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        match self {
            Echo::Off => Ok(()),
            Echo::Stdout => writeln!(io::stdout(), "{record}"),
            Echo::Stderr => writeln!(io::stderr(), "{record}"),
            Echo::Writer(w) => writeln!(w, "{record}"),
        }
    }
}

impl fmt::Debug for Echo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Echo::Off => "Off",
            Echo::Stdout => "Stdout",
            Echo::Stderr => "Stderr",
            Echo::Writer(_) => "Writer",
        };
        f.write_str(name)
    }
}

/// Lazy, non-restartable sequence of records pulled from a byte stream.
///
/// Yields `Ok(record)` per full frame. Ends at the first short read. An I/O
/// error is yielded once and also ends the sequence.
#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
    echo: Echo,
    records: u64,
    finished: bool,
}

impl<R: Read> RecordReader<R> {
    /// Creates a reader over `inner` with echo disabled.
    pub fn new(inner: R) -> Self {
        Self { inner, echo: Echo::Off, records: 0, finished: false }
    }

    /// Sets the echo channel.
    ///
    /// A write failure on the echo is logged and turns the echo off; the
    /// record is still yielded.
    #[must_use]
    pub fn with_echo(mut self, echo: Echo) -> Self {
        self.echo = echo;
        self
    }

    /// Number of records decoded so far.
    pub fn records_read(&self) -> u64 {
        self.records
    }

    /// Whether the sequence has ended.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Reads the next frame.
    ///
    /// Returns `Ok(None)` at end of stream, including when fewer than
    /// [`FRAME_LEN`] bytes remain. Once ended, always returns `Ok(None)`.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        if self.finished {
            return Ok(None);
        }

        let mut frame = [0u8; FRAME_LEN];
        let filled = match fill_frame(&mut self.inner, &mut frame) {
            Ok(n) => n,
            Err(e) => {
                self.finished = true;
                crate::error!("reader", "read failed after {} records: {e}", self.records);
                return Err(e.into());
            }
        };

        if filled < FRAME_LEN {
            self.finished = true;
            if filled > 0 {
                crate::debug!("reader", "discarding {filled} trailing bytes");
            }
            crate::info!("reader", "end of stream after {} records", self.records);
            return Ok(None);
        }

        let record = Record::decode(&frame);
        self.records += 1;
        crate::trace!("reader", "record #{} {record}", self.records);

        // The echo is for the operator only; losing it never costs a record.
        if let Err(e) = self.echo.emit(&record) {
            crate::warn!("reader", "echo failed, disabling it: {e}");
            self.echo = Echo::Off;
        }

        Ok(Some(record))
    }

    /// Returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Fills `frame` from `reader`, accumulating short reads, until it is full
/// or EOF. Returns the number of bytes filled.
fn fill_frame<R: Read>(reader: &mut R, frame: &mut Frame) -> io::Result<usize> {
    let mut filled = 0;
    while filled < FRAME_LEN {
        match reader.read(&mut frame[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

impl<R: Read> FusedIterator for RecordReader<R> {}
