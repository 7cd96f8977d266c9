//! frameplot-gen - write synthetic `(u32, u32)` frames to stdout.
//!
//! Run: `frameplot-gen --pattern sine --interval-ms 20 | frameplot`

use std::io::{self, BufWriter, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use frameplot::debug;
use frameplot::gen::{Generator, Pattern};

/// frameplot-gen - synthetic frame stream
#[derive(Parser, Debug)]
#[command(name = "frameplot-gen")]
#[command(version)]
#[command(about = "Write synthetic little-endian (u32, u32) frames to stdout", long_about = None)]
struct Cli {
    /// Waveform for the y component
    #[arg(short, long, value_enum, default_value_t = Pattern::Sine)]
    pattern: Pattern,

    /// Number of frames to write (unbounded if omitted)
    #[arg(short = 'n', long)]
    count: Option<u64>,

    /// Delay between frames in milliseconds
    #[arg(short, long, default_value_t = 0)]
    interval_ms: u64,

    /// Peak y value
    #[arg(short, long, default_value_t = 1000)]
    amplitude: u32,

    /// Samples per waveform period
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    period: u64,

    /// Use elapsed milliseconds as x instead of the sample index
    #[arg(long)]
    timestamps: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    debug::init(cli.debug);

    match write_frames(&cli) {
        // The plotter went away; that is how an unbounded stream ends.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}

fn write_frames(cli: &Cli) -> io::Result<()> {
    let generator = Generator::new(cli.pattern)
        .period(cli.period)
        .amplitude(cli.amplitude)
        .timestamps(cli.timestamps);
    let limit = cli.count.map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));
    let pace = Duration::from_millis(cli.interval_ms);

    let mut out = BufWriter::new(io::stdout().lock());
    let mut written = 0u64;
    for record in generator.take(limit) {
        out.write_all(&record.encode())?;
        written += 1;
        if !pace.is_zero() {
            out.flush()?;
            thread::sleep(pace);
        }
    }
    out.flush()?;

    frameplot::info!("gen", "wrote {written} frames");
    Ok(())
}
