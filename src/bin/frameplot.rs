//! frameplot - live plot of `(u32, u32)` frames streamed on stdin.
//!
//! Each 8-byte frame is two little-endian `u32` values, x then y.
//!
//! Run: `frameplot-gen | frameplot`

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use frameplot::app::{self, headless, App, RecordSource};
use frameplot::config::{Config, PlotStyle};
use frameplot::record::{Echo, RecordReader};
use frameplot::{debug, Error};

/// frameplot - live plot of (u32, u32) frames streamed on stdin
#[derive(Parser, Debug)]
#[command(name = "frameplot")]
#[command(version)]
#[command(about = "Live plot of little-endian (u32, u32) frames read from stdin", long_about = None)]
struct Cli {
    /// Fold the stream without a UI, echoing records to stdout
    #[arg(long)]
    headless: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// UI tick in milliseconds
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: Option<u64>,

    /// Draw unconnected points instead of a line
    #[arg(long)]
    scatter: bool,

    /// Do not echo decoded records
    #[arg(long)]
    no_echo: bool,

    /// Enable debug logging to stderr (also FRAMEPLOT_DEBUG=1)
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// CLI flags override the config file.
    fn apply(&self, config: &mut Config) {
        if let Some(tick_ms) = self.tick_ms {
            config.display.tick_ms = tick_ms;
        }
        if self.scatter {
            config.display.style = PlotStyle::Scatter;
        }
        if self.no_echo {
            config.echo = false;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    debug::init(cli.debug);

    let mut config = Config::resolve(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;
    frameplot::debug!("main", "config: {config:?}");

    if cli.headless {
        headless::install_interrupt_exit()?;
        let echo = if config.echo { Echo::Stdout } else { Echo::Off };
        let reader = RecordReader::new(io::stdin().lock()).with_echo(echo);
        return match headless::run(reader) {
            // A closed stdout ends headless mode normally.
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => Ok(other.map(drop)?),
        };
    }

    let (echo, show_recent) = app::echo_route(config.echo, io::stderr().is_terminal());
    let source = RecordSource::stdin(echo)?;
    let mut app = App::new(config).with_recent_panel(show_recent);
    app.run(source)?;

    Ok(())
}
