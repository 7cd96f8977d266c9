//! Interactive terminal viewer.
//!
//! The viewer is the rendering collaborator for [`PlotState`]: it drains
//! records from a [`RecordSource`], folds them in, and redraws the chart with
//! the current display limits once per tick.

pub mod headless;
pub mod input;
pub mod source;
pub mod ui;

use std::io::{self, stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::{Config, PlotStyle};
use crate::error::Result;
use crate::record::{Echo, Record};
use crate::state::PlotState;

pub use input::{Action, InputHandler};
pub use source::{RecordSource, SourceEvent, StreamStatus};

/// Upper bound on records folded per tick so a fast producer cannot starve
/// keyboard handling.
pub const MAX_RECORDS_PER_TICK: usize = 100_000;

/// Picks the echo channel for interactive mode.
///
/// Returns the echo and whether the in-UI recent-records panel replaces it.
/// Writing to stderr while it shares the terminal would corrupt the
/// alternate screen, so a terminal stderr routes the echo into the panel.
#[must_use]
pub fn echo_route(echo_enabled: bool, stderr_is_terminal: bool) -> (Echo, bool) {
    match (echo_enabled, stderr_is_terminal) {
        (false, _) => (Echo::Off, false),
        (true, true) => (Echo::Off, true),
        (true, false) => (Echo::Stderr, false),
    }
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    stdout().execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step is attempted even if an earlier one fails; the first error is
/// returned.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = out.execute(LeaveAlternateScreen).map(drop);
    let cursor = out.execute(Show).map(drop);
    raw.and(screen).and(cursor)
}

/// The interactive plot viewer.
#[derive(Debug)]
pub struct App {
    config: Config,
    state: PlotState,
    input: InputHandler,
    style: PlotStyle,
    show_recent: bool,
    show_help: bool,
    should_quit: bool,
    stream: StreamStatus,
}

impl App {
    /// Creates a viewer with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let input = InputHandler::new(config.vim_keys);
        let style = config.display.style;

        Self {
            config,
            state: PlotState::new(),
            input,
            style,
            show_recent: false,
            show_help: false,
            should_quit: false,
            stream: StreamStatus::Live,
        }
    }

    /// Shows the recent-records panel.
    #[must_use]
    pub fn with_recent_panel(mut self, show: bool) -> Self {
        self.show_recent = show && self.config.display.recent_records > 0;
        self
    }

    /// Runs the viewer until the user quits.
    ///
    /// The view stays up after the stream ends; it just stops changing.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup or rendering fails.
    pub fn run(&mut self, mut source: RecordSource) -> Result<()> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))?;

        // Setup terminal
        enable_raw_mode()?;
        let mut terminal = match enter_screen() {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = restore_terminal(&mut stdout());
                return Err(e.into());
            }
        };

        let result = self.main_loop(&mut terminal, &mut source, &interrupted);

        // Restore terminal
        let restored = restore_terminal(terminal.backend_mut());

        crate::info!("app", "quit with {} records plotted", self.state.len());
        result.and(restored.map_err(Into::into))
    }

    fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        source: &mut RecordSource,
        interrupted: &AtomicBool,
    ) -> Result<()> {
        let tick = self.config.tick_interval();

        loop {
            self.pump(source);

            terminal.draw(|frame| ui::draw(frame, self))?;

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if interrupted.load(Ordering::Relaxed) {
                crate::info!("app", "interrupted");
                self.should_quit = true;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Folds whatever the source has delivered since the last tick.
    pub fn pump(&mut self, source: &mut RecordSource) -> usize {
        let state = &mut self.state;
        let folded = source.drain(MAX_RECORDS_PER_TICK, |record| {
            state.update(record);
        });

        if *source.status() != self.stream {
            match source.status() {
                StreamStatus::Ended => crate::info!("app", "end of stream"),
                StreamStatus::Failed(e) => crate::error!("app", "stream failed: {e}"),
                StreamStatus::Live => {}
            }
            self.stream = source.status().clone();
        }
        folded
    }

    /// Folds one record directly.
    pub fn ingest(&mut self, record: Record) {
        self.state.update(record);
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = self.input.handle_key(key);
        self.handle_action(action);
    }

    /// Applies an input action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = !self.show_help,
            Action::ToggleStyle => self.style = self.style.toggled(),
            Action::None => {}
        }
    }

    /// Plot state.
    #[must_use]
    pub fn state(&self) -> &PlotState {
        &self.state
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current drawing style.
    #[must_use]
    pub fn style(&self) -> PlotStyle {
        self.style
    }

    /// Stream status as of the last pump.
    #[must_use]
    pub fn stream(&self) -> &StreamStatus {
        &self.stream
    }

    /// Whether the recent-records panel is shown.
    #[must_use]
    pub fn show_recent(&self) -> bool {
        self.show_recent
    }

    /// Whether the help overlay is shown.
    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
