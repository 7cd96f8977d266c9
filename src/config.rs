//! Configuration for the frameplot viewer.
//!
//! YAML file with precedence: CLI > file > defaults. The frame layout and the
//! bounds padding policy are fixed and deliberately absent here.

use crate::error::{Error, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How the series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlotStyle {
    /// Points joined by line segments.
    #[default]
    Line,
    /// Unconnected points.
    Scatter,
}

impl PlotStyle {
    /// The other style.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PlotStyle::Line => PlotStyle::Scatter,
            PlotStyle::Scatter => PlotStyle::Line,
        }
    }
}

/// Glyph used for plotted points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// Braille patterns (2x4 sub-cell resolution).
    #[default]
    Braille,
    /// One dot per cell.
    Dot,
    /// Full block per cell.
    Block,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// UI tick in milliseconds: keyboard poll timeout and redraw cadence.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Line or scatter.
    #[serde(default)]
    pub style: PlotStyle,

    /// Point glyph.
    #[serde(default)]
    pub marker: MarkerKind,

    /// Number of records kept in the recent-records panel (0 hides it).
    #[serde(default = "default_recent_records")]
    pub recent_records: usize,

    /// Chart title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Series color, any name or `#rrggbb` understood by ratatui.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_tick_ms() -> u64 {
    100
}
fn default_recent_records() -> usize {
    8
}
fn default_title() -> String {
    "frameplot".to_string()
}
fn default_color() -> String {
    "cyan".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            style: PlotStyle::default(),
            marker: MarkerKind::default(),
            recent_records: default_recent_records(),
            title: default_title(),
            color: default_color(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Report each decoded record as an `(x, y)` line.
    #[serde(default = "default_true")]
    pub echo: bool,

    /// Enable vim-style keys.
    #[serde(default = "default_true")]
    pub vim_keys: bool,
}

fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            display: DisplayConfig::default(),
            echo: true,
            vim_keys: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config_dir>/frameplot/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("frameplot").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and silently skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is found but cannot be used.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.display.tick_ms == 0 {
            return Err(Error::ConfigInvalid {
                key: "display.tick_ms".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.display.color.parse::<Color>().is_err() {
            return Err(Error::ConfigInvalid {
                key: "display.color".to_string(),
                message: format!("unknown color '{}'", self.display.color),
            });
        }
        Ok(())
    }

    /// UI tick as a Duration.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.display.tick_ms)
    }

    /// Series color; falls back to cyan for unparsable names.
    #[must_use]
    pub fn series_color(&self) -> Color {
        self.display.color.parse().unwrap_or(Color::Cyan)
    }
}
