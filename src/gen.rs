//! Synthetic frame streams for demos and pipelines.
//!
//! `frameplot-gen | frameplot` plots a waveform without any hardware attached.

use std::f64::consts::TAU;
use std::time::Instant;

use crate::record::Record;

/// Waveform used for the y component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Pattern {
    /// `y = sample index`.
    Ramp,
    /// Sine wave between 0 and the amplitude.
    Sine,
    /// Rises linearly to the amplitude, then drops to 0.
    Sawtooth,
    /// Amplitude for the first half of each period, 0 for the second.
    Square,
}

impl Pattern {
    /// Value of the waveform at sample `index`.
    ///
    /// `period` is clamped to at least one sample.
    #[must_use]
    pub fn sample(self, index: u64, period: u64, amplitude: u32) -> u32 {
        let period = period.max(1);
        let phase = (index % period) as f64 / period as f64;
        let scale = f64::from(amplitude);

        match self {
            Pattern::Ramp => index.min(u64::from(u32::MAX)) as u32,
            Pattern::Sine => (scale * (0.5 + 0.5 * (TAU * phase).sin())).round() as u32,
            Pattern::Sawtooth => (scale * phase).round() as u32,
            Pattern::Square => {
                if phase < 0.5 {
                    amplitude
                } else {
                    0
                }
            }
        }
    }
}

/// Source of the x component.
#[derive(Debug, Clone, Copy)]
enum Clock {
    /// Sample index.
    Index,
    /// Milliseconds since the generator was created.
    Elapsed(Instant),
}

/// Infinite iterator of synthetic records.
#[derive(Debug, Clone)]
pub struct Generator {
    pattern: Pattern,
    period: u64,
    amplitude: u32,
    clock: Clock,
    index: u64,
}

impl Generator {
    /// Creates a generator with `x` = sample index.
    #[must_use]
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern, period: 100, amplitude: 1000, clock: Clock::Index, index: 0 }
    }

    /// Samples per waveform period.
    #[must_use]
    pub fn period(mut self, period: u64) -> Self {
        self.period = period.max(1);
        self
    }

    /// Peak y value.
    #[must_use]
    pub fn amplitude(mut self, amplitude: u32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Uses elapsed milliseconds as `x` instead of the sample index.
    #[must_use]
    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.clock = if enabled { Clock::Elapsed(Instant::now()) } else { Clock::Index };
        self
    }
}

impl Iterator for Generator {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        let x = match self.clock {
            Clock::Index => self.index.min(u64::from(u32::MAX)) as u32,
            Clock::Elapsed(start) => start.elapsed().as_millis().min(u128::from(u32::MAX)) as u32,
        };
        let y = self.pattern.sample(self.index, self.period, self.amplitude);
        self.index += 1;
        Some(Record::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_names_on_the_command_line() {
        use clap::ValueEnum;

        assert_eq!(Pattern::from_str("sawtooth", false), Ok(Pattern::Sawtooth));
        assert_eq!(Pattern::from_str("SQUARE", true), Ok(Pattern::Square));
        assert!(Pattern::from_str("triangle", false).is_err());
    }

    #[test]
    fn test_ramp_follows_index() {
        let ys: Vec<u32> = Generator::new(Pattern::Ramp).take(4).map(|r| r.y).collect();
        assert_eq!(ys, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_x_is_sample_index() {
        let xs: Vec<u32> = Generator::new(Pattern::Sine).take(3).map(|r| r.x).collect();
        assert_eq!(xs, vec![0, 1, 2]);
    }

    #[test]
    fn test_sine_spans_amplitude() {
        assert_eq!(Pattern::Sine.sample(0, 4, 100), 50);
        assert_eq!(Pattern::Sine.sample(1, 4, 100), 100);
        assert_eq!(Pattern::Sine.sample(2, 4, 100), 50);
        assert_eq!(Pattern::Sine.sample(3, 4, 100), 0);
    }

    #[test]
    fn test_sawtooth_wraps() {
        let ys: Vec<u32> = (0..6).map(|i| Pattern::Sawtooth.sample(i, 4, 100)).collect();
        assert_eq!(ys, vec![0, 25, 50, 75, 0, 25]);
    }

    #[test]
    fn test_square_halves() {
        let ys: Vec<u32> = (0..4).map(|i| Pattern::Square.sample(i, 4, 7)).collect();
        assert_eq!(ys, vec![7, 7, 0, 0]);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        assert_eq!(Pattern::Sawtooth.sample(5, 0, 10), 0);
    }

    #[test]
    fn test_timestamps_are_monotonic() {
        let records: Vec<Record> =
            Generator::new(Pattern::Ramp).timestamps(true).take(50).collect();
        assert!(records.windows(2).all(|w| w[0].x <= w[1].x));
    }
}
