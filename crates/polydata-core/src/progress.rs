//! Progress reporting for long-running builds.
//!
//! Builders report through the [`ProgressObserver`] trait. Any
//! `FnMut(usize, usize)` closure is an observer; [`ProgressBar`] renders a
//! text bar and writes it to the log.

use std::time::Instant;

/// Receives `(done, total)` notifications.
///
/// Counts are monotonically non-decreasing and the last call of a run
/// reports `done == total`.
pub trait ProgressObserver {
    /// Called with the number of processed items out of `total`.
    fn on_progress(&mut self, done: usize, total: usize);
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, usize),
{
    fn on_progress(&mut self, done: usize, total: usize) {
        self(done, total);
    }
}

const BAR_CHAR: char = '\u{25AC}';
const ARROW_CHAR: char = '\u{25BA}';

/// A text progress bar with an optional time estimate.
///
/// ```
/// use polydata_core::progress::ProgressBar;
///
/// let mut bar = ProgressBar::new(0, 10, 1);
/// bar.update(5);
/// assert_eq!(bar.percent(), 50);
/// assert!(bar.bar().ends_with(" 50%"));
/// ```
#[derive(Debug, Clone)]
pub struct ProgressBar {
    start: usize,
    stop: usize,
    step: usize,
    width: usize,
    eta: bool,
    counts: usize,
    percent: u32,
    bar: String,
    last_bar: String,
    started: Instant,
}

impl ProgressBar {
    /// Creates a bar running from `start` to `stop` in increments of `step`.
    #[must_use]
    pub fn new(start: usize, stop: usize, step: usize) -> Self {
        let mut bar = Self {
            start,
            stop,
            step: step.max(1),
            width: 24,
            eta: true,
            counts: start,
            percent: 0,
            bar: String::new(),
            last_bar: String::new(),
            started: Instant::now(),
        };
        bar.update(start);
        bar
    }

    /// Sets the total bar width in characters, brackets included.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(3);
        self.update(self.counts);
        self
    }

    /// Enables or disables the time estimate suffix.
    #[must_use]
    pub fn with_eta(mut self, eta: bool) -> Self {
        self.eta = eta;
        self
    }

    /// Returns the current count.
    #[must_use]
    pub fn counts(&self) -> usize {
        self.counts
    }

    /// Returns the completed percentage, rounded.
    #[must_use]
    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Returns the bar text without the time estimate.
    #[must_use]
    pub fn bar(&self) -> &str {
        &self.bar
    }

    /// Returns the number of steps between `start` and `stop`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop.saturating_sub(self.start).div_ceil(self.step)
    }

    /// Returns true if the range is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the values of the range.
    pub fn range(&self) -> impl Iterator<Item = usize> {
        (self.start..self.stop).step_by(self.step)
    }

    /// Moves the bar to `counts`, clamped into `[start, stop]`.
    pub fn update(&mut self, counts: usize) {
        self.counts = counts.clamp(self.start, self.stop.max(self.start));

        let span = self.stop.saturating_sub(self.start);
        self.percent = if span == 0 {
            0
        } else {
            ((self.counts - self.start) as f64 * 100.0 / span as f64).round() as u32
        };

        let inner = self.width - 2;
        let filled = (f64::from(self.percent) / 100.0 * inner as f64).round() as usize;
        self.bar = if filled == 0 {
            format!("[{ARROW_CHAR}{}]", " ".repeat(inner - 1))
        } else if filled >= inner {
            format!("[{}]", BAR_CHAR.to_string().repeat(inner))
        } else {
            format!(
                "[{}{ARROW_CHAR}{}]",
                BAR_CHAR.to_string().repeat(filled - 1),
                " ".repeat(inner - filled)
            )
        };
        if self.percent < 100 {
            self.bar.push_str(&format!(" {}%", self.percent));
        }
    }

    /// Advances by one step and returns the line to display, if the bar changed.
    pub fn tick(&mut self, txt: &str) -> Option<String> {
        self.update(self.counts + self.step);
        self.render(txt)
    }

    /// Moves to `counts` and returns the line to display, if the bar changed.
    pub fn set(&mut self, counts: usize, txt: &str) -> Option<String> {
        self.update(counts);
        self.render(txt)
    }

    fn render(&mut self, txt: &str) -> Option<String> {
        if self.bar == self.last_bar {
            return None;
        }
        self.last_bar.clone_from(&self.bar);

        if !self.eta {
            return Some(format!("{} {txt}", self.bar));
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let done = (self.counts - self.start) as f64;
        let (rate, remaining) = if elapsed > 0.0 && done > 0.0 {
            let rate = done / elapsed;
            (rate, (self.stop - self.counts) as f64 / rate)
        } else {
            (1.0, 0.0)
        };

        let line = if remaining < 1.0 {
            format!(
                "{} Elapsed time: {}({rate:.1} it/s)",
                self.bar,
                format_seconds(elapsed)
            )
        } else {
            format!(
                "{} ETA: {}({rate:.1} it/s) {txt}",
                self.bar,
                format_seconds(remaining)
            )
        };
        Some(line)
    }
}

impl ProgressObserver for ProgressBar {
    fn on_progress(&mut self, done: usize, total: usize) {
        if total != self.stop {
            self.stop = total;
        }
        if let Some(line) = self.set(done, "") {
            log::info!("{}", line.trim_end());
        }
    }
}

fn format_seconds(secs: f64) -> String {
    if secs > 60.0 {
        let mins = (secs / 60.0) as u64;
        let rest = secs - 60.0 * mins as f64;
        format!("{mins}m{}s ", (rest + 0.5) as u64)
    } else {
        format!("{}s ", (secs + 0.5) as u64)
    }
}
