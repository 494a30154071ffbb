//! Wall-clock stopwatch.

use std::time::{Duration, Instant};

/// Unit for [`Timer::elapsed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Nanoseconds.
    Nano,
    /// Microseconds.
    Micro,
    /// Milliseconds.
    #[default]
    Milli,
    /// Seconds.
    Sec,
    /// Minutes.
    Min,
}

impl TimeUnit {
    /// Express `duration` in this unit.
    pub fn convert(self, duration: Duration) -> f64 {
        let secs = duration.as_secs_f64();
        match self {
            Self::Nano => secs * 1e9,
            Self::Micro => secs * 1e6,
            Self::Milli => secs * 1e3,
            Self::Sec => secs,
            Self::Min => secs / 60.0,
        }
    }

    /// Short suffix such as `"ms"`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Nano => "ns",
            Self::Micro => "us",
            Self::Milli => "ms",
            Self::Sec => "s",
            Self::Min => "min",
        }
    }
}

/// A stopwatch that starts running when created.
///
/// While running, [`elapsed`](Timer::elapsed) measures up to now. After
/// [`stop`](Timer::stop) it keeps reporting the interval up to the stop.
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    started: Instant,
    stopped: Option<Instant>,
}

impl Timer {
    /// A running timer.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    /// Restart from now, clearing any earlier stop.
    pub fn start(&mut self) {
        self.started = Instant::now();
        self.stopped = None;
    }

    /// Freeze the measured interval.
    pub fn stop(&mut self) {
        self.stopped = Some(Instant::now());
    }

    /// `true` until [`stop`](Timer::stop) is called.
    pub fn is_running(&self) -> bool {
        self.stopped.is_none()
    }

    /// The measured interval as a [`Duration`].
    pub fn duration(&self) -> Duration {
        let end = self.stopped.unwrap_or_else(Instant::now);
        end.saturating_duration_since(self.started)
    }

    /// The measured interval in `unit`.
    pub fn elapsed(&self, unit: TimeUnit) -> f64 {
        unit.convert(self.duration())
    }

    /// Run `f` and return its result with the time it took.
    pub fn time<R>(f: impl FnOnce() -> R) -> (R, Duration) {
        let timer = Self::new();
        let result = f();
        (result, timer.duration())
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
