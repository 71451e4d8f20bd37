//! Discrete simulation time.
//!
//! The frame advancer only ever sees [`Tick`] values. Where they come from is
//! up to the host: [`FrameClock`] derives them from wall-clock time, while
//! [`ManualClock`] is stepped explicitly (replays, tests, headless runs).

use std::cell::Cell;

use instant::{Duration, Instant};

/// One discrete unit of simulation time.
///
/// Ticks are monotonically non-decreasing within a process. Wraparound is not
/// supported; `u64` is wide enough for any realistic process lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u64 {
        self.0
    }

    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Number of ticks between `earlier` and `self`.
    ///
    /// Zero when `self` is not ahead of `earlier`, so a clock that appears to go
    /// backwards never produces pending work.
    pub const fn ticks_since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl From<u64> for Tick {
    fn from(index: u64) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Source of the current tick, read once per frame by the host.
pub trait Clock {
    fn now(&self) -> Tick;
}

/// Wall-clock driven ticks: one tick per elapsed `tick_duration`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    tick_duration: Duration,
}

impl FrameClock {
    pub fn new(tick_duration: Duration) -> Self {
        Self::starting_at(Instant::now(), tick_duration)
    }

    pub fn from_millis(tick_duration_millis: u64) -> Self {
        Self::new(Duration::from_millis(tick_duration_millis))
    }

    pub fn starting_at(start: Instant, tick_duration: Duration) -> Self {
        // a zero duration would divide by zero below
        let tick_duration = tick_duration.max(Duration::from_micros(1));
        Self {
            start,
            tick_duration,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Converts an elapsed span into whole ticks, discarding the remainder.
    pub fn ticks_in(&self, elapsed: Duration) -> Tick {
        let ticks = elapsed.as_nanos() / self.tick_duration.as_nanos();
        Tick(u64::try_from(ticks).unwrap_or(u64::MAX))
    }
}

impl Clock for FrameClock {
    fn now(&self) -> Tick {
        self.ticks_in(self.start.elapsed())
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(tick: Tick) -> Self {
        Self {
            now: Cell::new(tick.0),
        }
    }

    /// Moves forward by `ticks`, stopping at `u64::MAX`.
    pub fn advance(&self, ticks: u64) -> Tick {
        self.now.set(self.now.get().saturating_add(ticks));
        Tick(self.now.get())
    }

    /// Jumps to `tick`. Moving backwards is ignored; the clock never decreases.
    pub fn set(&self, tick: Tick) {
        if tick.0 >= self.now.get() {
            self.now.set(tick.0);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Tick {
        Tick(self.now.get())
    }
}
