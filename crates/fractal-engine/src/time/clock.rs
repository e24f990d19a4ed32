use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;

/// Source of wall-clock readings in seconds.
///
/// Readings are expected to be non-decreasing. `FrameClock` tolerates sources
/// that occasionally step backwards (suspend/resume on some platforms).
pub trait Clock {
    /// Returns the current reading in seconds since an arbitrary origin.
    fn now(&mut self) -> Result<f64>;
}

/// Production clock backed by `std::time::Instant`.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> Result<f64> {
        Ok(self.origin.elapsed().as_secs_f64())
    }
}

/// Hand-driven clock for tests and replays.
///
/// Clones share the same reading, so a test can keep one handle while the
/// frame loop owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Result<f64> {
        Ok(self.now.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_reading() {
        let a = ManualClock::new(1.0);
        let mut b = a.clone();
        a.advance(0.5);
        assert_eq!(b.now().unwrap(), 1.5);
        a.set(0.25);
        assert_eq!(b.now().unwrap(), 0.25);
    }

    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let mut c = MonotonicClock::new();
        let t0 = c.now().unwrap();
        let t1 = c.now().unwrap();
        assert!(t0 >= 0.0);
        assert!(t1 >= t0);
    }
}
