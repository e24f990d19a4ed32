use anyhow::{Context, Result};

use super::clock::{Clock, MonotonicClock};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds. Never negative.
    pub dt: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The baseline is read when the clock is created, so the first tick measures
/// the time spent between construction and the first frame.
///
/// Negative deltas (a source that stepped backwards) are clamped to zero: a
/// negative dt would silently reverse every time-scaled action. Long stalls
/// are reported as-is.
#[derive(Debug, Clone)]
pub struct FrameClock<C: Clock = MonotonicClock> {
    source: C,
    last: f64,
    frame_index: u64,
}

impl<C: Clock> FrameClock<C> {
    /// Creates a clock and records the initial baseline from `source`.
    pub fn new(mut source: C) -> Result<Self> {
        let last = source.now().context("failed to read initial clock baseline")?;
        Ok(Self {
            source,
            last,
            frame_index: 0,
        })
    }

    /// Last recorded clock reading.
    pub fn previous_timestamp(&self) -> f64 {
        self.last
    }

    /// Re-reads the baseline so the next tick does not include a pause.
    pub fn reset(&mut self) -> Result<()> {
        self.last = self.source.now().context("failed to read clock")?;
        Ok(())
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> Result<FrameTime> {
        let now = self.source.now().context("failed to read clock")?;
        let mut dt = now - self.last;

        // NaN lands here too.
        if !(dt >= 0.0) {
            log::debug!("clock went backwards by {:.6}s; using dt = 0", self.last - now);
            dt = 0.0;
        }

        self.last = now;

        let ft = FrameTime {
            dt,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        Ok(ft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    struct BrokenClock;

    impl Clock for BrokenClock {
        fn now(&mut self) -> Result<f64> {
            anyhow::bail!("timer unavailable")
        }
    }

    #[test]
    fn tick_measures_elapsed_since_baseline() {
        let src = ManualClock::new(10.0);
        let mut clock = FrameClock::new(src.clone()).unwrap();
        src.advance(0.25);
        let ft = clock.tick().unwrap();
        assert_eq!(ft.dt, 0.25);
        assert_eq!(clock.previous_timestamp(), 10.25);
    }

    #[test]
    fn frame_index_increments() {
        let src = ManualClock::new(0.0);
        let mut clock = FrameClock::new(src.clone()).unwrap();
        assert_eq!(clock.tick().unwrap().frame_index, 0);
        assert_eq!(clock.tick().unwrap().frame_index, 1);
        assert_eq!(clock.tick().unwrap().frame_index, 2);
    }

    #[test]
    fn regression_clamps_to_zero() {
        let src = ManualClock::new(5.0);
        let mut clock = FrameClock::new(src.clone()).unwrap();
        src.set(4.0);
        let ft = clock.tick().unwrap();
        assert_eq!(ft.dt, 0.0);

        // The regressed reading becomes the new baseline.
        src.set(4.5);
        assert_eq!(clock.tick().unwrap().dt, 0.5);
    }

    #[test]
    fn no_upper_clamp_by_default() {
        let src = ManualClock::new(0.0);
        let mut clock = FrameClock::new(src.clone()).unwrap();
        src.advance(100.0);
        assert_eq!(clock.tick().unwrap().dt, 100.0);
    }

    #[test]
    fn reset_discards_pause() {
        let src = ManualClock::new(0.0);
        let mut clock = FrameClock::new(src.clone()).unwrap();
        src.advance(30.0);
        clock.reset().unwrap();
        src.advance(0.1);
        assert!((clock.tick().unwrap().dt - 0.1).abs() < 1e-12);
    }

    #[test]
    fn source_failure_is_an_error() {
        assert!(FrameClock::new(BrokenClock).is_err());
    }
}
