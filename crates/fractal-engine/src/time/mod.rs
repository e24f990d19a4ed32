//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per render loop, owned by whoever drives frames
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - swap `MonotonicClock` for `ManualClock` to script time in tests

mod clock;
mod frame_clock;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use frame_clock::{FrameClock, FrameTime};
