//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into `InputEvent`s and buffers them
//! in an `InputFrame` until the next frame consumes them.

mod frame;
mod types;
pub(crate) mod platform;

pub use frame::InputFrame;
pub use types::{InputEvent, Key, KeyState};
