//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single viewer window, and wires them to
//! the GPU layer.

mod pacer;
mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
pub use winit::window::Icon;
