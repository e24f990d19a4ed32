//! Fractal engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer: the
//! window loop, GPU surface, input translation, frame timing and the fractal
//! full-screen renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
