//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! `RenderTarget` supplied by the frame loop.
//!
//! Convention: the fractal renderer draws a static full-screen quad in NDC and
//! does all plane mapping per fragment.

mod ctx;
pub mod fractal;

pub use ctx::{RenderCtx, RenderTarget};
