//! Coordinate types shared between the engine renderer and the viewer.
//!
//! Two spaces are in play:
//! - fractal plane: unbounded f64 coordinates, +X right, +Y up
//! - surface: physical pixels, used only for the viewport uniform

mod dvec2;
mod viewport;

pub use dvec2::DVec2;
pub use viewport::Viewport;
