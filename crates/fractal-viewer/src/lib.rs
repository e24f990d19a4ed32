//! Keyboard-driven Mandelbrot viewer.
//!
//! The domain is small: a `NavigationState` (center + zoom) that a
//! `FrameDriver` updates from classified key presses once per frame, scaled by
//! the frame delta, before handing a snapshot to the GPU renderer.

pub mod action;
pub mod app;
pub mod config;
pub mod driver;
pub mod icon;
pub mod navigation;

use anyhow::{Context, Result};

use fractal_engine::window::Runtime;

pub use action::InputAction;
pub use config::ViewerConfig;
pub use driver::{DriverState, FrameDriver};
pub use navigation::NavigationState;

/// Opens the viewer window and runs until Escape, window close, or a fatal error.
pub fn run(config: ViewerConfig) -> Result<()> {
    config.validate().context("invalid viewer configuration")?;

    let app = app::ViewerApp::new(&config)?;
    let runtime_config = config.window.to_runtime_config();

    log::info!(
        "opening {:?} at {}x{}",
        runtime_config.title,
        config.window.width,
        config.window.height
    );

    Runtime::run(runtime_config, config.gpu.clone(), app)
}
