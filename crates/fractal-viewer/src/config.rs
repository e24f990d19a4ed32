//! Viewer configuration.
//!
//! Plain structs with defaults matching the classic viewer: a 1024x1024 fixed
//! window centered on (-1, 0), one plane unit per second of panning at zoom 1,
//! and zoom compounding at twice the pan speed.

use std::path::PathBuf;

use anyhow::{ensure, Result};
use winit::dpi::LogicalSize;

use fractal_engine::coords::DVec2;
use fractal_engine::device::GpuInit;
use fractal_engine::logging::LoggingConfig;
use fractal_engine::window::RuntimeConfig;

use crate::icon;

/// Navigation tuning and starting view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NavigationConfig {
    pub initial_center: DVec2,
    pub initial_zoom: f64,
    /// Screen-relative pan speed; plane units per second at zoom 1.
    pub pan_speed: f64,
    /// Relative zoom change per second.
    pub zoom_rate: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            initial_center: DVec2::new(-1.0, 0.0),
            initial_zoom: 1.0,
            pan_speed: 1.0,
            zoom_rate: 2.0,
        }
    }
}

impl NavigationConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.initial_center.is_finite(), "initial center must be finite");
        ensure!(
            self.initial_zoom.is_finite() && self.initial_zoom >= f64::MIN_POSITIVE,
            "initial zoom must be finite and normal, got {}",
            self.initial_zoom
        );
        ensure!(
            self.pan_speed.is_finite() && self.pan_speed > 0.0,
            "pan speed must be finite and > 0, got {}",
            self.pan_speed
        );
        ensure!(
            self.zoom_rate.is_finite() && self.zoom_rate > 0.0,
            "zoom rate must be finite and > 0, got {}",
            self.zoom_rate
        );
        Ok(())
    }
}

/// Window settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
    /// PNG used as the window icon. A missing file is not an error.
    pub icon_path: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fractal Viewer".to_string(),
            width: 1024.0,
            height: 1024.0,
            resizable: false,
            icon_path: Some(PathBuf::from("res/icon.png")),
        }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width >= 1.0 && self.height >= 1.0,
            "window size must be at least 1x1, got {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }

    /// Builds the runtime window config, loading the icon if one is configured.
    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            resizable: self.resizable,
            icon: self.icon_path.as_deref().and_then(icon::load_icon),
        }
    }
}

/// Fractal program parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FractalConfig {
    pub max_iterations: u32,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self { max_iterations: 256 }
    }
}

/// Top-level configuration for `fractal_viewer::run`.
#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub navigation: NavigationConfig,
    pub fractal: FractalConfig,
    pub logging: LoggingConfig,
    pub gpu: GpuInit,
}

impl ViewerConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn with_icon_path(mut self, path: Option<PathBuf>) -> Self {
        self.window.icon_path = path;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.fractal.max_iterations = max_iterations;
        self
    }

    pub fn with_navigation(mut self, navigation: NavigationConfig) -> Self {
        self.navigation = navigation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;
        self.navigation.validate()?;
        ensure!(self.fractal.max_iterations > 0, "max iterations must be > 0");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_viewer() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.window.width, 1024.0);
        assert_eq!(cfg.window.height, 1024.0);
        assert!(!cfg.window.resizable);
        assert_eq!(cfg.navigation.initial_center, DVec2::new(-1.0, 0.0));
        assert_eq!(cfg.navigation.initial_zoom, 1.0);
        assert_eq!(cfg.navigation.pan_speed, 1.0);
        assert_eq!(cfg.navigation.zoom_rate, 2.0);
        assert_eq!(cfg.gpu.present_mode, wgpu::PresentMode::Fifo);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builders_override_fields() {
        let cfg = ViewerConfig::default()
            .with_title("deep")
            .with_size(640.0, 480.0)
            .with_max_iterations(1000)
            .with_icon_path(None);
        assert_eq!(cfg.window.title, "deep");
        assert_eq!(cfg.window.width, 640.0);
        assert_eq!(cfg.fractal.max_iterations, 1000);
        assert_eq!(cfg.window.icon_path, None);
    }

    #[test]
    fn rejects_bad_navigation() {
        let mut nav = NavigationConfig::default();
        nav.initial_zoom = 0.0;
        assert!(nav.validate().is_err());

        let mut nav = NavigationConfig::default();
        nav.initial_zoom = f64::MIN_POSITIVE / 4.0;
        assert!(nav.validate().is_err());

        let mut nav = NavigationConfig::default();
        nav.pan_speed = -1.0;
        assert!(nav.validate().is_err());

        let mut nav = NavigationConfig::default();
        nav.zoom_rate = f64::NAN;
        assert!(nav.validate().is_err());
    }

    #[test]
    fn rejects_zero_iterations_and_empty_window() {
        assert!(ViewerConfig::default().with_max_iterations(0).validate().is_err());
        assert!(ViewerConfig::default().with_size(0.0, 100.0).validate().is_err());
    }

    #[test]
    fn runtime_config_without_icon() {
        let cfg = ViewerConfig::default().with_icon_path(None).with_title("t");
        let rt = cfg.window.to_runtime_config();
        assert_eq!(rt.title, "t");
        assert_eq!(rt.initial_size, LogicalSize::new(1024.0, 1024.0));
        assert!(rt.icon.is_none());
    }
}
