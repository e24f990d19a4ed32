//! Navigation state: where the view is centered and how far it is zoomed.

use anyhow::{ensure, Result};
use fractal_engine::coords::DVec2;

/// Smallest per-frame multiplier a zoom-out may apply.
///
/// Keeps `zoom` strictly positive when `rate * dt >= 1` (a long stall).
pub const ZOOM_OUT_FLOOR: f64 = 0.01;

/// Screen-relative pan direction. Up is +Y in the fractal plane.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Sign of the step along this direction's axis.
    fn sign(self) -> f64 {
        match self {
            PanDirection::Up | PanDirection::Right => 1.0,
            PanDirection::Down | PanDirection::Left => -1.0,
        }
    }
}

/// Immutable copy of the view handed to the renderer once per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub center: DVec2,
    pub zoom: f64,
}

/// Current view into the fractal plane.
///
/// Invariant: `center` is finite and `zoom` is finite and at least
/// `f64::MIN_POSITIVE`. Every mutator preserves it without clamping in the
/// common case; updates that would break it are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    center: DVec2,
    zoom: f64,
}

impl NavigationState {
    pub fn new(center: DVec2, zoom: f64) -> Result<Self> {
        ensure!(center.is_finite(), "center must be finite, got {center:?}");
        ensure!(
            zoom.is_finite() && zoom >= f64::MIN_POSITIVE,
            "zoom must be finite and normal, got {zoom}"
        );
        Ok(Self { center, zoom })
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn view(&self) -> ViewSnapshot {
        ViewSnapshot { center: self.center, zoom: self.zoom }
    }

    /// Moves the center by `speed / zoom * dt` plane units along `direction`.
    ///
    /// Dividing by zoom keeps the on-screen speed constant at every depth.
    pub fn pan(&mut self, direction: PanDirection, speed: f64, dt: f64) {
        let step = direction.sign() * (speed / self.zoom * dt);
        let mut next = self.center;
        match direction {
            PanDirection::Up | PanDirection::Down => next.y += step,
            PanDirection::Left | PanDirection::Right => next.x += step,
        }
        if next.is_finite() {
            self.center = next;
        } else {
            log::debug!("dropping pan {direction:?} by {step} (out of range)");
        }
    }

    /// `zoom *= 1 + rate * dt`.
    pub fn zoom_in(&mut self, rate: f64, dt: f64) {
        self.scale_zoom(1.0 + rate * dt);
    }

    /// `zoom *= max(1 - rate * dt, ZOOM_OUT_FLOOR)`.
    pub fn zoom_out(&mut self, rate: f64, dt: f64) {
        self.scale_zoom((1.0 - rate * dt).max(ZOOM_OUT_FLOOR));
    }

    fn scale_zoom(&mut self, factor: f64) {
        let next = self.zoom * factor;
        if next.is_finite() && next >= f64::MIN_POSITIVE {
            self.zoom = next;
        } else {
            log::debug!("dropping zoom update {} * {factor} (out of range)", self.zoom);
        }
    }
}

impl Default for NavigationState {
    /// Starts left of the origin so the main cardioid is in view.
    fn default() -> Self {
        Self { center: DVec2::new(-1.0, 0.0), zoom: 1.0 }
    }
}
