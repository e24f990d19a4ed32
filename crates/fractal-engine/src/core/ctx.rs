use anyhow::{bail, Result};
use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::input::InputFrame;
use crate::render::RenderCtx;

/// Window handle and metadata for the current frame.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    /// Events received since the previous frame. Cleared by the runtime after
    /// the callback returns.
    pub input: &'a mut InputFrame,
    /// Set once `present` submits a frame.
    pub(crate) presented: bool,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Builds a renderer context for the current surface.
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        let size = self.gpu.size();
        RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            Viewport::new(size.width as f32, size.height as f32),
        )
    }

    /// Acquires the next surface frame.
    ///
    /// Returns `Ok(None)` when the frame should be skipped (surface lost,
    /// outdated or timed out); the surface is reconfigured where needed.
    /// Unrecoverable surface errors are returned as `Err`.
    pub fn begin_frame(&mut self) -> Result<Option<GpuFrame>> {
        match self.gpu.begin_frame() {
            Ok(frame) => Ok(Some(frame)),
            Err(err) => {
                let reason = err.to_string();
                match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => bail!("surface error: {reason}"),
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => Ok(None),
                }
            }
        }
    }

    /// Submits and presents a frame obtained from `begin_frame`.
    pub fn present(&mut self, frame: GpuFrame) {
        self.window.window.pre_present_notify();
        self.gpu.submit(frame);
        self.presented = true;
    }
}
