//! Window-runtime glue: drives one `FrameDriver` iteration per redraw.

use anyhow::{Context, Result};

use fractal_engine::core::{App, AppControl, FrameCtx};
use fractal_engine::device::GpuFrame;
use fractal_engine::render::fractal::{FractalRenderer, FractalView};
use fractal_engine::render::RenderTarget;

use crate::config::ViewerConfig;
use crate::driver::{DriverState, FrameDriver, ViewRenderer};
use crate::navigation::ViewSnapshot;

/// The viewer application handed to `fractal_engine::window::Runtime`.
pub struct ViewerApp {
    driver: FrameDriver,
    fractal: FractalRenderer,
    max_iterations: u32,
    started: bool,
}

impl ViewerApp {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        Ok(Self {
            driver: FrameDriver::new(&config.navigation)?,
            fractal: FractalRenderer::new(),
            max_iterations: config.fractal.max_iterations,
            started: false,
        })
    }
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        if !self.started {
            // Window and GPU setup happen after the driver is built.
            self.driver.reset_clock()?;
            self.started = true;
        }

        let mut input = std::mem::take(&mut *ctx.input);
        let mut surface = SurfaceRenderer {
            ctx,
            fractal: &mut self.fractal,
            max_iterations: self.max_iterations,
            pending: None,
        };

        match self.driver.run_frame(&mut input, &mut surface)? {
            DriverState::Running => Ok(AppControl::Continue),
            DriverState::Terminating => Ok(AppControl::Exit),
        }
    }
}

/// `ViewRenderer` backed by the window surface for a single frame.
struct SurfaceRenderer<'r, 'a, 'w> {
    ctx: &'r mut FrameCtx<'a, 'w>,
    fractal: &'r mut FractalRenderer,
    max_iterations: u32,
    pending: Option<GpuFrame>,
}

impl ViewRenderer for SurfaceRenderer<'_, '_, '_> {
    fn draw(&mut self, view: ViewSnapshot) -> Result<()> {
        let Some(mut frame) = self.ctx.begin_frame().context("failed to acquire surface frame")? else {
            log::debug!("surface not ready; skipping frame");
            return Ok(());
        };

        {
            let rctx = self.ctx.render_ctx();
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.fractal.render(
                &rctx,
                &mut target,
                FractalView {
                    center: view.center,
                    zoom: view.zoom,
                    max_iterations: self.max_iterations,
                },
            );
        }

        self.pending = Some(frame);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if let Some(frame) = self.pending.take() {
            self.ctx.present(frame);
        }
        Ok(())
    }
}
