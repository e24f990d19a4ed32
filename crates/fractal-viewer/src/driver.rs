//! Frame driver: one iteration of clock → input → update → render → present.
//!
//! The driver owns the navigation state and the frame clock. Input and
//! rendering are reached through `InputSource` and `ViewRenderer` so the loop
//! can run against the window runtime or against scripted doubles.

use std::collections::VecDeque;

use anyhow::{Context, Result};

use fractal_engine::input::InputFrame;
use fractal_engine::time::{Clock, FrameClock, MonotonicClock};

use crate::action::{classify_event, InputAction};
use crate::config::NavigationConfig;
use crate::navigation::{NavigationState, ViewSnapshot};

/// Supplies the actions that arrived since the previous poll, in event order.
pub trait InputSource {
    fn poll_actions(&mut self) -> Result<Vec<InputAction>>;
}

/// Draws and presents one view per frame.
///
/// `draw` receives a copy of the view; implementations must not expect to see
/// the navigation state between frames.
pub trait ViewRenderer {
    fn draw(&mut self, view: ViewSnapshot) -> Result<()>;

    /// Presents the frame recorded by `draw`. May block on vertical sync.
    fn present(&mut self) -> Result<()>;
}

impl InputSource for InputFrame {
    fn poll_actions(&mut self) -> Result<Vec<InputAction>> {
        Ok(self.drain().filter_map(|ev| classify_event(&ev)).collect())
    }
}

/// Scripted input: one batch per frame, empty once the script runs out.
impl InputSource for VecDeque<Vec<InputAction>> {
    fn poll_actions(&mut self) -> Result<Vec<InputAction>> {
        Ok(self.pop_front().unwrap_or_default())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DriverState {
    Running,
    Terminating,
}

pub struct FrameDriver<C: Clock = MonotonicClock> {
    clock: FrameClock<C>,
    navigation: NavigationState,
    tuning: NavigationConfig,
    state: DriverState,
}

impl FrameDriver<MonotonicClock> {
    pub fn new(config: &NavigationConfig) -> Result<Self> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> FrameDriver<C> {
    pub fn with_clock(config: &NavigationConfig, clock: C) -> Result<Self> {
        config.validate().context("invalid navigation config")?;
        let navigation = NavigationState::new(config.initial_center, config.initial_zoom)?;
        Ok(Self {
            clock: FrameClock::new(clock)?,
            navigation,
            tuning: *config,
            state: DriverState::Running,
        })
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn previous_timestamp(&self) -> f64 {
        self.clock.previous_timestamp()
    }

    /// Re-reads the clock baseline so startup work is not counted as frame time.
    pub fn reset_clock(&mut self) -> Result<()> {
        self.clock.reset()
    }

    /// Applies `actions` in order with the given frame delta.
    ///
    /// `Quit` switches to `Terminating` and every later action in the batch is
    /// dropped. Once terminating, nothing is applied.
    pub fn apply_actions<I>(&mut self, actions: I, dt: f64) -> DriverState
    where
        I: IntoIterator<Item = InputAction>,
    {
        for action in actions {
            if self.state == DriverState::Terminating {
                break;
            }
            self.apply(action, dt);
        }
        self.state
    }

    fn apply(&mut self, action: InputAction, dt: f64) {
        let NavigationConfig { pan_speed, zoom_rate, .. } = self.tuning;
        match action {
            InputAction::Pan(direction) => self.navigation.pan(direction, pan_speed, dt),
            InputAction::ZoomIn => self.navigation.zoom_in(zoom_rate, dt),
            InputAction::ZoomOut => self.navigation.zoom_out(zoom_rate, dt),
            InputAction::Quit => {
                log::info!("quit requested");
                self.state = DriverState::Terminating;
            }
        }
    }

    /// Runs one frame.
    ///
    /// Returns the state after the frame. A frame that observes `Quit` does
    /// not render. Clock, input and renderer failures are returned as errors
    /// and leave the driver untouched beyond what was already applied.
    pub fn run_frame<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<DriverState>
    where
        I: InputSource + ?Sized,
        R: ViewRenderer + ?Sized,
    {
        if self.state == DriverState::Terminating {
            return Ok(self.state);
        }

        let time = self.clock.tick()?;
        let actions = input.poll_actions().context("failed to poll input")?;

        if self.apply_actions(actions, time.dt) == DriverState::Terminating {
            return Ok(DriverState::Terminating);
        }

        renderer
            .draw(self.navigation.view())
            .with_context(|| format!("failed to render frame {}", time.frame_index))?;
        renderer.present().context("failed to present frame")?;

        Ok(self.state)
    }

    /// Runs frames until a `Quit` action or an error.
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<()>
    where
        I: InputSource + ?Sized,
        R: ViewRenderer + ?Sized,
    {
        while self.run_frame(input, renderer)? == DriverState::Running {}
        Ok(())
    }
}
