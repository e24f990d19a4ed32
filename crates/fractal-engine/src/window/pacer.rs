use std::time::{Duration, Instant};

/// How long to wait before retrying a frame the surface could not provide.
pub(crate) const SURFACE_RETRY: Duration = Duration::from_millis(100);

/// Decides when the next redraw is requested.
///
/// Presented frames are paced by FIFO presentation, so redraws follow each
/// other immediately. A skipped frame never reaches presentation; without a
/// delay the loop would spin until the surface recovers.
#[derive(Debug, Default)]
pub(crate) struct RedrawPacer {
    retry_at: Option<Instant>,
}

/// What `about_to_wait` should do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum RedrawDecision {
    /// Request a redraw now.
    Redraw,
    /// Sleep until the deadline, then retry.
    WaitUntil(Instant),
}

impl RedrawPacer {
    /// Records the outcome of a redraw.
    pub(crate) fn frame_finished(&mut self, presented: bool, now: Instant) {
        if presented {
            if self.retry_at.take().is_some() {
                log::debug!("surface recovered");
            }
        } else {
            if self.retry_at.is_none() {
                log::debug!("surface not ready; retrying in {SURFACE_RETRY:?}");
            }
            self.retry_at = Some(now + SURFACE_RETRY);
        }
    }

    /// Drops any pending back-off; used when the surface likely changed.
    pub(crate) fn wake(&mut self) {
        self.retry_at = None;
    }

    pub(crate) fn decide(&self, now: Instant) -> RedrawDecision {
        match self.retry_at {
            Some(at) if now < at => RedrawDecision::WaitUntil(at),
            _ => RedrawDecision::Redraw,
        }
    }
}
