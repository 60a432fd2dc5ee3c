use tracing::trace;

use super::{ChartTransition, Easing, RenderState};

/// In-flight transition driven by host clock ticks.
///
/// The engine stays clock-free: callers feed elapsed milliseconds and read
/// back the interpolated state.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTransition {
    transition: ChartTransition,
    duration_ms: f64,
    elapsed_ms: f64,
    easing: Easing,
}

impl ActiveTransition {
    #[must_use]
    pub fn new(transition: ChartTransition, duration_ms: f64, easing: Easing) -> Self {
        Self {
            transition,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`; zero-length transitions are complete.
    #[must_use]
    pub fn linear_progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.easing.apply(self.linear_progress())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.linear_progress() >= 1.0
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub fn transition(&self) -> &ChartTransition {
        &self.transition
    }

    /// Moves the clock forward and returns the state to draw.
    pub fn advance(&mut self, delta_ms: f64) -> RenderState {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
        }
        trace!(
            elapsed_ms = self.elapsed_ms,
            duration_ms = self.duration_ms,
            "advance chart transition"
        );
        self.current()
    }

    /// Interpolated state at the current clock position.
    #[must_use]
    pub fn current(&self) -> RenderState {
        self.transition.at(self.progress())
    }
}
