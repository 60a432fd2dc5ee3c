use tracing::{debug, trace, warn};

use crate::core::{GeoPoint, PixelPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{EstimatedTextMeasurer, RenderFrame, Renderer, TextMeasurer};
use crate::transition::{ActiveTransition, ChartTransition, Easing, RenderState};

use super::{ChartSpec, ChartSpecUpdate, build_render_state};

/// Map coordinate projection provided by the host map.
pub trait Projector {
    fn project(&self, point: GeoPoint) -> ChartResult<PixelPoint>;
}

impl<F> Projector for F
where
    F: Fn(GeoPoint) -> ChartResult<PixelPoint>,
{
    fn project(&self, point: GeoPoint) -> ChartResult<PixelPoint> {
        self(point)
    }
}

/// How a redraw reaches its new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RedrawMode {
    /// Drop the previous chart; every series enters.
    NewChart,
    /// Interpolate from what is on screen now.
    Animated,
    /// Place the new state without a transition.
    Instant,
}

/// A chart anchored at a geographic point.
///
/// `MapChart` owns the committed `RenderState`, drives the in-flight
/// transition from host clock ticks and hands every frame to the renderer.
pub struct MapChart<R: Renderer, M: TextMeasurer = EstimatedTextMeasurer> {
    renderer: R,
    measurer: M,
    center: GeoPoint,
    spec: ChartSpec,
    easing: Easing,
    committed: Option<RenderState>,
    active: Option<ActiveTransition>,
}

impl<R: Renderer> MapChart<R> {
    pub fn new(renderer: R, center: GeoPoint, spec: ChartSpec) -> ChartResult<Self> {
        Self::with_measurer(renderer, EstimatedTextMeasurer::default(), center, spec)
    }
}

impl<R: Renderer, M: TextMeasurer> MapChart<R, M> {
    pub fn with_measurer(
        renderer: R,
        measurer: M,
        center: GeoPoint,
        spec: ChartSpec,
    ) -> ChartResult<Self> {
        spec.validate()?;
        spec.normalize()?;
        Ok(Self {
            renderer,
            measurer,
            center,
            spec,
            easing: Easing::default(),
            committed: None,
            active: None,
        })
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    #[must_use]
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn is_on_map(&self) -> bool {
        self.committed.is_some()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Target state of the last accepted update.
    #[must_use]
    pub fn render_state(&self) -> Option<&RenderState> {
        self.committed.as_ref()
    }

    /// State currently on screen, mid-transition included.
    #[must_use]
    pub fn current_state(&self) -> Option<RenderState> {
        match &self.active {
            Some(active) => Some(active.current()),
            None => self.committed.clone(),
        }
    }

    /// First render after the chart is attached to a map.
    pub fn add_to_map<P: Projector + ?Sized>(&mut self, projector: &P) -> ChartResult<()> {
        let spec = self.spec.clone();
        self.redraw(spec, projector, RedrawMode::NewChart)
    }

    /// Merges `update` into the current options and redraws.
    ///
    /// Changing the chart type rebuilds the chart from scratch; other changes
    /// animate from the state currently on screen. A rejected update leaves
    /// the chart untouched.
    pub fn set_options<P: Projector + ?Sized>(
        &mut self,
        update: &ChartSpecUpdate,
        projector: &P,
    ) -> ChartResult<()> {
        let spec = update.apply_to(&self.spec);
        self.set_spec(spec, projector)
    }

    /// Replaces the whole configuration and redraws.
    pub fn set_spec<P: Projector + ?Sized>(
        &mut self,
        spec: ChartSpec,
        projector: &P,
    ) -> ChartResult<()> {
        if self.committed.is_none() {
            spec.validate()?;
            spec.normalize()?;
            self.spec = spec;
            return Ok(());
        }
        let mode = if spec.chart_type == self.spec.chart_type {
            RedrawMode::Animated
        } else {
            RedrawMode::NewChart
        };
        self.redraw(spec, projector, mode)
    }

    /// Re-places the chart after the map viewport was reset.
    ///
    /// Geometry is recomputed for the new projection and shown immediately.
    pub fn view_reset<P: Projector + ?Sized>(&mut self, projector: &P) -> ChartResult<()> {
        if self.committed.is_none() {
            return Ok(());
        }
        let spec = self.spec.clone();
        self.redraw(spec, projector, RedrawMode::Instant)
    }

    /// Advances the running transition by `delta_ms` and renders it.
    ///
    /// Returns `true` while the transition is still running.
    pub fn tick(&mut self, delta_ms: f64) -> ChartResult<bool> {
        let Some(active) = self.active.as_mut() else {
            return Ok(false);
        };
        let state = active.advance(delta_ms);
        let finished = active.is_finished();
        trace!(finished, "chart tick");
        self.renderer.render(&state.to_frame())?;
        if finished {
            self.active = None;
        }
        Ok(!finished)
    }

    /// Detaches the chart: clears its state and renders an empty frame.
    pub fn remove(&mut self) -> ChartResult<()> {
        let origin = self
            .committed
            .as_ref()
            .map(|state| state.origin)
            .unwrap_or_default();
        self.active = None;
        self.committed = None;
        self.renderer.render(&RenderFrame::new(origin))
    }

    fn redraw<P: Projector + ?Sized>(
        &mut self,
        spec: ChartSpec,
        projector: &P,
        mode: RedrawMode,
    ) -> ChartResult<()> {
        let next = self
            .project_center(projector)
            .and_then(|center| build_render_state(&spec, center, &self.measurer));
        let mut next = match next {
            Ok(next) => next,
            Err(err) => {
                warn!(error = %err, "rejecting chart update");
                return Err(err);
            }
        };

        if mode != RedrawMode::NewChart {
            if let Some(committed) = &self.committed {
                next.guide_line = committed.guide_line;
            }
        }

        let (frame, active) = match mode {
            RedrawMode::Instant => (next.to_frame(), None),
            RedrawMode::NewChart | RedrawMode::Animated => {
                let previous = match mode {
                    RedrawMode::NewChart => RenderState::empty(spec.chart_type),
                    _ => self
                        .current_state()
                        .unwrap_or_else(|| RenderState::empty(spec.chart_type)),
                };
                let transition = ChartTransition::new(&previous, next.clone());
                let active =
                    ActiveTransition::new(transition, spec.transition_time_ms, self.easing);
                (active.current().to_frame(), Some(active))
            }
        };

        self.renderer.render(&frame)?;
        debug!(
            chart_type = spec.chart_type.as_str(),
            series_count = next.shapes.len(),
            mode = ?mode,
            "chart redrawn"
        );

        self.active = active.filter(|active| !active.is_finished());
        self.committed = Some(next);
        self.spec = spec;
        Ok(())
    }

    fn project_center<P: Projector + ?Sized>(&self, projector: &P) -> ChartResult<PixelPoint> {
        let center = projector.project(self.center)?;
        if !center.is_finite() {
            return Err(ChartError::Projection(format!(
                "projected center must be finite, got ({}, {})",
                center.x, center.y
            )));
        }
        Ok(center)
    }
}
