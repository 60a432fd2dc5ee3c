use crate::core::{ChartType, LabelDescriptor, PixelPoint, ShapeDescriptor};
use crate::render::{LinePrimitive, RenderFrame};

/// Last emitted geometry of a chart.
///
/// Owned by the caller and handed back as the `previous` side of the next
/// transition. An empty state makes every series enter.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub chart_type: ChartType,
    pub origin: PixelPoint,
    pub opacity: f64,
    pub guide_line: Option<LinePrimitive>,
    pub shapes: Vec<ShapeDescriptor>,
    pub labels: Vec<LabelDescriptor>,
}

impl RenderState {
    #[must_use]
    pub fn empty(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            origin: PixelPoint::default(),
            opacity: 1.0,
            guide_line: None,
            shapes: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.labels.is_empty()
    }

    #[must_use]
    pub fn to_frame(&self) -> RenderFrame {
        RenderFrame {
            origin: self.origin,
            opacity: self.opacity,
            guide_line: self.guide_line,
            shapes: self.shapes.clone(),
            labels: self.labels.clone(),
        }
    }
}
