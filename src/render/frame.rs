use crate::core::{LabelDescriptor, PixelPoint, ShapeDescriptor};
use crate::error::{ChartError, ChartResult};
use crate::render::LinePrimitive;

/// Backend-agnostic scene for one chart draw pass.
///
/// Shape and label coordinates are relative to `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub origin: PixelPoint,
    pub opacity: f64,
    pub guide_line: Option<LinePrimitive>,
    pub shapes: Vec<ShapeDescriptor>,
    pub labels: Vec<LabelDescriptor>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(origin: PixelPoint) -> Self {
        Self {
            origin,
            opacity: 1.0,
            guide_line: None,
            shapes: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_guide_line(mut self, line: LinePrimitive) -> Self {
        self.guide_line = Some(line);
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: ShapeDescriptor) -> Self {
        self.shapes.push(shape);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelDescriptor) -> Self {
        self.labels.push(label);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.origin.is_finite() {
            return Err(ChartError::InvalidData(
                "frame origin must be finite".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "frame opacity must be in [0, 1]".to_owned(),
            ));
        }
        if let Some(line) = self.guide_line {
            line.validate()?;
        }
        for shape in &self.shapes {
            shape.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guide_line.is_none() && self.shapes.is_empty() && self.labels.is_empty()
    }
}
