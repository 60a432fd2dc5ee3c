use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content and keeps the last frame so tests can
/// inspect exactly what a real backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_shape_count: usize,
    pub last_label_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_shape_count = frame.shapes.len();
        self.last_label_count = frame.labels.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
