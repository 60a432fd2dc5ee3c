mod css_colors;
mod frame;
mod null_renderer;
mod palette;
mod primitives;
mod text_metrics;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::{
    DEFAULT_FILL_COLOR, LabelColorMode, SeriesPalette, category10, resolve_label_color,
};
pub use primitives::{Color, LinePrimitive};
pub use text_metrics::{EstimatedTextMeasurer, TextMeasurer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` per tick and own node
/// creation, update and removal.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
