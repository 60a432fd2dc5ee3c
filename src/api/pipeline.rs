use tracing::debug;

use crate::core::{
    BarLayout, ChartType, GeometryBuilder, LabelDescriptor, LabelStyle, PixelPoint,
    layout_bar_labels, layout_sector_labels,
};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, SeriesPalette, TextMeasurer};
use crate::transition::RenderState;

use super::ChartSpec;

/// Origin of the chart group for a projected center point.
///
/// Bar charts are centered horizontally on the anchor with their baseline
/// on it; sector charts are centered on it.
#[must_use]
pub fn chart_origin(chart_type: ChartType, width: f64, center: PixelPoint) -> PixelPoint {
    match chart_type {
        ChartType::Bar => PixelPoint::new(center.x - width * 0.5, center.y),
        ChartType::Pie | ChartType::PolarRadius | ChartType::PolarArea => center,
    }
}

/// Runs the full render pipeline for one spec.
///
/// Normalizes the data, resolves colors, builds geometry and places labels.
/// Any configuration error aborts before anything is produced.
pub fn build_render_state<M: TextMeasurer + ?Sized>(
    spec: &ChartSpec,
    center: PixelPoint,
    measurer: &M,
) -> ChartResult<RenderState> {
    spec.validate()?;
    let normalized = spec.normalize()?;
    let ratios = &normalized.ratios;
    let palette = SeriesPalette::resolve(ratios.len(), spec.fill_color, &spec.color_palette)?;

    let chart_box = spec.chart_box();
    let builder = GeometryBuilder::for_chart_type(spec.chart_type);
    let shapes = builder.build_shapes(ratios, chart_box, |i| palette.color(i));

    let labels: Vec<LabelDescriptor> = match &normalized.labels {
        None => Vec::new(),
        Some(texts) => {
            let style = LabelStyle {
                css: &spec.label_style,
                constraints: spec.label_constraints(),
                color_mode: spec.label_color,
            };
            match builder {
                GeometryBuilder::Bar => layout_bar_labels(
                    texts,
                    ratios,
                    BarLayout::new(ratios.len(), chart_box),
                    &shapes,
                    measurer,
                    style,
                ),
                GeometryBuilder::Sector(_) => {
                    layout_sector_labels(texts, &shapes, measurer, style)
                }
            }
        }
    };

    debug!(
        chart_type = spec.chart_type.as_str(),
        series_count = ratios.len(),
        label_count = labels.len(),
        "built chart render state"
    );

    Ok(RenderState {
        chart_type: spec.chart_type,
        origin: chart_origin(spec.chart_type, spec.width, center),
        opacity: spec.opacity,
        guide_line: matches!(spec.chart_type, ChartType::Bar)
            .then(|| LinePrimitive::bar_baseline(spec.width)),
        shapes,
        labels,
    })
}
