use tracing::warn;

use crate::core::bar_geometry::BarLayout;
use crate::core::label_fit::{
    LabelBox, LabelConstraints, LabelFit, TextExtent, fit_label, fit_label_in_circle,
};
use crate::core::normalize::RatioVector;
use crate::core::shape::{LabelDescriptor, ShapeDescriptor, ShapeGeometry};
use crate::core::types::PixelPoint;
use crate::render::{LabelColorMode, TextMeasurer, resolve_label_color};

/// Label appearance shared by every series of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle<'a> {
    pub css: &'a str,
    pub constraints: LabelConstraints,
    pub color_mode: LabelColorMode,
}

/// Measures `text`, degrading a failed measurement to a hidden label.
fn measure_or_hide<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    css: &str,
    index: usize,
) -> Option<TextExtent> {
    match measurer.measure(text, css) {
        Ok(extent) => Some(extent),
        Err(err) => {
            warn!(series = index, error = %err, "hiding label after measurement failure");
            None
        }
    }
}

fn descriptor(
    shape: &ShapeDescriptor,
    text: &str,
    anchor: PixelPoint,
    fit: LabelFit,
    style: LabelStyle<'_>,
) -> LabelDescriptor {
    LabelDescriptor {
        key: shape.key,
        text: text.to_owned(),
        anchor,
        scale: fit.scale,
        opacity: if fit.visible { 1.0 } else { 0.0 },
        fill: resolve_label_color(shape.fill, style.color_mode),
    }
}

/// Places one label inside each bar.
///
/// Labels sit against the bar's outer end: below the top of upward bars,
/// above the bottom of downward bars.
pub fn layout_bar_labels<M: TextMeasurer + ?Sized>(
    texts: &[String],
    ratios: &RatioVector,
    layout: BarLayout,
    shapes: &[ShapeDescriptor],
    measurer: &M,
    style: LabelStyle<'_>,
) -> Vec<LabelDescriptor> {
    texts
        .iter()
        .zip(ratios.as_slice())
        .zip(shapes)
        .enumerate()
        .map(|(i, ((text, ratio), shape))| {
            let scaled = layout.scale.map(*ratio);
            let (fit, height) = match measure_or_hide(measurer, text, style.css, i) {
                Some(extent) => {
                    let fit = fit_label(
                        extent,
                        LabelBox::new(layout.bar_width, scaled.abs()),
                        style.constraints,
                    );
                    (fit, fit.height(extent))
                }
                None => (LabelFit::hidden(), 0.0),
            };
            let offset_y = if *ratio > 0.0 { height * 0.5 } else { -height * 0.5 };
            let anchor = PixelPoint::new(layout.center_x(i), offset_y - scaled);
            descriptor(shape, text, anchor, fit, style)
        })
        .collect()
}

/// Places one label per sector.
///
/// Multi-series charts center labels on each sector at natural size. A
/// single-series chart centers its label on the origin, scaled to fit the
/// circle.
pub fn layout_sector_labels<M: TextMeasurer + ?Sized>(
    texts: &[String],
    shapes: &[ShapeDescriptor],
    measurer: &M,
    style: LabelStyle<'_>,
) -> Vec<LabelDescriptor> {
    let single_series = shapes.len() == 1;
    texts
        .iter()
        .zip(shapes)
        .enumerate()
        .map(|(i, (text, shape))| {
            let ShapeGeometry::Sector(sector) = shape.geometry else {
                return descriptor(shape, text, PixelPoint::default(), LabelFit::hidden(), style);
            };
            if !single_series {
                let fit = LabelFit {
                    scale: 1.0,
                    visible: true,
                };
                return descriptor(shape, text, sector.centroid(), fit, style);
            }
            let fit = measure_or_hide(measurer, text, style.css, i)
                .map_or(LabelFit::hidden(), |extent| {
                    fit_label_in_circle(extent, sector.outer_radius, style.constraints)
                });
            descriptor(shape, text, PixelPoint::default(), fit, style)
        })
        .collect()
}
