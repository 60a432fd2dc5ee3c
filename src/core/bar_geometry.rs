use crate::core::normalize::RatioVector;
use crate::core::scale::LinearScale;
use crate::core::shape::{RectShape, ShapeGeometry};
use crate::core::types::ChartBox;

/// Deterministic bar layout for one ratio vector.
///
/// Bars share `box.width` evenly with no gaps. Positive ratios grow upward
/// from the zero baseline (`y < 0`), negative ratios grow downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub bar_width: f64,
    pub scale: LinearScale,
}

impl BarLayout {
    #[must_use]
    pub fn new(series_count: usize, chart_box: ChartBox) -> Self {
        let bar_width = if series_count == 0 {
            0.0
        } else {
            chart_box.width / series_count as f64
        };
        Self {
            bar_width,
            scale: LinearScale::unit(chart_box.height),
        }
    }

    #[must_use]
    pub fn bar(self, index: usize, ratio: f64) -> RectShape {
        let scaled = self.scale.map(ratio);
        RectShape {
            x: index as f64 * self.bar_width,
            y: if ratio >= 0.0 { -scaled } else { 0.0 },
            width: self.bar_width,
            height: scaled.abs(),
        }
    }

    /// Horizontal center of bar `index`.
    #[must_use]
    pub fn center_x(self, index: usize) -> f64 {
        (index as f64 + 0.5) * self.bar_width
    }
}

/// Projects ratios into bars inside `chart_box`.
#[must_use]
pub fn build_bars(ratios: &RatioVector, chart_box: ChartBox) -> Vec<ShapeGeometry> {
    let layout = BarLayout::new(ratios.len(), chart_box);
    ratios
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, ratio)| ShapeGeometry::Rect(layout.bar(i, *ratio)))
        .collect()
}
