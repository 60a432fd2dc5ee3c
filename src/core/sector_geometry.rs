use std::f64::consts::TAU;

use crate::core::normalize::RatioVector;
use crate::core::scale::{LinearScale, PowScale, RadialScale};
use crate::core::shape::{SectorShape, ShapeGeometry};
use crate::core::types::ChartBox;

/// How a sector chart encodes each ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorEncoding {
    /// Pie: angle proportional to the ratio, shared full radius.
    Angle,
    /// Equal angles, outer radius linear in the ratio.
    Radius,
    /// Equal angles, outer radius in `sqrt(ratio)` so the area is linear.
    Area,
}

impl SectorEncoding {
    /// Radial scale of equal-angle encodings; `None` for pies.
    #[must_use]
    pub fn radial_scale(self, radius: f64) -> Option<RadialScale> {
        match self {
            Self::Angle => None,
            Self::Radius => Some(RadialScale::Linear(LinearScale::unit(radius))),
            Self::Area => Some(RadialScale::Pow(PowScale::sqrt(radius))),
        }
    }
}

/// Lays sectors out clockwise from 12 o'clock in input order.
///
/// Order is never re-sorted so each series keeps its angular neighbourhood
/// across updates.
#[must_use]
pub fn build_sectors(
    ratios: &RatioVector,
    chart_box: ChartBox,
    encoding: SectorEncoding,
) -> Vec<ShapeGeometry> {
    let radius = chart_box.radius();
    let values = ratios.as_slice();

    let (weights, outer_radii): (Vec<f64>, Vec<f64>) = match encoding.radial_scale(radius) {
        None => values.iter().map(|ratio| (*ratio, radius)).unzip(),
        Some(scale) => values.iter().map(|ratio| (1.0, scale.map(*ratio))).unzip(),
    };

    let total: f64 = weights.iter().sum();
    let angle_per_unit = if total > 0.0 { TAU / total } else { 0.0 };

    let mut start_angle = 0.0;
    weights
        .iter()
        .zip(outer_radii)
        .map(|(weight, outer_radius)| {
            let end_angle = start_angle + weight * angle_per_unit;
            let sector = SectorShape::new(start_angle, end_angle, 0.0, outer_radius);
            start_angle = end_angle;
            ShapeGeometry::Sector(sector)
        })
        .collect()
}
