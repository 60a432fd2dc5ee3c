use crate::core::bar_geometry::build_bars;
use crate::core::normalize::RatioVector;
use crate::core::sector_geometry::{SectorEncoding, build_sectors};
use crate::core::shape::{SeriesKey, ShapeDescriptor, ShapeGeometry};
use crate::core::types::{ChartBox, ChartType};
use crate::render::Color;

/// Geometry builder selected by chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryBuilder {
    Bar,
    Sector(SectorEncoding),
}

impl GeometryBuilder {
    #[must_use]
    pub fn for_chart_type(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Bar => Self::Bar,
            ChartType::Pie => Self::Sector(SectorEncoding::Angle),
            ChartType::PolarRadius => Self::Sector(SectorEncoding::Radius),
            ChartType::PolarArea => Self::Sector(SectorEncoding::Area),
        }
    }

    /// Pure geometry of every series, indexed like `ratios`.
    #[must_use]
    pub fn build(self, ratios: &RatioVector, chart_box: ChartBox) -> Vec<ShapeGeometry> {
        match self {
            Self::Bar => build_bars(ratios, chart_box),
            Self::Sector(encoding) => build_sectors(ratios, chart_box, encoding),
        }
    }

    /// Builds keyed descriptors, colored by `fill_for(index)`.
    pub fn build_shapes<F>(
        self,
        ratios: &RatioVector,
        chart_box: ChartBox,
        fill_for: F,
    ) -> Vec<ShapeDescriptor>
    where
        F: Fn(usize) -> Color,
    {
        self.build(ratios, chart_box)
            .into_iter()
            .enumerate()
            .map(|(i, geometry)| ShapeDescriptor::new(SeriesKey(i), geometry, fill_for(i)))
            .collect()
    }
}
