pub mod bar_geometry;
pub mod geometry;
pub mod label_fit;
pub mod label_layout;
pub mod normalize;
pub mod scale;
pub mod sector_geometry;
pub mod shape;
pub mod types;

pub use bar_geometry::{BarLayout, build_bars};
pub use geometry::GeometryBuilder;
pub use label_fit::{
    LabelBox, LabelConstraints, LabelFit, TextExtent, fit_label, fit_label_in_circle,
};
pub use label_layout::{LabelStyle, layout_bar_labels, layout_sector_labels};
pub use normalize::{LabelTextOptions, RatioVector, format_significant, normalize, series_labels};
pub use scale::{LinearScale, PowScale, RadialScale};
pub use sector_geometry::{SectorEncoding, build_sectors};
pub use shape::{
    LabelDescriptor, RectShape, SectorShape, SeriesKey, ShapeDescriptor, ShapeGeometry,
};
pub use types::{ChartBox, ChartType, GeoPoint, PixelPoint};
