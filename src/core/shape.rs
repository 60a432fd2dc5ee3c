use serde::{Deserialize, Serialize};

use crate::core::types::{PixelPoint, lerp};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Stable identity of one series across renders: its index in `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesKey(pub usize);

impl SeriesKey {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Axis-aligned bar in chart-local pixels; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectShape {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
            width: lerp(self.width, other.width, t),
            height: lerp(self.height, other.height, t),
        }
    }
}

/// Annular sector. Angles are radians, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorShape {
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl SectorShape {
    #[must_use]
    pub const fn new(start_angle: f64, end_angle: f64, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            start_angle,
            end_angle,
            inner_radius,
            outer_radius,
        }
    }

    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn area(self) -> f64 {
        0.5 * self.sweep().abs()
            * (self.outer_radius * self.outer_radius - self.inner_radius * self.inner_radius).abs()
    }

    /// Midpoint of the sector along its bisector, halfway between radii.
    #[must_use]
    pub fn centroid(self) -> PixelPoint {
        let radius = (self.inner_radius + self.outer_radius) * 0.5;
        let angle = (self.start_angle + self.end_angle) * 0.5;
        PixelPoint::new(angle.sin() * radius, -angle.cos() * radius)
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            start_angle: lerp(self.start_angle, other.start_angle, t),
            end_angle: lerp(self.end_angle, other.end_angle, t),
            inner_radius: lerp(self.inner_radius, other.inner_radius, t),
            outer_radius: lerp(self.outer_radius, other.outer_radius, t),
        }
    }
}

/// Geometric primitive of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeGeometry {
    Rect(RectShape),
    Sector(SectorShape),
}

impl ShapeGeometry {
    #[must_use]
    pub fn area(self) -> f64 {
        match self {
            Self::Rect(rect) => rect.area(),
            Self::Sector(sector) => sector.area(),
        }
    }

    /// True when both geometries are the same primitive kind.
    #[must_use]
    pub fn same_kind(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rect(_), Self::Rect(_)) | (Self::Sector(_), Self::Sector(_))
        )
    }

    /// Zero-area shape left behind at this location when a series exits.
    #[must_use]
    pub fn collapsed(self) -> Self {
        match self {
            Self::Rect(rect) => Self::Rect(RectShape::new(rect.x, 0.0, 0.0, 0.0)),
            Self::Sector(sector) => Self::Sector(SectorShape::new(
                sector.end_angle,
                sector.end_angle,
                sector.inner_radius,
                sector.outer_radius,
            )),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::Rect(rect) => {
                rect.x.is_finite()
                    && rect.y.is_finite()
                    && rect.width.is_finite()
                    && rect.height.is_finite()
            }
            Self::Sector(sector) => {
                sector.start_angle.is_finite()
                    && sector.end_angle.is_finite()
                    && sector.inner_radius.is_finite()
                    && sector.outer_radius.is_finite()
            }
        }
    }
}

/// Positioned, colored shape of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub key: SeriesKey,
    pub geometry: ShapeGeometry,
    pub fill: Color,
}

impl ShapeDescriptor {
    #[must_use]
    pub const fn new(key: SeriesKey, geometry: ShapeGeometry, fill: Color) -> Self {
        Self {
            key,
            geometry,
            fill,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.geometry.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "shape geometry of series {} must be finite",
                self.key.0
            )));
        }
        if let ShapeGeometry::Rect(rect) = self.geometry {
            if rect.width < 0.0 || rect.height < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "bar of series {} must have non-negative size",
                    self.key.0
                )));
            }
        }
        self.fill.validate()
    }
}

/// Positioned label of one series.
///
/// `anchor` is the text center; `scale` multiplies the natural text size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDescriptor {
    pub key: SeriesKey,
    pub text: String,
    pub anchor: PixelPoint,
    pub scale: f64,
    pub opacity: f64,
    pub fill: Color,
}

impl LabelDescriptor {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.anchor.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "label anchor of series {} must be finite",
                self.key.0
            )));
        }
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "label scale of series {} must be finite and >= 0",
                self.key.0
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(format!(
                "label opacity of series {} must be in [0, 1]",
                self.key.0
            )));
        }
        self.fill.validate()
    }
}
