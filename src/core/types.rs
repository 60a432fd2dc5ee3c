use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Drawing box of one chart in pixels.
///
/// `width` is the bar chart width or the polar chart diameter, `height` is
/// the maximal bar height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBox {
    pub width: f64,
    pub height: f64,
}

impl ChartBox {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ChartError::config("width", "must be finite and >= 0"));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(ChartError::config("height", "must be finite and >= 0"));
        }
        Ok(self)
    }

    /// Radius available to polar and pie charts.
    #[must_use]
    pub fn radius(self) -> f64 {
        self.width * 0.5
    }
}

/// Point in the host layer's pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
        }
    }
}

/// Geographic anchor of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Linear interpolation, exact at `t = 0` and `t = 1`.
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

/// Chart kind selected by the `type` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "pie")]
    Pie,
    #[serde(rename = "polar-radius")]
    PolarRadius,
    #[serde(rename = "polar-area")]
    PolarArea,
}

impl ChartType {
    #[must_use]
    pub fn is_polar(self) -> bool {
        !matches!(self, Self::Bar)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::PolarRadius => "polar-radius",
            Self::PolarArea => "polar-area",
        }
    }
}
