use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::Color;

/// Default fill of single-series charts (`#4281e5`).
pub const DEFAULT_FILL_COLOR: Color = Color::rgb(66.0 / 255.0, 129.0 / 255.0, 229.0 / 255.0);

/// Ten-color categorical palette used for multi-series charts.
#[must_use]
pub fn category10() -> Vec<Color> {
    [
        (0x1f, 0x77, 0xb4),
        (0xff, 0x7f, 0x0e),
        (0x2c, 0xa0, 0x2c),
        (0xd6, 0x27, 0x28),
        (0x94, 0x67, 0xbd),
        (0x8c, 0x56, 0x4b),
        (0xe3, 0x77, 0xc2),
        (0x7f, 0x7f, 0x7f),
        (0xbc, 0xbd, 0x22),
        (0x17, 0xbe, 0xcf),
    ]
    .into_iter()
    .map(|(r, g, b)| Color::rgb8(r, g, b))
    .collect()
}

/// Series index to fill color mapping.
///
/// Single-series charts use the single fill color; otherwise indices cycle
/// through the ordinal palette.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesPalette {
    Single(Color),
    Ordinal(Vec<Color>),
}

impl SeriesPalette {
    pub fn resolve(series_count: usize, single_color: Color, palette: &[Color]) -> ChartResult<Self> {
        if series_count == 1 {
            return Ok(Self::Single(single_color));
        }
        if palette.is_empty() {
            return Err(ChartError::config(
                "colorPalette",
                "must contain at least one color for multi-series charts",
            ));
        }
        Ok(Self::Ordinal(palette.to_vec()))
    }

    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        match self {
            Self::Single(color) => *color,
            Self::Ordinal(colors) => colors[index % colors.len()],
        }
    }
}

/// Label color option: automatic contrast or a fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LabelColorMode {
    #[default]
    Auto,
    Fixed(Color),
}

impl LabelColorMode {
    pub fn parse(input: &str) -> ChartResult<Self> {
        if input.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        Color::parse(input).map(Self::Fixed)
    }
}

impl fmt::Display for LabelColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(color) => write!(f, "{color}"),
        }
    }
}

impl TryFrom<String> for LabelColorMode {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LabelColorMode> for String {
    fn from(value: LabelColorMode) -> Self {
        value.to_string()
    }
}

/// Picks the label color drawn over `background`.
///
/// In auto mode white wins unless black has strictly higher contrast.
#[must_use]
pub fn resolve_label_color(background: Color, mode: LabelColorMode) -> Color {
    match mode {
        LabelColorMode::Fixed(color) => color,
        LabelColorMode::Auto => {
            if Color::BLACK.contrast_ratio(background) > Color::WHITE.contrast_ratio(background) {
                Color::BLACK
            } else {
                Color::WHITE
            }
        }
    }
}
