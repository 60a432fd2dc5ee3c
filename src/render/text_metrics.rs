use crate::core::TextExtent;
use crate::error::{ChartError, ChartResult};

/// Text metrics provider used to fit labels.
///
/// `style` is the CSS declaration list configured as `labelStyle`.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &str) -> ChartResult<TextExtent>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &str) -> ChartResult<TextExtent> {
        (**self).measure(text, style)
    }
}

/// Deterministic, backend-independent text size estimate.
///
/// Honors a `font-size: <n>px` declaration in the style, falling back to
/// `default_font_size_px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMeasurer {
    pub default_font_size_px: f64,
    pub line_height_ratio: f64,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self {
            default_font_size_px: 16.0,
            line_height_ratio: 1.15,
        }
    }
}

impl EstimatedTextMeasurer {
    #[must_use]
    pub fn font_size_px(&self, style: &str) -> f64 {
        style_font_size_px(style).unwrap_or(self.default_font_size_px)
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, style: &str) -> ChartResult<TextExtent> {
        let font_size_px = self.font_size_px(style);
        if !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Err(ChartError::Measurement(format!(
                "font size must be finite and > 0, got {font_size_px}"
            )));
        }
        if text.is_empty() {
            return Ok(TextExtent::new(0.0, font_size_px * self.line_height_ratio));
        }
        Ok(TextExtent::new(
            estimate_text_width_px(text, font_size_px),
            font_size_px * self.line_height_ratio,
        ))
    }
}

pub(crate) fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_size_px
}

fn style_font_size_px(style: &str) -> Option<f64> {
    style.split(';').find_map(|declaration| {
        let (property, value) = declaration.split_once(':')?;
        if property.trim() != "font-size" {
            return None;
        }
        value.trim().strip_suffix("px")?.trim().parse().ok()
    })
}
