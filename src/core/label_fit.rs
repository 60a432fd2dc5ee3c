use serde::{Deserialize, Serialize};

/// Natural (unscaled) size of a rendered label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_measurable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Room available to a label inside its shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub available_width: f64,
    pub available_height: f64,
}

impl LabelBox {
    #[must_use]
    pub const fn new(available_width: f64, available_height: f64) -> Self {
        Self {
            available_width,
            available_height,
        }
    }
}

/// Label size bounds in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelConstraints {
    pub min_size: f64,
    pub max_size: f64,
    pub padding: f64,
}

impl Default for LabelConstraints {
    fn default() -> Self {
        Self {
            min_size: 8.0,
            max_size: 24.0,
            padding: 2.0,
        }
    }
}

/// Scale applied to the natural text size, and whether the label shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFit {
    pub scale: f64,
    pub visible: bool,
}

impl LabelFit {
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            scale: 0.0,
            visible: false,
        }
    }

    /// Rendered label height.
    #[must_use]
    pub fn height(self, extent: TextExtent) -> f64 {
        extent.height * self.scale
    }
}

/// Largest scale keeping `extent` inside `label_box` on both axes.
///
/// The vertical budget is the available height capped by `max_size`; the
/// horizontal budget is the available width minus padding on both sides.
/// Labels whose vertical room is below `min_size` stay in place but hidden.
#[must_use]
pub fn fit_label(
    extent: TextExtent,
    label_box: LabelBox,
    constraints: LabelConstraints,
) -> LabelFit {
    if !extent.is_measurable() {
        return LabelFit::hidden();
    }

    let vertical_budget = label_box.available_height.max(0.0);
    let horizontal_budget = label_box.available_width - 2.0 * constraints.padding;

    let vertical_scale = constraints.max_size.min(vertical_budget) / extent.height;
    let horizontal_scale = horizontal_budget / extent.width;

    LabelFit {
        scale: vertical_scale.min(horizontal_scale).max(0.0),
        visible: vertical_budget >= constraints.min_size,
    }
}

/// Fits a centered label inside a full circle of `radius`.
///
/// The text rectangle keeps its aspect ratio, so its diagonal is the
/// diameter and its height is `2r * sin(atan(h / w))`.
#[must_use]
pub fn fit_label_in_circle(
    extent: TextExtent,
    radius: f64,
    constraints: LabelConstraints,
) -> LabelFit {
    if !extent.is_measurable() {
        return LabelFit::hidden();
    }

    let chord_height =
        (2.0 * radius.max(0.0) * (extent.height / extent.width).atan().sin()).max(0.0);
    let max_height = chord_height.min(constraints.max_size);

    LabelFit {
        scale: max_height / extent.height,
        visible: max_height >= constraints.min_size,
    }
}
