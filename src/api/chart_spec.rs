use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{
    ChartBox, ChartType, LabelConstraints, LabelTextOptions, RatioVector, normalize,
    series_labels,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DEFAULT_FILL_COLOR, LabelColorMode, category10};

pub const DEFAULT_LABEL_STYLE: &str = "font-family:sans-serif";
pub const DEFAULT_TRANSITION_TIME_MS: f64 = 750.0;

/// Per-render chart configuration.
///
/// Serializable with the camelCase option names hosts already use, so a
/// chart can be configured from JSON. `data`, `maxValues` and `labelText`
/// accept a scalar in place of a one-element array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(deserialize_with = "one_or_many")]
    pub data: Vec<f64>,
    #[serde(deserialize_with = "one_or_many")]
    pub max_values: Vec<f64>,
    pub fill_color: Color,
    pub color_palette: Vec<Color>,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    pub show_labels: bool,
    pub label_style: String,
    pub label_min_size: f64,
    pub label_max_size: f64,
    pub label_padding: f64,
    pub label_precision: u32,
    pub label_color: LabelColorMode,
    #[serde(deserialize_with = "optional_one_or_many")]
    pub label_text: Option<Vec<String>>,
    #[serde(rename = "transitionTime")]
    pub transition_time_ms: f64,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Bar,
            data: vec![1.0],
            max_values: vec![1.0],
            fill_color: DEFAULT_FILL_COLOR,
            color_palette: category10(),
            width: 60.0,
            height: 60.0,
            opacity: 1.0,
            show_labels: false,
            label_style: DEFAULT_LABEL_STYLE.to_owned(),
            label_min_size: 8.0,
            label_max_size: 24.0,
            label_padding: 2.0,
            label_precision: 0,
            label_color: LabelColorMode::Auto,
            label_text: None,
            transition_time_ms: DEFAULT_TRANSITION_TIME_MS,
        }
    }
}

/// Validated ratios plus the label text of each series.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    pub ratios: RatioVector,
    pub labels: Option<Vec<String>>,
}

impl ChartSpec {
    #[must_use]
    pub fn new(chart_type: ChartType, data: Vec<f64>) -> Self {
        Self {
            chart_type,
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_values(mut self, max_values: Vec<f64>) -> Self {
        self.max_values = max_values;
        self
    }

    #[must_use]
    pub fn with_max_value(self, max_value: f64) -> Self {
        self.with_max_values(vec![max_value])
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    #[must_use]
    pub fn with_label_text(mut self, label_text: Vec<String>) -> Self {
        self.label_text = Some(label_text);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, fill_color: Color, color_palette: Vec<Color>) -> Self {
        self.fill_color = fill_color;
        self.color_palette = color_palette;
        self
    }

    #[must_use]
    pub fn with_transition_time_ms(mut self, transition_time_ms: f64) -> Self {
        self.transition_time_ms = transition_time_ms;
        self
    }

    #[must_use]
    pub fn chart_box(&self) -> ChartBox {
        ChartBox::new(self.width, self.height)
    }

    #[must_use]
    pub fn label_constraints(&self) -> LabelConstraints {
        LabelConstraints {
            min_size: self.label_min_size,
            max_size: self.label_max_size,
            padding: self.label_padding,
        }
    }

    /// Checks every numeric option and the length invariants.
    pub fn validate(&self) -> ChartResult<()> {
        self.chart_box().validate()?;
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::config("opacity", "must be in [0, 1]"));
        }
        for (field, value) in [
            ("labelMinSize", self.label_min_size),
            ("labelMaxSize", self.label_max_size),
            ("labelPadding", self.label_padding),
            ("transitionTime", self.transition_time_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::config(field, "must be finite and >= 0"));
            }
        }
        if self.label_min_size > self.label_max_size {
            return Err(ChartError::config(
                "labelMinSize",
                "must not exceed `labelMaxSize`",
            ));
        }
        if let Some(text) = &self.label_text {
            if text.len() != self.data.len() {
                return Err(ChartError::config(
                    "labelText",
                    format!(
                        "custom labels must have same length as `data` (got {} for {} values)",
                        text.len(),
                        self.data.len()
                    ),
                ));
            }
        }
        self.fill_color.validate()?;
        for color in &self.color_palette {
            color.validate()?;
        }
        Ok(())
    }

    /// Ratio vector and label text for this configuration.
    pub fn normalize(&self) -> ChartResult<NormalizedSeries> {
        let ratios = normalize(&self.data, &self.max_values, self.chart_type)?;
        let labels = series_labels(
            &self.data,
            LabelTextOptions {
                show_labels: self.show_labels,
                label_text: self.label_text.as_deref(),
                precision: self.label_precision,
            },
        )?;
        Ok(NormalizedSeries { ratios, labels })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart spec json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart spec json: {e}"))
        })
    }
}

/// Partial option update merged into the current spec.
///
/// Absent fields keep their current value. `labelText: null` resets custom
/// labels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSpecUpdate {
    #[serde(rename = "type")]
    pub chart_type: Option<ChartType>,
    #[serde(deserialize_with = "some_one_or_many")]
    pub data: Option<Vec<f64>>,
    #[serde(deserialize_with = "some_one_or_many")]
    pub max_values: Option<Vec<f64>>,
    pub fill_color: Option<Color>,
    pub color_palette: Option<Vec<Color>>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub opacity: Option<f64>,
    pub show_labels: Option<bool>,
    pub label_style: Option<String>,
    pub label_min_size: Option<f64>,
    pub label_max_size: Option<f64>,
    pub label_padding: Option<f64>,
    pub label_precision: Option<u32>,
    pub label_color: Option<LabelColorMode>,
    #[serde(deserialize_with = "explicit_optional_one_or_many")]
    pub label_text: Option<Option<Vec<String>>>,
    #[serde(rename = "transitionTime")]
    pub transition_time_ms: Option<f64>,
}

impl ChartSpecUpdate {
    #[must_use]
    pub fn data(data: Vec<f64>) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn chart_type(chart_type: ChartType) -> Self {
        Self {
            chart_type: Some(chart_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<f64>) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_max_values(mut self, max_values: Vec<f64>) -> Self {
        self.max_values = Some(max_values);
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart options json: {e}"))
        })
    }

    /// Merges this update over `base`.
    #[must_use]
    pub fn apply_to(&self, base: &ChartSpec) -> ChartSpec {
        let mut spec = base.clone();
        if let Some(chart_type) = self.chart_type {
            spec.chart_type = chart_type;
        }
        if let Some(data) = &self.data {
            spec.data.clone_from(data);
        }
        if let Some(max_values) = &self.max_values {
            spec.max_values.clone_from(max_values);
        }
        if let Some(fill_color) = self.fill_color {
            spec.fill_color = fill_color;
        }
        if let Some(color_palette) = &self.color_palette {
            spec.color_palette.clone_from(color_palette);
        }
        if let Some(width) = self.width {
            spec.width = width;
        }
        if let Some(height) = self.height {
            spec.height = height;
        }
        if let Some(opacity) = self.opacity {
            spec.opacity = opacity;
        }
        if let Some(show_labels) = self.show_labels {
            spec.show_labels = show_labels;
        }
        if let Some(label_style) = &self.label_style {
            spec.label_style.clone_from(label_style);
        }
        if let Some(label_min_size) = self.label_min_size {
            spec.label_min_size = label_min_size;
        }
        if let Some(label_max_size) = self.label_max_size {
            spec.label_max_size = label_max_size;
        }
        if let Some(label_padding) = self.label_padding {
            spec.label_padding = label_padding;
        }
        if let Some(label_precision) = self.label_precision {
            spec.label_precision = label_precision;
        }
        if let Some(label_color) = self.label_color {
            spec.label_color = label_color;
        }
        if let Some(label_text) = &self.label_text {
            spec.label_text.clone_from(label_text);
        }
        if let Some(transition_time_ms) = self.transition_time_ms {
            spec.transition_time_ms = transition_time_ms;
        }
        spec
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    OneOrMany::deserialize(deserializer).map(Vec::from)
}

fn optional_one_or_many<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<OneOrMany<T>>::deserialize(deserializer).map(|value| value.map(Vec::from))
}

fn some_one_or_many<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    one_or_many(deserializer).map(Some)
}

fn explicit_optional_one_or_many<'de, D, T>(
    deserializer: D,
) -> Result<Option<Option<Vec<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    optional_one_or_many(deserializer).map(Some)
}
