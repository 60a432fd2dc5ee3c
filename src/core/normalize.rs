use serde::{Deserialize, Serialize};

use crate::core::types::ChartType;
use crate::error::{ChartError, ChartResult};

/// Largest significant-digit count accepted for label rounding.
pub const MAX_LABEL_PRECISION: u32 = 100;

/// Data values divided by their per-series maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioVector {
    ratios: Vec<f64>,
}

impl RatioVector {
    /// Wraps already-normalized ratios.
    pub fn new(ratios: Vec<f64>) -> ChartResult<Self> {
        if ratios.is_empty() {
            return Err(ChartError::config("data", "must contain at least one value"));
        }
        if ratios.iter().any(|ratio| !ratio.is_finite()) {
            return Err(ChartError::config("data", "ratios must be finite"));
        }
        Ok(Self { ratios })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.ratios
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.ratios.get(index).copied()
    }

    #[must_use]
    pub fn is_single_series(&self) -> bool {
        self.ratios.len() == 1
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.ratios.iter().sum()
    }
}

/// Computes `data[i] / max_values[i % max_values.len()]`.
///
/// `max_values` must hold one shared scale or one scale per series. Sector
/// charts reject negative data since their angle and radius math assumes
/// non-negative ratios.
pub fn normalize(
    data: &[f64],
    max_values: &[f64],
    chart_type: ChartType,
) -> ChartResult<RatioVector> {
    if data.is_empty() {
        return Err(ChartError::config("data", "must contain at least one value"));
    }
    if max_values.len() != 1 && max_values.len() != data.len() {
        return Err(ChartError::config(
            "maxValues",
            format!(
                "should be a single number or have same length as `data` (got {} for {} values)",
                max_values.len(),
                data.len()
            ),
        ));
    }
    if let Some(index) = data.iter().position(|value| !value.is_finite()) {
        return Err(ChartError::config(
            "data",
            format!("value at index {index} must be finite"),
        ));
    }
    if let Some(index) = max_values
        .iter()
        .position(|value| !value.is_finite() || *value == 0.0)
    {
        return Err(ChartError::config(
            "maxValues",
            format!("value at index {index} must be finite and != 0"),
        ));
    }
    if chart_type.is_polar() {
        if let Some(index) = data.iter().position(|value| *value < 0.0) {
            return Err(ChartError::config(
                "data",
                format!(
                    "`{}` charts require non-negative values (index {index})",
                    chart_type.as_str()
                ),
            ));
        }
        if let Some(index) = max_values.iter().position(|value| *value < 0.0) {
            return Err(ChartError::config(
                "maxValues",
                format!(
                    "`{}` charts require positive maxima (index {index})",
                    chart_type.as_str()
                ),
            ));
        }
    }

    let ratios = data
        .iter()
        .enumerate()
        .map(|(i, value)| value / max_values[i % max_values.len()])
        .collect();
    RatioVector::new(ratios)
}

/// Label rules applied to raw data values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelTextOptions<'a> {
    pub show_labels: bool,
    pub label_text: Option<&'a [String]>,
    pub precision: u32,
}

/// Resolves the text of each series label.
///
/// Returns `None` when labels are disabled.
pub fn series_labels(
    data: &[f64],
    options: LabelTextOptions<'_>,
) -> ChartResult<Option<Vec<String>>> {
    if !options.show_labels {
        return Ok(None);
    }
    match options.label_text {
        Some(text) => {
            if text.len() != data.len() {
                return Err(ChartError::config(
                    "labelText",
                    format!(
                        "custom labels must have same length as `data` (got {} for {} values)",
                        text.len(),
                        data.len()
                    ),
                ));
            }
            Ok(Some(text.to_vec()))
        }
        None => {
            if options.precision > MAX_LABEL_PRECISION {
                return Err(ChartError::config(
                    "labelPrecision",
                    format!("must be <= {MAX_LABEL_PRECISION}"),
                ));
            }
            Ok(Some(
                data.iter()
                    .map(|value| format_significant(*value, options.precision))
                    .collect(),
            ))
        }
    }
}

/// Significant digits needed to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 767;

/// Formats `value` with `precision` significant digits.
///
/// Switches to exponent notation (`1.2e+5`) when the decimal exponent is
/// below -6 or not smaller than `precision`. Exact halfway cases round away
/// from zero. A precision of 0 prints the shortest round-trip form.
#[must_use]
pub fn format_significant(value: f64, precision: u32) -> String {
    if precision == 0 || !value.is_finite() {
        return format_shortest(value);
    }

    let precision = precision.min(MAX_LABEL_PRECISION) as usize;
    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = rounded_digits(value.abs(), precision);

    if exponent < -6 || exponent >= precision as i32 {
        let (lead, rest) = digits.split_at(1);
        let point = if rest.is_empty() { "" } else { "." };
        format!("{sign}{lead}{point}{rest}{}", exponent_suffix(exponent))
    } else if exponent >= 0 {
        let (int, frac) = digits.split_at(exponent as usize + 1);
        if frac.is_empty() {
            format!("{sign}{int}")
        } else {
            format!("{sign}{int}.{frac}")
        }
    } else {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{sign}0.{zeros}{digits}")
    }
}

/// Shortest round-trip decimal, laid out like a JavaScript number string.
fn format_shortest(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = split_exponent(&scientific);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len() as i32;
    let point = exponent + 1;

    if len <= point && point <= 21 {
        format!("{sign}{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{sign}{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("{sign}0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let dot = if rest.is_empty() { "" } else { "." };
        format!("{sign}{lead}{dot}{rest}{}", exponent_suffix(exponent))
    }
}

/// First `precision` significant digits of `magnitude`, rounded half up on
/// its exact decimal expansion, and the decimal exponent of the first digit.
fn rounded_digits(magnitude: f64, precision: usize) -> (String, i32) {
    let exact = format!("{magnitude:.prec$e}", prec = EXACT_DIGITS);
    let (mantissa, mut exponent) = split_exponent(&exact);
    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|digit| digit - b'0')
        .collect();

    let round_up = digits.get(precision).is_some_and(|digit| *digit >= 5);
    digits.truncate(precision);
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            digits.truncate(precision);
            exponent += 1;
        }
    }

    let text: String = digits.iter().map(|digit| char::from(b'0' + digit)).collect();
    (text, exponent)
}

fn split_exponent(scientific: &str) -> (&str, i32) {
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (scientific, 0),
    }
}

fn exponent_suffix(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("e{sign}{}", exponent.abs())
}
