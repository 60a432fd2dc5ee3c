use crate::error::{ChartError, ChartResult};

/// Linear `[domain_start, domain_end] -> [range_start, range_end]` mapping.
///
/// Values outside the domain extrapolate, so negative bar ratios map to
/// negative pixel lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    /// Unit domain mapped onto `[0, range_end]`.
    #[must_use]
    pub fn unit(range_end: f64) -> Self {
        Self {
            domain_start: 0.0,
            domain_end: 1.0,
            range_start: 0.0,
            range_end,
        }
    }

    #[must_use]
    pub fn with_range(mut self, range_start: f64, range_end: f64) -> Self {
        self.range_start = range_start;
        self.range_end = range_end;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Power scale on the unit domain: `value^exponent * range_end`.
///
/// Sign is preserved so the mapping stays monotonic across zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowScale {
    exponent: f64,
    range_end: f64,
}

impl PowScale {
    pub fn new(exponent: f64, range_end: f64) -> ChartResult<Self> {
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ChartError::InvalidData(
                "power scale exponent must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            exponent,
            range_end,
        })
    }

    /// Square-root scale used by area encodings.
    #[must_use]
    pub fn sqrt(range_end: f64) -> Self {
        Self {
            exponent: 0.5,
            range_end,
        }
    }

    #[must_use]
    pub fn exponent(self) -> f64 {
        self.exponent
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let magnitude = value.abs().powf(self.exponent);
        value.signum() * magnitude * self.range_end
    }
}

/// Radial encoding used by polar builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadialScale {
    Linear(LinearScale),
    Pow(PowScale),
}

impl RadialScale {
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        match self {
            Self::Linear(scale) => scale.map(value),
            Self::Pow(scale) => scale.map(value),
        }
    }
}
