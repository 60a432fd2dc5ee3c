use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Rejected chart configuration. The whole update is dropped.
    #[error("invalid `{field}`: {message}")]
    Config {
        field: &'static str,
        message: String,
    },

    /// Text metrics provider could not measure a label.
    #[error("label measurement failed: {0}")]
    Measurement(String),

    #[error("projection failed: {0}")]
    Projection(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    pub(crate) fn config(field: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            field,
            message: message.into(),
        }
    }

    /// Field name carried by a configuration error.
    #[must_use]
    pub fn config_field(&self) -> Option<&'static str> {
        match self {
            Self::Config { field, .. } => Some(*field),
            _ => None,
        }
    }
}
