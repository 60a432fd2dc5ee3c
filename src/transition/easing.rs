use serde::{Deserialize, Serialize};

/// Timing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Symmetric cubic ease, slow at both ends.
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let doubled = t * 2.0;
                if doubled <= 1.0 {
                    doubled * doubled * doubled * 0.5
                } else {
                    let shifted = doubled - 2.0;
                    (shifted * shifted * shifted + 2.0) * 0.5
                }
            }
        }
    }
}
