//! Animation speed settings.

use serde::{Deserialize, Serialize};

/// Global animation speed, applied as a multiplier to every motion law.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    /// Half speed.
    Slow,
    /// Normal speed.
    #[default]
    Medium,
    /// Double speed.
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed setting.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Multiplier applied to drift velocities and oscillation time.
    pub fn multiplier(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Period of the stateless plasma sweep in milliseconds.
    pub fn plasma_period_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 16_000,
            AnimationSpeed::Medium => 8_000,
            AnimationSpeed::Fast => 4_000,
        }
    }

    /// Display label for the help line.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}
