//! Water-level gauge bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the gauge scale.
pub const LEVEL_MIN: f64 = 0.0;
/// Upper bound of the gauge scale.
pub const LEVEL_MAX: f64 = 100.0;

const ELEVATED_FROM: f64 = 50.0;
const DANGER_FROM: f64 = 75.0;

/// Severity band of a water-level sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GaugeLevel {
    Normal,
    Elevated,
    Danger,
}

impl GaugeLevel {
    pub fn classify(level: f64) -> GaugeLevel {
        if level >= DANGER_FROM {
            GaugeLevel::Danger
        } else if level >= ELEVATED_FROM {
            GaugeLevel::Elevated
        } else {
            GaugeLevel::Normal
        }
    }

    /// Fill colour for the gauge needle and bar.
    pub fn color(&self) -> &'static str {
        match self {
            GaugeLevel::Normal => "#2E7D32",
            GaugeLevel::Elevated => "#F9A825",
            GaugeLevel::Danger => "#C62828",
        }
    }
}

impl fmt::Display for GaugeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaugeLevel::Normal => write!(f, "Normal"),
            GaugeLevel::Elevated => write!(f, "Elevated"),
            GaugeLevel::Danger => write!(f, "Danger"),
        }
    }
}
