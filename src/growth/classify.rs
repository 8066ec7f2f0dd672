//! Measurement Classifier
//!
//! Single source of the percentile → category thresholds used by every metric.

use serde::{Deserialize, Serialize};

/// Percentiles strictly below this are severely low
pub const SEVERELY_LOW_BELOW: f64 = 3.0;

/// Percentiles strictly below this (and >= 3) are low
pub const LOW_BELOW: f64 = 15.0;

/// Percentiles up to and including this (and >= 15) are normal
pub const NORMAL_UPPER: f64 = 85.0;

/// Percentiles up to and including this (and > 85) are high; above is severely high
pub const HIGH_UPPER: f64 = 97.0;

/// Five-way severity band for one measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthCategory {
    SeverelyLow,
    Low,
    Normal,
    High,
    SeverelyHigh,
}

impl GrowthCategory {
    pub fn is_normal(&self) -> bool {
        *self == GrowthCategory::Normal
    }

    pub fn is_severe(&self) -> bool {
        matches!(self, GrowthCategory::SeverelyLow | GrowthCategory::SeverelyHigh)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthCategory::SeverelyLow => "severely_low",
            GrowthCategory::Low => "low",
            GrowthCategory::Normal => "normal",
            GrowthCategory::High => "high",
            GrowthCategory::SeverelyHigh => "severely_high",
        }
    }
}

/// Classify a percentile: <3 severely low, [3,15) low, [15,85] normal,
/// (85,97] high, >97 severely high
pub fn classify_percentile(percentile: f64) -> GrowthCategory {
    if percentile < SEVERELY_LOW_BELOW {
        GrowthCategory::SeverelyLow
    } else if percentile < LOW_BELOW {
        GrowthCategory::Low
    } else if percentile <= NORMAL_UPPER {
        GrowthCategory::Normal
    } else if percentile <= HIGH_UPPER {
        GrowthCategory::High
    } else {
        GrowthCategory::SeverelyHigh
    }
}
