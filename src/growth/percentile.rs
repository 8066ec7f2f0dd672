//! Percentile Estimator
//!
//! Converts a measured value to a continuous percentile by piecewise-linear
//! interpolation through the five named anchors (3rd, 15th, 50th, 85th, 97th).
//!
//! Band widths in percentile space are the distances between the named
//! curves: 3→15 = 12, 15→50 = 35, 50→85 = 35, 85→97 = 12.

use crate::reference::PercentileAnchors;

/// Percentile of each anchor, in the same order as `PercentileAnchors::values`
pub const ANCHOR_PERCENTILES: [f64; 5] = [3.0, 15.0, 50.0, 85.0, 97.0];

/// Lowest percentile the estimator reports (values at or below p3)
pub const MIN_PERCENTILE: f64 = ANCHOR_PERCENTILES[0];

/// Highest percentile the estimator reports (values above p97)
pub const MAX_PERCENTILE: f64 = ANCHOR_PERCENTILES[4];

/// Estimate the percentile of `value` against interpolated anchors
///
/// Algorithm:
/// 1. value <= p3 → 3, value > p97 → 97 (clamp, no extrapolation)
/// 2. Find the band [values[i], values[i+1]] containing the value
/// 3. percentile = P[i] + (value - values[i]) / (values[i+1] - values[i]) × (P[i+1] - P[i])
///
/// A zero-width band returns its lower percentile. Anchors are trusted to be
/// monotonic; malformed anchors give meaningless (but finite) output.
pub fn estimate_percentile(anchors: &PercentileAnchors, value: f64) -> f64 {
    let values = anchors.values();

    // Edge cases
    if value <= values[0] {
        return MIN_PERCENTILE;
    }
    if value > values[4] {
        return MAX_PERCENTILE;
    }

    // Linear interpolation within the band
    for i in 0..4 {
        if value <= values[i + 1] {
            let width = values[i + 1] - values[i];
            if width <= 0.0 {
                return ANCHOR_PERCENTILES[i];
            }

            let fraction = (value - values[i]) / width;
            return ANCHOR_PERCENTILES[i]
                + fraction * (ANCHOR_PERCENTILES[i + 1] - ANCHOR_PERCENTILES[i]);
        }
    }

    // NaN input falls through every comparison
    MAX_PERCENTILE
}
