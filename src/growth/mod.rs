//! Growth Percentile Calculator
//!
//! Pipeline per measurement:
//! 1. `interpolation` - anchors at the child's age (linear between table ages, clamped)
//! 2. `percentile` - value → percentile through the five anchors (clamped to 3-97)
//! 3. `classify` - percentile → five-way category
//!
//! `assessment` folds the per-metric results into a concern level and report
//! text (from `advice`); `weight_check` is the single-metric weight variant.
//!
//! Everything here is pure: no I/O, no shared mutable state.

pub mod interpolation;
pub mod percentile;
pub mod classify;
pub mod advice;
pub mod assessment;
pub mod weight_check;

pub use interpolation::interpolate_anchors;
pub use percentile::{estimate_percentile, MAX_PERCENTILE, MIN_PERCENTILE};
pub use classify::{classify_percentile, GrowthCategory};
pub use assessment::{
    assess_growth, assess_growth_batch, body_mass_index, measure, ConcernLevel, GrowthAssessment,
    GrowthInput, MeasurementResult, MeasurementSet, Measurements,
};
pub use weight_check::{check_weight, WeightCategory, WeightCheckResult};
