//! Single weight check
//!
//! Weight-only variant of the assessment: the same percentile pipeline, with
//! the category renamed to weight vocabulary and the interpolated anchors
//! returned so callers can draw the reference band.

use serde::{Deserialize, Serialize};

use super::advice::weight_recommendation;
use super::classify::{classify_percentile, GrowthCategory};
use super::interpolation::interpolate_anchors;
use super::percentile::estimate_percentile;
use crate::reference::{reference_table, Gender, Metric, PercentileAnchors};
use crate::utils::format::round_tenth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightCategory {
    SeverelyUnderweight,
    Underweight,
    Healthy,
    Overweight,
    SeverelyOverweight,
}

impl From<GrowthCategory> for WeightCategory {
    fn from(category: GrowthCategory) -> Self {
        match category {
            GrowthCategory::SeverelyLow => WeightCategory::SeverelyUnderweight,
            GrowthCategory::Low => WeightCategory::Underweight,
            GrowthCategory::Normal => WeightCategory::Healthy,
            GrowthCategory::High => WeightCategory::Overweight,
            GrowthCategory::SeverelyHigh => WeightCategory::SeverelyOverweight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightCheckResult {
    pub actual_weight: f64,
    pub percentile: f64,
    pub weight_category: WeightCategory,
    pub recommendation: String,
    pub percentile_ranges: PercentileAnchors,
}

pub fn check_weight(age_months: f64, gender: Gender, weight_kg: f64) -> WeightCheckResult {
    let table = reference_table(Metric::Weight, gender);
    let anchors = interpolate_anchors(&table, age_months);
    let percentile = estimate_percentile(&anchors, weight_kg);
    let category = classify_percentile(percentile);

    WeightCheckResult {
        actual_weight: weight_kg,
        percentile: round_tenth(percentile),
        weight_category: category.into(),
        recommendation: weight_recommendation(age_months, gender, weight_kg, percentile, category),
        percentile_ranges: anchors,
    }
}
