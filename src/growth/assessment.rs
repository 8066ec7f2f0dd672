//! Growth Assessment Aggregator
//!
//! Runs interpolation → percentile → classification for each supplied
//! measurement (plus BMI when weight and height are both given), then folds the
//! categories into a concern level, an overall assessment and recommendations.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::advice;
use super::classify::{classify_percentile, GrowthCategory};
use super::interpolation::interpolate_anchors;
use super::percentile::estimate_percentile;
use crate::error::{GrowthError, Result};
use crate::reference::{reference_table, Gender, Metric};
use crate::utils::format::round_tenth;

/// Aggregate severity for one assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcernLevel {
    None,
    Mild,
    Moderate,
    High,
}

impl ConcernLevel {
    /// high: any severe category; moderate: two or more non-normal;
    /// mild: exactly one non-normal; none otherwise
    pub fn from_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = GrowthCategory>,
    {
        let mut non_normal = 0;
        for category in categories {
            if category.is_severe() {
                return ConcernLevel::High;
            }
            if !category.is_normal() {
                non_normal += 1;
            }
        }

        match non_normal {
            0 => ConcernLevel::None,
            1 => ConcernLevel::Mild,
            _ => ConcernLevel::Moderate,
        }
    }
}

/// Result for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    pub value: f64,
    /// 3-97, rounded to one decimal
    pub percentile: f64,
    pub category: GrowthCategory,
}

/// Caller-supplied measurements; any subset may be present
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSet {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub head_circumference: Option<f64>,
}

impl MeasurementSet {
    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.height.is_none() && self.head_circumference.is_none()
    }
}

/// One assessment request for batch evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthInput {
    pub age_months: f64,
    pub gender: Gender,
    pub measurements: MeasurementSet,
}

/// Per-metric results present in an assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<MeasurementResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<MeasurementResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_circumference: Option<MeasurementResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<MeasurementResult>,
}

impl Measurements {
    pub fn get(&self, metric: Metric) -> Option<&MeasurementResult> {
        match metric {
            Metric::Weight => self.weight.as_ref(),
            Metric::Height => self.height.as_ref(),
            Metric::HeadCircumference => self.head_circumference.as_ref(),
            Metric::Bmi => self.bmi.as_ref(),
        }
    }

    /// Present results in report order (weight, height, head, BMI)
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &MeasurementResult)> + '_ {
        Metric::ALL
            .into_iter()
            .filter_map(move |metric| self.get(metric).map(|result| (metric, result)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Complete growth assessment for one child at one age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAssessment {
    pub measurements: Measurements,
    pub overall_assessment: String,
    pub recommendations: Vec<String>,
    pub concern_level: ConcernLevel,
}

/// A non-normal (or normal) finding with its report label
#[derive(Debug, Clone, Copy, PartialEq)]
struct Flag {
    category: GrowthCategory,
    label: &'static str,
}

// ============================================================================
// Pipeline
// ============================================================================

/// Percentile and category for one value against the (metric, gender) curve
pub fn measure(metric: Metric, gender: Gender, age_months: f64, value: f64) -> MeasurementResult {
    let table = reference_table(metric, gender);
    let anchors = interpolate_anchors(&table, age_months);
    let percentile = estimate_percentile(&anchors, value);

    MeasurementResult {
        value,
        percentile: round_tenth(percentile),
        category: classify_percentile(percentile),
    }
}

/// BMI in kg/m² (unrounded)
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Assess every supplied measurement for a child.
///
/// Inputs are expected to be validated already (see `validation`); the only
/// check here is that at least one measurement is present.
pub fn assess_growth(
    age_months: f64,
    gender: Gender,
    supplied: &MeasurementSet,
) -> Result<GrowthAssessment> {
    if supplied.is_empty() {
        return Err(GrowthError::NoMeasurements);
    }

    let mut measurements = Measurements {
        weight: supplied
            .weight
            .map(|w| measure(Metric::Weight, gender, age_months, w)),
        height: supplied
            .height
            .map(|h| measure(Metric::Height, gender, age_months, h)),
        head_circumference: supplied
            .head_circumference
            .map(|hc| measure(Metric::HeadCircumference, gender, age_months, hc)),
        bmi: None,
    };

    if let (Some(weight), Some(height)) = (supplied.weight, supplied.height) {
        // Percentile from the exact BMI, reported value rounded
        let bmi = body_mass_index(weight, height);
        let mut result = measure(Metric::Bmi, gender, age_months, bmi);
        result.value = round_tenth(bmi);
        measurements.bmi = Some(result);
    }

    let mut concerns: SmallVec<[Flag; 4]> = SmallVec::new();
    let mut healthy: SmallVec<[Flag; 4]> = SmallVec::new();
    for (metric, result) in measurements.iter() {
        let flag = Flag {
            category: result.category,
            label: advice::flag_label(metric, result.category),
        };
        if result.category.is_normal() {
            healthy.push(flag);
        } else {
            concerns.push(flag);
        }
    }

    let concern_level = ConcernLevel::from_categories(concerns.iter().map(|f| f.category));

    let concern_labels: SmallVec<[&str; 4]> = concerns.iter().map(|f| f.label).collect();
    let healthy_labels: SmallVec<[&str; 4]> = healthy.iter().map(|f| f.label).collect();
    let overall_assessment =
        advice::overall_assessment(age_months, gender, &concern_labels, &healthy_labels);

    tracing::debug!(
        "Assessed {} measurements at {} months: concern level {:?}",
        measurements.len(),
        age_months,
        concern_level
    );

    Ok(GrowthAssessment {
        measurements,
        overall_assessment,
        recommendations: advice::recommendations(concern_level),
        concern_level,
    })
}

/// Assess independent requests in parallel; output order matches input order
pub fn assess_growth_batch(inputs: &[GrowthInput]) -> Vec<Result<GrowthAssessment>> {
    inputs
        .par_iter()
        .map(|input| assess_growth(input.age_months, input.gender, &input.measurements))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::growth::classify::GrowthCategory::*;

    fn weight_only(weight: f64) -> MeasurementSet {
        MeasurementSet {
            weight: Some(weight),
            ..Default::default()
        }
    }

    #[test]
    fn test_concern_level_rules() {
        assert_eq!(ConcernLevel::from_categories([Normal, Normal]), ConcernLevel::None);
        assert_eq!(ConcernLevel::from_categories([Low, Normal]), ConcernLevel::Mild);
        assert_eq!(ConcernLevel::from_categories([Low, Low]), ConcernLevel::Moderate);
        assert_eq!(ConcernLevel::from_categories([Low, High, Normal]), ConcernLevel::Moderate);
        assert_eq!(ConcernLevel::from_categories([SeverelyLow]), ConcernLevel::High);
        assert_eq!(
            ConcernLevel::from_categories([Normal, Low, Low, SeverelyHigh]),
            ConcernLevel::High
        );
        assert_eq!(ConcernLevel::from_categories(std::iter::empty()), ConcernLevel::None);
    }

    #[test]
    fn test_empty_measurements_rejected() {
        let err = assess_growth(12.0, Gender::Male, &MeasurementSet::default()).unwrap_err();
        assert_eq!(err, GrowthError::NoMeasurements);
    }

    #[test]
    fn test_median_weight_is_normal() {
        let assessment = assess_growth(12.0, Gender::Male, &weight_only(9.6)).unwrap();
        let weight = assessment.measurements.weight.unwrap();
        assert_eq!(weight.percentile, 50.0);
        assert_eq!(weight.category, Normal);
        assert_eq!(assessment.concern_level, ConcernLevel::None);
        assert!(assessment.measurements.bmi.is_none());
    }

    #[test]
    fn test_weight_at_p3_is_low() {
        let assessment = assess_growth(12.0, Gender::Male, &weight_only(7.7)).unwrap();
        let weight = assessment.measurements.weight.unwrap();
        assert_eq!(weight.percentile, 3.0);
        assert_eq!(weight.category, Low);
        assert_eq!(assessment.concern_level, ConcernLevel::Mild);
    }

    #[test]
    fn test_bmi_present_only_with_weight_and_height() {
        let set = MeasurementSet {
            weight: Some(9.6),
            height: Some(76.1),
            head_circumference: None,
        };
        let assessment = assess_growth(12.0, Gender::Male, &set).unwrap();
        let bmi = assessment.measurements.bmi.unwrap();
        assert_relative_eq!(bmi.value, 16.6, epsilon = 1e-9);
        assert_eq!(assessment.measurements.len(), 3);

        let no_bmi = MeasurementSet {
            height: Some(76.1),
            head_circumference: Some(46.0),
            ..Default::default()
        };
        let assessment = assess_growth(12.0, Gender::Male, &no_bmi).unwrap();
        assert!(assessment.measurements.bmi.is_none());
    }

    #[test]
    fn test_female_tables_used_for_female() {
        // 8.9 kg is the girls' 12-month median but below the boys' median
        let girl = assess_growth(12.0, Gender::Female, &weight_only(8.9)).unwrap();
        let boy = assess_growth(12.0, Gender::Male, &weight_only(8.9)).unwrap();
        assert_eq!(girl.measurements.weight.unwrap().percentile, 50.0);
        assert!(boy.measurements.weight.unwrap().percentile < 50.0);
    }

    #[test]
    fn test_two_low_measurements_are_moderate() {
        // Boys 12 months: weight p3..p15 = 7.7..8.4, height p3..p15 = 71.0..73.2
        let set = MeasurementSet {
            weight: Some(8.0),
            height: None,
            head_circumference: Some(45.5),
        };
        let assessment = assess_growth(12.0, Gender::Male, &set).unwrap();
        assert_eq!(assessment.measurements.weight.unwrap().category, Low);
        assert_eq!(assessment.measurements.head_circumference.unwrap().category, Low);
        assert_eq!(assessment.concern_level, ConcernLevel::Moderate);
        assert!(assessment
            .overall_assessment
            .contains("underweight, small head circumference"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs: Vec<GrowthInput> = [7.7, 9.6, 12.0, 8.0]
            .iter()
            .map(|&w| GrowthInput {
                age_months: 12.0,
                gender: Gender::Male,
                measurements: weight_only(w),
            })
            .chain(std::iter::once(GrowthInput {
                age_months: 12.0,
                gender: Gender::Male,
                measurements: MeasurementSet::default(),
            }))
            .collect();

        let results = assess_growth_batch(&inputs);
        assert_eq!(results.len(), 5);
        for (input, result) in inputs.iter().zip(&results).take(4) {
            let assessment = result.as_ref().unwrap();
            assert_eq!(
                assessment.measurements.weight.unwrap().value,
                input.measurements.weight.unwrap()
            );
        }
        assert_eq!(results[4], Err(GrowthError::NoMeasurements));
    }

    #[test]
    fn test_serialized_shape_uses_camel_case_and_skips_missing() {
        let assessment = assess_growth(12.0, Gender::Male, &weight_only(9.6)).unwrap();
        let json = serde_json::to_value(&assessment).unwrap();
        assert!(json["measurements"]["weight"].is_object());
        assert!(json["measurements"].get("height").is_none());
        assert!(json["measurements"].get("bmi").is_none());
        assert_eq!(json["concernLevel"], "none");
        assert!(json["overallAssessment"].is_string());
        assert_eq!(json["measurements"]["weight"]["category"], "normal");
    }
}
