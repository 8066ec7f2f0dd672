//! Adult height prediction
//!
//! Two methods, selected by the child's age:
//! - 4 years and older: Khamis-Roche regression on current height, weight and
//!   gender-adjusted mid-parental height
//! - under 4 years: percentile tracking against a simple linear growth model,
//!   blended 70/30 with the genetic target height

use serde::{Deserialize, Serialize};

use super::units::cm_to_feet_label;
use crate::reference::Gender;
use crate::utils::format::round_tenth;

/// Age (years) at which the regression method takes over
pub const REGRESSION_MIN_AGE_YEARS: f64 = 4.0;

/// Gender adjustment applied to the parental average (cm)
pub const GENDER_ADJUSTMENT_CM: f64 = 6.5;

// ============================================================================
// Khamis-Roche Coefficients
// ============================================================================

/// predicted = a + b1·height + b2·weight + b3·MPH
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionCoefficients {
    pub a: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
}

pub const MALE_COEFFICIENTS: RegressionCoefficients = RegressionCoefficients {
    a: 22.7,
    b1: 0.78,
    b2: 0.15,
    b3: 0.35,
};

pub const FEMALE_COEFFICIENTS: RegressionCoefficients = RegressionCoefficients {
    a: 25.5,
    b1: 0.75,
    b2: 0.12,
    b3: 0.33,
};

// ============================================================================
// Percentile Tracking Model
// ============================================================================

/// Placeholder growth model for under-4s. These are rough approximations, not
/// reference data; they live together here so they can be replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingModel {
    /// Expected length at birth (cm)
    pub birth_length: f64,
    /// Expected growth per year (cm)
    pub growth_per_year: f64,
    pub adult_mean: f64,
    pub adult_sd: f64,
}

pub const MALE_TRACKING: TrackingModel = TrackingModel {
    birth_length: 50.0,
    growth_per_year: 20.0,
    adult_mean: 175.0,
    adult_sd: 7.0,
};

pub const FEMALE_TRACKING: TrackingModel = TrackingModel {
    birth_length: 49.0,
    growth_per_year: 19.0,
    adult_mean: 162.0,
    adult_sd: 6.0,
};

const TRACKING_PERCENTILE_FLOOR: f64 = 5.0;
const TRACKING_PERCENTILE_CEIL: f64 = 95.0;
/// Percentile points per z unit
const TRACKING_PERCENTILE_PER_SD: f64 = 20.0;
const PROJECTION_WEIGHT: f64 = 0.7;
const GENETIC_WEIGHT: f64 = 0.3;

impl TrackingModel {
    pub fn for_gender(gender: Gender) -> Self {
        match gender {
            Gender::Male => MALE_TRACKING,
            Gender::Female => FEMALE_TRACKING,
        }
    }

    pub fn expected_height(&self, age_years: f64) -> f64 {
        self.birth_length + age_years * self.growth_per_year
    }

    /// Current height percentile, clamped to 5-95
    pub fn current_percentile(&self, height_cm: f64, age_years: f64) -> f64 {
        let expected = self.expected_height(age_years);
        let deviation = (height_cm - expected) / expected;
        (50.0 + deviation * 50.0).clamp(TRACKING_PERCENTILE_FLOOR, TRACKING_PERCENTILE_CEIL)
    }

    /// Adult height if the child keeps the same percentile
    pub fn project_adult(&self, percentile: f64) -> f64 {
        let z = (percentile - 50.0) / TRACKING_PERCENTILE_PER_SD;
        self.adult_mean + z * self.adult_sd
    }
}

// ============================================================================
// Prediction
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionMethod {
    #[serde(rename = "Khamis-Roche Method")]
    KhamisRoche,
    #[serde(rename = "WHO Growth Chart Percentile Tracking")]
    PercentileTracking,
}

impl PredictionMethod {
    pub fn for_age_months(age_months: f64) -> Self {
        if age_months / 12.0 >= REGRESSION_MIN_AGE_YEARS {
            PredictionMethod::KhamisRoche
        } else {
            PredictionMethod::PercentileTracking
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            PredictionMethod::KhamisRoche => "Khamis-Roche Method",
            PredictionMethod::PercentileTracking => "WHO Growth Chart Percentile Tracking",
        }
    }

    /// ± margin of the confidence interval (cm)
    pub fn margin_cm(&self) -> f64 {
        match self {
            PredictionMethod::KhamisRoche => 5.3,
            PredictionMethod::PercentileTracking => 7.5,
        }
    }

    pub fn accuracy(&self) -> &'static str {
        match self {
            PredictionMethod::KhamisRoche => "85-90%",
            PredictionMethod::PercentileTracking => "70-80%",
        }
    }
}

/// Child measurements and parent heights, already in cm / kg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightPredictionInput {
    pub child_age_months: f64,
    pub child_gender: Gender,
    pub child_height_cm: f64,
    pub child_weight_kg: f64,
    pub mother_height_cm: f64,
    pub father_height_cm: f64,
}

impl HeightPredictionInput {
    /// Plain average of the two parents
    pub fn parental_average(&self) -> f64 {
        (self.mother_height_cm + self.father_height_cm) / 2.0
    }

    /// Parental average shifted ±6.5 cm toward the child's gender
    pub fn genetic_target(&self) -> f64 {
        match self.child_gender {
            Gender::Male => self.parental_average() + GENDER_ADJUSTMENT_CM,
            Gender::Female => self.parental_average() - GENDER_ADJUSTMENT_CM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub lower_feet: String,
    pub upper_feet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeightPredictionResult {
    pub predicted_height: f64,
    pub predicted_height_feet: String,
    pub confidence_interval: ConfidenceInterval,
    pub mid_parental_height: f64,
    pub mid_parental_height_feet: String,
    pub genetic_target_height: f64,
    pub mother_height_cm: f64,
    pub father_height_cm: f64,
    pub mother_height_feet: String,
    pub father_height_feet: String,
    pub method_used: PredictionMethod,
    pub accuracy: String,
}

/// Unrounded prediction (cm) for the given method
pub fn raw_prediction(input: &HeightPredictionInput, method: PredictionMethod) -> f64 {
    let years = input.child_age_months / 12.0;

    match method {
        PredictionMethod::KhamisRoche => {
            let c = match input.child_gender {
                Gender::Male => MALE_COEFFICIENTS,
                Gender::Female => FEMALE_COEFFICIENTS,
            };
            c.a + c.b1 * input.child_height_cm
                + c.b2 * input.child_weight_kg
                + c.b3 * input.genetic_target()
        }
        PredictionMethod::PercentileTracking => {
            let model = TrackingModel::for_gender(input.child_gender);
            let percentile = model.current_percentile(input.child_height_cm, years);
            let projected = model.project_adult(percentile);
            projected * PROJECTION_WEIGHT + input.genetic_target() * GENETIC_WEIGHT
        }
    }
}

pub fn predict_height(input: &HeightPredictionInput) -> HeightPredictionResult {
    let method = PredictionMethod::for_age_months(input.child_age_months);
    let predicted = raw_prediction(input, method);
    let margin = method.margin_cm();
    let average = input.parental_average();

    tracing::debug!(
        "Predicted {:.1} cm via {} at {} months",
        predicted,
        method.display_text(),
        input.child_age_months
    );

    HeightPredictionResult {
        predicted_height: round_tenth(predicted),
        predicted_height_feet: cm_to_feet_label(predicted),
        confidence_interval: ConfidenceInterval {
            lower: round_tenth(predicted - margin),
            upper: round_tenth(predicted + margin),
            lower_feet: cm_to_feet_label(predicted - margin),
            upper_feet: cm_to_feet_label(predicted + margin),
        },
        mid_parental_height: round_tenth(average),
        mid_parental_height_feet: cm_to_feet_label(average),
        genetic_target_height: round_tenth(input.genetic_target()),
        mother_height_cm: round_tenth(input.mother_height_cm),
        father_height_cm: round_tenth(input.father_height_cm),
        mother_height_feet: cm_to_feet_label(input.mother_height_cm),
        father_height_feet: cm_to_feet_label(input.father_height_cm),
        method_used: method,
        accuracy: method.accuracy().to_string(),
    }
}
