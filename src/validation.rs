//! Request validation
//!
//! Request records as they arrive over the wire (camelCase JSON). Each
//! `validate` checks bounds, resolves the gender string and converts units,
//! producing the typed input the calculators expect. Errors name the field.

use serde::{Deserialize, Serialize};

use crate::error::{GrowthError, Result};
use crate::growth::{GrowthInput, MeasurementSet};
use crate::height::{feet_inches_to_cm, HeightPredictionInput};
use crate::reference::{resolve_gender, Gender, GenderFallback};

/// Inclusive bound for one numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl FieldBounds {
    const fn new(field: &'static str, min: f64, max: f64, unit: &'static str) -> Self {
        Self { field, min, max, unit }
    }

    pub fn check(&self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(GrowthError::invalid(self.field, "must be a finite number"));
        }
        if value < self.min || value > self.max {
            return Err(GrowthError::invalid(
                self.field,
                format!("must be between {}-{} {}", self.min, self.max, self.unit),
            ));
        }
        Ok(value)
    }

    fn check_optional(&self, value: Option<f64>) -> Result<Option<f64>> {
        value.map(|v| self.check(v)).transpose()
    }
}

// ============================================================================
// Bounds
// ============================================================================

pub const AGE_MONTHS: FieldBounds = FieldBounds::new("age", 0.0, 60.0, "months");
pub const WEIGHT_KG: FieldBounds = FieldBounds::new("weight", 1.0, 50.0, "kg");
pub const HEIGHT_CM: FieldBounds = FieldBounds::new("height", 45.0, 120.0, "cm");
pub const HEAD_CIRCUMFERENCE_CM: FieldBounds =
    FieldBounds::new("headCircumference", 30.0, 55.0, "cm");

pub const CHILD_AGE_MONTHS: FieldBounds = FieldBounds::new("childAgeMonths", 6.0, 210.0, "months");
pub const CHILD_HEIGHT_CM: FieldBounds =
    FieldBounds::new("childCurrentHeight", 45.0, 180.0, "cm");
pub const CHILD_WEIGHT_KG: FieldBounds = FieldBounds::new("childWeight", 3.0, 80.0, "kg");
pub const MOTHER_FEET: FieldBounds = FieldBounds::new("motherFeet", 4.0, 8.0, "feet");
pub const MOTHER_INCHES: FieldBounds = FieldBounds::new("motherInches", 0.0, 11.0, "inches");
pub const FATHER_FEET: FieldBounds = FieldBounds::new("fatherFeet", 4.0, 8.0, "feet");
pub const FATHER_INCHES: FieldBounds = FieldBounds::new("fatherInches", 0.0, 11.0, "inches");

fn gender_field(raw: &str, field: &'static str, fallback: GenderFallback) -> Result<Gender> {
    resolve_gender(raw, fallback)
        .map(|resolved| resolved.gender)
        .map_err(|err| match err {
            GrowthError::UnknownGender(value) => GrowthError::invalid(
                field,
                format!("unknown gender '{}' (expected 'male' or 'female')", value),
            ),
            other => other,
        })
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthCheckRequest {
    pub age: f64,
    pub gender: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub head_circumference: Option<f64>,
}

impl GrowthCheckRequest {
    pub fn validate(&self, fallback: GenderFallback) -> Result<GrowthInput> {
        let age_months = AGE_MONTHS.check(self.age)?;
        let gender = gender_field(&self.gender, "gender", fallback)?;

        let measurements = MeasurementSet {
            weight: WEIGHT_KG.check_optional(self.weight)?,
            height: HEIGHT_CM.check_optional(self.height)?,
            head_circumference: HEAD_CIRCUMFERENCE_CM.check_optional(self.head_circumference)?,
        };
        if measurements.is_empty() {
            return Err(GrowthError::NoMeasurements);
        }

        Ok(GrowthInput {
            age_months,
            gender,
            measurements,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightCheckRequest {
    pub age: f64,
    pub gender: String,
    pub weight: f64,
}

/// Validated weight check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightCheckInput {
    pub age_months: f64,
    pub gender: Gender,
    pub weight_kg: f64,
}

impl WeightCheckRequest {
    pub fn validate(&self, fallback: GenderFallback) -> Result<WeightCheckInput> {
        Ok(WeightCheckInput {
            age_months: AGE_MONTHS.check(self.age)?,
            gender: gender_field(&self.gender, "gender", fallback)?,
            weight_kg: WEIGHT_KG.check(self.weight)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeightPredictionRequest {
    pub child_age_months: f64,
    pub child_gender: String,
    pub child_current_height: f64,
    pub child_weight: f64,
    pub mother_feet: f64,
    #[serde(default)]
    pub mother_inches: f64,
    pub father_feet: f64,
    #[serde(default)]
    pub father_inches: f64,
}

impl HeightPredictionRequest {
    pub fn validate(&self, fallback: GenderFallback) -> Result<HeightPredictionInput> {
        let child_age_months = CHILD_AGE_MONTHS.check(self.child_age_months)?;
        let child_gender = gender_field(&self.child_gender, "childGender", fallback)?;
        let child_height_cm = CHILD_HEIGHT_CM.check(self.child_current_height)?;
        let child_weight_kg = CHILD_WEIGHT_KG.check(self.child_weight)?;

        let mother_height_cm = feet_inches_to_cm(
            MOTHER_FEET.check(self.mother_feet)?,
            MOTHER_INCHES.check(self.mother_inches)?,
        );
        let father_height_cm = feet_inches_to_cm(
            FATHER_FEET.check(self.father_feet)?,
            FATHER_INCHES.check(self.father_inches)?,
        );

        Ok(HeightPredictionInput {
            child_age_months,
            child_gender,
            child_height_cm,
            child_weight_kg,
            mother_height_cm,
            father_height_cm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn growth_request(json: serde_json::Value) -> GrowthCheckRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_growth_request_accepts_subset() {
        let request = growth_request(serde_json::json!({
            "age": 12, "gender": "female", "headCircumference": 45.0
        }));
        let input = request.validate(GenderFallback::Reject).unwrap();
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.measurements.head_circumference, Some(45.0));
        assert!(input.measurements.weight.is_none());
    }

    #[test]
    fn test_growth_request_requires_a_measurement() {
        let request = growth_request(serde_json::json!({"age": 12, "gender": "male", "weight": null}));
        let err = request.validate(GenderFallback::Male).unwrap_err();
        assert_eq!(err, GrowthError::NoMeasurements);
        assert_eq!(err.field(), Some("weight"));
    }

    #[test]
    fn test_out_of_range_names_field() {
        let request = growth_request(serde_json::json!({"age": 72, "gender": "male", "weight": 9.0}));
        assert_eq!(request.validate(GenderFallback::Male).unwrap_err().field(), Some("age"));

        let request = growth_request(serde_json::json!({"age": 12, "gender": "male", "height": 130}));
        let err = request.validate(GenderFallback::Male).unwrap_err();
        assert_eq!(err.field(), Some("height"));
        assert!(err.to_string().contains("45-120 cm"));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(AGE_MONTHS.check(0.0).is_ok());
        assert!(AGE_MONTHS.check(60.0).is_ok());
        assert!(WEIGHT_KG.check(0.99).is_err());
        assert!(WEIGHT_KG.check(f64::NAN).is_err());
        assert!(HEAD_CIRCUMFERENCE_CM.check(f64::INFINITY).is_err());
    }

    #[test]
    fn test_unknown_gender_follows_fallback() {
        let request = WeightCheckRequest {
            age: 12.0,
            gender: "other".to_string(),
            weight: 9.6,
        };
        assert_eq!(request.validate(GenderFallback::Male).unwrap().gender, Gender::Male);
        let err = request.validate(GenderFallback::Reject).unwrap_err();
        assert_eq!(err.field(), Some("gender"));
    }

    #[test]
    fn test_height_request_converts_parent_heights() {
        let request: HeightPredictionRequest = serde_json::from_value(serde_json::json!({
            "childAgeMonths": 60, "childGender": "male", "childCurrentHeight": 110,
            "childWeight": 18, "motherFeet": 5, "motherInches": 4,
            "fatherFeet": 5, "fatherInches": 10
        }))
        .unwrap();
        let input = request.validate(GenderFallback::Reject).unwrap();
        assert_eq!(input.mother_height_cm, 162.6);
        assert_eq!(input.father_height_cm, 177.8);
    }

    #[test]
    fn test_height_request_bounds() {
        let mut request = HeightPredictionRequest {
            child_age_months: 60.0,
            child_gender: "female".to_string(),
            child_current_height: 110.0,
            child_weight: 18.0,
            mother_feet: 5.0,
            mother_inches: 12.0,
            father_feet: 6.0,
            father_inches: 0.0,
        };
        assert_eq!(request.validate(GenderFallback::Male).unwrap_err().field(), Some("motherInches"));

        request.mother_inches = 0.0;
        request.child_age_months = 3.0;
        assert_eq!(
            request.validate(GenderFallback::Male).unwrap_err().field(),
            Some("childAgeMonths")
        );

        request.child_age_months = 60.0;
        request.child_gender = "x".to_string();
        assert_eq!(
            request.validate(GenderFallback::Reject).unwrap_err().field(),
            Some("childGender")
        );
    }
}
