//! Reference Table Store
//!
//! Per-gender, per-metric growth reference tables mapping age (months) to the
//! five percentile anchors (3rd, 15th, 50th, 85th, 97th).
//!
//! ## Architecture
//! - `tables.rs` - Embedded sample tables (4 metrics × 2 genders)
//! - `store.rs` - `ReferenceTable` view, lookup and the startup assertion pass
//! - `gender.rs` - Gender resolution with an explicit fallback policy
//!
//! Tables are `static` data: immutable, process-wide and safe to read from any
//! number of threads without coordination.

pub mod tables;
pub mod store;
pub mod gender;

use serde::{Deserialize, Serialize};

pub use store::{all_tables, reference_table, validate_reference_tables, ReferenceTable};
pub use gender::{resolve_gender, GenderFallback, ResolvedGender};

/// Growth metric with its own reference curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Weight,
    Height,
    HeadCircumference,
    Bmi,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Weight,
        Metric::Height,
        Metric::HeadCircumference,
        Metric::Bmi,
    ];

    /// Parse a metric name as used in URLs and request bodies
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "weight" => Some(Metric::Weight),
            "height" | "length" => Some(Metric::Height),
            "headcircumference" | "head_circumference" | "head" => Some(Metric::HeadCircumference),
            "bmi" => Some(Metric::Bmi),
            _ => None,
        }
    }

    /// Wire name (matches the JSON field name in assessments)
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Weight => "weight",
            Metric::Height => "height",
            Metric::HeadCircumference => "headCircumference",
            Metric::Bmi => "bmi",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Weight => "kg",
            Metric::Height | Metric::HeadCircumference => "cm",
            Metric::Bmi => "kg/m²",
        }
    }
}

/// Child gender; selects which reference curve applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Strict parse: only "male" / "female" (case-insensitive)
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("male") {
            Some(Gender::Male)
        } else if raw.eq_ignore_ascii_case("female") {
            Some(Gender::Female)
        } else {
            None
        }
    }

    /// Noun used in report text
    pub fn child_noun(&self) -> &'static str {
        match self {
            Gender::Male => "boy",
            Gender::Female => "girl",
        }
    }
}

/// Values of the five named percentile curves at one age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileAnchors {
    pub p3: f64,
    pub p15: f64,
    pub p50: f64,
    pub p85: f64,
    pub p97: f64,
}

impl PercentileAnchors {
    pub const fn new(p3: f64, p15: f64, p50: f64, p85: f64, p97: f64) -> Self {
        Self { p3, p15, p50, p85, p97 }
    }

    /// Anchor values in ascending percentile order
    pub fn values(&self) -> [f64; 5] {
        [self.p3, self.p15, self.p50, self.p85, self.p97]
    }

    /// True when p3 <= p15 <= p50 <= p85 <= p97 and every value is finite
    pub fn is_monotonic(&self) -> bool {
        let values = self.values();
        values.iter().all(|v| v.is_finite()) && values.windows(2).all(|w| w[0] <= w[1])
    }
}

/// One table row: the anchors at an exact age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRow {
    pub age_months: u32,
    #[serde(flatten)]
    pub anchors: PercentileAnchors,
}

impl AgeRow {
    pub const fn new(age_months: u32, p3: f64, p15: f64, p50: f64, p85: f64, p97: f64) -> Self {
        Self {
            age_months,
            anchors: PercentileAnchors::new(p3, p15, p50, p85, p97),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parse_accepts_wire_names() {
        for metric in Metric::ALL {
            assert_eq!(Metric::parse(metric.key()), Some(metric));
        }
        assert_eq!(Metric::parse("head_circumference"), Some(Metric::HeadCircumference));
        assert_eq!(Metric::parse("shoe_size"), None);
    }

    #[test]
    fn test_gender_parse_is_strict() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse(" Female "), Some(Gender::Female));
        assert_eq!(Gender::parse("m"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn test_anchor_monotonicity() {
        assert!(PercentileAnchors::new(1.0, 2.0, 3.0, 4.0, 5.0).is_monotonic());
        assert!(PercentileAnchors::new(1.0, 1.0, 3.0, 4.0, 5.0).is_monotonic());
        assert!(!PercentileAnchors::new(1.0, 2.0, 1.5, 4.0, 5.0).is_monotonic());
        assert!(!PercentileAnchors::new(1.0, 2.0, f64::NAN, 4.0, 5.0).is_monotonic());
    }
}
