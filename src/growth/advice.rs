//! Advice Generation
//!
//! Report text for growth assessments: per-measurement flag labels, the
//! overall assessment sentence and the concern-level recommendations.

use super::assessment::ConcernLevel;
use super::classify::GrowthCategory;
use crate::reference::{Gender, Metric};
use crate::utils::format::age_label;

// ============================================================================
// Flag Labels
// ============================================================================

/// Phrase describing one measurement's category, e.g. "underweight", "tall height"
pub fn flag_label(metric: Metric, category: GrowthCategory) -> &'static str {
    use GrowthCategory::*;

    match metric {
        Metric::Weight => match category {
            SeverelyLow => "severely underweight",
            Low => "underweight",
            Normal => "healthy weight",
            High => "overweight",
            SeverelyHigh => "severely overweight",
        },
        Metric::Height => match category {
            SeverelyLow => "very short height",
            Low => "short height",
            Normal => "normal height",
            High => "tall height",
            SeverelyHigh => "very tall height",
        },
        Metric::HeadCircumference => match category {
            SeverelyLow => "very small head circumference",
            Low => "small head circumference",
            Normal => "normal head circumference",
            High => "large head circumference",
            SeverelyHigh => "very large head circumference",
        },
        Metric::Bmi => match category {
            SeverelyLow => "very low BMI",
            Low => "low BMI",
            Normal => "healthy BMI",
            High => "high BMI",
            SeverelyHigh => "very high BMI",
        },
    }
}

// ============================================================================
// Assessment Text
// ============================================================================

/// Overall assessment sentence built from the concern and healthy flag labels
pub fn overall_assessment(
    age_months: f64,
    gender: Gender,
    concerns: &[&str],
    healthy: &[&str],
) -> String {
    let age = age_label(age_months);
    let child = gender.child_noun();

    if concerns.is_empty() && !healthy.is_empty() {
        format!(
            "Excellent! Your {}-old {} shows {}. All measured growth parameters are within healthy ranges according to WHO standards.",
            age,
            child,
            healthy.join(", ")
        )
    } else if !concerns.is_empty() {
        let however = if healthy.is_empty() {
            String::new()
        } else {
            format!("However, {} are normal. ", healthy.join(", "))
        };
        format!(
            "Your {}-old {} shows {}. {}Consider discussing these results with your pediatrician.",
            age,
            child,
            concerns.join(", "),
            however
        )
    } else {
        format!("Growth assessment completed for your {}-old {}.", age, child)
    }
}

/// Ordered recommendations: two concern-specific lines, then two general ones
pub fn recommendations(level: ConcernLevel) -> Vec<String> {
    let specific: [&str; 2] = match level {
        ConcernLevel::High => [
            "Schedule an immediate consultation with your pediatrician for comprehensive evaluation",
            "Bring these growth measurements to discuss detailed care plan",
        ],
        ConcernLevel::Moderate => [
            "Schedule a pediatric consultation within the next few weeks",
            "Monitor growth closely and track changes over time",
        ],
        ConcernLevel::Mild => [
            "Discuss these results at your next pediatric checkup",
            "Continue monitoring growth with regular measurements",
        ],
        ConcernLevel::None => [
            "Continue with regular pediatric checkups and healthy lifestyle",
            "Keep tracking growth to ensure continued healthy development",
        ],
    };

    specific
        .iter()
        .chain(GENERAL_RECOMMENDATIONS.iter())
        .map(|s| s.to_string())
        .collect()
}

const GENERAL_RECOMMENDATIONS: [&str; 2] = [
    "Remember that children grow at different rates - these are general guidelines",
    "Always consult healthcare professionals for personalized medical advice",
];

// ============================================================================
// Weight Check Text
// ============================================================================

/// Category-specific recommendation for a single weight check
pub fn weight_recommendation(
    age_months: f64,
    gender: Gender,
    weight_kg: f64,
    percentile: f64,
    category: GrowthCategory,
) -> String {
    let age = age_label(age_months);
    let child = gender.child_noun();

    match category {
        GrowthCategory::SeverelyLow => format!(
            "Your {}-old {} weighs {} kg, which is below the 3rd percentile ({:.1}th percentile). This indicates severe underweight. Please consult your pediatrician immediately for proper evaluation and guidance.",
            age, child, weight_kg, percentile
        ),
        GrowthCategory::Low => format!(
            "Your {}-old {} weighs {} kg, which is in the {:.1}th percentile. This indicates mild underweight. Consider discussing nutrition and growth with your pediatrician.",
            age, child, weight_kg, percentile
        ),
        GrowthCategory::Normal => format!(
            "Great news! Your {}-old {} weighs {} kg, which is in the {:.1}th percentile - perfectly within the healthy range. Keep up the good work with balanced nutrition and healthy habits!",
            age, child, weight_kg, percentile
        ),
        GrowthCategory::High => format!(
            "Your {}-old {} weighs {} kg, which is in the {:.1}th percentile. This indicates overweight. Consider discussing healthy diet and activity options with your pediatrician.",
            age, child, weight_kg, percentile
        ),
        GrowthCategory::SeverelyHigh => format!(
            "Your {}-old {} weighs {} kg, which is above the 97th percentile ({:.1}th percentile). This indicates severe overweight. Please consult your pediatrician for comprehensive evaluation and guidance.",
            age, child, weight_kg, percentile
        ),
    }
}
