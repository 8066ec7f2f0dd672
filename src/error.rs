//! Error types for the growth calculators.

use crate::reference::{Gender, Metric};

/// Errors surfaced by validation, the assessment aggregator and the
/// reference-table assertion pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrowthError {
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("At least one valid measurement required")]
    NoMeasurements,

    #[error("Unknown gender '{0}' (expected 'male' or 'female')")]
    UnknownGender(String),

    #[error("Malformed {metric:?}/{gender:?} reference table: {reason}")]
    MalformedTable {
        metric: Metric,
        gender: Gender,
        reason: String,
    },
}

impl GrowthError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        GrowthError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Field the caller should highlight, if the error is about a specific input
    pub fn field(&self) -> Option<&str> {
        match self {
            GrowthError::InvalidInput { field, .. } => Some(field),
            // Reported against the first optional measurement, like the form does
            GrowthError::NoMeasurements => Some("weight"),
            GrowthError::UnknownGender(_) => Some("gender"),
            GrowthError::MalformedTable { .. } => None,
        }
    }

    /// True for errors caused by caller input rather than bad reference data
    pub fn is_bad_input(&self) -> bool {
        !matches!(self, GrowthError::MalformedTable { .. })
    }
}

pub type Result<T> = std::result::Result<T, GrowthError>;
