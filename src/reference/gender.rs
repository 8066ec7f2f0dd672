//! Gender resolution
//!
//! Only male and female reference tables exist. An unrecognised gender string
//! either falls back to the male tables (logged) or is rejected, depending on
//! the configured [`GenderFallback`].

use serde::{Deserialize, Serialize};

use super::Gender;
use crate::error::{GrowthError, Result};

/// What to do with a gender string that is neither "male" nor "female"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFallback {
    /// Use the male tables and log a warning
    #[default]
    Male,
    /// Return `GrowthError::UnknownGender`
    Reject,
}

impl GenderFallback {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "default_male" => Some(GenderFallback::Male),
            "reject" | "strict" => Some(GenderFallback::Reject),
            _ => None,
        }
    }
}

/// Outcome of resolving a raw gender string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedGender {
    pub gender: Gender,
    /// True when the male default was applied to an unrecognised value
    pub defaulted: bool,
}

pub fn resolve_gender(raw: &str, fallback: GenderFallback) -> Result<ResolvedGender> {
    if let Some(gender) = Gender::parse(raw) {
        return Ok(ResolvedGender { gender, defaulted: false });
    }

    match fallback {
        GenderFallback::Male => {
            tracing::warn!("Unrecognised gender '{}', using male reference tables", raw);
            Ok(ResolvedGender {
                gender: Gender::Male,
                defaulted: true,
            })
        }
        GenderFallback::Reject => Err(GrowthError::UnknownGender(raw.to_string())),
    }
}
