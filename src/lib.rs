//! Growth Scorer Rust Implementation
//!
//! Child growth percentiles against per-gender reference curves, plus a
//! standalone adult-height predictor.
//!
//! Structure:
//! - `reference/`: Embedded age → percentile-anchor tables and gender resolution
//! - `growth/`: Interpolation, percentile estimation, classification, assessment
//! - `height/`: Unit conversion and the two prediction methods
//! - `validation`: Wire request records and bound checks
//! - `config`: Environment-driven runtime settings
//! - `api_server`: Axum HTTP surface (feature `api`)
//!
//! All calculations are pure functions over `static` data and are safe to call
//! concurrently.

pub mod error;
pub mod reference;
pub mod growth;
pub mod height;
pub mod validation;
pub mod config;
pub mod utils;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{GrowthError, Result};
pub use reference::{Gender, GenderFallback, Metric, PercentileAnchors};
pub use growth::{
    assess_growth, assess_growth_batch, check_weight, ConcernLevel, GrowthAssessment,
    GrowthCategory, GrowthInput, MeasurementResult, MeasurementSet,
};
pub use height::{predict_height, HeightPredictionInput, HeightPredictionResult, PredictionMethod};
pub use config::AppConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
