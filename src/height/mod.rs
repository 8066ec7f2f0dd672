//! Adult Height Predictor
//!
//! Standalone formula-based estimator; does not use the growth reference tables.

pub mod units;
pub mod predictor;

pub use units::{cm_to_feet_label, feet_inches_to_cm};
pub use predictor::{
    predict_height, ConfidenceInterval, HeightPredictionInput, HeightPredictionResult,
    PredictionMethod,
};
