// Axum API Server Module
//
// Purpose: JSON endpoints for growth assessment, weight check and height prediction.
// Handlers are stateless; the shared state is only the immutable runtime config.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::GrowthError;
use crate::growth::{assess_growth, assess_growth_batch, check_weight, GrowthAssessment, WeightCheckResult};
use crate::height::{predict_height, HeightPredictionResult};
use crate::reference::{reference_table, resolve_gender, AgeRow, Metric};
use crate::validation::{GrowthCheckRequest, HeightPredictionRequest, WeightCheckRequest};

/// Upper limit on rows per batch request
pub const MAX_BATCH_ROWS: usize = 1000;

const AVAILABLE_ENDPOINTS: [&str; 6] = [
    "GET /health",
    "POST /api/calculate-growth",
    "POST /api/calculate-weight",
    "POST /api/predict-height",
    "POST /api/growth/batch",
    "GET /api/reference/:metric/:gender",
];

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Calculators
        .route("/api/calculate-growth", post(calculate_growth))
        .route("/api/calculate-weight", post(calculate_weight))
        .route("/api/predict-height", post(predict_height_handler))
        .route("/api/growth/batch", post(calculate_growth_batch))

        // Reference data
        .route("/api/reference/:metric/:gender", get(get_reference_table))

        .fallback(not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(cors)
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn calculate_growth(
    State(state): State<AppState>,
    payload: Result<Json<GrowthCheckRequest>, JsonRejection>,
) -> Result<Json<GrowthAssessment>, AppError> {
    let Json(request) = payload?;
    let input = request.validate(state.config.gender_fallback)?;

    let assessment = assess_growth(input.age_months, input.gender, &input.measurements)?;
    tracing::info!(
        "Growth assessment: {} measurements, concern level {:?}",
        assessment.measurements.len(),
        assessment.concern_level
    );

    Ok(Json(assessment))
}

async fn calculate_weight(
    State(state): State<AppState>,
    payload: Result<Json<WeightCheckRequest>, JsonRejection>,
) -> Result<Json<WeightCheckResult>, AppError> {
    let Json(request) = payload?;
    let input = request.validate(state.config.gender_fallback)?;

    Ok(Json(check_weight(input.age_months, input.gender, input.weight_kg)))
}

async fn predict_height_handler(
    State(state): State<AppState>,
    payload: Result<Json<HeightPredictionRequest>, JsonRejection>,
) -> Result<Json<HeightPredictionResult>, AppError> {
    let Json(request) = payload?;
    let input = request.validate(state.config.gender_fallback)?;

    let result = predict_height(&input);
    tracing::info!(
        "Height prediction: {} cm via {}",
        result.predicted_height,
        result.method_used.display_text()
    );

    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct GrowthBatchRequest {
    pub requests: Vec<GrowthCheckRequest>,
}

/// One batch row: either an assessment or the error for that row
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchRowResult {
    Ok(GrowthAssessment),
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<String>,
    },
}

impl From<GrowthError> for BatchRowResult {
    fn from(err: GrowthError) -> Self {
        BatchRowResult::Error {
            field: err.field().map(str::to_string),
            message: err.to_string(),
        }
    }
}

async fn calculate_growth_batch(
    State(state): State<AppState>,
    payload: Result<Json<GrowthBatchRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(batch) = payload?;
    let rows = batch.requests.len();

    if rows > MAX_BATCH_ROWS {
        return Err(AppError::BadRequest {
            message: format!("Batch too large: {} rows (max {})", rows, MAX_BATCH_ROWS),
            field: Some("requests".to_string()),
        });
    }

    tracing::info!("Assessing growth batch with {} rows", rows);
    let fallback = state.config.gender_fallback;

    // CPU-bound work: run Rayon on the blocking thread pool
    let results = tokio::task::spawn_blocking(move || {
        let validated: Vec<_> = batch
            .requests
            .iter()
            .map(|request| request.validate(fallback))
            .collect();

        let inputs: Vec<_> = validated.iter().filter_map(|v| v.as_ref().ok().copied()).collect();
        let mut assessed = assess_growth_batch(&inputs).into_iter();

        validated
            .into_iter()
            .map(|row| match row {
                Ok(_) => match assessed.next() {
                    Some(Ok(assessment)) => BatchRowResult::Ok(assessment),
                    Some(Err(err)) => err.into(),
                    None => BatchRowResult::Error {
                        message: "Missing batch result".to_string(),
                        field: None,
                    },
                },
                Err(err) => err.into(),
            })
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| AppError::Internal(format!("Rayon task failed: {}", e)))?;

    Ok(Json(serde_json::json!({
        "rows": rows,
        "results": results,
    })))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReferenceTableResponse {
    metric: Metric,
    gender: crate::reference::Gender,
    unit: &'static str,
    ages: Vec<u32>,
    rows: &'static [AgeRow],
}

async fn get_reference_table(
    State(state): State<AppState>,
    Path((metric, gender)): Path<(String, String)>,
) -> Result<Json<ReferenceTableResponse>, AppError> {
    let metric = Metric::parse(&metric)
        .ok_or_else(|| AppError::NotFound(format!("Unknown metric '{}'", metric)))?;
    let gender = resolve_gender(&gender, state.config.gender_fallback)?.gender;

    let table = reference_table(metric, gender);
    Ok(Json(ReferenceTableResponse {
        metric,
        gender,
        unit: metric.unit(),
        ages: table.ages().collect(),
        rows: table.rows(),
    }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not found",
            "availableEndpoints": AVAILABLE_ENDPOINTS,
        })),
    )
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
        field: Option<String>,
    },
    NotFound(String),
    Internal(String),
}

impl From<GrowthError> for AppError {
    fn from(err: GrowthError) -> Self {
        if err.is_bad_input() {
            AppError::BadRequest {
                field: err.field().map(str::to_string),
                message: err.to_string(),
            }
        } else {
            tracing::error!("Reference data error: {}", err);
            AppError::Internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
            field: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::BadRequest { message, field } => {
                let mut body = serde_json::json!({ "error": message });
                if let Some(field) = field {
                    body["field"] = serde_json::Value::String(field);
                }
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg })),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": msg }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
