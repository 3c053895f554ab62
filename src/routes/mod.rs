// Route exports
pub mod evaluation;
pub mod matches;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use std::sync::Arc;
use crate::config::{MatchingSettings, Settings};
use crate::core::{CreditTierEstimator, EvaluationEngine, MatchWeights, MatchingEngine, OverallWeights, ScoringError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub evaluator: EvaluationEngine,
    pub matcher: MatchingEngine,
    pub matching: MatchingSettings,
}

impl AppState {
    /// Build both engines from settings, rejecting malformed weights or tables
    pub fn from_settings(settings: &Settings) -> Result<Self, ScoringError> {
        let evaluator = EvaluationEngine::new(
            settings.evaluation.tables(),
            OverallWeights::from(&settings.evaluation.weights),
        )?;

        let matcher = MatchingEngine::new(
            MatchWeights::from(&settings.scoring.weights),
            Arc::new(CreditTierEstimator),
            settings.matching.home_region.clone(),
        )?;

        Ok(Self {
            evaluator,
            matcher,
            matching: settings.matching.clone(),
        })
    }
}

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Register shared state, the JSON payload error handler and all routes
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .configure(configure_routes);
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(evaluation::configure)
            .configure(matches::configure),
    );
}
