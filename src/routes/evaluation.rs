use actix_web::{web, HttpResponse, Responder};
use crate::models::{EvaluateDemandRequest, EvaluateDemandResponse};
use crate::routes::AppState;

/// Configure evaluation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/demands/evaluate", web::post().to(evaluate_demand));
}

/// Evaluate demand endpoint
///
/// POST /api/v1/demands/evaluate
///
/// Request body:
/// ```json
/// {
///   "demand": {
///     "title": "string",
///     "description": "string",
///     "industry_tags": ["string"],
///     "scenario_tags": ["string"],
///     "kpis": [{"name": "string", "target": "string", "metric": "string"}],
///     "budget_min": 100000,
///     "budget_max": 300000,
///     "timeline_start": "2026-01-01",
///     "timeline_end": "2026-06-30",
///     "data_summary": {"types": ["image"], "counts": {"image": 12000}, "labeled_ratio": 0.2},
///     "confidentiality": "internal"
///   }
/// }
/// ```
async fn evaluate_demand(
    state: web::Data<AppState>,
    req: web::Json<EvaluateDemandRequest>,
) -> impl Responder {
    let evaluation = state.evaluator.evaluate_demand(&req.demand);

    tracing::info!(
        "Evaluated demand {:?}: overall={}, risk={:?}, path={:?}",
        req.demand.title,
        evaluation.overall_score,
        evaluation.risk_level,
        evaluation.recommended_path
    );

    HttpResponse::Ok().json(EvaluateDemandResponse {
        run_id: uuid::Uuid::new_v4().to_string(),
        evaluation,
        message: "Demand evaluation completed".to_string(),
        evaluated_at: chrono::Utc::now(),
    })
}
