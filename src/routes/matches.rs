use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ErrorResponse, HealthResponse, MatchVendorsRequest, MatchVendorsResponse,
    RecommendDemandsRequest, RecommendDemandsResponse,
};
use crate::routes::AppState;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/demands/match", web::post().to(match_vendors))
        .route("/vendors/recommended-demands", web::post().to(recommended_demands));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Resolve a validated `top_k` against the configured default and cap
fn resolve_top_k(requested: Option<i64>, default: usize, max: usize) -> usize {
    requested
        .and_then(|k| usize::try_from(k).ok())
        .unwrap_or(default)
        .min(max)
}

/// Match vendors endpoint
///
/// POST /api/v1/demands/match
///
/// Request body:
/// ```json
/// {
///   "demand": { "title": "string", "industry_tags": ["string"], "budget_max": 300000 },
///   "candidates": [{ "id": 1, "name": "string", "enterprise_type": "supply", "status": "verified" }],
///   "top_k": 5
/// }
/// ```
async fn match_vendors(
    state: web::Data<AppState>,
    req: web::Json<MatchVendorsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match_vendors request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    let top_k = resolve_top_k(
        req.top_k,
        state.matching.default_vendor_top_k,
        state.matching.max_top_k,
    );

    tracing::info!(
        "Matching demand {:?} against {} candidates, top_k: {}",
        req.demand.title,
        req.candidates.len(),
        top_k
    );

    let matches = state.matcher.match_vendors(&req.demand, &req.candidates, top_k);

    tracing::info!(
        "Returning {} vendor matches (from {} candidates)",
        matches.len(),
        req.candidates.len()
    );

    HttpResponse::Ok().json(MatchVendorsResponse {
        run_id: uuid::Uuid::new_v4().to_string(),
        matches,
        total_candidates: req.candidates.len(),
    })
}

/// Recommended demands endpoint
///
/// POST /api/v1/vendors/recommended-demands
///
/// Only supply-side enterprises may ask for recommendations.
async fn recommended_demands(
    state: web::Data<AppState>,
    req: web::Json<RecommendDemandsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommended_demands request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    let vendor = &req.vendor;
    if !vendor.enterprise_type.can_supply() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Not a supplier".to_string(),
            message: format!("Enterprise {} is not a supply-side enterprise", vendor.id),
            status_code: 400,
        });
    }

    let top_k = resolve_top_k(
        req.top_k,
        state.matching.default_demand_top_k,
        state.matching.max_top_k,
    );

    let recommendations = state
        .matcher
        .match_demands_for_vendor(vendor, &req.candidates, top_k);

    tracing::info!(
        "Returning {} recommended demands for vendor {} (from {} candidates)",
        recommendations.len(),
        vendor.id,
        req.candidates.len()
    );

    HttpResponse::Ok().json(RecommendDemandsResponse {
        run_id: uuid::Uuid::new_v4().to_string(),
        enterprise_id: vendor.id,
        enterprise_name: vendor.name.clone(),
        total: recommendations.len(),
        recommendations,
    })
}
