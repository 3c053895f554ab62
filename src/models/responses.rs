use serde::{Deserialize, Serialize};
use crate::models::domain::{DemandRecommendation, EvaluationResult, MatchResult};

/// Response for the evaluate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateDemandResponse {
    pub run_id: String,
    pub evaluation: EvaluationResult,
    pub message: String,
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
}

/// Response for the vendor matching endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchVendorsResponse {
    pub run_id: String,
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Response for the demand recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendDemandsResponse {
    pub run_id: String,
    pub enterprise_id: u64,
    pub enterprise_name: String,
    pub total: usize,
    pub recommendations: Vec<DemandRecommendation>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
