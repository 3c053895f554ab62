use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{DemandFeatures, DemandRecord, VendorFeatures};

/// Request to evaluate a demand snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateDemandRequest {
    pub demand: DemandFeatures,
}

/// Request to rank vendors for a demand
///
/// `top_k` falls back to the configured default when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchVendorsRequest {
    pub demand: DemandFeatures,
    #[serde(default)]
    pub candidates: Vec<VendorFeatures>,
    #[validate(range(min = 1, max = 50))]
    #[serde(default, alias = "topK")]
    pub top_k: Option<i64>,
}

/// Request to rank open demands for a vendor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendDemandsRequest {
    pub vendor: VendorFeatures,
    #[serde(default)]
    pub candidates: Vec<DemandRecord>,
    #[validate(range(min = 1, max = 50))]
    #[serde(default, alias = "topK")]
    pub top_k: Option<i64>,
}
