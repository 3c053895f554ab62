// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Confidentiality, DataSummary, DeliveryPath, DemandFeatures, DemandRecommendation, DemandRecord,
    DemandStatus, EnterpriseStatus, EnterpriseType, EvaluationResult, Kpi, MatchDimension,
    MatchResult, MatchScore, RiskLevel, ScoreBreakdown, VendorFeatures, HOME_REGION,
};
pub use requests::{EvaluateDemandRequest, MatchVendorsRequest, RecommendDemandsRequest};
pub use responses::{
    ErrorResponse, EvaluateDemandResponse, HealthResponse, MatchVendorsResponse,
    RecommendDemandsResponse,
};
