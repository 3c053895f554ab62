use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Region string the platform treats as "local"
pub const HOME_REGION: &str = "重庆";

/// Confidentiality level of a demand, ordered from least to most restricted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Confidentiality {
    Public,
    #[default]
    Internal,
    Confidential,
    Secret,
}

impl Confidentiality {
    /// Confidential and secret demands narrow the vendor pool
    pub fn is_restricted(self) -> bool {
        self >= Confidentiality::Confidential
    }
}

/// Demand lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DemandStatus {
    #[default]
    Draft,
    Submitted,
    Evaluating,
    Evaluated,
    Matching,
    Matched,
    InProgress,
    Completed,
    Closed,
}

impl DemandStatus {
    /// Published demands that vendors may be recommended
    pub fn is_open_for_matching(self) -> bool {
        matches!(
            self,
            DemandStatus::Submitted | DemandStatus::Evaluated | DemandStatus::Matched
        )
    }
}

/// Role an enterprise plays on the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnterpriseType {
    #[default]
    Demand,
    Supply,
    #[serde(alias = "dual")]
    Both,
}

impl EnterpriseType {
    pub fn can_supply(self) -> bool {
        matches!(self, EnterpriseType::Supply | EnterpriseType::Both)
    }
}

/// Verification state of an enterprise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnterpriseStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
    Suspended,
}

/// Success metric declared on a demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub name: String,
    pub target: String,
    pub metric: String,
}

/// Description of the training data a demand brings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DataSummary {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub counts: HashMap<String, u64>,
    #[serde(default)]
    pub labeled_ratio: f64,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default)]
    pub health_score: Option<f64>,
}

impl DataSummary {
    pub fn total_count(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn distinct_types(&self) -> usize {
        self.types.iter().collect::<BTreeSet<_>>().len()
    }
}

/// `null` and `{}` both mean no summary was provided
fn deserialize_data_summary<'de, D>(deserializer: D) -> Result<Option<DataSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Map<String, serde_json::Value>>::deserialize(deserializer)? {
        Some(fields) if !fields.is_empty() => serde_json::from_value(serde_json::Value::Object(fields))
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// Demand-side input to both engines
///
/// A demand without a `location` is taken to be in the matching engine's home region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DemandFeatures {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry_tags: Vec<String>,
    #[serde(default)]
    pub scenario_tags: Vec<String>,
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub budget_min: Option<f64>,
    #[serde(default)]
    pub budget_max: Option<f64>,
    #[serde(default)]
    pub timeline_start: Option<NaiveDate>,
    #[serde(default)]
    pub timeline_end: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_data_summary")]
    pub data_summary: Option<DataSummary>,
    #[serde(default)]
    pub confidentiality: Confidentiality,
    #[serde(default)]
    pub location: Option<String>,
}

impl DemandFeatures {
    pub fn declared_data(&self) -> Option<&DataSummary> {
        self.data_summary.as_ref()
    }

    /// Upper budget bound, if a positive one was declared
    pub fn declared_budget_max(&self) -> Option<f64> {
        self.budget_max.filter(|&b| b > 0.0)
    }

    pub fn declared_budget_min(&self) -> Option<f64> {
        self.budget_min.filter(|&b| b > 0.0)
    }

    pub fn labeled_ratio(&self) -> f64 {
        self.declared_data().map_or(0.0, |summary| summary.labeled_ratio)
    }

    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }
}

/// Demand as held by the storage collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub id: u64,
    #[serde(default)]
    pub enterprise_id: u64,
    #[serde(default)]
    pub status: DemandStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub features: DemandFeatures,
}

fn default_credit_score() -> f64 {
    80.0
}

/// Vendor-side input to the matching engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorFeatures {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enterprise_type: EnterpriseType,
    #[serde(default)]
    pub status: EnterpriseStatus,
    #[serde(default)]
    pub industry_tags: Vec<String>,
    #[serde(default)]
    pub ai_capabilities: Vec<String>,
    #[serde(default = "default_credit_score")]
    pub credit_score: f64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl VendorFeatures {
    pub fn verified(&self) -> bool {
        self.status == EnterpriseStatus::Verified
    }
}

/// Risk classification of a demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Recommended engagement model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryPath {
    Poc,
    Pilot,
    Direct,
}

/// Feasibility assessment attached to a demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub feasibility_score: f64,
    pub readiness_score: f64,
    pub data_health_score: f64,
    pub overall_score: f64,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub recommended_path: DeliveryPath,
    pub confidence: f64,
    pub notes: Vec<String>,
}

/// Per-dimension match scores, each on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreBreakdown {
    pub industry_match: f64,
    pub semantic_similarity: f64,
    pub success_rate: f64,
    pub budget_match: f64,
    pub geo_proximity: f64,
    pub credit_score: f64,
}

impl ScoreBreakdown {
    /// Dimensions in their fixed reporting order
    pub fn dimensions(&self) -> [(MatchDimension, f64); 6] {
        [
            (MatchDimension::IndustryMatch, self.industry_match),
            (MatchDimension::SemanticSimilarity, self.semantic_similarity),
            (MatchDimension::SuccessRate, self.success_rate),
            (MatchDimension::BudgetMatch, self.budget_match),
            (MatchDimension::GeoProximity, self.geo_proximity),
            (MatchDimension::CreditScore, self.credit_score),
        ]
    }
}

/// The six weighted matching dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDimension {
    IndustryMatch,
    SemanticSimilarity,
    SuccessRate,
    BudgetMatch,
    GeoProximity,
    CreditScore,
}

impl MatchDimension {
    /// Human-readable reason used when the dimension scores well
    pub fn reason(self) -> &'static str {
        match self {
            MatchDimension::IndustryMatch => "Extensive industry experience",
            MatchDimension::SemanticSimilarity => "Technical capabilities match the scenario",
            MatchDimension::SuccessRate => "High historical success rate",
            MatchDimension::BudgetMatch => "Budget range fits",
            MatchDimension::GeoProximity => "Convenient location",
            MatchDimension::CreditScore => "Excellent credit rating",
        }
    }
}

/// Score block shared by both match directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub total_score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub reasons: Vec<String>,
}

/// A vendor ranked against a demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub vendor_id: u64,
    pub vendor_name: String,
    #[serde(flatten)]
    pub score: MatchScore,
    pub credit_score: f64,
    pub ai_capabilities: Vec<String>,
    pub contact_email: Option<String>,
}

/// A demand ranked for a vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRecommendation {
    pub demand_id: u64,
    pub demand_title: String,
    pub demand_description: String,
    pub enterprise_id: u64,
    pub industry_tags: Vec<String>,
    pub scenario_tags: Vec<String>,
    pub budget_range: String,
    pub status: DemandStatus,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub score: MatchScore,
}
