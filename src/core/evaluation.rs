use std::sync::Arc;
use crate::core::{
    error::ScoringError,
    scoring::round2,
    weights::{EvaluationTables, OverallWeights},
};
use crate::models::{DataSummary, DeliveryPath, DemandFeatures, EvaluationResult, RiskLevel};

/// Description length above which a demand counts as well specified
const DETAILED_DESCRIPTION_CHARS: usize = 100;

/// Budget below which a full delivery is considered at risk
const MIN_DELIVERY_BUDGET: f64 = 100_000.0;

/// Rule-based feasibility evaluator for demands
///
/// Stateless apart from its immutable tables; cloning is cheap and every
/// evaluation depends only on the demand passed in.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    tables: Arc<EvaluationTables>,
    weights: OverallWeights,
}

impl EvaluationEngine {
    pub fn new(tables: EvaluationTables, weights: OverallWeights) -> Result<Self, ScoringError> {
        tables.validate()?;
        weights.validate()?;
        Ok(Self {
            tables: Arc::new(tables),
            weights,
        })
    }

    pub fn with_defaults() -> Self {
        Self {
            tables: Arc::new(EvaluationTables::default()),
            weights: OverallWeights::default(),
        }
    }

    pub fn tables(&self) -> &EvaluationTables {
        &self.tables
    }

    /// Assess a demand's feasibility, risk and recommended delivery path
    pub fn evaluate_demand(&self, demand: &DemandFeatures) -> EvaluationResult {
        let data_health = data_health_score(demand.declared_data());
        let feasibility = self.technical_feasibility(demand);
        let readiness = readiness_score(demand, data_health);
        let (risk_level, risk_factors) = assess_risks(demand, data_health);
        let recommended_path = recommend_path(feasibility, readiness, data_health);

        let overall = feasibility * self.weights.feasibility
            + readiness * self.weights.readiness
            + data_health * self.weights.data_health;

        let notes = self.recommendations(demand, data_health, feasibility, readiness);

        EvaluationResult {
            feasibility_score: round2(feasibility),
            readiness_score: round2(readiness),
            data_health_score: round2(data_health),
            overall_score: round2(overall.clamp(0.0, 100.0)),
            risk_level,
            risk_factors,
            recommended_path,
            confidence: round2(confidence(demand)),
            notes,
        }
    }

    /// Technical feasibility (0-100) from the first industry and scenario tag
    pub fn technical_feasibility(&self, demand: &DemandFeatures) -> f64 {
        let mut score: f64 = 60.0;

        if let Some(industry) = demand.industry_tags.first() {
            score += self.tables.maturity(industry) * 20.0;
        }

        if let Some(scenario) = demand.scenario_tags.first() {
            score += self.tables.difficulty(scenario) * 20.0;
        }

        score.clamp(0.0, 100.0)
    }

    fn recommendations(
        &self,
        demand: &DemandFeatures,
        data_health: f64,
        feasibility: f64,
        readiness: f64,
    ) -> Vec<String> {
        let mut notes = Vec::new();

        if data_health < 60.0 {
            notes.push("Increase the training sample size to at least 5000 records".to_string());
        }

        if demand.labeled_ratio() < 0.5 {
            notes.push("Raise labeling coverage to at least 50% to improve model training".to_string());
        }

        if readiness < 70.0 {
            if demand.kpis.is_empty() {
                notes.push("Specify concrete KPIs such as target accuracy or recall".to_string());
            }
            if demand.declared_budget_max().is_none() {
                notes.push("Define a budget range so suitable vendors can be matched".to_string());
            }
        }

        if feasibility < 70.0 {
            notes.push("Run a technical pre-study and proof of concept first to reduce risk".to_string());
        }

        if demand.industry_tags.iter().any(|tag| self.tables.is_sensitive(tag)) {
            notes.push("Observe industry compliance requirements and data privacy protection".to_string());
        }

        if notes.is_empty() {
            notes.push("The demand is well prepared and can proceed to vendor matching".to_string());
        }

        notes
    }
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Data health (0-100) from volume, labeling and type diversity
pub fn data_health_score(summary: Option<&DataSummary>) -> f64 {
    let Some(summary) = summary else {
        return 30.0;
    };

    let mut score: f64 = 50.0;

    score += match summary.total_count() {
        n if n >= 10_000 => 20.0,
        n if n >= 5_000 => 15.0,
        n if n >= 1_000 => 10.0,
        n if n >= 100 => 5.0,
        _ => 0.0,
    };

    score += match summary.labeled_ratio {
        r if r >= 0.8 => 20.0,
        r if r >= 0.5 => 15.0,
        r if r >= 0.2 => 10.0,
        r if r > 0.0 => 5.0,
        _ => 0.0,
    };

    score += (summary.distinct_types() as f64 * 5.0).min(10.0);

    score.clamp(0.0, 100.0)
}

/// Readiness (0-100): how well specified and resourced the demand is
pub fn readiness_score(demand: &DemandFeatures, data_health: f64) -> f64 {
    let mut score: f64 = 40.0;

    if demand.description_len() > DETAILED_DESCRIPTION_CHARS {
        score += 15.0;
    }
    if !demand.kpis.is_empty() {
        score += 15.0;
    }
    if demand.declared_budget_min().is_some() && demand.declared_budget_max().is_some() {
        score += 10.0;
    }
    if demand.timeline_start.is_some() && demand.timeline_end.is_some() {
        score += 10.0;
    }

    score += (data_health / 100.0) * 10.0;

    score.clamp(0.0, 100.0)
}

/// Accumulate risk penalties and classify the total
pub fn assess_risks(demand: &DemandFeatures, data_health: f64) -> (RiskLevel, Vec<String>) {
    let mut factors = Vec::new();
    let mut risk_score = 0u32;

    if data_health < 50.0 {
        factors.push("Insufficient or low-quality data samples".to_string());
        risk_score += 30;
    } else if data_health < 70.0 {
        factors.push("Data readiness needs improvement".to_string());
        risk_score += 15;
    }

    if demand.budget_max.unwrap_or(0.0) < MIN_DELIVERY_BUDGET {
        factors.push("Budget may be insufficient for a full project delivery".to_string());
        risk_score += 20;
    }

    if demand.timeline_end.is_none() {
        factors.push("No clear delivery deadline".to_string());
        risk_score += 10;
    }

    if demand.kpis.is_empty() {
        factors.push("No measurable success metric".to_string());
        risk_score += 15;
    }

    if demand.confidentiality.is_restricted() {
        factors.push("High confidentiality may limit the vendor pool".to_string());
        risk_score += 10;
    }

    let level = match risk_score {
        s if s >= 50 => RiskLevel::High,
        s if s >= 25 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    };

    (level, factors)
}

/// Pick the engagement model from the average sub-score
pub fn recommend_path(feasibility: f64, readiness: f64, data_health: f64) -> DeliveryPath {
    let average = (feasibility + readiness + data_health) / 3.0;

    if average >= 80.0 && data_health >= 70.0 {
        DeliveryPath::Direct
    } else if average >= 60.0 {
        DeliveryPath::Pilot
    } else {
        DeliveryPath::Poc
    }
}

/// Confidence (0-1) in the evaluation, driven by how much the demand declares
pub fn confidence(demand: &DemandFeatures) -> f64 {
    let mut confidence: f64 = 0.5;

    if demand.description_len() > DETAILED_DESCRIPTION_CHARS {
        confidence += 0.10;
    }
    if !demand.kpis.is_empty() {
        confidence += 0.10;
    }
    if demand.declared_data().is_some() {
        confidence += 0.15;
    }
    if demand.declared_budget_max().is_some() {
        confidence += 0.05;
    }
    if !demand.industry_tags.is_empty() {
        confidence += 0.05;
    }
    if !demand.scenario_tags.is_empty() {
        confidence += 0.05;
    }

    confidence.clamp(0.0, 1.0)
}
