use std::sync::Arc;
use crate::core::{
    error::ScoringError,
    estimator::{CreditTierEstimator, SuccessRateEstimator},
    filters::{is_eligible_vendor, is_open_demand},
    scoring::{match_reasons, score_pair, DemandProfile, VendorProfile},
    weights::MatchWeights,
};
use crate::models::{
    DemandFeatures, DemandRecommendation, DemandRecord, MatchResult, MatchScore, VendorFeatures,
    HOME_REGION,
};

/// Characters of a demand description shown in a recommendation
const EXCERPT_CHARS: usize = 200;

/// Main matching orchestrator - ranks vendors for demands and demands for vendors
///
/// # Pipeline Stages
/// 1. Candidate pool filtering
/// 2. Pairwise scoring
/// 3. Ranking and truncation
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    weights: MatchWeights,
    estimator: Arc<dyn SuccessRateEstimator>,
    home_region: String,
}

impl MatchingEngine {
    pub fn new(
        weights: MatchWeights,
        estimator: Arc<dyn SuccessRateEstimator>,
        home_region: impl Into<String>,
    ) -> Result<Self, ScoringError> {
        weights.validate()?;
        Ok(Self {
            weights,
            estimator,
            home_region: home_region.into(),
        })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
            estimator: Arc::new(CreditTierEstimator),
            home_region: HOME_REGION.to_string(),
        }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    pub fn home_region(&self) -> &str {
        &self.home_region
    }

    /// Score one demand/vendor pair, independent of direction
    pub fn score(&self, demand: &DemandProfile<'_>, vendor: &VendorProfile<'_>) -> MatchScore {
        let (score_breakdown, total_score) = score_pair(
            demand,
            vendor,
            &self.weights,
            self.estimator.as_ref(),
            &self.home_region,
        );

        MatchScore {
            total_score,
            reasons: match_reasons(&score_breakdown),
            score_breakdown,
        }
    }

    /// Rank verified supply-side vendors for a demand
    ///
    /// # Arguments
    /// * `demand` - The demand snapshot to match
    /// * `candidates` - All enterprises the storage layer returned
    /// * `top_k` - Maximum number of matches to return
    pub fn match_vendors(
        &self,
        demand: &DemandFeatures,
        candidates: &[VendorFeatures],
        top_k: usize,
    ) -> Vec<MatchResult> {
        let profile = DemandProfile::from_features(demand);

        let mut matches: Vec<MatchResult> = candidates
            .iter()
            .filter(|vendor| is_eligible_vendor(vendor))
            .map(|vendor| MatchResult {
                vendor_id: vendor.id,
                vendor_name: vendor.name.clone(),
                score: self.score(&profile, &VendorProfile::from_features(vendor)),
                credit_score: vendor.credit_score,
                ai_capabilities: vendor.ai_capabilities.clone(),
                contact_email: vendor.contact_email.clone(),
            })
            .collect();

        tracing::debug!(
            "Scored {} eligible vendors out of {} candidates",
            matches.len(),
            candidates.len()
        );

        rank(&mut matches, |m| m.score.total_score, top_k);
        matches
    }

    /// Rank open demands for a vendor
    ///
    /// Demands are scored as if located in the home region.
    pub fn match_demands_for_vendor(
        &self,
        vendor: &VendorFeatures,
        candidates: &[DemandRecord],
        top_k: usize,
    ) -> Vec<DemandRecommendation> {
        let vendor_profile = VendorProfile::from_features(vendor);

        let mut recommendations: Vec<DemandRecommendation> = candidates
            .iter()
            .filter(|record| is_open_demand(record))
            .map(|record| {
                let demand = &record.features;
                let profile =
                    DemandProfile::from_features(demand).located_at(&self.home_region);

                DemandRecommendation {
                    demand_id: record.id,
                    demand_title: demand.title.clone(),
                    demand_description: excerpt(&demand.description, EXCERPT_CHARS),
                    enterprise_id: record.enterprise_id,
                    industry_tags: demand.industry_tags.clone(),
                    scenario_tags: demand.scenario_tags.clone(),
                    budget_range: budget_range(demand),
                    status: record.status,
                    created_at: record.created_at,
                    score: self.score(&profile, &vendor_profile),
                }
            })
            .collect();

        tracing::debug!(
            "Scored {} open demands out of {} candidates for vendor {}",
            recommendations.len(),
            candidates.len(),
            vendor.id
        );

        rank(&mut recommendations, |r| r.score.total_score, top_k);
        recommendations
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Sort descending by score and keep the first `top_k`
///
/// The sort is stable, so equal scores keep their candidate order.
fn rank<T>(items: &mut Vec<T>, score: impl Fn(&T) -> f64, top_k: usize) {
    items.sort_by(|a, b| {
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    items.truncate(top_k);
}

fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn budget_range(demand: &DemandFeatures) -> String {
    match (demand.declared_budget_min(), demand.declared_budget_max()) {
        (Some(min), Some(max)) => format!("{}-{}", min, max),
        _ => "negotiable".to_string(),
    }
}
