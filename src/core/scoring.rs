use std::collections::BTreeSet;
use crate::core::{estimator::SuccessRateEstimator, weights::MatchWeights};
use crate::models::{DemandFeatures, ScoreBreakdown, VendorFeatures};

/// Minimum 0-100 dimension score that earns a match reason
pub const REASON_THRESHOLD: f64 = 70.0;

/// Maximum number of reasons attached to a match
pub const MAX_REASONS: usize = 3;

/// Reason used when no single dimension stands out
pub const FALLBACK_REASON: &str = "Comprehensive capability match";

/// Demand-shaped side of a scored pair
#[derive(Debug, Clone, Copy)]
pub struct DemandProfile<'a> {
    pub industry_tags: &'a [String],
    pub scenario_tags: &'a [String],
    pub budget_max: Option<f64>,
    /// `None` resolves to the home region when scored
    pub location: Option<&'a str>,
}

impl<'a> DemandProfile<'a> {
    pub fn from_features(demand: &'a DemandFeatures) -> Self {
        Self {
            industry_tags: &demand.industry_tags,
            scenario_tags: &demand.scenario_tags,
            budget_max: demand.declared_budget_max(),
            location: demand.location.as_deref(),
        }
    }

    /// Same demand, scored as if located at `location`
    pub fn located_at(self, location: &'a str) -> Self {
        Self {
            location: Some(location),
            ..self
        }
    }
}

/// Vendor-shaped side of a scored pair
#[derive(Debug, Clone, Copy)]
pub struct VendorProfile<'a> {
    pub industry_tags: &'a [String],
    pub capabilities: &'a [String],
    pub credit_score: f64,
    pub address: &'a str,
}

impl<'a> VendorProfile<'a> {
    pub fn from_features(vendor: &'a VendorFeatures) -> Self {
        Self {
            industry_tags: &vendor.industry_tags,
            capabilities: &vendor.ai_capabilities,
            credit_score: vendor.credit_score,
            address: &vendor.address,
        }
    }
}

/// Score one demand/vendor pair
///
/// Returns the 0-100 breakdown and the 0-100 weighted total:
/// total = (
///     industry_match * 0.25 +
///     semantic_similarity * 0.30 +
///     success_rate * 0.20 +
///     budget_match * 0.10 +
///     geo_proximity * 0.05 +
///     credit_score * 0.10
/// ) * 100
pub fn score_pair(
    demand: &DemandProfile<'_>,
    vendor: &VendorProfile<'_>,
    weights: &MatchWeights,
    estimator: &dyn SuccessRateEstimator,
    home_region: &str,
) -> (ScoreBreakdown, f64) {
    let industry = industry_match(demand.industry_tags, vendor.industry_tags);
    let semantic = semantic_similarity(demand.scenario_tags, vendor.capabilities);
    let success = estimator.estimate(vendor).clamp(0.0, 1.0);
    let budget = budget_match(demand.budget_max);
    let geo = geo_proximity(
        demand.location.unwrap_or(home_region),
        vendor.address,
        home_region,
    );
    let credit = normalize_credit(vendor.credit_score);

    let total = industry * weights.industry_match
        + semantic * weights.semantic_similarity
        + success * weights.success_rate
        + budget * weights.budget_match
        + geo * weights.geo_proximity
        + credit * weights.credit_score;

    let breakdown = ScoreBreakdown {
        industry_match: to_percent(industry),
        semantic_similarity: to_percent(semantic),
        success_rate: to_percent(success),
        budget_match: to_percent(budget),
        geo_proximity: to_percent(geo),
        credit_score: to_percent(credit),
    };

    (breakdown, to_percent(total))
}

/// Industry overlap (0-1)
#[inline]
pub fn industry_match(demand_industries: &[String], vendor_industries: &[String]) -> f64 {
    if demand_industries.is_empty() || vendor_industries.is_empty() {
        return 0.5;
    }

    if demand_industries.iter().any(|tag| vendor_industries.contains(tag)) {
        1.0
    } else {
        0.3
    }
}

/// Keyword similarity between demand scenarios and vendor capabilities (0-1)
pub fn semantic_similarity(scenarios: &[String], capabilities: &[String]) -> f64 {
    let demand_keywords = keyword_set(scenarios);
    let vendor_keywords = keyword_set(capabilities);

    if demand_keywords.is_empty() || vendor_keywords.is_empty() {
        return 0.5;
    }

    let common = demand_keywords.intersection(&vendor_keywords).count();
    if common > 0 {
        let union = demand_keywords.union(&vendor_keywords).count();
        return common as f64 / union as f64;
    }

    let partial = demand_keywords.iter().any(|d| {
        vendor_keywords
            .iter()
            .any(|v| d.contains(v.as_str()) || v.contains(d.as_str()))
    });

    if partial {
        0.7
    } else {
        0.4
    }
}

fn keyword_set(tags: &[String]) -> BTreeSet<String> {
    tags.iter().map(|tag| tag.to_lowercase()).collect()
}

/// Budget fit (0-1); an undeclared budget scores neutral
#[inline]
pub fn budget_match(budget_max: Option<f64>) -> f64 {
    match budget_max {
        None => 0.7,
        Some(b) if b >= 100_000.0 => 1.0,
        Some(b) if b >= 50_000.0 => 0.9,
        Some(_) => 0.7,
    }
}

/// Location bonus for vendors based in the home region (0-1)
#[inline]
pub fn geo_proximity(demand_location: &str, vendor_address: &str, home_region: &str) -> f64 {
    let vendor_local = vendor_address.contains(home_region);
    if vendor_local && demand_location.contains(home_region) {
        1.0
    } else if vendor_local {
        0.8
    } else {
        0.5
    }
}

#[inline]
pub fn normalize_credit(credit_score: f64) -> f64 {
    (credit_score / 100.0).clamp(0.0, 1.0)
}

/// Build up to three reasons from the strongest dimensions
pub fn match_reasons(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut dimensions = breakdown.dimensions();
    // Stable: equal scores keep the fixed dimension order
    dimensions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let reasons: Vec<String> = dimensions
        .iter()
        .take(MAX_REASONS)
        .filter(|(_, score)| *score >= REASON_THRESHOLD)
        .map(|(dimension, _)| dimension.reason().to_string())
        .collect();

    if reasons.is_empty() {
        vec![FALLBACK_REASON.to_string()]
    } else {
        reasons
    }
}

/// Scale a 0-1 value to 0-100, rounded to 2 decimals
#[inline]
pub fn to_percent(value: f64) -> f64 {
    round2((value * 100.0).clamp(0.0, 100.0))
}

#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
