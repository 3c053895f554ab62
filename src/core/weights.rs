use std::collections::HashMap;
use crate::core::error::ScoringError;

const SUM_TOLERANCE: f64 = 1e-6;

/// Coefficients of the six matching dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub industry_match: f64,
    pub semantic_similarity: f64,
    pub success_rate: f64,
    pub budget_match: f64,
    pub geo_proximity: f64,
    pub credit_score: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            industry_match: 0.25,
            semantic_similarity: 0.30,
            success_rate: 0.20,
            budget_match: 0.10,
            geo_proximity: 0.05,
            credit_score: 0.10,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.industry_match
            + self.semantic_similarity
            + self.success_rate
            + self.budget_match
            + self.geo_proximity
            + self.credit_score
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        check_weights(
            "matching",
            &[
                ("industry_match", self.industry_match),
                ("semantic_similarity", self.semantic_similarity),
                ("success_rate", self.success_rate),
                ("budget_match", self.budget_match),
                ("geo_proximity", self.geo_proximity),
                ("credit_score", self.credit_score),
            ],
        )
    }
}

/// Coefficients folding the three evaluation sub-scores into the overall score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallWeights {
    pub feasibility: f64,
    pub readiness: f64,
    pub data_health: f64,
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            feasibility: 0.40,
            readiness: 0.35,
            data_health: 0.25,
        }
    }
}

impl OverallWeights {
    pub fn validate(&self) -> Result<(), ScoringError> {
        check_weights(
            "overall",
            &[
                ("feasibility", self.feasibility),
                ("readiness", self.readiness),
                ("data_health", self.data_health),
            ],
        )
    }
}

fn check_weights(set: &'static str, weights: &[(&'static str, f64)]) -> Result<(), ScoringError> {
    for &(name, value) in weights {
        if !(0.0..=1.0).contains(&value) {
            return Err(ScoringError::WeightOutOfRange { name, value });
        }
    }

    let sum: f64 = weights.iter().map(|(_, value)| value).sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(ScoringError::WeightSum { set, sum });
    }

    Ok(())
}

/// Lookup tables behind the technical feasibility score
///
/// Built once at startup and shared read-only by every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationTables {
    pub industry_maturity: HashMap<String, f64>,
    pub scenario_difficulty: HashMap<String, f64>,
    /// Weight for a tag missing from its table
    pub fallback_weight: f64,
    /// Industries that trigger a compliance note
    pub sensitive_industries: Vec<String>,
}

impl Default for EvaluationTables {
    fn default() -> Self {
        Self {
            industry_maturity: default_industry_maturity(),
            scenario_difficulty: default_scenario_difficulty(),
            fallback_weight: 0.5,
            sensitive_industries: default_sensitive_industries(),
        }
    }
}

impl EvaluationTables {
    pub fn maturity(&self, industry: &str) -> f64 {
        self.industry_maturity
            .get(industry)
            .copied()
            .unwrap_or(self.fallback_weight)
    }

    pub fn difficulty(&self, scenario: &str) -> f64 {
        self.scenario_difficulty
            .get(scenario)
            .copied()
            .unwrap_or(self.fallback_weight)
    }

    pub fn is_sensitive(&self, industry: &str) -> bool {
        self.sensitive_industries.iter().any(|s| s == industry)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        check_table("industry_maturity", &self.industry_maturity)?;
        check_table("scenario_difficulty", &self.scenario_difficulty)?;
        if !(0.0..=1.0).contains(&self.fallback_weight) {
            return Err(ScoringError::WeightOutOfRange {
                name: "fallback_weight",
                value: self.fallback_weight,
            });
        }
        Ok(())
    }
}

fn check_table(table: &'static str, entries: &HashMap<String, f64>) -> Result<(), ScoringError> {
    match entries.iter().find(|(_, value)| !(0.0..=1.0).contains(*value)) {
        Some((key, &value)) => Err(ScoringError::TableEntryOutOfRange {
            table,
            key: key.clone(),
            value,
        }),
        None => Ok(()),
    }
}

pub fn default_industry_maturity() -> HashMap<String, f64> {
    [
        ("制造业", 0.9),
        ("金融", 0.85),
        ("零售", 0.8),
        ("医疗", 0.75),
        ("政务", 0.7),
        ("教育", 0.65),
        ("其他", 0.5),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

pub fn default_scenario_difficulty() -> HashMap<String, f64> {
    [
        ("图像识别", 0.8),
        ("文本分类", 0.9),
        ("语音识别", 0.75),
        ("推荐系统", 0.85),
        ("预测分析", 0.7),
        ("目标检测", 0.65),
        ("自然语言处理", 0.6),
        ("其他", 0.5),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

pub fn default_sensitive_industries() -> Vec<String> {
    vec!["医疗".to_string(), "金融".to_string()]
}
