use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use crate::core::weights::{
    default_industry_maturity, default_scenario_difficulty, default_sensitive_industries,
    EvaluationTables, MatchWeights, OverallWeights,
};
use crate::models::HOME_REGION;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub evaluation: EvaluationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_home_region")]
    pub home_region: String,
    #[serde(default = "default_vendor_top_k")]
    pub default_vendor_top_k: usize,
    #[serde(default = "default_demand_top_k")]
    pub default_demand_top_k: usize,
    #[serde(default = "default_max_top_k")]
    pub max_top_k: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            home_region: default_home_region(),
            default_vendor_top_k: default_vendor_top_k(),
            default_demand_top_k: default_demand_top_k(),
            max_top_k: default_max_top_k(),
        }
    }
}

fn default_home_region() -> String { HOME_REGION.to_string() }
fn default_vendor_top_k() -> usize { 5 }
fn default_demand_top_k() -> usize { 10 }
fn default_max_top_k() -> usize { 50 }

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_industry_weight")]
    pub industry_match: f64,
    #[serde(default = "default_semantic_weight")]
    pub semantic_similarity: f64,
    #[serde(default = "default_success_weight")]
    pub success_rate: f64,
    #[serde(default = "default_budget_weight")]
    pub budget_match: f64,
    #[serde(default = "default_geo_weight")]
    pub geo_proximity: f64,
    #[serde(default = "default_credit_weight")]
    pub credit_score: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            industry_match: default_industry_weight(),
            semantic_similarity: default_semantic_weight(),
            success_rate: default_success_weight(),
            budget_match: default_budget_weight(),
            geo_proximity: default_geo_weight(),
            credit_score: default_credit_weight(),
        }
    }
}

impl From<&WeightsConfig> for MatchWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            industry_match: config.industry_match,
            semantic_similarity: config.semantic_similarity,
            success_rate: config.success_rate,
            budget_match: config.budget_match,
            geo_proximity: config.geo_proximity,
            credit_score: config.credit_score,
        }
    }
}

fn default_industry_weight() -> f64 { 0.25 }
fn default_semantic_weight() -> f64 { 0.30 }
fn default_success_weight() -> f64 { 0.20 }
fn default_budget_weight() -> f64 { 0.10 }
fn default_geo_weight() -> f64 { 0.05 }
fn default_credit_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationSettings {
    #[serde(default)]
    pub weights: OverallWeightsConfig,
    #[serde(default = "default_industry_maturity")]
    pub industry_maturity: HashMap<String, f64>,
    #[serde(default = "default_scenario_difficulty")]
    pub scenario_difficulty: HashMap<String, f64>,
    #[serde(default = "default_sensitive_industries")]
    pub sensitive_industries: Vec<String>,
    #[serde(default = "default_fallback_weight")]
    pub fallback_weight: f64,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            weights: OverallWeightsConfig::default(),
            industry_maturity: default_industry_maturity(),
            scenario_difficulty: default_scenario_difficulty(),
            sensitive_industries: default_sensitive_industries(),
            fallback_weight: default_fallback_weight(),
        }
    }
}

impl EvaluationSettings {
    pub fn tables(&self) -> EvaluationTables {
        EvaluationTables {
            industry_maturity: self.industry_maturity.clone(),
            scenario_difficulty: self.scenario_difficulty.clone(),
            fallback_weight: self.fallback_weight,
            sensitive_industries: self.sensitive_industries.clone(),
        }
    }
}

fn default_fallback_weight() -> f64 { 0.5 }

#[derive(Debug, Clone, Deserialize)]
pub struct OverallWeightsConfig {
    #[serde(default = "default_feasibility_weight")]
    pub feasibility: f64,
    #[serde(default = "default_readiness_weight")]
    pub readiness: f64,
    #[serde(default = "default_data_health_weight")]
    pub data_health: f64,
}

impl Default for OverallWeightsConfig {
    fn default() -> Self {
        Self {
            feasibility: default_feasibility_weight(),
            readiness: default_readiness_weight(),
            data_health: default_data_health_weight(),
        }
    }
}

impl From<&OverallWeightsConfig> for OverallWeights {
    fn from(config: &OverallWeightsConfig) -> Self {
        Self {
            feasibility: config.feasibility,
            readiness: config.readiness,
            data_health: config.data_health,
        }
    }
}

fn default_feasibility_weight() -> f64 { 0.40 }
fn default_readiness_weight() -> f64 { 0.35 }
fn default_data_health_weight() -> f64 { 0.25 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with AIMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., AIMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("AIMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
