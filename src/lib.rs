//! AI Match - feasibility evaluation and supply/demand matching service
//!
//! This library provides the rule-based scoring engines of the AI marketplace:
//! an evaluator that grades a demand's feasibility and a matcher that ranks
//! vendors for demands and demands for vendors.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{EvaluationEngine, MatchingEngine, MatchWeights, ScoringError};
pub use models::{DemandFeatures, DemandRecord, EvaluationResult, MatchResult, DemandRecommendation, VendorFeatures};
