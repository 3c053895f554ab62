// Core algorithm exports
pub mod error;
pub mod estimator;
pub mod evaluation;
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod weights;

pub use error::ScoringError;
pub use estimator::{CreditTierEstimator, SuccessRateEstimator};
pub use evaluation::EvaluationEngine;
pub use filters::{is_eligible_vendor, is_open_demand};
pub use matcher::MatchingEngine;
pub use scoring::{score_pair, match_reasons, DemandProfile, VendorProfile};
pub use weights::{EvaluationTables, MatchWeights, OverallWeights};
