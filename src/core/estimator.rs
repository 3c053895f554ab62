use std::fmt::Debug;
use crate::core::scoring::VendorProfile;

/// Estimates the probability that a vendor delivers successfully (0-1)
///
/// The default implementation is a proxy on the credit score; a real
/// estimator would read historical project outcomes.
pub trait SuccessRateEstimator: Debug + Send + Sync {
    fn estimate(&self, vendor: &VendorProfile<'_>) -> f64;
}

/// Maps the vendor credit score onto fixed success tiers
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditTierEstimator;

impl SuccessRateEstimator for CreditTierEstimator {
    fn estimate(&self, vendor: &VendorProfile<'_>) -> f64 {
        match vendor.credit_score {
            s if s >= 90.0 => 0.95,
            s if s >= 80.0 => 0.85,
            s if s >= 70.0 => 0.75,
            _ => 0.65,
        }
    }
}
