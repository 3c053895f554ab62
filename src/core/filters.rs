use crate::models::{DemandRecord, VendorFeatures};

/// Check if a vendor may be offered as a match
///
/// Only verified enterprises that supply AI capability qualify.
#[inline]
pub fn is_eligible_vendor(vendor: &VendorFeatures) -> bool {
    vendor.enterprise_type.can_supply() && vendor.verified()
}

/// Check if a demand is published and still open to vendors
#[inline]
pub fn is_open_demand(demand: &DemandRecord) -> bool {
    demand.status.is_open_for_matching()
}
