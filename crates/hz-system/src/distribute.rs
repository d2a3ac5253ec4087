//! Load distribution across zones.

use crate::input::ZoneInput;
use hz_core::units::{Power, btu_hr, in_btu_hr};

/// Assign each zone its share of the system design load.
///
/// Zones with a manual override keep it; the remaining load (never below
/// zero) splits evenly across the auto zones. Shares are not capped here:
/// the causality resolution caps delivery against the zone's ceilings, and
/// the shortfall between share and delivered load is what the aggregator
/// books as undeliverable. This keeps the accounting identity
/// Σ delivered + Σ undeliverable = Σ shares exact.
pub fn assign_shares(design_load: Power, zones: &[ZoneInput]) -> Vec<Power> {
    let total = in_btu_hr(design_load);
    let override_total: f64 = zones
        .iter()
        .filter_map(|z| z.load_override.map(in_btu_hr))
        .sum();
    let auto_count = zones.iter().filter(|z| z.load_override.is_none()).count();

    let auto_share = if auto_count > 0 {
        (total - override_total).max(0.0) / auto_count as f64
    } else {
        0.0
    };

    zones
        .iter()
        .map(|z| z.load_override.unwrap_or_else(|| btu_hr(auto_share)))
        .collect()
}
