//! Scatter chart filtering.

use launchdash_core::{LaunchRecord, PayloadRange, SiteSelection};

/// Records whose payload lies in `range` (inclusive) and whose site passes
/// `selection`, in their original order.
pub fn compute_scatter_data<'a>(
    records: &'a [LaunchRecord],
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| selection.matches(&r.launch_site))
        .collect()
}
