//! Control-to-chart bindings.
//!
//! Each binding takes the current control values, runs the matching
//! engine function over the record store, and returns a chart spec.
//! Nothing is cached: every call recomputes from the full table.

use launchdash_core::{PayloadRange, SiteSelection};
use launchdash_engine::{compute_pie_data, compute_scatter_data};
use launchdash_store::RecordStore;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::views::{PieChartSpec, ScatterChartSpec};

/// Control values as submitted by the page. Missing values fall back to
/// the selector and slider defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ControlQuery {
    pub site: Option<SiteSelection>,
    pub payload_low: Option<f64>,
    pub payload_high: Option<f64>,
}

impl ControlQuery {
    pub fn selection(&self) -> SiteSelection {
        self.site.clone().unwrap_or_default()
    }

    pub fn payload_range(&self, default: PayloadRange) -> PayloadRange {
        PayloadRange::new(
            self.payload_low.unwrap_or(default.low),
            self.payload_high.unwrap_or(default.high),
        )
    }
}

/// Site selection → pie chart.
pub fn bind_pie(store: &RecordStore, selection: &SiteSelection) -> PieChartSpec {
    warn_unknown_site(store, selection);
    let data = compute_pie_data(store.records(), selection);
    let spec = PieChartSpec::from_pie_data(&data);
    debug!(site = %selection, slices = spec.slices.len(), "pie chart recomputed");
    spec
}

/// Site selection + payload range → scatter chart.
pub fn bind_scatter(
    store: &RecordStore,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChartSpec {
    warn_unknown_site(store, selection);
    let points = compute_scatter_data(store.records(), selection, range);
    let spec = ScatterChartSpec::from_points(selection, &points);
    debug!(
        site = %selection,
        low = range.low,
        high = range.high,
        matched = points.len(),
        "scatter chart recomputed"
    );
    spec
}

fn warn_unknown_site(store: &RecordStore, selection: &SiteSelection) {
    if let SiteSelection::Site(site) = selection {
        if !store.contains_site(site) {
            warn!(%site, "selected launch site not in data, rendering empty chart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdash_core::{LaunchRecord, Outcome};

    fn test_store() -> RecordStore {
        RecordStore::from_records(vec![
            LaunchRecord::new("SiteA", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("SiteA", 1500.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("SiteB", 800.0, Outcome::Success, "FT"),
        ])
    }

    #[test]
    fn control_query_defaults() {
        let query = ControlQuery::default();
        assert_eq!(query.selection(), SiteSelection::All);
        let default = PayloadRange::new(500.0, 1500.0);
        assert_eq!(query.payload_range(default), default);
    }

    #[test]
    fn control_query_overrides() {
        let query = ControlQuery {
            site: Some(SiteSelection::site("SiteB")),
            payload_low: Some(1000.0),
            payload_high: None,
        };
        assert_eq!(query.selection(), SiteSelection::site("SiteB"));
        assert_eq!(
            query.payload_range(PayloadRange::new(0.0, 9600.0)),
            PayloadRange::new(1000.0, 9600.0)
        );
    }

    #[test]
    fn bind_pie_all_sites() {
        let spec = bind_pie(&test_store(), &SiteSelection::All);
        let labels: Vec<&str> = spec.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["SiteA", "SiteB"]);
        assert!(spec.slices.iter().all(|s| s.value == 1));
    }

    #[test]
    fn bind_pie_single_site() {
        let spec = bind_pie(&test_store(), &SiteSelection::site("SiteA"));
        assert_eq!(spec.title, "Success vs Failure for site: SiteA");
        assert_eq!(spec.slices.iter().map(|s| s.value).sum::<u64>(), 2);
    }

    #[test]
    fn bind_pie_unknown_site_is_empty() {
        let spec = bind_pie(&test_store(), &SiteSelection::site("Nowhere"));
        assert!(spec.slices.is_empty());
    }

    #[test]
    fn bind_scatter_filters_payload() {
        let spec = bind_scatter(&test_store(), &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
        assert_eq!(spec.point_count(), 2);
        let categories: Vec<&str> = spec.series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["v1.0", "FT"]);
    }

    #[test]
    fn bind_scatter_site_and_range() {
        let spec = bind_scatter(
            &test_store(),
            &SiteSelection::site("SiteA"),
            PayloadRange::new(1000.0, 2000.0),
        );
        assert_eq!(spec.point_count(), 1);
        assert_eq!(spec.series[0].classes, vec![0]);
    }
}
