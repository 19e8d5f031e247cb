//! Pie chart aggregation.

use std::collections::BTreeMap;

use launchdash_core::{LaunchRecord, Outcome, SiteSelection};
use serde::Serialize;

/// Successful launches per site, ordered by site name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteSuccessSummary {
    pub counts: BTreeMap<String, u64>,
}

impl SiteSuccessSummary {
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Success and failure counts for a single site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeSplit {
    pub successes: u64,
    pub failures: u64,
}

impl OutcomeSplit {
    pub fn total(&self) -> u64 {
        self.successes + self.failures
    }

    pub fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Success => self.successes,
            Outcome::Failure => self.failures,
        }
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.successes += 1,
            Outcome::Failure => self.failures += 1,
        }
    }
}

/// Result of [`compute_pie_data`], shaped by the site selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PieData {
    AllSites(SiteSuccessSummary),
    Site { site: String, split: OutcomeSplit },
}

impl PieData {
    pub fn is_empty(&self) -> bool {
        match self {
            PieData::AllSites(summary) => summary.is_empty(),
            PieData::Site { split, .. } => split.total() == 0,
        }
    }
}

/// Aggregate launches for the pie chart.
///
/// With every site selected, counts successful launches per site. With a
/// single site selected, splits that site's launches by outcome. A site
/// that does not occur in `records` produces an empty split.
pub fn compute_pie_data(records: &[LaunchRecord], selection: &SiteSelection) -> PieData {
    match selection {
        SiteSelection::All => {
            let mut counts = BTreeMap::new();
            for record in records.iter().filter(|r| r.outcome.is_success()) {
                *counts.entry(record.launch_site.clone()).or_insert(0) += 1;
            }
            PieData::AllSites(SiteSuccessSummary { counts })
        }
        SiteSelection::Site(site) => {
            let mut split = OutcomeSplit::default();
            for record in records.iter().filter(|r| &r.launch_site == site) {
                split.record(record.outcome);
            }
            PieData::Site {
                site: site.clone(),
                split,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn record(site: &str, payload: f64, class: u8, category: &str) -> LaunchRecord {
        LaunchRecord::new(site, payload, Outcome::try_from(class).unwrap(), category)
    }

    fn three_records() -> Vec<LaunchRecord> {
        vec![
            record("SiteA", 500.0, 1, "v1.0"),
            record("SiteA", 1500.0, 0, "v1.1"),
            record("SiteB", 800.0, 1, "FT"),
        ]
    }

    fn fleet() -> Vec<LaunchRecord> {
        vec![
            record("VAFB SLC-4E", 500.0, 0, "v1.1"),
            record("CCAFS LC-40", 0.0, 0, "v1.0"),
            record("KSC LC-39A", 2490.0, 1, "FT"),
            record("CCAFS LC-40", 525.0, 0, "v1.0"),
            record("CCAFS SLC-40", 3600.0, 0, "FT"),
            record("KSC LC-39A", 5300.0, 1, "FT"),
            record("CCAFS LC-40", 3170.0, 1, "v1.1"),
            record("VAFB SLC-4E", 9600.0, 1, "B5"),
            record("KSC LC-39A", 6070.0, 0, "B4"),
        ]
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let data = compute_pie_data(&three_records(), &SiteSelection::All);
        let PieData::AllSites(summary) = data else {
            panic!("expected all-sites summary");
        };
        assert_eq!(summary.counts.len(), 2);
        assert_eq!(summary.counts["SiteA"], 1);
        assert_eq!(summary.counts["SiteB"], 1);
    }

    #[test]
    fn single_site_splits_outcomes() {
        let data = compute_pie_data(&three_records(), &SiteSelection::site("SiteA"));
        assert_eq!(
            data,
            PieData::Site {
                site: "SiteA".to_string(),
                split: OutcomeSplit {
                    successes: 1,
                    failures: 1
                },
            }
        );
    }

    #[test]
    fn all_sites_order_is_lexicographic() {
        let PieData::AllSites(summary) = compute_pie_data(&fleet(), &SiteSelection::All) else {
            panic!("expected all-sites summary");
        };
        let sites: Vec<&str> = summary.counts.keys().map(String::as_str).collect();
        assert_eq!(sites, vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
    }

    #[test]
    fn all_sites_omits_sites_without_success() {
        let records = fleet();
        let PieData::AllSites(summary) = compute_pie_data(&records, &SiteSelection::All) else {
            panic!("expected all-sites summary");
        };
        assert!(!summary.counts.contains_key("CCAFS SLC-40"));

        let with_success: BTreeSet<&str> = records
            .iter()
            .filter(|r| r.outcome.is_success())
            .map(|r| r.launch_site.as_str())
            .collect();
        assert_eq!(summary.counts.len(), with_success.len());
    }

    #[test]
    fn all_sites_total_matches_success_count() {
        let records = fleet();
        let PieData::AllSites(summary) = compute_pie_data(&records, &SiteSelection::All) else {
            panic!("expected all-sites summary");
        };
        let successes = records.iter().filter(|r| r.outcome.is_success()).count() as u64;
        assert_eq!(summary.total(), successes);
    }

    #[test]
    fn site_split_sums_to_site_record_count() {
        let records = fleet();
        let sites: BTreeSet<String> = records.iter().map(|r| r.launch_site.clone()).collect();
        for site in sites {
            let expected = records.iter().filter(|r| r.launch_site == site).count() as u64;
            match compute_pie_data(&records, &SiteSelection::site(site.clone())) {
                PieData::Site { split, .. } => assert_eq!(split.total(), expected, "{site}"),
                other => panic!("unexpected pie data: {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_site_is_empty_split() {
        let data = compute_pie_data(&fleet(), &SiteSelection::site("Boca Chica"));
        assert!(data.is_empty());
        assert_eq!(
            data,
            PieData::Site {
                site: "Boca Chica".to_string(),
                split: OutcomeSplit::default(),
            }
        );
    }

    #[test]
    fn empty_records_give_empty_summary() {
        assert!(compute_pie_data(&[], &SiteSelection::All).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let records = fleet();
        for selection in [SiteSelection::All, SiteSelection::site("KSC LC-39A")] {
            assert_eq!(
                compute_pie_data(&records, &selection),
                compute_pie_data(&records, &selection)
            );
        }
    }

    #[test]
    fn pie_data_serializes_with_kind_tag() {
        let data = compute_pie_data(&three_records(), &SiteSelection::site("SiteB"));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["kind"], "site");
        assert_eq!(json["split"]["successes"], 1);
        assert_eq!(json["split"]["failures"], 0);
    }
}
