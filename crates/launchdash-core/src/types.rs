//! Shared types used across launchdash crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire value of the "every site" selector option.
pub const ALL_SITES: &str = "ALL";

// ── Outcome ─────────────────────────────────────────────────────

/// Binary launch outcome, stored in the CSV as class `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

#[derive(Debug, Error, PartialEq)]
#[error("outcome class must be 0 or 1, got {0}")]
pub struct InvalidOutcome(pub u8);

impl Outcome {
    /// Numeric class as it appears in the data and on the scatter y-axis.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    /// Pie slice label.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    /// Axis tick label, e.g. `Success (1)`.
    pub fn tick_label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure (0)",
            Outcome::Success => "Success (1)",
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = InvalidOutcome;

    fn try_from(class: u8) -> Result<Self, Self::Error> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(InvalidOutcome(other)),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.class()
    }
}

// ── Launch Record ───────────────────────────────────────────────

/// One launch, as loaded from the records file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
        }
    }
}

// ── Site Selection ──────────────────────────────────────────────

/// Value of the launch-site selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        SiteSelection::Site(name.into())
    }

    /// Whether a record at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }

    /// Value submitted by the selector (`ALL` or the site name).
    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }

    /// Human label (`All Sites` or the site name).
    pub fn display_name(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        SiteSelection::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> String {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl FromStr for SiteSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelection::from(s))
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

// ── Payload Range ───────────────────────────────────────────────

/// Closed payload interval `[low, high]` in kilograms.
///
/// Not validated: an inverted range simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_class() {
        assert_eq!(Outcome::try_from(0), Ok(Outcome::Failure));
        assert_eq!(Outcome::try_from(1), Ok(Outcome::Success));
        assert_eq!(Outcome::try_from(2), Err(InvalidOutcome(2)));
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::Success.label(), "Success");
        assert_eq!(Outcome::Failure.tick_label(), "Failure (0)");
        assert_eq!(Outcome::Success.tick_label(), "Success (1)");
        assert_eq!(u8::from(Outcome::Success), 1);
    }

    #[test]
    fn site_selection_sentinel() {
        assert_eq!(SiteSelection::from("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from("CCAFS LC-40"),
            SiteSelection::site("CCAFS LC-40")
        );
        // Sentinel is case-sensitive, like the selector values.
        assert_eq!(SiteSelection::from("all"), SiteSelection::site("all"));
    }

    #[test]
    fn site_selection_matches() {
        assert!(SiteSelection::All.matches("anything"));
        assert!(SiteSelection::site("KSC LC-39A").matches("KSC LC-39A"));
        assert!(!SiteSelection::site("KSC LC-39A").matches("VAFB SLC-4E"));
    }

    #[test]
    fn site_selection_serde_uses_wire_value() {
        let json = serde_json::to_string(&SiteSelection::All).unwrap();
        assert_eq!(json, "\"ALL\"");
        let parsed: SiteSelection = serde_json::from_str("\"VAFB SLC-4E\"").unwrap();
        assert_eq!(parsed, SiteSelection::site("VAFB SLC-4E"));
        assert_eq!(parsed.display_name(), "VAFB SLC-4E");
        assert_eq!(SiteSelection::All.display_name(), "All Sites");
    }

    #[test]
    fn payload_range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = PayloadRange::new(5000.0, 1000.0);
        assert!(!range.contains(3000.0));
        assert!(!range.contains(5000.0));
    }
}
