//! CSV row layout for the launch records file.

use launchdash_core::{LaunchRecord, Outcome};
use serde::Deserialize;

pub const LAUNCH_SITE: &str = "Launch Site";
pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const CLASS: &str = "class";
pub const BOOSTER_CATEGORY: &str = "Booster Version Category";

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_CATEGORY];

/// One raw CSV row, before validation.
#[derive(Debug, Deserialize)]
pub struct LaunchRow {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub class: u8,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl TryFrom<LaunchRow> for LaunchRecord {
    type Error = String;

    fn try_from(row: LaunchRow) -> Result<Self, Self::Error> {
        if !row.payload_mass_kg.is_finite() {
            return Err(format!(
                "payload mass must be a finite number, got {}",
                row.payload_mass_kg
            ));
        }
        let outcome = Outcome::try_from(row.class).map_err(|e| e.to_string())?;
        Ok(LaunchRecord {
            launch_site: row.launch_site,
            payload_mass_kg: row.payload_mass_kg,
            outcome,
            booster_version_category: row.booster_version_category,
        })
    }
}

/// Return the first required column not present in `headers`.
pub fn missing_column<'a, I>(headers: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    REQUIRED_COLUMNS
        .into_iter()
        .find(|required| !headers.clone().into_iter().any(|h| h == *required))
}
