//! View types for dashboard template rendering.
//!
//! Chart specs describe what a chart shows; `figure()` turns them into the
//! plotly figure JSON the page hands to `Plotly.react`. The remaining types
//! carry pre-formatted strings so templates stay simple.

use launchdash_core::{LaunchRecord, Outcome, SiteSelection};
use launchdash_core::config::SliderConfig;
use launchdash_engine::PieData;
use serde::Serialize;
use serde_json::{Value, json};

pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Y-axis ticks of the scatter chart, one per outcome class.
pub const OUTCOME_TICKS: [Outcome; 2] = [Outcome::Failure, Outcome::Success];

// ── Pie Chart ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChartSpec {
    pub fn from_pie_data(data: &PieData) -> Self {
        match data {
            PieData::AllSites(summary) => Self {
                title: "Total Successful Launches by Site".to_string(),
                slices: summary
                    .counts
                    .iter()
                    .map(|(site, count)| PieSlice {
                        label: site.clone(),
                        value: *count,
                    })
                    .collect(),
            },
            PieData::Site { site, split } => Self {
                title: format!("Success vs Failure for site: {site}"),
                // Only outcomes that actually occur get a slice.
                slices: OUTCOME_TICKS
                    .iter()
                    .filter(|outcome| split.count(**outcome) > 0)
                    .map(|outcome| PieSlice {
                        label: outcome.label().to_string(),
                        value: split.count(*outcome),
                    })
                    .collect(),
            },
        }
    }

    pub fn figure(&self) -> Value {
        let labels: Vec<&str> = self.slices.iter().map(|s| s.label.as_str()).collect();
        let values: Vec<u64> = self.slices.iter().map(|s| s.value).collect();
        json!({
            "data": [{
                "type": "pie",
                "labels": labels,
                "values": values,
            }],
            "layout": {
                "title": { "text": self.title },
            },
        })
    }
}

// ── Scatter Chart ───────────────────────────────────────────────

/// Points sharing one booster version category (one color).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub category: String,
    pub payloads: Vec<f64>,
    pub classes: Vec<u8>,
    pub sites: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChartSpec {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChartSpec {
    /// Series appear in the order their category is first seen in `points`.
    pub fn from_points(selection: &SiteSelection, points: &[&LaunchRecord]) -> Self {
        let mut series: Vec<ScatterSeries> = Vec::new();
        for record in points {
            let index = match series
                .iter()
                .position(|s| s.category == record.booster_version_category)
            {
                Some(index) => index,
                None => {
                    series.push(ScatterSeries {
                        category: record.booster_version_category.clone(),
                        payloads: Vec::new(),
                        classes: Vec::new(),
                        sites: Vec::new(),
                    });
                    series.len() - 1
                }
            };
            let s = &mut series[index];
            s.payloads.push(record.payload_mass_kg);
            s.classes.push(record.outcome.class());
            s.sites.push(record.launch_site.clone());
        }

        Self {
            title: format!(
                "Correlation between Payload and Success for {}",
                selection.display_name()
            ),
            series,
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.payloads.len()).sum()
    }

    pub fn figure(&self) -> Value {
        let traces: Vec<Value> = self
            .series
            .iter()
            .map(|s| {
                json!({
                    "type": "scatter",
                    "mode": "markers",
                    "name": s.category,
                    "legendgroup": s.category,
                    "x": s.payloads,
                    "y": s.classes,
                    "customdata": s.sites,
                    "hovertemplate": format!(
                        "Booster Version Category={}<br>Payload Mass (kg)=%{{x}}<br>class=%{{y}}<br>Launch Site=%{{customdata}}<extra></extra>",
                        s.category
                    ),
                })
            })
            .collect();

        let tick_values: Vec<u8> = OUTCOME_TICKS.iter().map(|o| o.class()).collect();
        let tick_text: Vec<&str> = OUTCOME_TICKS.iter().map(|o| o.tick_label()).collect();

        json!({
            "data": traces,
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": "Payload Mass (kg)" } },
                "yaxis": {
                    "title": { "text": "class" },
                    "tickmode": "array",
                    "tickvals": tick_values,
                    "ticktext": tick_text,
                },
                "legend": { "title": { "text": "Booster Version Category" } },
            },
        })
    }
}

// ── Chart Panel ─────────────────────────────────────────────────

/// A chart container plus the figure JSON it is drawn from.
pub struct ChartPanel {
    pub dom_id: &'static str,
    pub figure_json: String,
}

impl ChartPanel {
    pub fn new(dom_id: &'static str, figure: &Value) -> Self {
        Self {
            dom_id,
            figure_json: script_safe_json(figure),
        }
    }
}

/// Serialize JSON for embedding inside a `<script>` element.
pub fn script_safe_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

// ── Controls ────────────────────────────────────────────────────

pub struct SiteOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// "All Sites" first, then each site in the order given.
pub fn build_site_options(sites: &[String], selection: &SiteSelection) -> Vec<SiteOption> {
    let all = SiteSelection::All;
    std::iter::once(SiteOption {
        value: all.as_value().to_string(),
        label: all.display_name().to_string(),
        selected: *selection == all,
    })
    .chain(sites.iter().map(|site| SiteOption {
        value: site.clone(),
        label: site.clone(),
        selected: selection.matches(site) && *selection != all,
    }))
    .collect()
}

pub struct SliderView {
    pub min: String,
    pub max: String,
    pub step: String,
    pub low: String,
    pub high: String,
}

impl SliderView {
    pub fn new(config: &SliderConfig, low: f64, high: f64) -> Self {
        Self {
            min: format_kg(config.min),
            max: format_kg(config.max),
            step: format_kg(config.step),
            low: format_kg(low),
            high: format_kg(high),
        }
    }
}

/// Whole kilograms print without a fractional part.
pub fn format_kg(kg: f64) -> String {
    if kg.fract() == 0.0 {
        format!("{kg:.0}")
    } else {
        format!("{kg}")
    }
}
