//! HTMX partial endpoints.
//!
//! These return chart fragments (not full pages) for HTMX to swap into
//! the chart containers when the site selector or payload slider changes.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;

use launchdash_core::{PayloadRange, SiteSelection};

use crate::binder::{ControlQuery, bind_pie, bind_scatter};
use crate::views::*;
use crate::{DashboardState, render};

#[derive(Template)]
#[template(path = "_partials/chart.html")]
pub(crate) struct ChartPartial {
    pub(crate) panel: ChartPanel,
}

pub(crate) fn pie_panel(state: &DashboardState, selection: &SiteSelection) -> ChartPanel {
    let spec = bind_pie(&state.store, selection);
    ChartPanel::new(PIE_CHART_ID, &spec.figure())
}

pub(crate) fn scatter_panel(
    state: &DashboardState,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ChartPanel {
    let spec = bind_scatter(&state.store, selection, range);
    ChartPanel::new(SCATTER_CHART_ID, &spec.figure())
}

// ── Pie Chart ───────────────────────────────────────────────────

pub async fn pie_chart(
    State(state): State<DashboardState>,
    Query(query): Query<ControlQuery>,
) -> Html<String> {
    let panel = pie_panel(&state, &query.selection());
    render(ChartPartial { panel })
}

// ── Scatter Chart ───────────────────────────────────────────────

pub async fn scatter_chart(
    State(state): State<DashboardState>,
    Query(query): Query<ControlQuery>,
) -> Html<String> {
    let range = query.payload_range(state.default_payload_range());
    let panel = scatter_panel(&state, &query.selection(), range);
    render(ChartPartial { panel })
}
