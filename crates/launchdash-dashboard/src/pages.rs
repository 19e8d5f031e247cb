//! Full-page handlers.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;

use crate::binder::ControlQuery;
use crate::partials::{ChartPartial, pie_panel, scatter_panel};
use crate::views::*;
use crate::{DashboardState, render};

// ── Dashboard ───────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    title: String,
    site_options: Vec<SiteOption>,
    slider: SliderView,
    pie_chart: String,
    scatter_chart: String,
}

/// The dashboard page. Query parameters preselect the controls, so any
/// control state can be linked to directly.
pub async fn index(
    State(state): State<DashboardState>,
    Query(query): Query<ControlQuery>,
) -> Html<String> {
    let selection = query.selection();
    let range = query.payload_range(state.default_payload_range());

    let site_options = build_site_options(&state.store.sites(), &selection);
    let slider = SliderView::new(&state.slider, range.low, range.high);

    let Html(pie_chart) = render(ChartPartial {
        panel: pie_panel(&state, &selection),
    });
    let Html(scatter_chart) = render(ChartPartial {
        panel: scatter_panel(&state, &selection, range),
    });

    render(IndexTemplate {
        title: state.page.title.clone(),
        site_options,
        slider,
        pie_chart,
        scatter_chart,
    })
}
