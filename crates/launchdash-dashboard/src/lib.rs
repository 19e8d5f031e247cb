//! launchdash-dashboard — server-rendered web UI for the launch records.
//!
//! Provides the axum router for the single dashboard page and the HTMX
//! partials that redraw its two charts when a control changes.
//!
//! # Routes
//!
//! | Route | Handler |
//! |---|---|
//! | `/` | Full page: site selector, pie chart, payload slider, scatter chart |
//! | `/charts/pie` | Pie chart partial (`site`) |
//! | `/charts/scatter` | Scatter chart partial (`site`, `payload_low`, `payload_high`) |

pub mod binder;
pub mod pages;
pub mod partials;
pub mod views;

use askama::Template;
use axum::Router;
use axum::response::Html;
use axum::routing::get;
use launchdash_core::config::{PageConfig, SliderConfig};
use launchdash_core::{DashConfig, PayloadRange};
use launchdash_store::RecordStore;

/// Shared state for dashboard handlers.
#[derive(Clone)]
pub struct DashboardState {
    pub store: RecordStore,
    pub slider: SliderConfig,
    pub page: PageConfig,
}

impl DashboardState {
    pub fn new(store: RecordStore, config: &DashConfig) -> Self {
        Self {
            store,
            slider: config.slider.clone(),
            page: config.page.clone(),
        }
    }

    /// Initial slider value: the payload bounds of the data, or the full
    /// slider span when there is no data.
    pub fn default_payload_range(&self) -> PayloadRange {
        self.store
            .payload_bounds()
            .unwrap_or_else(|| PayloadRange::new(self.slider.min, self.slider.max))
    }
}

/// Build the dashboard router.
pub fn dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/charts/pie", get(partials::pie_chart))
        .route("/charts/scatter", get(partials::scatter_chart))
        .with_state(state)
}

fn render<T: Template>(tmpl: T) -> Html<String> {
    Html(tmpl.render().unwrap_or_else(|e| {
        format!("<pre>Template error: {e}</pre>")
    }))
}
