//! launchdash-engine — filtering and aggregation for the dashboard charts.
//!
//! Every function here is a pure function of its inputs: the current
//! control values and a borrowed slice of launch records. Nothing is
//! cached between calls.

pub mod aggregate;
pub mod filter;

pub use aggregate::{OutcomeSplit, PieData, SiteSuccessSummary, compute_pie_data};
pub use filter::compute_scatter_data;
