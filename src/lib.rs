//! Sales Dashboard
//!
//! Filtering and aggregation pipeline for commercial transaction
//! dashboards: load a CSV snapshot, apply region and revenue filters,
//! and produce the metrics and grouped views a chart or grid renders.
//!
//! ## Getting Started
//!
//! ```bash
//! sales-dash render --data commercial_data.csv --summary
//! sales-dash --help
//! ```
//!
//! From code, load once and render per request:
//!
//! ```ignore
//! let dashboard = Dashboard::load("commercial_data.csv", &DashboardConfig::default())?;
//! let model = dashboard.render(View::Overview, &dashboard.default_criteria())?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod filter;
pub mod loader;
pub mod output;
pub mod render;
pub mod utils;
