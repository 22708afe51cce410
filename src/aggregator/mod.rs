//! Aggregation of filtered transactions into metrics and grouped views.
//!
//! This module transforms a filtered dataset into:
//! - Scalar summary metrics
//! - Grouped views keyed by region or category
//! - Long-format tables for grouped charts

pub mod grouping;
pub mod metrics;
pub mod reshape;
pub mod views;

// Re-export main types and functions
pub use grouping::{group_by, AggregationOp, Column, GroupKey, GroupedRow, GroupedView, Measure};
pub use metrics::{summarize, SummaryMetrics};
pub use reshape::{to_long_format, LongRow};
pub use views::{
    category_summary, customers_by_region, net_vs_gross_by_category, quantity_vs_revenue,
    revenue_by_region, revenue_share_by_region, RegionShare, ScatterPoint,
};
