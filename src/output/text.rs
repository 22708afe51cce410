//! Plain-text summaries for the terminal.

use super::grid::{format_currency, format_thousands};
use crate::aggregator::{GroupedView, SummaryMetrics};

/// Headline metrics block
pub fn metrics_text_summary(metrics: &SummaryMetrics) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16} {:>16}\n",
        "Transactions",
        format_thousands(metrics.transaction_count as i64)
    ));
    out.push_str(&format!(
        "{:<16} {:>16}\n",
        "Total Revenue",
        format_currency(metrics.total_revenue)
    ));
    out.push_str(&format!(
        "{:<16} {:>16.2}\n",
        "Avg Quantity", metrics.avg_quantity
    ));
    out.push_str(&format!(
        "{:<16} {:>16}\n",
        "Total Cost",
        format_currency(metrics.total_cost)
    ));
    out.push_str(&format!(
        "{:<16} {:>16}\n",
        "Avg Ticket",
        format_currency(metrics.avg_ticket)
    ));
    out.push_str(&format!(
        "{:<16} {:>16}",
        "Net Revenue",
        format_currency(metrics.net_revenue)
    ));
    out
}

/// One line per group: key and first measure
pub fn grouped_text_summary(view: &GroupedView, limit: usize) -> String {
    let mut lines = vec![format!(
        "{:<20} {:>16}",
        view.key_column(),
        view.value_columns().first().map(String::as_str).unwrap_or("")
    )];

    for row in view.rows().iter().take(limit) {
        let value = row.values.first().copied().unwrap_or(0.0);
        lines.push(format!("{:<20} {:>16.2}", row.key, value));
    }

    if view.len() > limit {
        lines.push(format!("... {} more", view.len() - limit));
    }

    lines.join("\n")
}
