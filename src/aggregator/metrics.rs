//! Scalar summary metrics over a filtered dataset.
//!
//! Every ratio is guarded: an empty dataset or zero total quantity
//! yields 0, never NaN.

use crate::filter::FilteredDataset;
use log::debug;
use serde::{Deserialize, Serialize};

/// Headline metrics shown on the overview
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Number of records summarized
    pub transaction_count: usize,

    /// Sum of revenue
    pub total_revenue: f64,

    /// Sum of units sold
    pub total_quantity: u64,

    /// Mean units per transaction
    pub avg_quantity: f64,

    /// Sum of cost
    pub total_cost: f64,

    /// Revenue minus cost
    pub net_revenue: f64,

    /// Revenue per unit sold
    pub avg_ticket: f64,
}

impl SummaryMetrics {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Transactions: {} | Revenue: {:.2} | Cost: {:.2} | Net: {:.2} | Avg qty: {:.2} | Avg ticket: {:.2}",
            self.transaction_count,
            self.total_revenue,
            self.total_cost,
            self.net_revenue,
            self.avg_quantity,
            self.avg_ticket
        )
    }
}

/// Compute summary metrics
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `dataset` - Records that passed the filters
///
/// # Returns
/// Metrics with every field 0 for an empty dataset
pub fn summarize(dataset: &FilteredDataset) -> SummaryMetrics {
    if dataset.is_empty() {
        return SummaryMetrics::default();
    }

    let (total_revenue, total_cost, total_quantity) = dataset.iter().fold(
        (0.0_f64, 0.0_f64, 0_u64),
        |(revenue, cost, quantity), tx| {
            (
                revenue + tx.total_revenue,
                cost + tx.cost,
                quantity.saturating_add(tx.quantity),
            )
        },
    );

    let count = dataset.len();
    let avg_ticket = if total_quantity > 0 {
        total_revenue / total_quantity as f64
    } else {
        0.0
    };

    let metrics = SummaryMetrics {
        transaction_count: count,
        total_revenue,
        total_quantity,
        avg_quantity: total_quantity as f64 / count as f64,
        total_cost,
        net_revenue: total_revenue - total_cost,
        avg_ticket,
    };

    debug!("{}", metrics.summary());

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{Transaction, TransactionTable};

    #[test]
    fn test_summarize_empty() {
        let table = TransactionTable::from_records(vec![]);
        let metrics = summarize(&FilteredDataset::all(&table));
        assert_eq!(metrics, SummaryMetrics::default());
        assert_eq!(metrics.avg_ticket, 0.0);
        assert_eq!(metrics.avg_quantity, 0.0);
    }

    #[test]
    fn test_summarize() {
        let table = TransactionTable::from_records(vec![
            Transaction::new("c1", "A", 100.0, 4, 60.0),
            Transaction::new("c2", "B", 50.0, 1, 20.0),
        ]);
        let metrics = summarize(&FilteredDataset::all(&table));

        assert_eq!(metrics.transaction_count, 2);
        assert_eq!(metrics.total_revenue, 150.0);
        assert_eq!(metrics.total_cost, 80.0);
        assert_eq!(metrics.net_revenue, 70.0);
        assert_eq!(metrics.total_quantity, 5);
        assert_eq!(metrics.avg_quantity, 2.5);
        assert_eq!(metrics.avg_ticket, 30.0);
    }

    #[test]
    fn test_zero_quantity_guard() {
        let table = TransactionTable::from_records(vec![
            Transaction::new("c1", "A", 100.0, 0, 60.0),
            Transaction::new("c2", "A", 25.0, 0, 5.0),
        ]);
        let metrics = summarize(&FilteredDataset::all(&table));

        assert_eq!(metrics.total_revenue, 125.0);
        assert_eq!(metrics.avg_ticket, 0.0);
        assert!(!metrics.avg_quantity.is_nan());
    }
}
