//! Named grouped views used by the dashboard panels.

use super::grouping::{group_by, Column, GroupKey, GroupedView, Measure};
use super::reshape::{to_long_format, LongRow};
use crate::filter::FilteredDataset;
use crate::utils::config::{CATEGORY, NET_REVENUE, TOTAL_REVENUE};
use crate::utils::error::GroupingError;
use serde::{Deserialize, Serialize};

pub const CUSTOMER_COUNT: &str = "Customer_Count";
pub const PRODUCTS_SOLD: &str = "Products_Sold";
pub const REGION_COUNT: &str = "Regions";

/// Revenue of one region and its share of the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShare {
    pub region: String,
    pub revenue: f64,
    pub percentage: f64,
}

/// One transaction plotted as quantity against revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub region: String,
    pub quantity: u64,
    pub revenue: f64,
}

/// Revenue per region, highest first
pub fn revenue_by_region(dataset: &FilteredDataset) -> Result<GroupedView, GroupingError> {
    group_by(dataset, GroupKey::Region, &[Measure::sum(Column::TotalRevenue)])?
        .ranked_by(TOTAL_REVENUE)
}

/// Distinct customers per region, in region order
pub fn customers_by_region(dataset: &FilteredDataset) -> Result<GroupedView, GroupingError> {
    group_by(
        dataset,
        GroupKey::Region,
        &[Measure::count_distinct(Column::CustomerId).named(CUSTOMER_COUNT)],
    )
}

/// Revenue share per region (pie chart input)
///
/// Percentages are 0 when total revenue is 0.
pub fn revenue_share_by_region(dataset: &FilteredDataset) -> Result<Vec<RegionShare>, GroupingError> {
    let view = group_by(dataset, GroupKey::Region, &[Measure::sum(Column::TotalRevenue)])?;
    let total = view.total(TOTAL_REVENUE)?;

    Ok(view
        .rows()
        .iter()
        .map(|row| {
            let revenue = row.values[0];
            RegionShare {
                region: row.key.clone(),
                revenue,
                percentage: if total != 0.0 {
                    revenue / total * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect())
}

/// Quantity against revenue for every record
pub fn quantity_vs_revenue(dataset: &FilteredDataset) -> Vec<ScatterPoint> {
    dataset
        .iter()
        .map(|tx| ScatterPoint {
            region: tx.region.clone(),
            quantity: tx.quantity,
            revenue: tx.total_revenue,
        })
        .collect()
}

/// Net and gross revenue per category, in long format
pub fn net_vs_gross_by_category(dataset: &FilteredDataset) -> Result<Vec<LongRow>, GroupingError> {
    let view = group_by(
        dataset,
        GroupKey::Category,
        &[Measure::sum(Column::NetRevenue), Measure::sum(Column::TotalRevenue)],
    )?;
    to_long_format(&view, CATEGORY, &[NET_REVENUE, TOTAL_REVENUE])
}

/// Per-category summary backing the data table
///
/// Columns: products sold, distinct regions, quantity, revenue.
pub fn category_summary(dataset: &FilteredDataset) -> Result<GroupedView, GroupingError> {
    group_by(
        dataset,
        GroupKey::Category,
        &[
            Measure::count(Column::ProductName).named(PRODUCTS_SOLD),
            Measure::count_distinct(Column::Region).named(REGION_COUNT),
            Measure::sum(Column::Quantity),
            Measure::sum(Column::TotalRevenue),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{Transaction, TransactionTable};
    use crate::utils::config::QUANTITY;

    fn table() -> TransactionTable {
        TransactionTable::from_records(vec![
            Transaction::new("c1", "A", 100.0, 2, 40.0)
                .with_category("Toys")
                .with_product("Robot"),
            Transaction::new("c2", "B", 50.0, 1, 10.0)
                .with_category("Toys")
                .with_product("Kite"),
            Transaction::new("c1", "A", 30.0, 3, 5.0)
                .with_category("Books")
                .with_product("Atlas"),
        ])
    }

    #[test]
    fn test_revenue_by_region_ranked() {
        let table = table();
        let view = revenue_by_region(&FilteredDataset::all(&table)).unwrap();
        assert_eq!(view.rows()[0].key, "A");
        assert_eq!(view.rows()[0].values, vec![130.0]);
        assert_eq!(view.rows()[1].key, "B");
    }

    #[test]
    fn test_revenue_share() {
        let table = table();
        let shares = revenue_share_by_region(&FilteredDataset::all(&table)).unwrap();
        let total: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_revenue_share_zero_total() {
        let table = TransactionTable::from_records(vec![Transaction::new("c1", "A", 0.0, 1, 0.0)]);
        let shares = revenue_share_by_region(&FilteredDataset::all(&table)).unwrap();
        assert_eq!(shares[0].percentage, 0.0);
    }

    #[test]
    fn test_customers_by_region() {
        let table = table();
        let view = customers_by_region(&FilteredDataset::all(&table)).unwrap();
        assert_eq!(view.value("A", CUSTOMER_COUNT), Some(1.0));
        assert_eq!(view.value("B", CUSTOMER_COUNT), Some(1.0));
    }

    #[test]
    fn test_category_summary() {
        let table = table();
        let view = category_summary(&FilteredDataset::all(&table)).unwrap();
        assert_eq!(view.value("Toys", PRODUCTS_SOLD), Some(2.0));
        assert_eq!(view.value("Toys", REGION_COUNT), Some(2.0));
        assert_eq!(view.value("Toys", QUANTITY), Some(3.0));
        assert_eq!(view.value("Toys", TOTAL_REVENUE), Some(150.0));
    }

    #[test]
    fn test_net_vs_gross() {
        let table = table();
        let long = net_vs_gross_by_category(&FilteredDataset::all(&table)).unwrap();
        assert_eq!(long.len(), 4);
        assert_eq!(long[0].id, "Books");
        assert_eq!(long[0].variable, NET_REVENUE);
        assert_eq!(long[0].value, 25.0);
    }
}
