//! Transaction record and table definitions.
//!
//! Field names follow the CSV header exactly so records
//! round-trip through serde without a mapping layer.

use crate::utils::config::{CATEGORY, OPTIONAL_COLUMNS, PRODUCT_NAME, REQUIRED_COLUMNS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One row of the source table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque customer identifier
    #[serde(rename = "Customer_ID")]
    pub customer_id: String,

    /// Sales territory
    #[serde(rename = "Region")]
    pub region: String,

    /// Gross revenue of the transaction
    #[serde(rename = "Total_Revenue")]
    pub total_revenue: f64,

    /// Units sold
    #[serde(rename = "Quantity")]
    pub quantity: u64,

    #[serde(rename = "Cost")]
    pub cost: f64,

    /// Product classification (optional column)
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "Product_Name", default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl Transaction {
    pub fn new(
        customer_id: impl Into<String>,
        region: impl Into<String>,
        total_revenue: f64,
        quantity: u64,
        cost: f64,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            region: region.into(),
            total_revenue,
            quantity,
            cost,
            category: None,
            product_name: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_product(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// Revenue minus cost for this row
    pub fn net_revenue(&self) -> f64 {
        self.total_revenue - self.cost
    }
}

/// The loaded source table
///
/// Immutable once built. Every view is derived from it by borrowing.
#[derive(Debug, Clone)]
pub struct TransactionTable {
    source: Option<PathBuf>,
    columns: Vec<String>,
    records: Vec<Transaction>,
}

impl TransactionTable {
    /// Build a table from a header list and parsed records
    pub fn new(columns: Vec<String>, records: Vec<Transaction>) -> Self {
        Self {
            source: None,
            columns,
            records,
        }
    }

    /// Build a table that declares every known column
    pub fn from_records(records: Vec<Transaction>) -> Self {
        let columns = REQUIRED_COLUMNS
            .iter()
            .chain(OPTIONAL_COLUMNS)
            .map(|c| c.to_string())
            .collect();
        Self::new(columns, records)
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn has_category(&self) -> bool {
        self.has_column(CATEGORY)
    }

    pub fn has_product_name(&self) -> bool {
        self.has_column(PRODUCT_NAME)
    }

    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct regions in order of first appearance
    pub fn regions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.region.as_str())
            .filter(|region| seen.insert(*region))
            .collect()
    }

    /// Observed `(min, max)` revenue, `None` for an empty table
    pub fn revenue_range(&self) -> Option<(f64, f64)> {
        let mut values = self.records.iter().map(|r| r.total_revenue);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
