//! Apply filter criteria to the source table.

use super::criteria::FilterCriteria;
use crate::loader::{Transaction, TransactionTable};
use log::debug;

/// Records that passed the current filters
///
/// Borrows from the source table; rebuilt on every request.
#[derive(Debug, Clone)]
pub struct FilteredDataset<'a> {
    table: &'a TransactionTable,
    records: Vec<&'a Transaction>,
}

impl<'a> FilteredDataset<'a> {
    /// Every record of the table, unfiltered
    pub fn all(table: &'a TransactionTable) -> Self {
        Self {
            table,
            records: table.records().iter().collect(),
        }
    }

    /// The table these records were drawn from
    pub fn table(&self) -> &'a TransactionTable {
        self.table
    }

    pub fn records(&self) -> &[&'a Transaction] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Transaction> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Filter the table by region membership and revenue interval
///
/// **Public** - main entry point for filtering
///
/// Pure: source order is preserved and applying the same criteria
/// twice gives the same records. An empty result is not an error.
pub fn apply<'a>(table: &'a TransactionTable, criteria: &FilterCriteria) -> FilteredDataset<'a> {
    let records: Vec<&Transaction> = table
        .records()
        .iter()
        .filter(|r| criteria.includes_region(&r.region) && criteria.includes_revenue(r.total_revenue))
        .collect();

    debug!(
        "Filter kept {} of {} records ({} regions, revenue {}..={})",
        records.len(),
        table.len(),
        criteria.regions().len(),
        criteria.min_revenue(),
        criteria.max_revenue()
    );

    FilteredDataset { table, records }
}
