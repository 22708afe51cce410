//! Group-by engine over filtered transactions.
//!
//! Groups records by a categorical key and folds each group with a
//! list of measures. Output rows come back in key order; callers that
//! want a ranking call `GroupedView::ranked_by`.

use crate::filter::FilteredDataset;
use crate::loader::Transaction;
use crate::utils::config::{
    CATEGORY, COST, CUSTOMER_ID, NET_REVENUE, PRODUCT_NAME, QUANTITY, REGION, TOTAL_REVENUE,
};
use crate::utils::error::GroupingError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// A source column, or the derived net revenue column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    CustomerId,
    Region,
    TotalRevenue,
    Quantity,
    Cost,
    Category,
    ProductName,
    NetRevenue,
}

/// A single cell read from a record
#[derive(Debug, Clone, Copy)]
enum Cell<'r> {
    Text(&'r str),
    Number(f64),
}

/// Hashable form of a cell for distinct counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DistinctKey<'r> {
    Text(&'r str),
    Bits(u64),
}

impl Column {
    /// Header name in the CSV (or the derived column name)
    pub fn name(&self) -> &'static str {
        match self {
            Column::CustomerId => CUSTOMER_ID,
            Column::Region => REGION,
            Column::TotalRevenue => TOTAL_REVENUE,
            Column::Quantity => QUANTITY,
            Column::Cost => COST,
            Column::Category => CATEGORY,
            Column::ProductName => PRODUCT_NAME,
            Column::NetRevenue => NET_REVENUE,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Column::TotalRevenue | Column::Quantity | Column::Cost | Column::NetRevenue
        )
    }

    /// Derived columns are always available
    fn is_derived(&self) -> bool {
        matches!(self, Column::NetRevenue)
    }

    fn cell<'r>(&self, tx: &'r Transaction) -> Option<Cell<'r>> {
        match self {
            Column::CustomerId => Some(Cell::Text(&tx.customer_id)),
            Column::Region => Some(Cell::Text(&tx.region)),
            Column::TotalRevenue => Some(Cell::Number(tx.total_revenue)),
            Column::Quantity => Some(Cell::Number(tx.quantity as f64)),
            Column::Cost => Some(Cell::Number(tx.cost)),
            Column::Category => tx.category.as_deref().map(Cell::Text),
            Column::ProductName => tx.product_name.as_deref().map(Cell::Text),
            Column::NetRevenue => Some(Cell::Number(tx.net_revenue())),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Categorical grouping keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    Region,
    Category,
}

impl GroupKey {
    pub fn column(&self) -> Column {
        match self {
            GroupKey::Region => Column::Region,
            GroupKey::Category => Column::Category,
        }
    }

    pub fn name(&self) -> &'static str {
        self.column().name()
    }

    fn value<'r>(&self, tx: &'r Transaction) -> Option<&'r str> {
        match self {
            GroupKey::Region => Some(tx.region.as_str()),
            GroupKey::Category => tx.category.as_deref(),
        }
    }
}

/// Supported aggregation functions for measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationOp {
    Sum,
    Mean,
    /// Non-empty cells
    Count,
    /// Distinct non-empty cells
    CountDistinct,
}

impl AggregationOp {
    fn requires_numeric(&self) -> bool {
        matches!(self, AggregationOp::Sum | AggregationOp::Mean)
    }
}

impl fmt::Display for AggregationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregationOp::Sum => "sum",
            AggregationOp::Mean => "mean",
            AggregationOp::Count => "count",
            AggregationOp::CountDistinct => "count_distinct",
        };
        f.write_str(name)
    }
}

/// One aggregated output column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub column: Column,
    pub op: AggregationOp,
    /// Output column name, defaults to the source column name
    pub name: String,
}

impl Measure {
    pub fn new(column: Column, op: AggregationOp) -> Self {
        Self {
            column,
            op,
            name: column.name().to_string(),
        }
    }

    pub fn sum(column: Column) -> Self {
        Self::new(column, AggregationOp::Sum)
    }

    pub fn mean(column: Column) -> Self {
        Self::new(column, AggregationOp::Mean)
    }

    pub fn count(column: Column) -> Self {
        Self::new(column, AggregationOp::Count)
    }

    pub fn count_distinct(column: Column) -> Self {
        Self::new(column, AggregationOp::CountDistinct)
    }

    /// Rename the output column
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// One group and its measure values, in measure order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedRow {
    pub key: String,
    pub values: Vec<f64>,
}

/// Result of a group-by
///
/// Every row carries exactly one value per value column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GroupedViewFields")]
pub struct GroupedView {
    key_column: String,
    value_columns: Vec<String>,
    rows: Vec<GroupedRow>,
}

#[derive(Deserialize)]
struct GroupedViewFields {
    key_column: String,
    value_columns: Vec<String>,
    rows: Vec<GroupedRow>,
}

impl TryFrom<GroupedViewFields> for GroupedView {
    type Error = GroupingError;

    fn try_from(fields: GroupedViewFields) -> Result<Self, Self::Error> {
        let expected = fields.value_columns.len();
        if let Some(row) = fields.rows.iter().find(|r| r.values.len() != expected) {
            return Err(GroupingError::RowWidth {
                key: row.key.clone(),
                expected,
                found: row.values.len(),
            });
        }

        Ok(Self {
            key_column: fields.key_column,
            value_columns: fields.value_columns,
            rows: fields.rows,
        })
    }
}

impl GroupedView {
    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    pub fn value_columns(&self) -> &[String] {
        &self.value_columns
    }

    pub fn rows(&self) -> &[GroupedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, GroupingError> {
        self.value_columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| GroupingError::UnknownColumn(name.to_string()))
    }

    /// All values of one measure, in row order
    pub fn column(&self, name: &str) -> Result<Vec<f64>, GroupingError> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| r.values[index]).collect())
    }

    /// Sum of one measure across every group
    pub fn total(&self, name: &str) -> Result<f64, GroupingError> {
        Ok(self.column(name)?.iter().sum())
    }

    /// Value of a measure for one key
    pub fn value(&self, key: &str, name: &str) -> Option<f64> {
        let index = self.column_index(name).ok()?;
        self.rows
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.values[index])
    }

    /// Sort by a measure descending, ties by key ascending
    pub fn ranked_by(mut self, name: &str) -> Result<Self, GroupingError> {
        let index = self.column_index(name)?;
        self.rows.sort_by(|a, b| {
            b.values[index]
                .total_cmp(&a.values[index])
                .then_with(|| a.key.cmp(&b.key))
        });
        Ok(self)
    }
}

/// Running state of one measure within one group
enum Accumulator<'r> {
    Sum(f64),
    Mean { sum: f64, count: usize },
    Count(usize),
    Distinct(HashSet<DistinctKey<'r>>),
}

impl<'r> Accumulator<'r> {
    fn new(op: AggregationOp) -> Self {
        match op {
            AggregationOp::Sum => Accumulator::Sum(0.0),
            AggregationOp::Mean => Accumulator::Mean { sum: 0.0, count: 0 },
            AggregationOp::Count => Accumulator::Count(0),
            AggregationOp::CountDistinct => Accumulator::Distinct(HashSet::new()),
        }
    }

    fn add(&mut self, cell: Option<Cell<'r>>) {
        let Some(cell) = cell else {
            return;
        };
        match (self, cell) {
            (Accumulator::Sum(total), Cell::Number(v)) => *total += v,
            (Accumulator::Mean { sum, count }, Cell::Number(v)) => {
                *sum += v;
                *count += 1;
            }
            (Accumulator::Count(n), _) => *n += 1,
            (Accumulator::Distinct(seen), Cell::Text(s)) => {
                seen.insert(DistinctKey::Text(s));
            }
            (Accumulator::Distinct(seen), Cell::Number(v)) => {
                // -0.0 and 0.0 are the same value
                let v = if v == 0.0 { 0.0 } else { v };
                seen.insert(DistinctKey::Bits(v.to_bits()));
            }
            // Sum/Mean over text is rejected before accumulation
            (Accumulator::Sum(_), Cell::Text(_)) | (Accumulator::Mean { .. }, Cell::Text(_)) => {}
        }
    }

    fn finish(self) -> f64 {
        match self {
            Accumulator::Sum(total) => total,
            Accumulator::Mean { sum, count } => {
                if count > 0 {
                    sum / count as f64
                } else {
                    0.0
                }
            }
            Accumulator::Count(n) => n as f64,
            Accumulator::Distinct(seen) => seen.len() as f64,
        }
    }
}

/// Group records by a key and aggregate each group
///
/// **Public** - main entry point for grouping
///
/// # Arguments
/// * `dataset` - Records to group
/// * `key` - Categorical grouping column
/// * `measures` - Aggregations to compute per group, in output order
///
/// # Returns
/// One row per distinct key value, in key order
///
/// # Errors
/// * `GroupingError::NonNumericMeasure` - Sum/Mean over a text column
/// * `GroupingError::MissingColumn` - Key or measure column absent from the table
pub fn group_by(
    dataset: &FilteredDataset,
    key: GroupKey,
    measures: &[Measure],
) -> Result<GroupedView, GroupingError> {
    let table = dataset.table();

    if !table.has_column(key.name()) {
        return Err(GroupingError::MissingColumn(key.name().to_string()));
    }

    for measure in measures {
        if !measure.column.is_derived() && !table.has_column(measure.column.name()) {
            return Err(GroupingError::MissingColumn(
                measure.column.name().to_string(),
            ));
        }
        if measure.op.requires_numeric() && !measure.column.is_numeric() {
            return Err(GroupingError::NonNumericMeasure {
                column: measure.column.name().to_string(),
                op: measure.op.to_string(),
            });
        }
    }

    let mut groups: BTreeMap<&str, Vec<Accumulator>> = BTreeMap::new();
    let mut skipped = 0usize;

    for tx in dataset.iter() {
        let Some(group) = key.value(tx) else {
            skipped += 1;
            continue;
        };

        let accumulators = groups
            .entry(group)
            .or_insert_with(|| measures.iter().map(|m| Accumulator::new(m.op)).collect());

        for (acc, measure) in accumulators.iter_mut().zip(measures) {
            acc.add(measure.column.cell(tx));
        }
    }

    if skipped > 0 {
        debug!("Skipped {} records with no {} value", skipped, key.name());
    }

    let rows: Vec<GroupedRow> = groups
        .into_iter()
        .map(|(group, accumulators)| GroupedRow {
            key: group.to_string(),
            values: accumulators.into_iter().map(Accumulator::finish).collect(),
        })
        .collect();

    debug!(
        "Grouped {} records into {} {} groups",
        dataset.len(),
        rows.len(),
        key.name()
    );

    Ok(GroupedView {
        key_column: key.name().to_string(),
        value_columns: measures.iter().map(|m| m.name.clone()).collect(),
        rows,
    })
}
