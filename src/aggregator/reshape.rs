//! Wide-to-long reshape for grouped views.
//!
//! Grouped bar charts want one row per (group, series) pair rather
//! than one column per series.

use super::grouping::GroupedView;
use crate::utils::error::GroupingError;
use serde::{Deserialize, Serialize};

/// One (id, variable, value) triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongRow {
    pub id: String,
    pub variable: String,
    pub value: f64,
}

/// Melt a grouped view into long format
///
/// **Public** - main entry point for reshaping
///
/// Output is ordered by grouped row, then by the order of
/// `value_columns`: each group's series sit next to each other. This is
/// not the series-major order of a dataframe `melt`; sort by `variable`
/// if a consumer needs that.
///
/// # Errors
/// * `GroupingError::UnknownColumn` - `id_column` is not the view's key,
///   or a value column does not exist
pub fn to_long_format(
    view: &GroupedView,
    id_column: &str,
    value_columns: &[&str],
) -> Result<Vec<LongRow>, GroupingError> {
    if id_column != view.key_column() {
        return Err(GroupingError::UnknownColumn(id_column.to_string()));
    }

    let indices = value_columns
        .iter()
        .map(|name| view.column_index(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut long = Vec::with_capacity(view.len() * value_columns.len());
    for row in view.rows() {
        for (name, index) in value_columns.iter().zip(&indices) {
            long.push(LongRow {
                id: row.key.clone(),
                variable: name.to_string(),
                value: row.values[*index],
            });
        }
    }

    Ok(long)
}
