//! Table preparation for the grid collaborator.
//!
//! This is the only place numbers are turned into display strings;
//! charts and metrics keep raw numeric values.

use crate::aggregator::GroupedView;
use crate::utils::config::GridSettings;
use crate::utils::error::GroupingError;
use serde::{Deserialize, Serialize};

/// How a grid column is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFormat {
    Text,
    /// `$1,234.56`
    Currency,
    /// `1,234`
    Thousands,
}

/// Column definition: source field, display header, format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridColumn {
    pub field: String,
    pub header: String,
    pub format: ColumnFormat,
}

impl GridColumn {
    pub fn new(field: impl Into<String>, header: impl Into<String>, format: ColumnFormat) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
            format,
        }
    }
}

/// Client-side behaviour requested from the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    pub page_size: usize,
    pub page_count: usize,
    pub sortable: bool,
    pub filterable: bool,
}

/// Formatted table ready for the grid collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridTable {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<Vec<String>>,
    pub options: GridOptions,
}

impl GridTable {
    /// Rows of one 0-based page; empty past the end
    pub fn page(&self, index: usize) -> &[Vec<String>] {
        let size = self.options.page_size.max(1);
        let start = index.saturating_mul(size).min(self.rows.len());
        let end = start.saturating_add(size).min(self.rows.len());
        &self.rows[start..end]
    }
}

/// Format a grouped view for the grid
///
/// # Arguments
/// * `view` - Grouped data to display
/// * `key` - Column definition for the group key
/// * `values` - Column definitions for the measures, looked up by field name
/// * `settings` - Pagination and interaction settings
///
/// # Errors
/// * `GroupingError::UnknownColumn` - A value column is not in the view
pub fn build_grid(
    view: &GroupedView,
    key: GridColumn,
    values: Vec<GridColumn>,
    settings: &GridSettings,
) -> Result<GridTable, GroupingError> {
    let indices = values
        .iter()
        .map(|c| view.column_index(&c.field))
        .collect::<Result<Vec<_>, _>>()?;

    let rows: Vec<Vec<String>> = view
        .rows()
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(values.len() + 1);
            cells.push(row.key.clone());
            for (column, index) in values.iter().zip(&indices) {
                cells.push(format_value(row.values[*index], column.format));
            }
            cells
        })
        .collect();

    let page_size = settings.page_size.max(1);
    let page_count = rows.len().div_ceil(page_size);

    let mut columns = Vec::with_capacity(values.len() + 1);
    columns.push(key);
    columns.extend(values);

    Ok(GridTable {
        columns,
        rows,
        options: GridOptions {
            page_size,
            page_count,
            sortable: settings.sortable,
            filterable: settings.filterable,
        },
    })
}

fn format_value(value: f64, format: ColumnFormat) -> String {
    match format {
        ColumnFormat::Text => value.to_string(),
        ColumnFormat::Currency => format_currency(value),
        ColumnFormat::Thousands => format_thousands(value.round() as i64),
    }
}

/// Format a monetary amount as `$1,234.56`
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_digits(whole),
        fraction
    )
}

/// Format an integer with thousands separators
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    if value < 0 {
        format!("-{}", group_digits(&digits))
    } else {
        group_digits(&digits)
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
