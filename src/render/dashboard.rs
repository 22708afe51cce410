//! Request/response rendering of dashboard views.
//!
//! Each call validates the criteria, filters the source table and
//! builds the panels of the requested view from scratch. Nothing is
//! cached between calls.

use super::model::{Panel, RenderBody, RenderModel};
use super::view::View;
use crate::aggregator::{
    category_summary, customers_by_region, net_vs_gross_by_category, quantity_vs_revenue,
    revenue_by_region, revenue_share_by_region, summarize,
};
use crate::aggregator::views::{CUSTOMER_COUNT, PRODUCTS_SOLD, REGION_COUNT};
use crate::filter::{self, FilterCriteria, FilteredDataset};
use crate::loader::{load_transactions, TransactionTable};
use crate::output::{build_grid, ColumnFormat, GridColumn};
use crate::utils::config::{
    CategoryScope, DashboardConfig, GridSettings, CATEGORY, NO_DATA_MESSAGE, PRODUCT_NAME,
    QUANTITY, REGION, SCHEMA_VERSION, TOTAL_REVENUE,
};
use crate::utils::error::{LoadError, RenderError};
use chrono::Utc;
use log::{debug, info};
use std::path::Path;

/// Settings that shape a render, independent of the criteria
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub category_scope: CategoryScope,
    pub grid: GridSettings,
}

impl From<&DashboardConfig> for RenderOptions {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            category_scope: config.dashboard.category_scope,
            grid: config.grid.clone(),
        }
    }
}

/// Render one view of the dashboard
///
/// **Public** - main entry point for rendering
///
/// # Arguments
/// * `table` - Source table for the session
/// * `view` - Page to render
/// * `criteria` - Sidebar filters; bounds are clamped to the data range
/// * `options` - Category scope and grid settings
///
/// # Returns
/// A render model; `RenderBody::NoData` when the filters match nothing
///
/// # Errors
/// * `RenderError::Filter` - A selected region is not in the data
/// * `RenderError::Grouping` - A grouped view could not be built
pub fn render(
    table: &TransactionTable,
    view: View,
    criteria: &FilterCriteria,
    options: &RenderOptions,
) -> Result<RenderModel, RenderError> {
    criteria.validate_against(table)?;
    let criteria = criteria.clamp_to(table);

    let filtered = filter::apply(table, &criteria);

    let body = if filtered.is_empty() {
        info!("No records match the selected filters");
        RenderBody::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    } else {
        let category_source = match options.category_scope {
            CategoryScope::Filtered => filtered.clone(),
            CategoryScope::Source => FilteredDataset::all(table),
        };

        match view {
            View::Overview => overview_body(&filtered, &category_source)?,
            View::DataTable => data_table_body(&category_source, &options.grid)?,
            View::Charts => charts_body(&filtered)?,
        }
    };

    debug!(
        "Rendered {} view from {} of {} records",
        view,
        filtered.len(),
        table.len()
    );

    Ok(RenderModel {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        view,
        source_records: table.len(),
        filtered_records: filtered.len(),
        criteria,
        body,
    })
}

/// Metrics, region ranking, scatter and the category comparison
///
/// **Private** - internal helper for render
fn overview_body(
    filtered: &FilteredDataset,
    category_source: &FilteredDataset,
) -> Result<RenderBody, RenderError> {
    let metrics = summarize(filtered);
    info!("Metrics: {}", metrics.summary());

    let mut panels = vec![
        Panel::Bar {
            title: "Revenue by Region (Ranked)".to_string(),
            x: REGION.to_string(),
            y: TOTAL_REVENUE.to_string(),
            color: Some(REGION.to_string()),
            data: revenue_by_region(filtered)?,
        },
        Panel::Scatter {
            title: "Quantity vs Revenue".to_string(),
            x: QUANTITY.to_string(),
            y: TOTAL_REVENUE.to_string(),
            color: Some(REGION.to_string()),
            points: quantity_vs_revenue(filtered),
        },
    ];
    let mut notices = Vec::new();

    if category_source.table().has_category() {
        panels.push(Panel::GroupedBar {
            title: "Net vs Gross Revenue by Category".to_string(),
            x: "id".to_string(),
            y: "value".to_string(),
            series: "variable".to_string(),
            data: net_vs_gross_by_category(category_source)?,
        });
    } else {
        notices.push(missing_columns_notice(
            "Net vs gross revenue by category",
            &[CATEGORY],
        ));
    }

    Ok(RenderBody::Ready {
        metrics: Some(metrics),
        panels,
        notices,
    })
}

/// Region distribution, customer counts and the filtered rows
///
/// **Private** - internal helper for render
fn charts_body(filtered: &FilteredDataset) -> Result<RenderBody, RenderError> {
    let panels = vec![
        Panel::Pie {
            title: "Revenue Distribution by Region".to_string(),
            names: REGION.to_string(),
            values: TOTAL_REVENUE.to_string(),
            slices: revenue_share_by_region(filtered)?,
        },
        Panel::Bar {
            title: "Customers by Region".to_string(),
            x: REGION.to_string(),
            y: CUSTOMER_COUNT.to_string(),
            color: Some(REGION.to_string()),
            data: customers_by_region(filtered)?,
        },
        Panel::Records {
            title: "Filtered Data".to_string(),
            records: filtered.iter().cloned().collect(),
        },
    ];

    Ok(RenderBody::Ready {
        metrics: None,
        panels,
        notices: Vec::new(),
    })
}

/// Category summary formatted for the grid
///
/// **Private** - internal helper for render
fn data_table_body(
    category_source: &FilteredDataset,
    grid: &GridSettings,
) -> Result<RenderBody, RenderError> {
    let table = category_source.table();
    let missing: Vec<&str> = [CATEGORY, PRODUCT_NAME]
        .into_iter()
        .filter(|c| !table.has_column(c))
        .collect();

    if !missing.is_empty() {
        return Ok(RenderBody::Ready {
            metrics: None,
            panels: Vec::new(),
            notices: vec![missing_columns_notice("Category summary", &missing)],
        });
    }

    let summary = category_summary(category_source)?;
    let grid_table = build_grid(
        &summary,
        GridColumn::new(CATEGORY, "Category", ColumnFormat::Text),
        vec![
            GridColumn::new(PRODUCTS_SOLD, "Products Sold", ColumnFormat::Thousands),
            GridColumn::new(REGION_COUNT, "Regions", ColumnFormat::Thousands),
            GridColumn::new(QUANTITY, "Quantity Sold", ColumnFormat::Thousands),
            GridColumn::new(TOTAL_REVENUE, "Total Value", ColumnFormat::Currency),
        ],
        grid,
    )?;

    Ok(RenderBody::Ready {
        metrics: None,
        panels: vec![Panel::Grid {
            title: "Category Summary".to_string(),
            table: grid_table,
        }],
        notices: Vec::new(),
    })
}

fn missing_columns_notice(panel: &str, missing: &[&str]) -> String {
    format!("{} unavailable: missing columns {}", panel, missing.join(", "))
}

/// A loaded dashboard session
///
/// Owns the source table for its lifetime and renders any number of
/// views against it.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: TransactionTable,
    options: RenderOptions,
    default_view: View,
}

impl Dashboard {
    pub fn new(table: TransactionTable, config: &DashboardConfig) -> Self {
        Self {
            table,
            options: RenderOptions::from(config),
            default_view: config.dashboard.default_view,
        }
    }

    /// Load the data file and start a session
    pub fn load(path: impl AsRef<Path>, config: &DashboardConfig) -> Result<Self, LoadError> {
        let table = load_transactions(path)?;
        Ok(Self::new(table, config))
    }

    pub fn table(&self) -> &TransactionTable {
        &self.table
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn default_view(&self) -> View {
        self.default_view
    }

    /// Every region and the full revenue range
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::all(&self.table)
    }

    pub fn render(&self, view: View, criteria: &FilterCriteria) -> Result<RenderModel, RenderError> {
        render(&self.table, view, criteria, &self.options)
    }
}
