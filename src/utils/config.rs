//! Configuration and constants for the dashboard.

use super::error::ConfigError;
use crate::render::View;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current render model schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Data file read when no `--data` path is given
pub const DEFAULT_DATA_FILE: &str = "commercial_data.csv";

/// Environment variable holding the config file path
pub const CONFIG_ENV_VAR: &str = "SALES_DASH_CONFIG";

// Column identifiers. These are a contract with existing data files
// and must match the CSV header byte for byte.
pub const CUSTOMER_ID: &str = "Customer_ID";
pub const REGION: &str = "Region";
pub const TOTAL_REVENUE: &str = "Total_Revenue";
pub const QUANTITY: &str = "Quantity";
pub const COST: &str = "Cost";
pub const CATEGORY: &str = "Category";
pub const PRODUCT_NAME: &str = "Product_Name";

/// Derived column, never present in the file
pub const NET_REVENUE: &str = "Net_Revenue";

pub const REQUIRED_COLUMNS: &[&str] = &[CUSTOMER_ID, REGION, TOTAL_REVENUE, QUANTITY, COST];
pub const OPTIONAL_COLUMNS: &[&str] = &[CATEGORY, PRODUCT_NAME];

/// Message shown in place of charts when the filters match nothing
pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

// Grid pagination
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 1000;

/// Which table the category views are computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryScope {
    /// Same filtered rows as every other view
    #[default]
    Filtered,
    /// The full source table, ignoring the sidebar filters
    Source,
}

/// Complete dashboard configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dashboard: DashboardSettings,

    #[serde(default)]
    pub grid: GridSettings,
}

/// View selection and aggregation scope
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardSettings {
    /// View rendered when none is requested
    #[serde(default)]
    pub default_view: View,

    /// Scope of the category net/gross and summary views
    #[serde(default)]
    pub category_scope: CategoryScope,
}

/// Options handed to the grid collaborator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GridSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_true")]
    pub sortable: bool,

    #[serde(default = "default_true")]
    pub filterable: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sortable: true,
            filterable: true,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

/// Load the dashboard configuration from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
/// * `ConfigError::Invalid` - If a value is out of range
///
/// # Example
/// ```ignore
/// let config = load_config("dashboard.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DashboardConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(contents: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::from_str(contents)?;

    if config.grid.page_size == 0 || config.grid.page_size > MAX_PAGE_SIZE {
        return Err(ConfigError::Invalid(format!(
            "grid.page_size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, config.grid.page_size
        )));
    }

    Ok(config)
}
