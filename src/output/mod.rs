//! Output writers for render models.
//!
//! This module handles:
//! - JSON render models (write and read back)
//! - Grid tables with currency and thousands formatting
//! - Text summaries

pub mod grid;
pub mod json;
pub mod text;

// Re-export main functions
pub use grid::{build_grid, format_currency, format_thousands, ColumnFormat, GridColumn, GridTable};
pub use json::{read_render_model, render_model_to_string, write_render_model};
pub use text::{grouped_text_summary, metrics_text_summary};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
