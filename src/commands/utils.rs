use crate::aggregator::summarize;
use crate::filter::FilteredDataset;
use crate::loader::load_transactions;
use crate::output::{format_currency, read_render_model};
use crate::utils::config::{OPTIONAL_COLUMNS, REQUIRED_COLUMNS, SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Print the filter options a data file offers
pub fn inspect_data_file(data_path: PathBuf) -> Result<()> {
    let table = load_transactions(&data_path).context("Failed to load transaction data")?;

    println!("Data file: {}", data_path.display());
    println!("  Rows: {}", table.len());
    println!("  Columns: {}", table.columns().join(", "));

    let optional: Vec<&str> = OPTIONAL_COLUMNS
        .iter()
        .copied()
        .filter(|c| table.has_column(c))
        .collect();
    if optional.is_empty() {
        println!("  Optional columns: none");
    } else {
        println!("  Optional columns: {}", optional.join(", "));
    }

    println!("  Regions: {}", table.regions().join(", "));
    if let Some((min, max)) = table.revenue_range() {
        println!(
            "  Revenue range: {} - {}",
            format_currency(min),
            format_currency(max)
        );
    }

    let metrics = summarize(&FilteredDataset::all(&table));
    println!("  Total revenue: {}", format_currency(metrics.total_revenue));

    Ok(())
}

/// Validate a render model JSON file
pub fn validate_model_file(file_path: PathBuf) -> Result<()> {
    println!("Validating render model: {}", file_path.display());

    let model = read_render_model(&file_path)?;

    println!("✓ Valid render model JSON");
    println!("  Version: {}", model.version);
    println!("  View: {}", model.view);
    println!("  Generated: {}", model.generated_at);
    println!(
        "  Records: {} of {}",
        model.filtered_records, model.source_records
    );
    if model.is_empty() {
        println!("  Status: no data");
    } else {
        println!("  Panels: {}", model.panels().len());
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Sales Dashboard Render Model Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!("Required CSV columns: {}", REQUIRED_COLUMNS.join(", "));
    println!("Optional CSV columns: {}", OPTIONAL_COLUMNS.join(", "));
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string     - ISO 8601 timestamp");
        println!("  view: string             - overview | data-table | charts");
        println!("  criteria: object         - Effective filters after clamping");
        println!("    regions: array         - Selected regions");
        println!("    min_revenue: number    - Inclusive lower bound");
        println!("    max_revenue: number    - Inclusive upper bound");
        println!("  source_records: number   - Rows in the data file");
        println!("  filtered_records: number - Rows matching the filters");
        println!("  body: object             - Tagged by 'status'");
        println!("    no_data: message       - Shown instead of charts");
        println!("    ready: metrics?, panels, notices?");
        println!("      panels[].kind        - bar | grouped_bar | scatter | pie | grid | records");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Sales Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Render Model Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Filtering and aggregation for commercial transaction dashboards.");
}
