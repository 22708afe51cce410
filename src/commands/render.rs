//! Render command implementation.
//!
//! The render command:
//! 1. Loads the dashboard configuration
//! 2. Loads and validates the transaction table
//! 3. Builds the filter criteria
//! 4. Renders the requested view
//! 5. Writes the render model and/or prints a summary

use super::models::RenderArgs;
use crate::aggregator::{revenue_by_region, summarize, GroupedView, SummaryMetrics};
use crate::filter::{self, FilterCriteria};
use crate::output::{grouped_text_summary, metrics_text_summary, write_render_model};
use crate::render::{Dashboard, Panel, RenderBody, RenderModel};
use crate::utils::config::{load_config, DashboardConfig, TOTAL_REVENUE};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Render command arguments
///
/// # Returns
/// The render model, after any requested output has been written
///
/// # Errors
/// * Config file read/parse failures
/// * Data file missing, empty, malformed or missing required columns
/// * Unknown regions in the filter
/// * File write errors
pub fn execute_render(args: RenderArgs) -> Result<RenderModel> {
    let start_time = Instant::now();

    info!("Starting render for data file: {}", args.data_path.display());

    // Step 1: Configuration
    info!("Step 1/5: Loading configuration...");
    let config = match &args.config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            debug!("No config file given, using defaults");
            DashboardConfig::default()
        }
    };

    // Step 2: Data
    info!("Step 2/5: Loading transactions...");
    let dashboard =
        Dashboard::load(&args.data_path, &config).context("Failed to load transaction data")?;

    // Step 3: Filters
    info!("Step 3/5: Building filter criteria...");
    let criteria = build_criteria(&dashboard, &args)?;
    debug!(
        "Criteria: {} regions, revenue {}..={}",
        criteria.regions().len(),
        criteria.min_revenue(),
        criteria.max_revenue()
    );

    // Step 4: Render
    let view = args.view.unwrap_or_else(|| dashboard.default_view());
    info!("Step 4/5: Rendering {} view...", view);
    let model = dashboard
        .render(view, &criteria)
        .context("Failed to render dashboard")?;

    // Step 5: Outputs
    info!("Step 5/5: Writing outputs...");
    if let Some(path) = &args.output_json {
        write_render_model(&model, path).context("Failed to write render model JSON")?;
        info!("✓ Render model written to: {}", path.display());
    }

    if args.print_summary {
        print_summary(&dashboard, &model)?;
    }

    let elapsed = start_time.elapsed();
    info!("Render completed in {:.2}s", elapsed.as_secs_f64());

    Ok(model)
}

/// Merge CLI filters over the default sidebar state
///
/// **Private** - internal helper for execute_render
fn build_criteria(dashboard: &Dashboard, args: &RenderArgs) -> Result<FilterCriteria> {
    let defaults = dashboard.default_criteria();

    let regions: Vec<String> = if args.regions.is_empty() {
        defaults.regions().iter().cloned().collect()
    } else {
        args.regions.clone()
    };

    // A missing bound defaults to the observed edge, widened so a single
    // given bound never inverts the interval. Clamping happens in render.
    let (lo, hi) = (defaults.min_revenue(), defaults.max_revenue());
    let min = args
        .min_revenue
        .unwrap_or_else(|| args.max_revenue.map_or(lo, |max| lo.min(max)));
    let max = args.max_revenue.unwrap_or_else(|| hi.max(min));

    FilterCriteria::new(regions, min, max).context("Invalid filter criteria")
}

/// Print the text summary to stdout
///
/// **Private** - internal helper for execute_render
fn print_summary(dashboard: &Dashboard, model: &RenderModel) -> Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("DASHBOARD SUMMARY ({})", model.view);
    println!("{}", "=".repeat(60));
    println!(
        "Records: {} of {} match the filters",
        model.filtered_records, model.source_records
    );

    if let RenderBody::NoData { message } = &model.body {
        println!("\n{}", message);
        println!("{}", "=".repeat(60));
        return Ok(());
    }

    let (metrics, ranking) = summary_inputs(dashboard, model)?;
    println!("\n{}", metrics_text_summary(&metrics));
    println!("\n{}", grouped_text_summary(&ranking, 10));

    for notice in model.notices() {
        println!("\nNote: {}", notice);
    }

    println!("{}", "=".repeat(60));
    Ok(())
}

/// Metrics and region ranking for the text summary
///
/// **Private** - taken from the model when the view carries them
/// (overview), recomputed from the filtered table otherwise
fn summary_inputs(
    dashboard: &Dashboard,
    model: &RenderModel,
) -> Result<(SummaryMetrics, GroupedView)> {
    let ranked = model.panels().iter().find_map(|panel| match panel {
        Panel::Bar { y, data, .. } if y == TOTAL_REVENUE => Some(data),
        _ => None,
    });

    if let (Some(metrics), Some(ranking)) = (model.metrics(), ranked) {
        return Ok((*metrics, ranking.clone()));
    }

    debug!("Recomputing summary for {} view", model.view);
    let filtered = filter::apply(dashboard.table(), &model.criteria);
    let ranking = revenue_by_region(&filtered).context("Failed to rank regions")?;
    Ok((summarize(&filtered), ranking))
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.data_path.as_os_str().is_empty() {
        anyhow::bail!("Data path cannot be empty");
    }

    for (name, bound) in [("min", args.min_revenue), ("max", args.max_revenue)] {
        if let Some(value) = bound {
            if !value.is_finite() {
                anyhow::bail!("{} revenue must be a finite number", name);
            }
        }
    }

    if let (Some(min), Some(max)) = (args.min_revenue, args.max_revenue) {
        if min > max {
            anyhow::bail!("min revenue ({}) is greater than max revenue ({})", min, max);
        }
    }

    if args.regions.iter().any(|r| r.trim().is_empty()) {
        anyhow::bail!("Region names cannot be empty");
    }

    if let Some(path) = &args.output_json {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}
