//! Sales Dashboard CLI
//!
//! Loads a transaction CSV, applies region and revenue filters and
//! renders dashboard views as JSON render models or text summaries.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use sales_dashboard::commands::{
    display_schema, display_version, execute_render, inspect_data_file, validate_args,
    validate_model_file, RenderArgs,
};
use sales_dashboard::render::View;
use sales_dashboard::utils::config::{CONFIG_ENV_VAR, DEFAULT_DATA_FILE};

/// Sales Dashboard - filtering and aggregation for transaction data
#[derive(Parser, Debug)]
#[command(name = "sales-dash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a dashboard view
    Render {
        /// CSV file with the transactions
        #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,

        /// View to render: overview, data-table or charts
        #[arg(long)]
        view: Option<View>,

        /// Region to include (repeatable, default: all regions)
        #[arg(short, long = "region")]
        regions: Vec<String>,

        /// Lower revenue bound (inclusive)
        #[arg(long)]
        min_revenue: Option<f64>,

        /// Upper revenue bound (inclusive)
        #[arg(long)]
        max_revenue: Option<f64>,

        /// Output path for the JSON render model
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Dashboard configuration file (TOML)
        #[arg(short, long, env = CONFIG_ENV_VAR)]
        config: Option<PathBuf>,
    },

    /// Show the columns, regions and revenue range of a data file
    Inspect {
        /// CSV file with the transactions
        #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,
    },

    /// Validate a render model JSON file
    Validate {
        /// Path to render model JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            data,
            view,
            regions,
            min_revenue,
            max_revenue,
            output,
            summary,
            config,
        } => {
            let args = RenderArgs {
                data_path: data,
                view,
                regions,
                min_revenue,
                max_revenue,
                output_json: output,
                print_summary: summary,
                config_path: config,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute render
            execute_render(args)?;
        }

        Commands::Inspect { data } => {
            inspect_data_file(data)?;
        }

        Commands::Validate { file } => {
            validate_model_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
