use crate::render::View;
use crate::utils::config::DEFAULT_DATA_FILE;
use std::path::PathBuf;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// CSV file with the transactions
    pub data_path: PathBuf,

    /// View to render (None = configured default)
    pub view: Option<View>,

    /// Selected regions (empty = every region)
    pub regions: Vec<String>,

    /// Lower revenue bound (None = observed minimum)
    pub min_revenue: Option<f64>,

    /// Upper revenue bound (None = observed maximum)
    pub max_revenue: Option<f64>,

    /// Output path for the JSON render model (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Dashboard configuration file (optional)
    pub config_path: Option<PathBuf>,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            view: None,
            regions: Vec::new(),
            min_revenue: None,
            max_revenue: None,
            output_json: None,
            print_summary: false,
            config_path: None,
        }
    }
}
