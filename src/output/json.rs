//! JSON render model writer.
//!
//! Writes RenderModel structs to JSON files with proper formatting.

use crate::render::RenderModel;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a render model to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `model` - Render model to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let model = dashboard.render(View::Overview, &criteria)?;
/// write_render_model(&model, "dashboard.json")?;
/// ```
pub fn write_render_model(
    model: &RenderModel,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing render model to: {}", output_path.display());

    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, model).map_err(OutputError::SerializationFailed)?;

    info!(
        "Render model written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a render model to a pretty JSON string
pub fn render_model_to_string(model: &RenderModel) -> Result<String, OutputError> {
    serde_json::to_string_pretty(model).map_err(OutputError::SerializationFailed)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a render model from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_render_model(input_path: impl AsRef<Path>) -> Result<RenderModel, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading render model from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let model: RenderModel =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Render model loaded: version {}, view {}",
        model.version, model.view
    );

    Ok(model)
}
