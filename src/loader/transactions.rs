//! CSV loader for commercial transaction data.
//!
//! Reads the delimited file once, checks the header against the
//! required column set and deserializes every row into a `Transaction`.

use super::schema::{Transaction, TransactionTable};
use crate::utils::config::{OPTIONAL_COLUMNS, REQUIRED_COLUMNS};
use crate::utils::error::LoadError;
use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Load the transaction table from a CSV file
///
/// **Public** - main entry point for loading
///
/// # Arguments
/// * `path` - Path to the CSV file (e.g. `commercial_data.csv`)
///
/// # Returns
/// The immutable source table for the session
///
/// # Errors
/// * `LoadError::NotFound` - File does not exist
/// * `LoadError::EmptyOrMalformed` - No header, no rows, or a row that cannot be parsed
/// * `LoadError::Schema` - Required columns are missing
/// * `LoadError::Io` - Any other read failure
pub fn load_transactions(path: impl AsRef<Path>) -> Result<TransactionTable, LoadError> {
    let path = path.as_ref();

    info!("Loading transactions from: {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    let table = parse_transactions(BufReader::new(file))?;

    info!("Loaded {} transactions", table.len());

    Ok(table.with_source(path))
}

/// Parse transactions from any reader
///
/// **Public** - used by `load_transactions` and by tests
pub fn parse_transactions<R: Read>(reader: R) -> Result<TransactionTable, LoadError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()
        .map_err(map_csv_error)?
        .iter()
        .map(|s| s.to_string())
        .collect();

    if columns.iter().all(|c| c.is_empty()) {
        return Err(LoadError::EmptyOrMalformed(
            "file has no header row".to_string(),
        ));
    }

    validate_columns(&columns)?;

    let mut records = Vec::new();
    for (index, result) in csv_reader.deserialize::<Transaction>().enumerate() {
        let record = result.map_err(map_csv_error)?;
        // +2: 1-based lines plus the header row
        validate_record(&record, index + 2)?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(LoadError::EmptyOrMalformed(
            "file contains a header but no data rows".to_string(),
        ));
    }

    for optional in OPTIONAL_COLUMNS {
        if columns.iter().any(|c| c == optional) {
            debug!("Optional column present: {}", optional);
        } else {
            debug!("Optional column absent: {}", optional);
        }
    }

    Ok(TransactionTable::new(columns, records))
}

/// Check that every required column is in the header
///
/// **Public** - reports all missing columns at once, in declaration order
pub fn validate_columns(columns: &[String]) -> Result<(), LoadError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .map(|c| c.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::Schema { missing })
    }
}

/// Reject rows serde accepts but the data model does not
///
/// **Private** - internal validation
fn validate_record(record: &Transaction, line: usize) -> Result<(), LoadError> {
    if record.customer_id.is_empty() {
        return Err(LoadError::EmptyOrMalformed(format!(
            "line {}: empty Customer_ID",
            line
        )));
    }

    if record.region.is_empty() {
        return Err(LoadError::EmptyOrMalformed(format!(
            "line {}: empty Region",
            line
        )));
    }

    for (name, value) in [("Total_Revenue", record.total_revenue), ("Cost", record.cost)] {
        if !value.is_finite() {
            return Err(LoadError::EmptyOrMalformed(format!(
                "line {}: {} is not a finite number",
                line, name
            )));
        }
        if value < 0.0 {
            warn!("line {}: negative {} ({})", line, name, value);
        }
    }

    Ok(())
}

/// Map a csv error onto the load error kinds
///
/// **Private** - I/O stays I/O, everything else is malformed input
fn map_csv_error(err: csv::Error) -> LoadError {
    if !err.is_io_error() {
        return LoadError::EmptyOrMalformed(err.to_string());
    }
    match err.into_kind() {
        csv::ErrorKind::Io(e) => LoadError::Io(e),
        other => LoadError::EmptyOrMalformed(format!("{:?}", other)),
    }
}
