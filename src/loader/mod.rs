//! Transaction loading and schema definitions.
//!
//! This module handles:
//! - Reading the CSV snapshot
//! - Validating the required columns
//! - Defining the record and table types

pub mod schema;
pub mod transactions;

// Re-export main types
pub use schema::{Transaction, TransactionTable};
pub use transactions::{load_transactions, parse_transactions, validate_columns};
