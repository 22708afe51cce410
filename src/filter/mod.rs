//! Sidebar filters over the transaction table.

pub mod criteria;
pub mod engine;

pub use criteria::FilterCriteria;
pub use engine::{apply, FilteredDataset};
