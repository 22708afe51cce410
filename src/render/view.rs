//! Dashboard view selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which page of the dashboard to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Headline metrics and the main charts
    #[default]
    Overview,
    /// Per-category summary grid
    DataTable,
    /// Region distribution charts and the filtered records
    Charts,
}

impl View {
    pub const ALL: [View; 3] = [View::Overview, View::DataTable, View::Charts];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::DataTable => "data-table",
            View::Charts => "charts",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown view '{}' (expected one of: overview, data-table, charts)",
                    s
                )
            })
    }
}
