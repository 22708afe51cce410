//! Render model definitions.
//!
//! This is the structure handed to the presentation collaborators and
//! written to disk as JSON. Schema is versioned to allow future evolution.

use super::view::View;
use crate::aggregator::{GroupedView, LongRow, RegionShare, ScatterPoint, SummaryMetrics};
use crate::filter::FilterCriteria;
use crate::loader::Transaction;
use crate::output::GridTable;
use serde::{Deserialize, Serialize};

/// Top-level output of one render request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderModel {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the model was generated
    pub generated_at: String,

    /// View that was rendered
    pub view: View,

    /// Effective criteria after clamping
    pub criteria: FilterCriteria,

    /// Records in the source table
    pub source_records: usize,

    /// Records that passed the filters
    pub filtered_records: usize,

    pub body: RenderBody,
}

impl RenderModel {
    pub fn is_empty(&self) -> bool {
        matches!(self.body, RenderBody::NoData { .. })
    }

    /// Panels of a populated model, empty for `NoData`
    pub fn panels(&self) -> &[Panel] {
        match &self.body {
            RenderBody::Ready { panels, .. } => panels,
            RenderBody::NoData { .. } => &[],
        }
    }

    pub fn metrics(&self) -> Option<&SummaryMetrics> {
        match &self.body {
            RenderBody::Ready { metrics, .. } => metrics.as_ref(),
            RenderBody::NoData { .. } => None,
        }
    }

    pub fn notices(&self) -> &[String] {
        match &self.body {
            RenderBody::Ready { notices, .. } => notices,
            RenderBody::NoData { .. } => &[],
        }
    }
}

/// Content of a render model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderBody {
    /// Filters matched nothing; show the message instead of charts
    NoData { message: String },

    Ready {
        /// Headline metrics (overview only)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metrics: Option<SummaryMetrics>,

        panels: Vec<Panel>,

        /// Panels that could not be built, e.g. optional columns absent
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        notices: Vec<String>,
    },
}

/// One chart or table and its data bindings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    Bar {
        title: String,
        x: String,
        y: String,
        color: Option<String>,
        data: GroupedView,
    },
    GroupedBar {
        title: String,
        x: String,
        y: String,
        series: String,
        data: Vec<LongRow>,
    },
    Scatter {
        title: String,
        x: String,
        y: String,
        color: Option<String>,
        points: Vec<ScatterPoint>,
    },
    Pie {
        title: String,
        names: String,
        values: String,
        slices: Vec<RegionShare>,
    },
    Grid {
        title: String,
        table: GridTable,
    },
    Records {
        title: String,
        records: Vec<Transaction>,
    },
}

impl Panel {
    pub fn title(&self) -> &str {
        match self {
            Panel::Bar { title, .. }
            | Panel::GroupedBar { title, .. }
            | Panel::Scatter { title, .. }
            | Panel::Pie { title, .. }
            | Panel::Grid { title, .. }
            | Panel::Records { title, .. } => title,
        }
    }
}
