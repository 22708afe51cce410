//! Filter criteria: selected regions plus a closed revenue interval.

use crate::loader::TransactionTable;
use crate::utils::error::FilterError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User-selected filters
///
/// Invariant: `min_revenue <= max_revenue`, both finite. Deserializing
/// goes through `new`, so the invariant also holds for criteria read
/// back from a render model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CriteriaFields")]
pub struct FilterCriteria {
    regions: BTreeSet<String>,
    min_revenue: f64,
    max_revenue: f64,
}

#[derive(Deserialize)]
struct CriteriaFields {
    regions: BTreeSet<String>,
    min_revenue: f64,
    max_revenue: f64,
}

impl TryFrom<CriteriaFields> for FilterCriteria {
    type Error = FilterError;

    fn try_from(fields: CriteriaFields) -> Result<Self, Self::Error> {
        Self::new(fields.regions, fields.min_revenue, fields.max_revenue)
    }
}

impl FilterCriteria {
    /// Build criteria, rejecting an inverted or non-finite range
    pub fn new<I, S>(regions: I, min_revenue: f64, max_revenue: f64) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !min_revenue.is_finite() || !max_revenue.is_finite() {
            return Err(FilterError::NonFiniteBound);
        }
        if min_revenue > max_revenue {
            return Err(FilterError::InvertedRange {
                min: min_revenue,
                max: max_revenue,
            });
        }

        Ok(Self {
            regions: regions.into_iter().map(Into::into).collect(),
            min_revenue,
            max_revenue,
        })
    }

    /// Default sidebar state: every region, full observed revenue range
    pub fn all(table: &TransactionTable) -> Self {
        let (min_revenue, max_revenue) = table.revenue_range().unwrap_or((0.0, 0.0));
        Self {
            regions: table.regions().into_iter().map(str::to_string).collect(),
            min_revenue,
            max_revenue,
        }
    }

    pub fn regions(&self) -> &BTreeSet<String> {
        &self.regions
    }

    pub fn min_revenue(&self) -> f64 {
        self.min_revenue
    }

    pub fn max_revenue(&self) -> f64 {
        self.max_revenue
    }

    pub fn includes_region(&self, region: &str) -> bool {
        self.regions.contains(region)
    }

    /// Inclusive on both ends
    pub fn includes_revenue(&self, revenue: f64) -> bool {
        revenue >= self.min_revenue && revenue <= self.max_revenue
    }

    /// Clamp both bounds to the observed revenue range
    ///
    /// Only an interval that overlaps `[lo, hi]` is clamped. A disjoint
    /// interval is returned unchanged so it still matches nothing.
    pub fn clamp_to(&self, table: &TransactionTable) -> Self {
        let Some((lo, hi)) = table.revenue_range() else {
            return self.clone();
        };
        if self.max_revenue < lo || self.min_revenue > hi {
            return self.clone();
        }
        Self {
            regions: self.regions.clone(),
            min_revenue: self.min_revenue.clamp(lo, hi),
            max_revenue: self.max_revenue.clamp(lo, hi),
        }
    }

    /// Every selected region must exist in the data
    pub fn validate_against(&self, table: &TransactionTable) -> Result<(), FilterError> {
        let known = table.regions();
        match self
            .regions
            .iter()
            .find(|r| !known.contains(&r.as_str()))
        {
            Some(unknown) => Err(FilterError::UnknownRegion(unknown.clone())),
            None => Ok(()),
        }
    }
}
