//! Chart-ready aggregation over stored issues.
//!
//! Produces the per-status counts for a selected year/month that the report
//! view renders as a bar chart, plus the year/month choice lists.

use crate::error::Result;
use crate::model::Status;
use crate::storage::SqliteStorage;
use std::collections::BTreeMap;

/// Read-only aggregator over the issue store.
#[derive(Debug)]
pub struct ReportAggregator<'a> {
    storage: &'a SqliteStorage,
}

impl<'a> ReportAggregator<'a> {
    #[must_use]
    pub const fn new(storage: &'a SqliteStorage) -> Self {
        Self { storage }
    }

    /// Distinct 4-digit years with at least one issue, most recent first.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the query fails.
    pub fn available_years(&self) -> Result<Vec<String>> {
        self.storage.distinct_years()
    }

    /// Distinct 2-digit months with at least one issue, ascending.
    ///
    /// Months are collected across ALL years, not just the selected one;
    /// selecting a year does not narrow this list. Longstanding behavior
    /// that existing reports depend on.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the query fails.
    pub fn available_months(&self) -> Result<Vec<String>> {
        self.storage.distinct_months()
    }

    /// Issue counts per status for one `year`/`month` selection.
    ///
    /// Statuses with no matching issues are absent from the map rather than
    /// present with a zero count.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the aggregate query fails.
    pub fn counts_for(&self, year: &str, month: &str) -> Result<BTreeMap<Status, i64>> {
        let bucket = format!("{year}-{month}");
        let mut counts = BTreeMap::new();
        for row in self.storage.aggregate_by_status_and_month()? {
            if row.year_month == bucket {
                *counts.entry(row.status).or_insert(0) += row.count;
            }
        }
        Ok(counts)
    }

    /// The `Open` entry of a counts map, 0 when absent.
    #[must_use]
    pub fn open_count(counts: &BTreeMap<Status, i64>) -> i64 {
        counts.get(&Status::Open).copied().unwrap_or(0)
    }
}
