//! Issue lifecycle service.
//!
//! Enforces the data-model invariants on top of the storage layer: status is
//! always one of the persisted values, issue dates always parse, and ids are
//! never changed by an edit. Validation happens before any write.

use crate::error::{CallCenterError, Result};
use crate::model::{Issue, IssueDraft, IssueEdit, Status, StatusFilter};
use crate::storage::SqliteStorage;
use crate::util::time::parse_issue_date;
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

/// Service over issue records. Owns the storage handle for the process
/// lifetime; callers pass edits in explicitly, the service keeps no
/// edit-session state.
#[derive(Debug)]
pub struct IssueService {
    storage: SqliteStorage,
}

/// Outcome of a bulk close: which ids were closed, which were skipped
/// because no such issue exists. Skips are not errors.
#[derive(Debug, Default, Serialize)]
pub struct CloseSummary {
    pub closed: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<i64>,
}

impl IssueService {
    #[must_use]
    pub const fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }

    /// Read-only access to storage, for the report aggregator.
    #[must_use]
    pub const fn storage(&self) -> &SqliteStorage {
        &self.storage
    }

    /// Validate and persist a new issue, returning its assigned id.
    ///
    /// Status defaults to `Open` when the draft leaves it unset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStatus` for a non-persistable status, `InvalidDate`
    /// for an unparsable issue date, or a `Database` error from the write.
    /// Nothing is written when validation fails.
    pub fn create_issue(&mut self, draft: &IssueDraft) -> Result<i64> {
        let status = draft.status.unwrap_or_default();
        if !status.is_persistable() {
            return Err(CallCenterError::InvalidStatus {
                status: status.as_str().to_string(),
            });
        }
        parse_issue_date(&draft.issue_date)?;

        let id = self.storage.create_issue(draft)?;
        info!(id, customer = %draft.customer_name, "issue created");
        Ok(id)
    }

    /// Fetch a single issue by id.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if no such id exists.
    pub fn get_issue(&self, id: i64) -> Result<Issue> {
        self.storage
            .get_issue(id)?
            .ok_or(CallCenterError::IssueNotFound { id })
    }

    /// Every stored issue.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the read fails.
    pub fn list_issues(&self) -> Result<Vec<Issue>> {
        self.storage.list_issues()
    }

    /// Exact-match lookup by customer and date, used to locate an issue for
    /// editing. An empty result means "nothing to edit", never an error.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the read fails.
    pub fn find_by_customer_and_date(&self, customer_name: &str, issue_date: &str) -> Result<Vec<Issue>> {
        let issues = self
            .storage
            .list_issues()?
            .into_iter()
            .filter(|issue| issue.customer_name == customer_name && issue.issue_date == issue_date)
            .collect();
        Ok(issues)
    }

    /// Distinct customer names across all issues. Unordered set contract.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the read fails.
    pub fn list_distinct_customer_names(&self) -> Result<HashSet<String>> {
        let names = self
            .storage
            .list_issues()?
            .into_iter()
            .map(|issue| issue.customer_name)
            .collect();
        Ok(names)
    }

    /// Distinct issue dates logged for one customer. Unordered set contract.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the read fails.
    pub fn list_distinct_dates_for_customer(&self, customer_name: &str) -> Result<HashSet<String>> {
        let dates = self
            .storage
            .list_issues()?
            .into_iter()
            .filter(|issue| issue.customer_name == customer_name)
            .map(|issue| issue.issue_date)
            .collect();
        Ok(dates)
    }

    /// Replace all editable fields of an issue and return the stored result.
    ///
    /// The id is preserved, and status cannot be changed through this path;
    /// status mutation goes only through `mark_completed`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if the edited date does not parse (checked
    /// before the write), `IssueNotFound` for a nonexistent id, or a
    /// `Database` error from the write.
    pub fn update_issue(&mut self, id: i64, edit: &IssueEdit) -> Result<Issue> {
        parse_issue_date(&edit.issue_date)?;
        self.storage.update_issue(id, edit)?;
        info!(id, "issue updated");
        self.get_issue(id)
    }

    /// Mark every listed issue `Closed`, unconditionally and idempotently.
    ///
    /// Ids that no longer exist are skipped rather than failing the batch;
    /// the summary reports both lists so callers can surface the skips.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if a write fails.
    pub fn mark_completed(&mut self, ids: &[i64]) -> Result<CloseSummary> {
        let mut summary = CloseSummary::default();
        for &id in ids {
            if self.storage.set_status(id, Status::Closed)? {
                summary.closed.push(id);
            } else {
                summary.skipped.push(id);
            }
        }
        info!(
            closed = summary.closed.len(),
            skipped = summary.skipped.len(),
            "bulk close finished"
        );
        Ok(summary)
    }
}

/// Pure status filter over a listing. `All` returns the input unchanged,
/// same elements in the same order.
#[must_use]
pub fn filter_by_status(issues: Vec<Issue>, filter: StatusFilter) -> Vec<Issue> {
    match filter {
        StatusFilter::All => issues,
        StatusFilter::Only(status) => issues
            .into_iter()
            .filter(|issue| issue.status == status)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> IssueService {
        IssueService::new(SqliteStorage::open_memory().unwrap())
    }

    fn draft(name: &str, date: &str) -> IssueDraft {
        IssueDraft {
            customer_name: name.to_string(),
            issue_date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_rejects_bad_date_before_writing() {
        let mut svc = service();
        let err = svc.create_issue(&draft("Ada", "01/15/2024")).unwrap_err();
        assert!(matches!(err, CallCenterError::InvalidDate { .. }));
        assert!(svc.list_issues().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_unknown_status() {
        let mut svc = service();
        let mut bad = draft("Ada", "2024-01-15");
        bad.status = Some(Status::Unknown);
        let err = svc.create_issue(&bad).unwrap_err();
        assert!(matches!(err, CallCenterError::InvalidStatus { .. }));
    }

    #[test]
    fn test_filter_all_returns_input_unchanged() {
        let mut svc = service();
        svc.create_issue(&draft("Ada", "2024-01-15")).unwrap();
        let id = svc.create_issue(&draft("Grace", "2024-01-16")).unwrap();
        svc.mark_completed(&[id]).unwrap();

        let issues = svc.list_issues().unwrap();
        let filtered = filter_by_status(issues.clone(), StatusFilter::All);
        assert_eq!(filtered, issues);
    }

    #[test]
    fn test_filter_only_open() {
        let mut svc = service();
        svc.create_issue(&draft("Ada", "2024-01-15")).unwrap();
        let id = svc.create_issue(&draft("Grace", "2024-01-16")).unwrap();
        svc.mark_completed(&[id]).unwrap();

        let open = filter_by_status(svc.list_issues().unwrap(), StatusFilter::Only(Status::Open));
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].customer_name, "Ada");
    }

    #[test]
    fn test_filter_in_review_is_a_valid_choice() {
        let mut svc = service();
        let mut in_review = draft("Ada", "2024-01-15");
        in_review.status = Some(Status::InReview);
        svc.create_issue(&in_review).unwrap();
        svc.create_issue(&draft("Grace", "2024-01-16")).unwrap();

        let filtered = filter_by_status(
            svc.list_issues().unwrap(),
            StatusFilter::Only(Status::InReview),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].status, Status::InReview);
    }

    #[test]
    fn test_mark_completed_skips_missing_ids_silently() {
        let mut svc = service();
        let id = svc.create_issue(&draft("Ada", "2024-01-15")).unwrap();

        let summary = svc.mark_completed(&[id, 9999]).unwrap();
        assert_eq!(summary.closed, vec![id]);
        assert_eq!(summary.skipped, vec![9999]);
    }
}
