//! `SQLite` storage implementation.

use crate::error::{CallCenterError, Result};
use crate::model::{Issue, IssueDraft, IssueEdit, Status};
use crate::storage::schema::apply_schema;
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// SQLite-based storage backend.
///
/// Owns the single connection used for the process lifetime. There are no
/// explicit transaction boundaries beyond one statement per commit; callers
/// are not coordinated (last write wins).
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
}

/// One row of the status/month aggregate: count of issues with a given
/// status in a given `YYYY-MM` bucket.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatusMonthCount {
    pub status: Status,
    pub year_month: String,
    pub count: i64,
}

impl SqliteStorage {
    /// Open a new connection to the database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema
    /// application fails.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, None)
    }

    /// Open a new connection with an optional busy timeout (ms).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema
    /// application fails.
    pub fn open_with_timeout(path: &Path, lock_timeout_ms: Option<u64>) -> Result<Self> {
        let conn = Connection::open(path)?;
        if let Some(timeout) = lock_timeout_ms {
            conn.busy_timeout(Duration::from_millis(timeout))?;
        }
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Access the underlying connection (tests only need this to seed
    /// legacy-shaped rows).
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Persist a new issue and return its auto-assigned id.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the insert fails.
    pub fn create_issue(&mut self, draft: &IssueDraft) -> Result<i64> {
        let status = draft.status.unwrap_or_default();
        self.conn.execute(
            "INSERT INTO customer_issues
                (customer_name, issue_date, program_name, customer_email,
                 customer_phone, issue_detail, status)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                draft.customer_name,
                draft.issue_date,
                draft.program_name,
                draft.customer_email,
                draft.customer_phone,
                draft.issue_detail,
                status.as_str(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "created issue");
        Ok(id)
    }

    /// Fetch a single issue by id.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the read fails.
    pub fn get_issue(&self, id: i64) -> Result<Option<Issue>> {
        let issue = self
            .conn
            .query_row(
                "SELECT id, customer_name, issue_date, program_name, customer_email,
                        customer_phone, issue_detail, status
                 FROM customer_issues WHERE id = ?",
                [id],
                row_to_issue,
            )
            .optional()?;
        Ok(issue)
    }

    /// Return every stored issue.
    ///
    /// Legacy rows without a status (written before the column existed) come
    /// back with `Status::Unknown` rather than failing the whole listing.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the read fails.
    pub fn list_issues(&self) -> Result<Vec<Issue>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, customer_name, issue_date, program_name, customer_email,
                    customer_phone, issue_detail, status
             FROM customer_issues ORDER BY id",
        )?;
        let issues = stmt
            .query_map([], row_to_issue)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(issues)
    }

    /// Replace the editable fields of the issue with the given id.
    ///
    /// Status is not among the editable columns; it changes only through
    /// `set_status`.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if no row has that id, or a `Database` error
    /// if the write fails.
    pub fn update_issue(&mut self, id: i64, edit: &IssueEdit) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE customer_issues
             SET customer_name = ?, issue_date = ?, program_name = ?,
                 customer_email = ?, customer_phone = ?, issue_detail = ?
             WHERE id = ?",
            rusqlite::params![
                edit.customer_name,
                edit.issue_date,
                edit.program_name,
                edit.customer_email,
                edit.customer_phone,
                edit.issue_detail,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(CallCenterError::IssueNotFound { id });
        }
        debug!(id, "updated issue");
        Ok(())
    }

    /// Set the status of a single issue. Returns false when the id does not
    /// exist (callers decide whether that is an error).
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the write fails.
    pub fn set_status(&mut self, id: i64, status: Status) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE customer_issues SET status = ? WHERE id = ?",
            rusqlite::params![status.as_str(), id],
        )?;
        Ok(changed > 0)
    }

    /// Count issues grouped by status and `YYYY-MM` bucket of `issue_date`.
    ///
    /// Rows whose `issue_date` does not parse as a calendar date produce a
    /// NULL bucket in SQLite and are silently dropped, matching the
    /// tolerate-but-ignore contract for malformed dates.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the query fails.
    pub fn aggregate_by_status_and_month(&self) -> Result<Vec<StatusMonthCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT status, strftime('%Y-%m', issue_date) AS month, COUNT(*)
             FROM customer_issues
             GROUP BY status, month",
        )?;
        let rows = stmt.query_map([], |row| {
            let status: Option<String> = row.get(0)?;
            let month: Option<String> = row.get(1)?;
            let count: i64 = row.get(2)?;
            Ok((status, month, count))
        })?;

        let mut counts = Vec::new();
        for row in rows {
            let (status, month, count) = row?;
            let Some(year_month) = month else {
                continue;
            };
            counts.push(StatusMonthCount {
                status: parse_stored_status(status.as_deref()),
                year_month,
                count,
            });
        }
        Ok(counts)
    }

    /// Distinct 4-digit years present in `issue_date`, descending.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the query fails.
    pub fn distinct_years(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT strftime('%Y', issue_date) AS year
             FROM customer_issues ORDER BY year DESC",
        )?;
        let years = stmt
            .query_map([], |row| row.get::<_, Option<String>>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(years.into_iter().flatten().collect())
    }

    /// Distinct 2-digit months present in `issue_date` across all years,
    /// ascending.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the query fails.
    pub fn distinct_months(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT strftime('%m', issue_date) AS month
             FROM customer_issues ORDER BY month ASC",
        )?;
        let months = stmt
            .query_map([], |row| row.get::<_, Option<String>>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(months.into_iter().flatten().collect())
    }
}

/// Map a stored status cell to the enum. NULL (legacy rows) and any
/// unrecognized string map to `Unknown` so one bad row never poisons a read.
fn parse_stored_status(raw: Option<&str>) -> Status {
    raw.and_then(|s| Status::from_str(s).ok())
        .unwrap_or(Status::Unknown)
}

fn row_to_issue(row: &Row<'_>) -> rusqlite::Result<Issue> {
    let status: Option<String> = row.get(7)?;
    Ok(Issue {
        id: row.get(0)?,
        customer_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        issue_date: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        program_name: row.get(3)?,
        customer_email: row.get(4)?,
        customer_phone: row.get(5)?,
        issue_detail: row.get(6)?,
        status: parse_stored_status(status.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, date: &str, status: Status) -> IssueDraft {
        IssueDraft {
            customer_name: name.to_string(),
            issue_date: date.to_string(),
            status: Some(status),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        let first = storage
            .create_issue(&draft("Ada", "2024-01-15", Status::Open))
            .unwrap();
        let second = storage
            .create_issue(&draft("Grace", "2024-01-16", Status::Open))
            .unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_status_default_applied_when_draft_omits_it() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        let id = storage
            .create_issue(&IssueDraft {
                customer_name: "Ada".to_string(),
                issue_date: "2024-01-15".to_string(),
                ..Default::default()
            })
            .unwrap();
        let issue = storage.get_issue(id).unwrap().unwrap();
        assert_eq!(issue.status, Status::Open);
    }

    #[test]
    fn test_legacy_null_status_maps_to_unknown() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        storage
            .connection()
            .execute(
                "INSERT INTO customer_issues (customer_name, issue_date) VALUES ('Old', '2019-05-01')",
                [],
            )
            .unwrap();
        storage
            .create_issue(&draft("New", "2024-01-15", Status::Open))
            .unwrap();

        let issues = storage.list_issues().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].status, Status::Unknown);
        assert_eq!(issues[1].status, Status::Open);
    }

    #[test]
    fn test_update_nonexistent_id_not_found() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        let err = storage
            .update_issue(999, &IssueEdit::default())
            .unwrap_err();
        assert!(matches!(err, CallCenterError::IssueNotFound { id: 999 }));
    }

    #[test]
    fn test_set_status_reports_missing_row() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        assert!(!storage.set_status(42, Status::Closed).unwrap());
    }

    #[test]
    fn test_aggregate_drops_malformed_dates() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        storage
            .create_issue(&draft("Ada", "2024-01-15", Status::Open))
            .unwrap();
        storage
            .connection()
            .execute(
                "INSERT INTO customer_issues (customer_name, issue_date, status)
                 VALUES ('Bad', 'not-a-date', 'Open')",
                [],
            )
            .unwrap();

        let counts = storage.aggregate_by_status_and_month().unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].year_month, "2024-01");
        assert_eq!(counts[0].count, 1);
    }
}
