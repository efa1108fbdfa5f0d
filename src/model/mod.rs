//! Core data types for `call_center`.
//!
//! This module defines the fundamental types used throughout the application:
//! - `Issue` - A logged customer issue
//! - `Status` - Issue lifecycle states
//! - `IssueDraft` - Field values supplied at creation, before id assignment
//! - `IssueEdit` - The full set of editable fields for an existing issue
//! - `StatusFilter` - Status filter choices for listings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Issue lifecycle status.
///
/// The serialized strings (`Open`, `Closed`, `In Review`) are the exact
/// literals stored in existing databases; changing them breaks interop.
/// `Unknown` is the read-side mapping for legacy rows written before the
/// status column existed and is never persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Status {
    #[default]
    Open,
    Closed,
    #[serde(rename = "In Review")]
    InReview,
    Unknown,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::InReview => "In Review",
            Self::Unknown => "Unknown",
        }
    }

    /// True for the three statuses that may be written to storage.
    #[must_use]
    pub const fn is_persistable(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::error::CallCenterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "in review" | "in-review" | "in_review" | "inreview" => Ok(Self::InReview),
            other => Err(crate::error::CallCenterError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Status filter used by listings.
///
/// `All` passes every issue through unchanged. The original tool only
/// offered `All`, `Open`, and `Closed`; `In Review` is accepted here as
/// well since it is a valid stored status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = crate::error::CallCenterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(Status::from_str(s)?))
        }
    }
}

/// A logged customer issue.
///
/// `issue_date` is kept as the stored `YYYY-MM-DD` string rather than a
/// parsed date: the table contract is textual, and listing must tolerate
/// hand-edited rows (aggregation drops them instead of failing the read).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub customer_name: String,
    pub issue_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_detail: Option<String>,
    pub status: Status,
}

/// Field values supplied when creating an issue, prior to id assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueDraft {
    pub customer_name: String,
    pub issue_date: String,
    pub program_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub issue_detail: Option<String>,
    /// Defaults to `Open` when unset.
    pub status: Option<Status>,
}

/// Full replacement values for the editable fields of an existing issue.
///
/// Status is deliberately absent: status changes go only through the bulk
/// close path, never through a general edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueEdit {
    pub customer_name: String,
    pub issue_date: String,
    pub program_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub issue_detail: Option<String>,
}

impl Issue {
    /// Editable fields of this issue, for edit round-trips.
    #[must_use]
    pub fn to_edit(&self) -> IssueEdit {
        IssueEdit {
            customer_name: self.customer_name.clone(),
            issue_date: self.issue_date.clone(),
            program_name: self.program_name.clone(),
            customer_email: self.customer_email.clone(),
            customer_phone: self.customer_phone.clone(),
            issue_detail: self.issue_detail.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [Status::Open, Status::Closed, Status::InReview] {
            let parsed: Status = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_aliases() {
        assert_eq!("in-review".parse::<Status>().unwrap(), Status::InReview);
        assert_eq!("in_review".parse::<Status>().unwrap(), Status::InReview);
        assert_eq!("OPEN".parse::<Status>().unwrap(), Status::Open);
    }

    #[test]
    fn test_status_rejects_unknown_strings() {
        assert!("done".parse::<Status>().is_err());
        assert!("unknown".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(Status::InReview.as_str(), "In Review");
        assert_eq!(
            serde_json::to_string(&Status::InReview).unwrap(),
            "\"In Review\""
        );
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "open".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(Status::Open)
        );
        assert!("bogus".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_to_edit_copies_all_editable_fields() {
        let issue = Issue {
            id: 7,
            customer_name: "Ada".to_string(),
            issue_date: "2024-01-15".to_string(),
            program_name: Some("Billing".to_string()),
            customer_email: None,
            customer_phone: Some("555-0100".to_string()),
            issue_detail: Some("Double charge".to_string()),
            status: Status::Open,
        };
        let edit = issue.to_edit();
        assert_eq!(edit.customer_name, "Ada");
        assert_eq!(edit.issue_date, "2024-01-15");
        assert_eq!(edit.program_name.as_deref(), Some("Billing"));
        assert_eq!(edit.customer_phone.as_deref(), Some("555-0100"));
    }
}
