//! Error types and handling for `call_center`.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - Supports `anyhow` integration for wrapped errors
//! - Provides recovery hints for user-facing errors
//! - Validation failures are produced before any write is attempted;
//!   storage failures propagate unchanged

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for `call_center` operations.
#[derive(Error, Debug)]
pub enum CallCenterError {
    // === Storage Errors ===
    /// Database file not found at the specified path.
    #[error("Database not found at '{path}'")]
    DatabaseNotFound { path: PathBuf },

    /// `SQLite` database error.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    // === Issue Errors ===
    /// Issue with the specified id was not found.
    #[error("Issue not found: {id}")]
    IssueNotFound { id: i64 },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Status value is not one of the persisted statuses.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Issue date does not parse as a `YYYY-MM-DD` calendar date.
    #[error("Invalid issue date: {date}")]
    InvalidDate { date: String },

    // === Configuration Errors ===
    /// Configuration file error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Wrapped anyhow error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CallCenterError {
    /// Can the user fix this without code changes?
    #[must_use]
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DatabaseNotFound { .. }
                | Self::IssueNotFound { .. }
                | Self::Validation { .. }
                | Self::InvalidStatus { .. }
                | Self::InvalidDate { .. }
        )
    }

    /// Human-friendly suggestion for fixing this error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::DatabaseNotFound { .. } => Some("Check --db or run: cct init"),
            Self::InvalidStatus { .. } => Some("Valid statuses: Open, Closed, In Review"),
            Self::InvalidDate { .. } => Some("Dates use the YYYY-MM-DD format, e.g. 2024-01-15"),
            Self::IssueNotFound { .. } => Some("Run 'cct list' to see existing issue ids"),
            _ => None,
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// Create a validation error for a specific field.
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using `CallCenterError`.
pub type Result<T> = std::result::Result<T, CallCenterError>;
