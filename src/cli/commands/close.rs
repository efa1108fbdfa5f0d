//! Close command implementation.

use crate::config::{self, CliOverrides};
use crate::error::{CallCenterError, Result};
use serde_json::json;

/// Execute the close command: mark the given issues Closed.
///
/// Ids that no longer exist are reported as skipped, not treated as a
/// failure of the batch.
///
/// # Errors
///
/// Returns a validation error when no ids are given, or a database error
/// from the writes.
pub fn execute(ids: &[i64], json_mode: bool, cli: &CliOverrides) -> Result<()> {
    if ids.is_empty() {
        return Err(CallCenterError::validation("ids", "no issue ids provided"));
    }

    let mut service = config::open_service(cli)?;
    let summary = service.mark_completed(ids)?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&json!(summary))?);
        return Ok(());
    }

    println!("Marked {} issue(s) as Closed.", summary.closed.len());
    for id in &summary.skipped {
        println!("Skipped {id}: issue not found");
    }
    Ok(())
}
