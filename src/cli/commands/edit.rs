//! Edit command implementation.
//!
//! Reads the current record, overlays the provided flags, and writes the
//! full editable field set back. Status never changes here; use `cct close`.

use crate::cli::EditArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use serde_json::json;

/// Execute the edit command.
///
/// # Errors
///
/// Returns `IssueNotFound` for a nonexistent id, a validation error for a
/// bad date, or a database error from the write.
pub fn execute(args: &EditArgs, json_mode: bool, cli: &CliOverrides) -> Result<()> {
    let mut service = config::open_service(cli)?;

    let mut edit = service.get_issue(args.id)?.to_edit();
    if let Some(customer) = &args.customer {
        edit.customer_name.clone_from(customer);
    }
    if let Some(date) = &args.date {
        edit.issue_date.clone_from(date);
    }
    if let Some(program) = &args.program {
        edit.program_name = Some(program.clone());
    }
    if let Some(email) = &args.email {
        edit.customer_email = Some(email.clone());
    }
    if let Some(phone) = &args.phone {
        edit.customer_phone = Some(phone.clone());
    }
    if let Some(detail) = &args.detail {
        edit.issue_detail = Some(detail.clone());
    }

    let issue = service.update_issue(args.id, &edit)?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&json!({ "issue": issue }))?);
    } else {
        println!(
            "Updated issue {}: {} ({})",
            issue.id, issue.customer_name, issue.issue_date
        );
    }
    Ok(())
}
