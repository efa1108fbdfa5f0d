//! Add command implementation.

use crate::cli::AddArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::model::{IssueDraft, Status};
use serde_json::json;

/// Execute the add command.
///
/// # Errors
///
/// Returns a validation error for a bad status or date, or a database error
/// from the write.
pub fn execute(args: &AddArgs, json_mode: bool, cli: &CliOverrides) -> Result<()> {
    let status = args
        .status
        .as_deref()
        .map(str::parse::<Status>)
        .transpose()?;

    let draft = IssueDraft {
        customer_name: args.customer.clone(),
        issue_date: args.date.clone(),
        program_name: args.program.clone(),
        customer_email: args.email.clone(),
        customer_phone: args.phone.clone(),
        issue_detail: args.detail.clone(),
        status,
    };

    let mut service = config::open_service(cli)?;
    let id = service.create_issue(&draft)?;
    let issue = service.get_issue(id)?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&json!({ "issue": issue }))?);
    } else {
        println!(
            "Created issue {id}: {} ({}, {})",
            issue.customer_name, issue.issue_date, issue.status
        );
    }
    Ok(())
}
