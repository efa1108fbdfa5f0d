//! Show command implementation.

use crate::config::{self, CliOverrides};
use crate::error::Result;
use serde_json::json;

/// Execute the show command.
///
/// # Errors
///
/// Returns `IssueNotFound` for a nonexistent id or a database error from
/// the read.
pub fn execute(id: i64, json_mode: bool, cli: &CliOverrides) -> Result<()> {
    let service = config::open_service(cli)?;
    let issue = service.get_issue(id)?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&json!({ "issue": issue }))?);
        return Ok(());
    }

    println!("Issue {}", issue.id);
    println!("  Customer: {}", issue.customer_name);
    println!("  Date:     {}", issue.issue_date);
    println!("  Status:   {}", issue.status);
    if let Some(program) = &issue.program_name {
        println!("  Program:  {program}");
    }
    if let Some(email) = &issue.customer_email {
        println!("  Email:    {email}");
    }
    if let Some(phone) = &issue.customer_phone {
        println!("  Phone:    {phone}");
    }
    if let Some(detail) = &issue.issue_detail {
        println!("  Detail:   {detail}");
    }
    Ok(())
}
