//! List command implementation.

use crate::cli::ListArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::model::{Issue, StatusFilter};
use crate::service::{self, IssueService};
use serde_json::json;
use tracing::debug;

/// Execute the list command.
///
/// With both `--customer` and `--date`, the listing is the exact-match
/// lookup used for editing; an empty result prints a notice, not an error.
///
/// # Errors
///
/// Returns a validation error for a bad `--status` value or a database
/// error from the read.
pub fn execute(args: &ListArgs, json_mode: bool, cli: &CliOverrides) -> Result<()> {
    let filter: StatusFilter = args.status.parse()?;
    let service = config::open_service(cli)?;

    let issues = fetch(&service, args)?;
    debug!(total = issues.len(), "loaded issues");
    let issues = service::filter_by_status(issues, filter);

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&json!({ "issues": issues }))?);
        return Ok(());
    }

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    print_table(&issues);
    Ok(())
}

fn fetch(service: &IssueService, args: &ListArgs) -> Result<Vec<Issue>> {
    match (&args.customer, &args.date) {
        (Some(customer), Some(date)) => service.find_by_customer_and_date(customer, date),
        (Some(customer), None) => Ok(service
            .list_issues()?
            .into_iter()
            .filter(|issue| issue.customer_name == *customer)
            .collect()),
        _ => service.list_issues(),
    }
}

fn print_table(issues: &[Issue]) {
    println!(
        "{:>5}  {:<24}  {:<10}  {:<16}  {:<9}",
        "ID", "CUSTOMER", "DATE", "PROGRAM", "STATUS"
    );
    for issue in issues {
        println!(
            "{:>5}  {:<24}  {:<10}  {:<16}  {:<9}",
            issue.id,
            issue.customer_name,
            issue.issue_date,
            issue.program_name.as_deref().unwrap_or("-"),
            issue.status,
        );
    }
}
