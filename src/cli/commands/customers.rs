//! Customers and dates command implementations.
//!
//! The underlying service contract is an unordered set; output is sorted
//! only for display.

use crate::config::{self, CliOverrides};
use crate::error::Result;
use serde_json::json;

/// Execute the customers command: distinct customer names.
///
/// # Errors
///
/// Returns a database error if the read fails.
pub fn execute(json_mode: bool, cli: &CliOverrides) -> Result<()> {
    let service = config::open_service(cli)?;
    let mut names: Vec<String> = service.list_distinct_customer_names()?.into_iter().collect();
    names.sort();

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&json!({ "customers": names }))?);
        return Ok(());
    }
    for name in &names {
        println!("{name}");
    }
    Ok(())
}

/// Execute the dates command: distinct issue dates for one customer.
///
/// # Errors
///
/// Returns a database error if the read fails.
pub fn execute_dates(customer: &str, json_mode: bool, cli: &CliOverrides) -> Result<()> {
    let service = config::open_service(cli)?;
    let mut dates: Vec<String> = service
        .list_distinct_dates_for_customer(customer)?
        .into_iter()
        .collect();
    dates.sort();

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "customer": customer, "dates": dates }))?
        );
        return Ok(());
    }
    for date in &dates {
        println!("{date}");
    }
    Ok(())
}
