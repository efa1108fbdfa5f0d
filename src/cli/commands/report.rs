//! Report command implementation.
//!
//! Renders per-status counts for a selected year and month as a text bar
//! chart, plus the open-issue total. Year defaults to the most recent with
//! issues; month to the first available.

use crate::cli::ReportArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::model::Status;
use crate::report::ReportAggregator;
use serde_json::json;
use std::collections::BTreeMap;

const BAR_WIDTH: usize = 40;

/// Execute the report command.
///
/// # Errors
///
/// Returns a database error if the aggregate queries fail.
pub fn execute(args: &ReportArgs, json_mode: bool, cli: &CliOverrides) -> Result<()> {
    let service = config::open_service(cli)?;
    let report = ReportAggregator::new(service.storage());

    let years = report.available_years()?;
    let months = report.available_months()?;

    let Some(year) = args.year.clone().or_else(|| years.first().cloned()) else {
        return empty(json_mode);
    };
    let Some(month) = args.month.clone().or_else(|| months.first().cloned()) else {
        return empty(json_mode);
    };

    let counts = report.counts_for(&year, &month)?;
    let open = ReportAggregator::open_count(&counts);

    if json_mode {
        let counts_by_name: BTreeMap<&str, i64> =
            counts.iter().map(|(s, &n)| (s.as_str(), n)).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "year": year,
                "month": month,
                "counts": counts_by_name,
                "open": open,
            }))?
        );
        return Ok(());
    }

    println!("Issues for {year}-{month}");
    if counts.is_empty() {
        println!("  (none)");
    } else {
        print_chart(&counts);
    }
    println!("Open Issues: {open}");
    Ok(())
}

fn empty(json_mode: bool) -> Result<()> {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "counts": {}, "open": 0 }))?
        );
    } else {
        println!("No issues recorded yet.");
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn print_chart(counts: &BTreeMap<Status, i64>) {
    let max = counts.values().copied().max().unwrap_or(1).max(1);
    for (status, &count) in counts {
        let len = ((count * BAR_WIDTH as i64) / max) as usize;
        println!("  {:<9} {:>4}  {}", status.to_string(), count, "#".repeat(len.max(1)));
    }
}
