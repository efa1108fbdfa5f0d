//! CLI definitions and entry point.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Call-center issue tracker (`SQLite`)
#[derive(Parser, Debug)]
#[command(name = "cct", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (default: ./call_center.db)
    #[arg(long, global = true, env = "CALL_CENTER_DB")]
    pub db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// `SQLite` busy timeout in ms
    #[arg(long, global = true)]
    pub lock_timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database file and schema
    Init,

    /// Log a new customer issue
    Add(AddArgs),

    /// List issues, optionally filtered
    List(ListArgs),

    /// Show one issue in full
    Show {
        /// Issue id
        id: i64,
    },

    /// Edit an existing issue (status is not editable here)
    Edit(EditArgs),

    /// Mark issues as completed (status becomes Closed)
    Close {
        /// Issue ids
        ids: Vec<i64>,
    },

    /// List distinct customer names
    Customers,

    /// List distinct issue dates for one customer
    Dates {
        /// Customer name
        customer: String,
    },

    /// Per-status issue counts for a month
    Report(ReportArgs),
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Customer name
    #[arg(long)]
    pub customer: String,

    /// Issue date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Program name
    #[arg(long)]
    pub program: Option<String>,

    /// Customer email
    #[arg(long)]
    pub email: Option<String>,

    /// Customer phone
    #[arg(long)]
    pub phone: Option<String>,

    /// Issue detail
    #[arg(long)]
    pub detail: Option<String>,

    /// Initial status (Open, Closed, In Review; default Open)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Filter by status (all, open, closed, in-review)
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Exact customer name match
    #[arg(long)]
    pub customer: Option<String>,

    /// Exact issue date match (YYYY-MM-DD); requires --customer
    #[arg(long, requires = "customer")]
    pub date: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// Issue id
    pub id: i64,

    /// New customer name
    #[arg(long)]
    pub customer: Option<String>,

    /// New issue date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New program name
    #[arg(long)]
    pub program: Option<String>,

    /// New customer email
    #[arg(long)]
    pub email: Option<String>,

    /// New customer phone
    #[arg(long)]
    pub phone: Option<String>,

    /// New issue detail
    #[arg(long)]
    pub detail: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Report year (default: most recent with issues)
    #[arg(long)]
    pub year: Option<String>,

    /// Report month, 01-12 (default: first available)
    #[arg(long)]
    pub month: Option<String>,
}
