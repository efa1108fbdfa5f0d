//! Init command implementation.

use crate::config::{self, CliOverrides};
use crate::error::Result;
use serde_json::json;
use tracing::info;

/// Execute the init command: create the database file and apply the schema.
///
/// Opening an existing database is harmless; the schema is idempotent and
/// existing rows are untouched.
///
/// # Errors
///
/// Returns an error if the database cannot be created or opened.
pub fn execute(json_mode: bool, cli: &CliOverrides) -> Result<()> {
    let path = config::resolve_db_path(cli)?;
    let existed = path.exists();
    config::open_storage(cli, false)?;
    info!(path = %path.display(), existed, "database initialized");

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "db": path,
                "created": !existed,
            }))?
        );
    } else if existed {
        println!("Database already present at {}", path.display());
    } else {
        println!("Initialized database at {}", path.display());
    }
    Ok(())
}
