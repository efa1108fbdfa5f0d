//! Database schema definitions.

use rusqlite::{Connection, Result};

/// The complete SQL schema for the call-center database.
///
/// Column names and types of `customer_issues` are the interop contract
/// with existing `call_center.db` files and must not change. The `users`
/// table is carried for schema compatibility with older databases; this
/// application never reads or writes it.
pub const SCHEMA_SQL: &str = r"
    -- Customer issues table
    CREATE TABLE IF NOT EXISTS customer_issues (
        id INTEGER PRIMARY KEY,
        customer_name TEXT,
        issue_date TEXT,
        program_name TEXT,
        customer_email TEXT,
        customer_phone TEXT,
        issue_detail TEXT,
        status TEXT
    );

    CREATE INDEX IF NOT EXISTS idx_customer_issues_status ON customer_issues(status);
    CREATE INDEX IF NOT EXISTS idx_customer_issues_issue_date ON customer_issues(issue_date);
    CREATE INDEX IF NOT EXISTS idx_customer_issues_customer_name ON customer_issues(customer_name);

    -- Legacy login table, untouched by the application
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        username TEXT,
        password TEXT
    );
";

/// Apply the schema to the database.
///
/// This uses `execute_batch` to run the entire DDL script.
/// It is idempotent because all statements use `IF NOT EXISTS`: opening an
/// existing database (including one whose `customer_issues` predates the
/// `status` column) leaves its rows alone.
///
/// # Errors
///
/// Returns an error if the SQL execution fails or pragmas cannot be set.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_apply_schema() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).expect("Failed to apply schema");

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"customer_issues".to_string()));
        assert!(tables.contains(&"users".to_string()));
    }

    #[test]
    fn test_apply_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).unwrap();
        apply_schema(&conn).unwrap();
    }

    #[test]
    fn test_issue_columns_match_contract() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).unwrap();

        let columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('customer_issues')")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(
            columns,
            vec![
                "id",
                "customer_name",
                "issue_date",
                "program_name",
                "customer_email",
                "customer_phone",
                "issue_detail",
                "status",
            ]
        );
    }
}
