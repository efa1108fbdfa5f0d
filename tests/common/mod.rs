#![allow(dead_code)]

use call_center::service::IssueService;
use call_center::storage::SqliteStorage;
use std::sync::Once;

pub mod fixtures;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        call_center::logging::init_test_logging();
    });
}

/// In-memory storage with the schema applied.
pub fn test_db() -> SqliteStorage {
    init_test_logging();
    SqliteStorage::open_memory().expect("open in-memory db")
}

/// Service over a fresh in-memory database.
pub fn test_service() -> IssueService {
    IssueService::new(test_db())
}
