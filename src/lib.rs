//! Call-center issue tracker core.
//!
//! Staff log customer issues, browse and filter them, edit them, mark them
//! resolved in bulk, and view per-status counts bucketed by month. Storage is
//! a single `SQLite` table compatible with existing `call_center.db` files.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod report;
pub mod service;
pub mod storage;
pub mod util;

pub use error::{CallCenterError, Result};
