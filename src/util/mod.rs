//! Shared utilities for `call_center`.

pub mod time;
