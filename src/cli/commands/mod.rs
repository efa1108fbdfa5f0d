//! Subcommand implementations.

pub mod add;
pub mod close;
pub mod customers;
pub mod edit;
pub mod init;
pub mod list;
pub mod report;
pub mod show;
