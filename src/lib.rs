//! MySQL Settings Diff
//!
//! Compares two MySQL variable dumps (the output of
//! `mysqld --version --help`) and reports every setting that changed,
//! appeared or disappeared, optionally annotated with category and unit
//! metadata from a side table.
//!
//! This crate provides the core implementation for the
//! `settings-diff` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install mysql-settings-diff
//! settings-diff --help
//! ```

pub mod commands;
pub mod diff;
pub mod output;
pub mod parser;
pub mod utils;
