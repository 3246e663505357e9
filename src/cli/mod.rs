//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod dashboard;
mod detect;
mod list;
mod output;
mod regions;

pub use dashboard::run_dashboard;
pub use detect::{run_detect, run_logo};
pub use list::{format_company_table, run_list, run_stats, ListOptions};
pub use output::{write_output, OutputFormat, OutputTarget};
pub use regions::{run_regions, RegionsOptions};

/// Exit code for success.
pub const EXIT_OK: i32 = 0;
/// Exit code for a rejected or failed detection.
pub const EXIT_REJECTED: i32 = 1;
/// Exit code for an unexpected error.
pub const EXIT_ERROR: i32 = 3;
