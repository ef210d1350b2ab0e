//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod chart;
pub mod models;
pub mod network;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use chart::execute_chart;
pub use models::{ChartArgs, NetworkArgs, ReportArgs};
pub use network::{execute_network, validate_network_args};
pub use report::{execute_report, validate_report_args};
pub use utils::{display_schema, display_version, validate_network_file};
