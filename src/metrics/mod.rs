//! Aggregate compliance indicators over roster, events, and alerts.

pub mod aggregator;

// Re-export main types and functions
pub use aggregator::{calculate_metrics, calculate_metrics_with_window, ComplianceMetrics};
