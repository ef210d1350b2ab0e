//! Configuration and constants for the engine and CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Exposure window default for equipment-mediated contact.
// The clinical policy is "same calendar day" unless an explicit
// hour radius is configured.
pub const DEFAULT_EXPOSURE_RADIUS_HOURS: i64 = 24;

/// Default network expansion depth (1 = direct neighborhood only)
pub const DEFAULT_MAX_DEPTH: usize = 1;

// Status colors used by the chart summarizer. The hex values are a
// compatibility contract with the dashboard theme.
pub const STATUS_COLORS: &[(&str, &str)] = &[
    ("red", "#EF4444"),    // confirmed MDR+
    ("yellow", "#F59E0B"), // contact
    ("green", "#10B981"),  // safe
];

/// Fallback color for category values outside the status palette
pub const DEFAULT_CATEGORY_COLOR: &str = "#9CA3AF";
