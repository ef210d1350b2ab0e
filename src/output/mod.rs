//! Output writers for engine results.
//!
//! The engine owns no wire protocol; these writers cover the file
//! boundary the export collaborators read from.

pub mod json;

// Re-export main functions
pub use json::{read_metrics, read_network, write_metrics, write_network};
