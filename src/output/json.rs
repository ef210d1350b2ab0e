//! JSON output writers for network and metrics documents.
//!
//! Writes the engine's output schemas to disk with pretty formatting.
//! Also provides readers, used by validation and by tests.

use crate::metrics::ComplianceMetrics;
use crate::network::Network;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a built network to a JSON file
///
/// **Public** - produces the `{source, nodes, edges}` document the
/// graph renderer consumes
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_network(network: &Network, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    write_json(network, output_path.as_ref(), "network")
}

/// Read a network document back from disk
///
/// **Public** - used by the validate command and tests
pub fn read_network(input_path: impl AsRef<Path>) -> Result<Network, OutputError> {
    let network: Network = read_json(input_path.as_ref())?;
    debug!(
        "Network loaded: source {}, {} nodes",
        network.source,
        network.nodes.len()
    );
    Ok(network)
}

/// Write a metrics record to a JSON file
///
/// **Public** - fixed-shape record consumed by report exporters
pub fn write_metrics(
    metrics: &ComplianceMetrics,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_json(metrics, output_path.as_ref(), "metrics")
}

/// Read a metrics record back from disk
pub fn read_metrics(input_path: impl AsRef<Path>) -> Result<ComplianceMetrics, OutputError> {
    read_json(input_path.as_ref())
}

/// Serialize a document to a pretty-printed JSON file
///
/// **Private** - shared write path
fn write_json<T: Serialize>(
    document: &T,
    output_path: &Path,
    what: &str,
) -> Result<(), OutputError> {
    info!("Writing {} to: {}", what, output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, document).map_err(OutputError::SerializationFailed)?;

    info!(
        "{} written successfully ({} bytes)",
        what,
        file_size(output_path)
    );

    Ok(())
}

/// Read and deserialize a JSON document
///
/// **Private** - shared read path
fn read_json<T: DeserializeOwned>(input_path: &Path) -> Result<T, OutputError> {
    debug!("Reading JSON from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    serde_json::from_reader(file).map_err(OutputError::SerializationFailed)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// File size in bytes, 0 if unavailable
///
/// **Private** - internal utility
fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
