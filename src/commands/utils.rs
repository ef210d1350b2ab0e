use crate::network::{ExposureWindow, Network, NodeType};
use crate::output::read_network;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::ParseError;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Read a JSON collection exported by the record store
pub fn read_collection<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", what, path.display()))?;

    let records = serde_json::from_reader(file)
        .map_err(ParseError::JsonError)
        .with_context(|| format!("Failed to parse {} JSON: {}", what, path.display()))?;

    Ok(records)
}

/// Resolve the exposure window from the optional --window-hours flag
///
/// Omitted flag = same calendar day; flag without a value = the default
/// hour radius; flag with a value = that radius.
pub fn resolve_window(window_hours: Option<Option<i64>>) -> ExposureWindow {
    match window_hours {
        Some(Some(hours)) => ExposureWindow::Hours(hours),
        Some(None) => ExposureWindow::default_radius(),
        None => ExposureWindow::SameDay,
    }
}

/// Validate a network JSON file
pub fn validate_network_file(file_path: PathBuf) -> Result<()> {
    println!("Validating network: {}", file_path.display());

    let network = read_network(&file_path)?;
    check_network_shape(&network)
        .with_context(|| format!("Malformed network document: {}", file_path.display()))?;

    println!("✓ Valid network JSON");
    println!("  Source: {}", network.source);
    println!("  Nodes: {}", network.nodes.len());
    println!("  Edges: {}", network.edges.len());

    Ok(())
}

/// Check the renderer-contract invariants of a network document
///
/// **Private** - internal helper for validate_network_file
fn check_network_shape(network: &Network) -> Result<(), ParseError> {
    let Some(first) = network.nodes.first() else {
        return Err(ParseError::InvalidFormat(
            "network has no nodes".to_string(),
        ));
    };

    if first.node_type != NodeType::Source || first.id != network.source {
        return Err(ParseError::InvalidFormat(format!(
            "first node must be the source node {}",
            network.source
        )));
    }

    let source_count = network.count_nodes(NodeType::Source);
    if source_count != 1 {
        return Err(ParseError::InvalidFormat(format!(
            "expected exactly one source node, found {}",
            source_count
        )));
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("MDR Trace Output Schemas");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Network Schema:");
        println!("  source: string           - Index person id");
        println!("  nodes: array             - Source first, then discovery order");
        println!("    id: string             - Person id");
        println!("    label: string          - Display name");
        println!("    type: string           - source | direct | equipment");
        println!("  edges: array             - Inferred exposure relationships");
        println!("    from: string           - Source node id");
        println!("    to: string             - Target node id");
        println!("    type: string           - direct | equipment");
        println!();
        println!("Metrics Schema:");
        println!("  mdrPositive: number      - Confirmed MDR+ patients");
        println!("  directContacts: number   - Distinct direct contacts of MDR+ patients");
        println!("  indirectContacts: number - Distinct equipment-mediated contacts");
        println!("  alertsTriggered: number  - Total alert records");
        println!("  medianIsolationTime: number - Median lab-to-isolation hours");
        println!("  totalPatients: number    - Roster size");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("MDR Trace v{}", env!("CARGO_PKG_VERSION"));
    println!("Output Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Contact-tracing network engine for MDR infection control.");
}
