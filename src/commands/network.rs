//! Network command implementation.
//!
//! The network command:
//! 1. Reads the contact event export
//! 2. Normalizes and classifies events
//! 3. Builds the contamination network for the index person
//! 4. Writes the network JSON

use super::models::NetworkArgs;
use super::utils::{read_collection, resolve_window};
use crate::events::{normalize_events, ContactEvent};
use crate::network::{build_contact_network, NetworkConfig, NodeType};
use crate::output::write_network;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the network command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * File read or JSON parse errors on the events export
/// * File write errors on the output path
///
/// Data-quality problems in individual events are never fatal; they are
/// skipped and reported.
pub fn execute_network(args: NetworkArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Building contact network for index: {}", args.index_person_id);

    info!("Step 1/4: Reading events from {}...", args.events_path.display());
    let events: Vec<ContactEvent> = read_collection(&args.events_path, "events")?;
    debug!("Read {} raw events", events.len());

    info!("Step 2/4: Normalizing events...");
    let normalized = normalize_events(&events);
    if !normalized.rejected.is_empty() {
        warn!(
            "Rejected {} of {} events as malformed",
            normalized.rejected.len(),
            events.len()
        );
    }

    info!("Step 3/4: Building network (depth {})...", args.max_depth);
    let config = NetworkConfig::new()
        .with_window(resolve_window(args.window_hours))
        .with_max_depth(args.max_depth);
    let network = build_contact_network(&normalized, &args.index_person_id, &config);

    debug!(
        "Built network: {} nodes, {} edges",
        network.nodes.len(),
        network.edges.len()
    );

    info!("Step 4/4: Writing output...");
    write_network(&network, &args.output).context("Failed to write network JSON")?;

    info!("✓ Network written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("NETWORK SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Index Patient:      {}", network.source);
        println!("Total Nodes:        {}", network.nodes.len());
        println!(
            "Direct Contacts:    {}",
            network.count_nodes(NodeType::Direct)
        );
        println!(
            "Equipment Contacts: {}",
            network.count_nodes(NodeType::Equipment)
        );
        println!("Edges:              {}", network.edges.len());
        println!("Rejected Events:    {}", normalized.rejected.len());
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Network build completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate network arguments
///
/// **Public** - called before execute_network for early validation
pub fn validate_network_args(args: &NetworkArgs) -> Result<()> {
    if args.index_person_id.trim().is_empty() {
        anyhow::bail!("Index person id cannot be empty");
    }

    if args.max_depth == 0 {
        anyhow::bail!("Depth must be at least 1");
    }

    if args.max_depth > 10 {
        anyhow::bail!("Depth is too large (max 10)");
    }

    if let Some(Some(hours)) = args.window_hours {
        if hours <= 0 {
            anyhow::bail!("Window hours must be positive");
        }
    }

    Ok(())
}
