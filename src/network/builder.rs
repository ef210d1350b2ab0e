//! Network builder: turns normalized events into a contamination graph.
//!
//! Two passes per index person: a direct pass over person-person events,
//! then an equipment pass that links people through shared equipment use
//! within a configurable exposure window. Output ordering is discovery
//! order, so identical inputs always produce identical graphs.

use super::graph::{EdgeType, Network, NetworkEdge, NetworkNode, NodeType};
use crate::events::NormalizedEvents;
use crate::utils::config::{DEFAULT_EXPOSURE_RADIUS_HOURS, DEFAULT_MAX_DEPTH};
use chrono::{Duration, NaiveDateTime};
use log::debug;
use std::collections::HashSet;

/// Maximum time gap between two equipment-usage events for them to be
/// considered a contamination link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExposureWindow {
    /// Same calendar day (default clinical policy)
    SameDay,
    /// Fixed radius of N hours around the index person's usage
    Hours(i64),
}

impl Default for ExposureWindow {
    fn default() -> Self {
        ExposureWindow::SameDay
    }
}

impl ExposureWindow {
    /// Window with the default hour radius
    pub fn default_radius() -> Self {
        ExposureWindow::Hours(DEFAULT_EXPOSURE_RADIUS_HOURS)
    }

    /// True if two usage timestamps fall within this window of each other
    pub fn contains(&self, a: NaiveDateTime, b: NaiveDateTime) -> bool {
        match self {
            ExposureWindow::SameDay => a.date() == b.date(),
            ExposureWindow::Hours(hours) => {
                let gap = if a >= b { a - b } else { b - a };
                gap <= Duration::hours(*hours)
            }
        }
    }
}

/// Network builder configuration
///
/// **Public** - constructed by callers, builder-style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Exposure window for equipment-mediated contact
    pub window: ExposureWindow,

    /// Expansion depth. 1 = only the index person's own contacts;
    /// greater depths repeat both passes from each newly discovered person.
    pub max_depth: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            window: ExposureWindow::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: ExposureWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Build a contamination network rooted at an index person
///
/// **Public** - main entry point for network construction
///
/// # Arguments
/// * `events` - Normalized event set (invalid records already removed)
/// * `index_person_id` - Person the network is built outward from
/// * `config` - Exposure window and expansion depth
///
/// # Returns
/// The built network. Never fails: an index person absent from the
/// events yields a single-node network containing only the source.
pub fn build_contact_network(
    events: &NormalizedEvents,
    index_person_id: &str,
    config: &NetworkConfig,
) -> Network {
    build_contact_network_with_filter(events, index_person_id, config, &|_| true)
}

/// Build a contamination network with a contact filter hook
///
/// **Public** - variant for policy filtering
///
/// The filter receives each candidate contact id before it is added;
/// returning false excludes that person (and, at depth > 1, everything
/// reachable only through them). Whether equipment contacts through
/// low-risk intermediaries count is a policy question, so it stays a
/// caller-supplied hook rather than a built-in rule.
pub fn build_contact_network_with_filter(
    events: &NormalizedEvents,
    index_person_id: &str,
    config: &NetworkConfig,
    filter: &dyn Fn(&str) -> bool,
) -> Network {
    debug!(
        "Building network for index {} ({} direct, {} equipment events, depth {})",
        index_person_id,
        events.direct.len(),
        events.equipment.len(),
        config.max_depth
    );

    let mut network = Network::new(index_person_id);

    // Visited set prevents cycles, revisits, and duplicate edges:
    // the first discovery of a person wins.
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(index_person_id.to_string());

    let mut frontier: Vec<String> = vec![index_person_id.to_string()];

    for _ in 0..config.max_depth.max(1) {
        let mut next_frontier: Vec<String> = Vec::new();

        for current in &frontier {
            // Direct pass runs fully before the equipment pass for this index
            for candidate in direct_contact_candidates(events, current) {
                if !filter(&candidate) {
                    continue;
                }
                if visited.insert(candidate.clone()) {
                    add_contact(&mut network, current, &candidate, NodeType::Direct);
                    next_frontier.push(candidate);
                }
            }

            for candidate in equipment_contact_candidates(events, current, &config.window) {
                if !filter(&candidate) {
                    continue;
                }
                if visited.insert(candidate.clone()) {
                    add_contact(&mut network, current, &candidate, NodeType::Equipment);
                    next_frontier.push(candidate);
                }
            }
        }

        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }

    debug!(
        "Built network: {} nodes, {} edges",
        network.nodes.len(),
        network.edges.len()
    );

    network
}

/// Append a discovered contact node and its edge
///
/// **Private** - internal helper for the build loop
fn add_contact(network: &mut Network, from: &str, contact_id: &str, node_type: NodeType) {
    let edge_type = match node_type {
        NodeType::Equipment => EdgeType::Equipment,
        _ => EdgeType::Direct,
    };
    network.nodes.push(NetworkNode {
        id: contact_id.to_string(),
        label: contact_id.to_string(),
        node_type,
    });
    network.edges.push(NetworkEdge {
        source_node_id: from.to_string(),
        target_node_id: contact_id.to_string(),
        edge_type,
    });
}

/// Direct pass: contact ids recorded against an index person
///
/// **Public** - shared with the metrics aggregator, which runs the same
/// pass across every MDR-positive patient
///
/// Returns candidates in event order; duplicates are kept and resolved
/// by the caller's visited set.
pub fn direct_contact_candidates(events: &NormalizedEvents, index_person_id: &str) -> Vec<String> {
    events
        .direct
        .iter()
        .filter(|event| event.source_person_id == index_person_id)
        .filter_map(|event| event.contact_person_id.clone())
        .collect()
}

/// Equipment pass: people who used the same equipment as an index person
/// within the exposure window
///
/// **Public** - shared with the metrics aggregator
///
/// Pairwise timestamp comparison per equipment id. O(n^2) over equipment
/// events, which is fine at hundreds-to-thousands of events per query;
/// bucket by equipment id first if that ever changes.
pub fn equipment_contact_candidates(
    events: &NormalizedEvents,
    index_person_id: &str,
    window: &ExposureWindow,
) -> Vec<String> {
    let mut candidates = Vec::new();

    for usage in events
        .equipment
        .iter()
        .filter(|event| event.source_person_id == index_person_id)
    {
        let (Some(equipment_id), Some(usage_time)) = (&usage.equipment_id, usage.timestamp) else {
            continue;
        };

        for other in &events.equipment {
            if other.source_person_id == index_person_id {
                continue;
            }
            if other.equipment_id.as_deref() != Some(equipment_id.as_str()) {
                continue;
            }
            let Some(other_time) = other.timestamp else {
                continue;
            };
            if window.contains(usage_time, other_time) {
                candidates.push(other.source_person_id.clone());
            }
        }
    }

    candidates
}
