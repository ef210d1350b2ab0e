use chrono::{NaiveDate, NaiveDateTime};
use mdr_trace::events::{normalize_events, ContactEvent, NormalizedEvents};
use mdr_trace::network::{
    build_contact_network, build_contact_network_with_filter, EdgeType, ExposureWindow,
    NetworkConfig, NodeType,
};
use pretty_assertions::assert_eq;

fn at(day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2025, 11, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
}

fn direct(source: &str, contact: &str, ts: Option<NaiveDateTime>) -> ContactEvent {
    ContactEvent {
        source_person_id: source.to_string(),
        contact_person_id: Some(contact.to_string()),
        equipment_id: None,
        room_id: "R101".to_string(),
        timestamp: ts,
        duration: Some(30),
    }
}

fn equipment(source: &str, equipment_id: &str, ts: Option<NaiveDateTime>) -> ContactEvent {
    ContactEvent {
        source_person_id: source.to_string(),
        contact_person_id: None,
        equipment_id: Some(equipment_id.to_string()),
        room_id: "R101".to_string(),
        timestamp: ts,
        duration: None,
    }
}

/// The end-to-end scenario: P1 shares a room with P2 and uses EQ1,
/// which P3 uses ten minutes later.
fn scenario_events() -> NormalizedEvents {
    normalize_events(&[
        direct("P1", "P2", at(9, 14, 0)),
        equipment("P1", "EQ1", at(9, 14, 0)),
        equipment("P3", "EQ1", at(9, 14, 10)),
    ])
}

#[test]
fn test_always_exactly_one_source_node() {
    let config = NetworkConfig::new();

    let empty = build_contact_network(&normalize_events(&[]), "P1", &config);
    assert_eq!(empty.count_nodes(NodeType::Source), 1);
    assert_eq!(empty.nodes.len(), 1);
    assert_eq!(empty.nodes[0].id, "P1");
    assert!(empty.edges.is_empty());

    // Index person absent from the events: still a valid single-node network
    let unmatched = build_contact_network(&scenario_events(), "P999", &config);
    assert_eq!(unmatched.count_nodes(NodeType::Source), 1);
    assert_eq!(unmatched.nodes.len(), 1);
}

#[test]
fn test_end_to_end_scenario() {
    let network = build_contact_network(&scenario_events(), "P1", &NetworkConfig::new());

    let node_shapes: Vec<(&str, NodeType)> = network
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.node_type))
        .collect();
    assert_eq!(
        node_shapes,
        vec![
            ("P1", NodeType::Source),
            ("P2", NodeType::Direct),
            ("P3", NodeType::Equipment),
        ]
    );

    let edge_shapes: Vec<(&str, &str, EdgeType)> = network
        .edges
        .iter()
        .map(|e| {
            (
                e.source_node_id.as_str(),
                e.target_node_id.as_str(),
                e.edge_type,
            )
        })
        .collect();
    assert_eq!(
        edge_shapes,
        vec![
            ("P1", "P2", EdgeType::Direct),
            ("P1", "P3", EdgeType::Equipment),
        ]
    );
}

#[test]
fn test_idempotence_byte_for_byte() {
    let events = scenario_events();
    let config = NetworkConfig::new();

    let first = serde_json::to_string(&build_contact_network(&events, "P1", &config)).unwrap();
    let second = serde_json::to_string(&build_contact_network(&events, "P1", &config)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_duplicate_events_collapse_to_one_edge() {
    let events = normalize_events(&[
        direct("P1", "P2", at(9, 14, 0)),
        direct("P1", "P2", at(9, 15, 0)),
        direct("P1", "P2", at(9, 16, 0)),
    ]);

    let network = build_contact_network(&events, "P1", &NetworkConfig::new());

    assert_eq!(network.nodes.len(), 2);
    assert_eq!(network.edges.len(), 1);
}

#[test]
fn test_direct_discovery_wins_over_equipment() {
    // P2 is both a room contact and an equipment contact of P1;
    // the direct pass runs first, so P2 stays a direct node.
    let events = normalize_events(&[
        direct("P1", "P2", at(9, 14, 0)),
        equipment("P1", "EQ1", at(9, 14, 0)),
        equipment("P2", "EQ1", at(9, 15, 0)),
    ]);

    let network = build_contact_network(&events, "P1", &NetworkConfig::new());

    assert_eq!(network.nodes.len(), 2);
    assert_eq!(network.edges.len(), 1);
    assert_eq!(network.nodes[1].node_type, NodeType::Direct);
}

#[test]
fn test_no_duplicate_edges() {
    let events = normalize_events(&[
        direct("P1", "P2", at(9, 14, 0)),
        direct("P2", "P1", at(9, 14, 0)),
        direct("P1", "P2", at(9, 18, 0)),
        equipment("P1", "EQ1", at(9, 14, 0)),
        equipment("P2", "EQ1", at(9, 15, 0)),
    ]);

    let network = build_contact_network(&events, "P1", &NetworkConfig::new().with_max_depth(3));

    let mut seen = std::collections::HashSet::new();
    for edge in &network.edges {
        let mut pair = [edge.source_node_id.as_str(), edge.target_node_id.as_str()];
        pair.sort();
        assert!(
            seen.insert((pair, edge.edge_type)),
            "duplicate edge {:?}",
            edge
        );
    }
}

#[test]
fn test_same_day_window_excludes_next_day() {
    let events = normalize_events(&[
        equipment("P1", "EQ1", at(9, 23, 0)),
        equipment("P3", "EQ1", at(10, 1, 0)),
    ]);

    let same_day = build_contact_network(&events, "P1", &NetworkConfig::new());
    assert_eq!(same_day.nodes.len(), 1);

    // A 4-hour radius spans midnight and links them
    let radius_config = NetworkConfig::new().with_window(ExposureWindow::Hours(4));
    let radius = build_contact_network(&events, "P1", &radius_config);
    assert_eq!(radius.nodes.len(), 2);
    assert_eq!(radius.nodes[1].node_type, NodeType::Equipment);
}

#[test]
fn test_hour_radius_excludes_distant_usage() {
    let events = normalize_events(&[
        equipment("P1", "EQ1", at(9, 8, 0)),
        equipment("P3", "EQ1", at(9, 20, 0)),
    ]);

    let config = NetworkConfig::new().with_window(ExposureWindow::Hours(2));
    let network = build_contact_network(&events, "P1", &config);
    assert_eq!(network.nodes.len(), 1);

    // Same calendar day, so the default policy does link them
    let same_day = build_contact_network(&events, "P1", &NetworkConfig::new());
    assert_eq!(same_day.nodes.len(), 2);
}

#[test]
fn test_equipment_window_applies_per_index_usage() {
    // P1 never used EQ1, so P3's usage cannot link to P1
    let events = normalize_events(&[
        equipment("P2", "EQ1", at(9, 14, 0)),
        equipment("P3", "EQ1", at(9, 15, 0)),
    ]);

    let network = build_contact_network(&events, "P1", &NetworkConfig::new());
    assert_eq!(network.nodes.len(), 1);
}

#[test]
fn test_depth_two_expands_contacts_of_contacts() {
    let events = normalize_events(&[
        direct("P1", "P2", at(9, 14, 0)),
        direct("P2", "P3", at(9, 15, 0)),
    ]);

    let depth_one = build_contact_network(&events, "P1", &NetworkConfig::new());
    assert!(!depth_one.contains_node("P3"));

    let depth_two =
        build_contact_network(&events, "P1", &NetworkConfig::new().with_max_depth(2));
    assert!(depth_two.contains_node("P3"));

    // The second hop hangs off P2, not the index
    let hop = depth_two
        .edges
        .iter()
        .find(|e| e.target_node_id == "P3")
        .unwrap();
    assert_eq!(hop.source_node_id, "P2");
}

#[test]
fn test_depth_expansion_does_not_revisit() {
    let events = normalize_events(&[
        direct("P1", "P2", at(9, 14, 0)),
        direct("P2", "P1", at(9, 15, 0)),
        direct("P2", "P3", at(9, 16, 0)),
        direct("P3", "P2", at(9, 17, 0)),
    ]);

    let network = build_contact_network(&events, "P1", &NetworkConfig::new().with_max_depth(5));

    assert_eq!(network.nodes.len(), 3);
    assert_eq!(network.edges.len(), 2);
}

#[test]
fn test_contact_filter_hook_excludes_candidates() {
    let events = scenario_events();
    let config = NetworkConfig::new();

    let network =
        build_contact_network_with_filter(&events, "P1", &config, &|id| id != "P3");

    assert!(network.contains_node("P2"));
    assert!(!network.contains_node("P3"));
}

#[test]
fn test_renderer_schema_shape() {
    let network = build_contact_network(&scenario_events(), "P1", &NetworkConfig::new());
    let json = serde_json::to_value(&network).unwrap();

    assert_eq!(json["source"], "P1");
    assert_eq!(json["nodes"][0]["type"], "source");
    assert_eq!(json["edges"][0]["from"], "P1");
    assert_eq!(json["edges"][0]["to"], "P2");
    assert_eq!(json["edges"][1]["type"], "equipment");
}
