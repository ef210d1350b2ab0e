//! Contamination network schema.
//!
//! The serialized shape `{ source, nodes: [{id, label, type}],
//! edges: [{from, to, type}] }` is a compatibility contract with the
//! graph renderer; field names must not change.

use serde::{Deserialize, Serialize};

/// Node role within a contamination network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// The index patient the network is built outward from
    Source,
    /// Person who shared a room with an index person
    Direct,
    /// Person linked only through shared equipment
    Equipment,
}

/// Exposure relationship kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    Direct,
    Equipment,
}

/// One person (or the index patient) in a built network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,

    /// Display name; defaults to the id, the renderer substitutes the
    /// roster name when it has one
    pub label: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,
}

/// One inferred exposure relationship. Multiple raw events between the
/// same pair collapse to at most one edge per type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEdge {
    #[serde(rename = "from")]
    pub source_node_id: String,

    #[serde(rename = "to")]
    pub target_node_id: String,

    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

/// Contamination-exposure graph rooted at an index patient.
///
/// Built fresh on every call; a pure function of its inputs. Nodes are
/// ordered source first, then discovery order, so identical inputs yield
/// byte-for-byte identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Index person id
    pub source: String,
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

impl Network {
    /// Create a minimal network holding only the source node
    ///
    /// **Public** - also the correct result for empty/unmatched input
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let source_node = NetworkNode {
            id: source.clone(),
            label: source.clone(),
            node_type: NodeType::Source,
        };
        Self {
            source,
            nodes: vec![source_node],
            edges: Vec::new(),
        }
    }

    /// Count nodes of a given type
    pub fn count_nodes(&self, node_type: NodeType) -> usize {
        self.nodes.iter().filter(|n| n.node_type == node_type).count()
    }

    /// True if a node with this id exists
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_network_is_single_source_node() {
        let network = Network::new("P001");
        assert_eq!(network.source, "P001");
        assert_eq!(network.nodes.len(), 1);
        assert_eq!(network.nodes[0].node_type, NodeType::Source);
        assert!(network.edges.is_empty());
    }

    #[test]
    fn test_renderer_field_names() {
        let mut network = Network::new("P001");
        network.nodes.push(NetworkNode {
            id: "P002".to_string(),
            label: "P002".to_string(),
            node_type: NodeType::Direct,
        });
        network.edges.push(NetworkEdge {
            source_node_id: "P001".to_string(),
            target_node_id: "P002".to_string(),
            edge_type: EdgeType::Direct,
        });

        let json = serde_json::to_value(&network).unwrap();
        assert_eq!(json["nodes"][1]["type"], "direct");
        assert_eq!(json["edges"][0]["from"], "P001");
        assert_eq!(json["edges"][0]["to"], "P002");
        assert_eq!(json["nodes"][0]["type"], "source");
    }
}
