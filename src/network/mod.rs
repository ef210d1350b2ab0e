//! Contamination network construction.
//!
//! This module transforms normalized contact events into:
//! - A directed exposure graph rooted at an index patient
//! - Deterministic node/edge ordering for stable rendering
//! - Memoized queries via an explicit version-keyed cache

pub mod builder;
pub mod cache;
pub mod graph;

// Re-export main types and functions
pub use builder::{
    build_contact_network, build_contact_network_with_filter, direct_contact_candidates,
    equipment_contact_candidates, ExposureWindow, NetworkConfig,
};
pub use cache::{NetworkCache, NetworkCacheKey};
pub use graph::{EdgeType, Network, NetworkEdge, NetworkNode, NodeType};
