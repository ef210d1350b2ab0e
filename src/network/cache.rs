//! Explicit per-query network cache.
//!
//! The builder is a pure function, so repeated queries against an
//! unchanged event set can be memoized. The cache is keyed on an
//! explicit, monotonically incremented event-set version supplied by
//! the owning application shell - never on object identity.

use super::graph::Network;
use log::debug;
use std::collections::HashMap;

/// Cache key: one entry per (event-set version, index person, depth)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkCacheKey {
    /// Version counter of the upstream event set, bumped on any mutation
    pub events_version: u64,
    pub index_person_id: String,
    pub max_depth: usize,
}

impl NetworkCacheKey {
    pub fn new(events_version: u64, index_person_id: impl Into<String>, max_depth: usize) -> Self {
        Self {
            events_version,
            index_person_id: index_person_id.into(),
            max_depth,
        }
    }
}

/// Memoized network results
#[derive(Debug, Default)]
pub struct NetworkCache {
    entries: HashMap<NetworkCacheKey, Network>,
}

impl NetworkCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached network
    pub fn get(&self, key: &NetworkCacheKey) -> Option<&Network> {
        self.entries.get(key)
    }

    /// Return the cached network for `key`, building and storing it on miss
    ///
    /// **Public** - main entry point for memoized queries
    pub fn get_or_build(
        &mut self,
        key: NetworkCacheKey,
        build: impl FnOnce() -> Network,
    ) -> &Network {
        if self.entries.contains_key(&key) {
            debug!(
                "Network cache hit: v{} index {}",
                key.events_version, key.index_person_id
            );
        } else {
            debug!(
                "Network cache miss: v{} index {}",
                key.events_version, key.index_person_id
            );
        }
        self.entries.entry(key).or_insert_with(build)
    }

    /// Drop every entry built against a different event-set version
    pub fn retain_version(&mut self, events_version: u64) {
        self.entries
            .retain(|key, _| key.events_version == events_version);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_build_builds_once() {
        let mut cache = NetworkCache::new();
        let key = NetworkCacheKey::new(1, "P001", 1);

        let mut builds = 0;
        cache.get_or_build(key.clone(), || {
            builds += 1;
            Network::new("P001")
        });
        let network = cache.get_or_build(key.clone(), || {
            builds += 1;
            Network::new("P001")
        });

        assert_eq!(builds, 1);
        assert_eq!(network.source, "P001");
        assert!(cache.get(&key).is_some());
    }

    #[test]
    fn test_version_bump_misses() {
        let mut cache = NetworkCache::new();
        cache.get_or_build(NetworkCacheKey::new(1, "P001", 1), || Network::new("P001"));
        assert!(cache.get(&NetworkCacheKey::new(2, "P001", 1)).is_none());

        cache.retain_version(2);
        assert!(cache.is_empty());
    }
}
