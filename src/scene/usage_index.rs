//! Usage index - reverse mapping from assets to referencing objects
//!
//! Answers "which objects currently use this asset?" without scanning the
//! scene. The index knows nothing about the full object shape, only
//! (object id, asset id) pairs. [`ObjectStore`](super::ObjectStore) is
//! responsible for keeping it consistent with the scene across mutations.

use std::collections::{HashMap, HashSet};

/// Reverse mapping from asset id to the set of referencing object ids
///
/// An absent key means "no known references" - entries with empty sets are
/// removed eagerly, so the two states are indistinguishable by design.
#[derive(Debug, Clone, Default)]
pub struct UsageIndex {
    by_asset: HashMap<String, HashSet<u64>>,
}

impl UsageIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            by_asset: HashMap::new(),
        }
    }

    /// Record that `object_id` references `asset_id`
    ///
    /// Idempotent - registering the same pair twice has no additional effect.
    pub fn register(&mut self, object_id: u64, asset_id: &str) {
        self.by_asset
            .entry(asset_id.to_string())
            .or_default()
            .insert(object_id);
    }

    /// Remove the record that `object_id` references `asset_id`
    ///
    /// Drops the asset entry entirely when its set becomes empty. No-op if
    /// the pair was never registered.
    pub fn unregister(&mut self, object_id: u64, asset_id: &str) {
        if let Some(ids) = self.by_asset.get_mut(asset_id) {
            ids.remove(&object_id);
            if ids.is_empty() {
                self.by_asset.remove(asset_id);
            }
        }
    }

    /// Object ids currently referencing `asset_id`
    ///
    /// Returns a snapshot; empty set if the asset is unknown. Mutating the
    /// returned set does not affect the index.
    pub fn usages(&self, asset_id: &str) -> HashSet<u64> {
        self.by_asset.get(asset_id).cloned().unwrap_or_default()
    }

    /// Number of objects referencing `asset_id`
    pub fn usage_count(&self, asset_id: &str) -> usize {
        self.by_asset.get(asset_id).map(|ids| ids.len()).unwrap_or(0)
    }

    /// Check if any object references `asset_id`
    pub fn contains(&self, asset_id: &str) -> bool {
        self.by_asset.contains_key(asset_id)
    }

    /// Number of assets with at least one reference
    pub fn asset_count(&self) -> usize {
        self.by_asset.len()
    }

    /// Check if no asset is referenced at all
    pub fn is_empty(&self) -> bool {
        self.by_asset.is_empty()
    }

    /// Iterate over all (asset id, referencing object ids) entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<u64>)> {
        self.by_asset.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All asset ids with at least one reference
    pub fn asset_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.by_asset.keys().map(|s| s.as_str()).collect();
        ids.sort();
        ids
    }

    /// Drop every entry
    ///
    /// Used when switching to a different scene within the same session,
    /// before re-syncing from the new scene's objects.
    pub fn clear(&mut self) {
        self.by_asset.clear();
    }
}
