//! Asset registry for one analysis run.

use crate::models::{Asset, AssetId};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::warn;

/// Holds every asset referenced during a run.
///
/// Assets are created when first referenced by an extractor; later
/// registrations under the same id are ignored. The engine freezes the
/// registry before scoring so the asset universe cannot shift mid-analysis.
/// Iteration order is ascending by asset id.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    assets: BTreeMap<AssetId, Asset>,
    frozen: bool,
}

impl AssetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an asset unless one with the same id already exists.
    ///
    /// Returns whether the asset was inserted. Registrations after the
    /// registry froze are ignored with a warning.
    pub fn register(&mut self, asset: Asset) -> bool {
        if self.frozen {
            warn!(asset_id = %asset.id, "registry frozen, ignoring late registration");
            return false;
        }
        match self.assets.entry(asset.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(asset);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Marks the registry immutable for the rest of the run.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether the registry has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Looks up an asset by id.
    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.get(id)
    }

    /// Whether an asset with this id is registered.
    pub fn contains(&self, id: &AssetId) -> bool {
        self.assets.contains_key(id)
    }

    /// Number of registered assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterates assets in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }
}
