//! Entry point called by the host when a sapling is about to grow.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::biome::Biome;
use crate::cache::CatalogCache;
use crate::feature::TreeDescriptor;
use crate::random::TreeRandom;
use crate::selector::{Outcome, select};
use crate::world::{BlockPos, GrowthWorld};

/// Grows saplings into trees native to the surrounding biome.
///
/// Owns the catalog cache for the lifetime of the process. Shared by
/// reference between world-generation threads.
pub struct BiomeTreeGrower {
    enabled: AtomicBool,
    cache: CatalogCache,
}

impl BiomeTreeGrower {
    /// Creates a grower with an empty cache.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            cache: CatalogCache::new(),
        }
    }

    /// Whether saplings currently grow biome trees.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turns biome tree growth on or off, e.g. after a config reload.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// The catalog cache backing this grower.
    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    /// Tries to grow a tree native to `biome` whose species matches `expected`.
    ///
    /// Returns `true` if a tree was placed and the host must skip its own
    /// growth. On `false` the block at `pos` is left as it was.
    pub fn try_spawn_matching_tree<W, R>(
        &self,
        world: &mut W,
        biome: &Arc<Biome>,
        pos: BlockPos,
        expected: &TreeDescriptor,
        rng: &mut R,
    ) -> bool
    where
        W: GrowthWorld,
        R: TreeRandom + ?Sized,
    {
        if !self.is_enabled() {
            return false;
        }

        let catalog = self.cache.get(biome);
        if catalog.is_empty() {
            return false;
        }

        let sapling = world.block_state(pos);
        world.clear_block(pos);

        match select(&catalog, expected, world, pos, rng) {
            Outcome::Placed(tree) => {
                tracing::debug!(biome = %biome.name, tree = %tree.name, ?pos, "sapling grew biome tree");
                true
            }
            Outcome::NoMatch => {
                world.set_block_state(pos, sapling);
                false
            }
        }
    }
}

impl Default for BiomeTreeGrower {
    fn default() -> Self {
        Self::new(true)
    }
}
