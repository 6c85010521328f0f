//! Per-biome tree catalog: the vegetation feature graph flattened into trees.
//!
//! Random selectors are expanded recursively. A tree reached only through
//! weighted branches keeps the product of the branch chances; a tree reached
//! with certainty (product of exactly 1.0) is a default tree.

use std::sync::Arc;

use crate::biome::Biome;
use crate::feature::{FeatureConfig, FeatureKind, PlacedFeature, TreeDescriptor};

/// A tree reachable through at least one probabilistic branch.
#[derive(Clone, Debug)]
pub struct WeightedTreeEntry {
    pub descriptor: Arc<TreeDescriptor>,
    /// Product of every branch chance on the path from the biome's vegetation root.
    pub chance: f32,
}

/// Flattened tree features of one biome, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct BiomeCatalog {
    /// Trees that only generate with some probability.
    pub weighted: Vec<WeightedTreeEntry>,
    /// Trees that always generate when their parent feature is placed.
    pub defaults: Vec<Arc<TreeDescriptor>>,
}

impl BiomeCatalog {
    /// Walks the biome's vegetal decoration and collects every tree feature.
    pub fn build(biome: &Biome) -> Self {
        let mut catalog = Self::default();
        for placed in biome.vegetation() {
            catalog.collect(placed, 1.0);
        }
        tracing::debug!(
            biome = %biome.name,
            weighted = catalog.weighted.len(),
            defaults = catalog.defaults.len(),
            "built biome tree catalog"
        );
        catalog
    }

    /// Returns `true` if the biome contains no trees at all.
    pub fn is_empty(&self) -> bool {
        self.weighted.is_empty() && self.defaults.is_empty()
    }

    fn collect(&mut self, placed: &PlacedFeature, chance: f32) {
        let feature = &placed.feature;
        if let Some(descriptor) = feature.tree_descriptor() {
            if chance >= 1.0 {
                self.defaults.push(Arc::clone(descriptor));
            } else {
                self.weighted.push(WeightedTreeEntry {
                    descriptor: Arc::clone(descriptor),
                    chance,
                });
            }
            return;
        }

        match (&feature.kind, &feature.config) {
            (FeatureKind::RandomSelector, FeatureConfig::RandomSelector(selector)) => {
                for weighted in &selector.features {
                    self.collect(&weighted.feature, chance * weighted.chance);
                }
                self.collect(&selector.default, chance);
            }
            (FeatureKind::Other(_), _) => {}
            (kind, _) => {
                tracing::debug!(?kind, "ignoring feature whose config does not match its kind");
            }
        }
    }
}
