//! Biome-matched sapling growth: grows saplings into the tree variants their
//! biome generates naturally, falling back to the host's own growth otherwise.

mod cache;
mod catalog;
mod grower;
mod material;
mod random;
mod selector;
mod species;
mod world;

pub mod biome;
pub mod feature;

#[cfg(test)]
mod testing;

pub use biome::{Biome, BiomeId, BiomeRegistry, BiomeRegistryError, DecorationStep, GenerationSettings};
pub use cache::CatalogCache;
pub use catalog::{BiomeCatalog, WeightedTreeEntry};
pub use feature::{
    ConfiguredFeature, FeatureConfig, FeatureKind, PlacedFeature, PlacementModifier,
    RandomSelectorConfig, TreeDescriptor, WeightedPlacedFeature,
};
pub use grower::BiomeTreeGrower;
pub use material::{MaterialId, MaterialProvider};
pub use random::TreeRandom;
pub use selector::{Outcome, select};
pub use species::{SpeciesMatcher, matches};
pub use world::{BlockPos, GrowthWorld};
