//! Biome system: biome definitions with their decoration features, and a registry.

mod def;
mod registry;

pub use def::{Biome, DecorationStep, GenerationSettings};
pub use registry::{BiomeId, BiomeRegistry, BiomeRegistryError};
