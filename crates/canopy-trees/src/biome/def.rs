//! Biome definition: a named set of decoration features grouped by generation step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::feature::PlacedFeature;

/// World-generation steps that decorate a chunk, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DecorationStep {
    RawGeneration,
    Lakes,
    LocalModifications,
    UndergroundStructures,
    SurfaceStructures,
    Strongholds,
    UndergroundOres,
    UndergroundDecoration,
    FluidSprings,
    /// Trees, flowers, grass and other plants.
    VegetalDecoration,
    TopLayerModification,
}

/// Decoration features of a biome, keyed by the step that places them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationSettings {
    features: BTreeMap<DecorationStep, Vec<PlacedFeature>>,
}

impl GenerationSettings {
    /// Creates settings with no features.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a feature to the given step, after any already declared.
    pub fn add_feature(&mut self, step: DecorationStep, feature: PlacedFeature) {
        self.features.entry(step).or_default().push(feature);
    }

    /// Features of one step in declaration order (empty if none).
    pub fn features(&self, step: DecorationStep) -> &[PlacedFeature] {
        self.features.get(&step).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Full descriptor for a biome type.
///
/// Biomes are shared as `Arc<Biome>`; two separately allocated biomes are
/// distinct even when their contents are equal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Biome {
    /// Human-readable biome name (e.g., "birch_forest").
    pub name: String,
    /// Decoration features placed during world generation.
    #[serde(default)]
    pub generation: GenerationSettings,
}

impl Biome {
    /// Creates a biome with no decoration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generation: GenerationSettings::new(),
        }
    }

    /// Builder-style helper appending a vegetal decoration feature.
    pub fn with_vegetation(mut self, feature: PlacedFeature) -> Self {
        self.generation
            .add_feature(DecorationStep::VegetalDecoration, feature);
        self
    }

    /// Vegetal decoration features in declaration order.
    pub fn vegetation(&self) -> &[PlacedFeature] {
        self.generation.features(DecorationStep::VegetalDecoration)
    }
}
