//! Decoration feature graph: the declarative recipes a biome decorates itself with.
//!
//! A biome lists [`PlacedFeature`]s. Each wraps a [`ConfiguredFeature`], which is
//! either a tree recipe, a random selector over further placed features, or some
//! other decoration (flowers, boulders, ...) this crate does not care about.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::material::{MaterialId, MaterialProvider};

/// A tree-generation recipe.
///
/// Geometry is produced by the host; only the material providers matter for
/// species identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeDescriptor {
    /// Human-readable name (e.g. "fancy_oak").
    pub name: String,
    /// Provider for log blocks.
    pub trunk: MaterialProvider,
    /// Provider for leaf blocks.
    pub foliage: MaterialProvider,
    /// Trunk height in blocks.
    #[serde(default = "default_trunk_height")]
    pub trunk_height: u32,
    /// Radius of the foliage blob around the trunk top.
    #[serde(default = "default_foliage_radius")]
    pub foliage_radius: u32,
}

fn default_trunk_height() -> u32 {
    5
}

fn default_foliage_radius() -> u32 {
    2
}

impl TreeDescriptor {
    /// Creates a descriptor with single-material providers and default shape.
    pub fn simple(name: impl Into<String>, trunk: MaterialId, foliage: MaterialId) -> Self {
        Self {
            name: name.into(),
            trunk: MaterialProvider::Simple(trunk),
            foliage: MaterialProvider::Simple(foliage),
            trunk_height: default_trunk_height(),
            foliage_radius: default_foliage_radius(),
        }
    }
}

/// The generation routine a configured feature declares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Grows a tree.
    Tree,
    /// Picks among weighted sub-features with an unconditional fallback.
    RandomSelector,
    /// Any other decoration, identified by name.
    Other(String),
}

/// The configuration attached to a feature.
///
/// Declared independently of [`FeatureKind`]; a feature whose kind and config
/// disagree is malformed and treated as inert decoration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FeatureConfig {
    /// Tree recipe.
    Tree(Arc<TreeDescriptor>),
    /// Weighted choice between sub-features.
    RandomSelector(RandomSelectorConfig),
    /// Configuration of a decoration this crate does not inspect.
    Other,
}

/// Weighted sub-features plus the fallback used when none of them trigger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomSelectorConfig {
    /// Candidates tried in order, each with its own trigger probability.
    pub features: Vec<WeightedPlacedFeature>,
    /// Placed when no weighted candidate triggers.
    pub default: PlacedFeature,
}

/// A sub-feature of a random selector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedPlacedFeature {
    pub feature: PlacedFeature,
    /// Probability in `[0.0, 1.0]` that this candidate triggers.
    pub chance: f32,
}

/// A feature kind together with its configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredFeature {
    pub kind: FeatureKind,
    pub config: FeatureConfig,
}

impl ConfiguredFeature {
    /// A well-formed tree feature.
    pub fn tree(descriptor: Arc<TreeDescriptor>) -> Self {
        Self {
            kind: FeatureKind::Tree,
            config: FeatureConfig::Tree(descriptor),
        }
    }

    /// A well-formed random selector.
    pub fn random_selector(features: Vec<WeightedPlacedFeature>, default: PlacedFeature) -> Self {
        Self {
            kind: FeatureKind::RandomSelector,
            config: FeatureConfig::RandomSelector(RandomSelectorConfig { features, default }),
        }
    }

    /// A non-tree decoration.
    pub fn decoration(name: impl Into<String>) -> Self {
        Self {
            kind: FeatureKind::Other(name.into()),
            config: FeatureConfig::Other,
        }
    }

    /// The tree recipe, if this is a well-formed tree feature.
    pub fn tree_descriptor(&self) -> Option<&Arc<TreeDescriptor>> {
        match (&self.kind, &self.config) {
            (FeatureKind::Tree, FeatureConfig::Tree(descriptor)) => Some(descriptor),
            _ => None,
        }
    }
}

/// Where and how often a feature is attempted during world generation.
///
/// Carried as data only; tree cataloguing ignores placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlacementModifier {
    /// Attempt this many times per chunk.
    Count(u32),
    /// Attempt once every `n` chunks on average.
    RarityFilter(u32),
    /// Spread attempts across the chunk's horizontal square.
    InSquare,
    /// Snap attempts to the named heightmap.
    Heightmap(String),
    /// Reject attempts outside the decorating biome.
    BiomeFilter,
}

/// A configured feature wrapped with its placement rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedFeature {
    pub feature: Arc<ConfiguredFeature>,
    #[serde(default)]
    pub placement: Vec<PlacementModifier>,
}

impl PlacedFeature {
    /// Wraps a feature without placement rules.
    pub fn new(feature: ConfiguredFeature) -> Self {
        Self {
            feature: Arc::new(feature),
            placement: Vec::new(),
        }
    }
}
