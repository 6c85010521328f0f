//! Biome definition files: materials, saplings and biomes in one RON document.

use std::path::{Path, PathBuf};

use canopy_trees::{
    BiomeCatalog, BiomeRegistry, BiomeRegistryError, MaterialId, MaterialProvider, TreeDescriptor,
};
use serde::Deserialize;

use crate::grid::{MAX_FOLIAGE_RADIUS, MAX_TRUNK_HEIGHT};

/// Errors raised while loading simulator data.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("failed to read biome data {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse biome data: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error(transparent)]
    Registry(#[from] BiomeRegistryError),

    #[error("material table must start with \"air\"")]
    MissingAir,

    #[error("{context} references unknown material {id}")]
    UnknownMaterial { context: String, id: u16 },

    #[error(
        "{context} is too large (trunk height {trunk_height}, foliage radius {foliage_radius}; limits {} and {})",
        MAX_TRUNK_HEIGHT,
        MAX_FOLIAGE_RADIUS
    )]
    TreeTooLarge {
        context: String,
        trunk_height: u32,
        foliage_radius: u32,
    },

    #[error("no saplings defined")]
    NoSaplings,
}

/// A plantable sapling and the tree it grows into by default.
#[derive(Clone, Debug, Deserialize)]
pub struct SaplingDef {
    pub name: String,
    pub tree: TreeDescriptor,
}

#[derive(Deserialize)]
struct DataFile {
    materials: Vec<String>,
    saplings: Vec<SaplingDef>,
    biomes: Vec<canopy_trees::Biome>,
}

/// Validated simulator data.
pub struct SimData {
    /// Material names indexed by [`MaterialId`].
    pub materials: Vec<String>,
    pub saplings: Vec<SaplingDef>,
    pub biomes: BiomeRegistry,
}

impl SimData {
    /// Reads and validates a data file.
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SimError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::parse(&contents)?;
        tracing::info!(
            path = %path.display(),
            biomes = data.biomes.len(),
            saplings = data.saplings.len(),
            "loaded biome data"
        );
        Ok(data)
    }

    /// Parses and validates a data document.
    pub fn parse(src: &str) -> Result<Self, SimError> {
        let file: DataFile = ron::from_str(src)?;

        if file.materials.first().map(String::as_str) != Some("air") {
            return Err(SimError::MissingAir);
        }
        if file.saplings.is_empty() {
            return Err(SimError::NoSaplings);
        }

        let material_count = file.materials.len();
        for sapling in &file.saplings {
            check_tree(&sapling.tree, material_count, &sapling.name)?;
        }
        for biome in &file.biomes {
            let catalog = BiomeCatalog::build(biome);
            let trees = catalog
                .weighted
                .iter()
                .map(|e| &e.descriptor)
                .chain(&catalog.defaults);
            for tree in trees {
                check_tree(tree, material_count, &biome.name)?;
            }
        }

        let mut biomes = BiomeRegistry::new();
        for biome in file.biomes {
            biomes.register(biome)?;
        }

        Ok(Self {
            materials: file.materials,
            saplings: file.saplings,
            biomes,
        })
    }

    /// Name of a material, or `"?"` for an unknown ID.
    pub fn material_name(&self, id: MaterialId) -> &str {
        self.materials
            .get(id.0 as usize)
            .map(String::as_str)
            .unwrap_or("?")
    }
}

fn check_tree(tree: &TreeDescriptor, material_count: usize, owner: &str) -> Result<(), SimError> {
    if tree.trunk_height > MAX_TRUNK_HEIGHT || tree.foliage_radius > MAX_FOLIAGE_RADIUS {
        return Err(SimError::TreeTooLarge {
            context: format!("{owner}/{}", tree.name),
            trunk_height: tree.trunk_height,
            foliage_radius: tree.foliage_radius,
        });
    }
    for provider in [&tree.trunk, &tree.foliage] {
        let ids: Vec<MaterialId> = match provider {
            MaterialProvider::Simple(id) => vec![*id],
            MaterialProvider::Weighted(entries) => entries.iter().map(|&(id, _)| id).collect(),
        };
        if let Some(bad) = ids.into_iter().find(|id| id.0 as usize >= material_count) {
            return Err(SimError::UnknownMaterial {
                context: format!("{owner}/{}", tree.name),
                id: bad.0,
            });
        }
    }
    Ok(())
}
