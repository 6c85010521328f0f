//! Biome registry: maps [`BiomeId`] to shared [`Biome`] definitions with name-based lookup.

use std::sync::Arc;

use hashbrown::HashMap;

use super::Biome;

/// Unique identifier for a biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BiomeId(pub u16);

/// Errors that can occur when registering biomes.
#[derive(Debug, thiserror::Error)]
pub enum BiomeRegistryError {
    /// A biome with this name is already registered.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),
}

/// Stores all registered biomes with O(1) lookup by ID.
///
/// Each registered biome is allocated once, so the `Arc` handed out by
/// [`BiomeRegistry::get`] is a stable identity for catalog caching.
pub struct BiomeRegistry {
    biomes: Vec<Arc<Biome>>,
    name_to_id: HashMap<String, BiomeId>,
}

impl BiomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            biomes: Vec::new(),
            name_to_id: HashMap::new(),
        }
    }

    /// Registers a biome, returning its assigned [`BiomeId`].
    ///
    /// # Errors
    ///
    /// Returns [`BiomeRegistryError::DuplicateName`] if a biome with the same name exists.
    pub fn register(&mut self, biome: Biome) -> Result<BiomeId, BiomeRegistryError> {
        if self.name_to_id.contains_key(&biome.name) {
            return Err(BiomeRegistryError::DuplicateName(biome.name));
        }
        let id = BiomeId(self.biomes.len() as u16);
        self.name_to_id.insert(biome.name.clone(), id);
        self.biomes.push(Arc::new(biome));
        Ok(id)
    }

    /// Returns the biome for the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn get(&self, id: BiomeId) -> &Arc<Biome> {
        &self.biomes[id.0 as usize]
    }

    /// Looks up a biome ID by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<BiomeId> {
        self.name_to_id.get(name).copied()
    }

    /// Iterates over all biomes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (BiomeId, &Arc<Biome>)> {
        self.biomes
            .iter()
            .enumerate()
            .map(|(i, b)| (BiomeId(i as u16), b))
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}

impl Default for BiomeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
