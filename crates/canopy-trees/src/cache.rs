//! Lazily built, process-lifetime cache of [`BiomeCatalog`]s keyed by biome identity.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use crate::biome::Biome;
use crate::catalog::BiomeCatalog;

/// A catalog together with the biome it was built from.
///
/// Holding the biome keeps its allocation alive, so the address used as the
/// key cannot be reused by another biome while the entry exists.
struct CachedCatalog {
    _biome: Arc<Biome>,
    catalog: Arc<BiomeCatalog>,
}

/// Memoizes [`BiomeCatalog::build`] per biome.
///
/// Keys are `Arc` identities: two separately allocated biomes with equal
/// contents get separate catalogs. A catalog is built at most once per biome,
/// also under concurrent first access.
pub struct CatalogCache {
    catalogs: DashMap<usize, CachedCatalog>,
    builds: AtomicUsize,
}

impl CatalogCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            catalogs: DashMap::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Returns the catalog of `biome`, building it on first access.
    pub fn get(&self, biome: &Arc<Biome>) -> Arc<BiomeCatalog> {
        let key = Arc::as_ptr(biome) as usize;

        if let Some(cached) = self.catalogs.get(&key) {
            return Arc::clone(&cached.catalog);
        }

        // The entry holds the shard lock while building, so racing callers for
        // the same biome wait here and then observe the stored catalog.
        let cached = self.catalogs.entry(key).or_insert_with(|| {
            self.builds.fetch_add(1, Ordering::Relaxed);
            CachedCatalog {
                _biome: Arc::clone(biome),
                catalog: Arc::new(BiomeCatalog::build(biome)),
            }
        });
        Arc::clone(&cached.catalog)
    }

    /// Number of catalogs built so far.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    /// Number of cached biomes.
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{ConfiguredFeature, PlacedFeature, TreeDescriptor};
    use crate::material::MaterialId;

    fn forest() -> Biome {
        Biome::new("forest").with_vegetation(PlacedFeature::new(ConfiguredFeature::tree(
            Arc::new(TreeDescriptor::simple("oak", MaterialId(1), MaterialId(2))),
        )))
    }

    #[test]
    fn test_second_get_reuses_catalog() {
        let cache = CatalogCache::new();
        let biome = Arc::new(forest());

        let first = cache.get(&biome);
        let second = cache.get(&biome);

        assert!(Arc::ptr_eq(&first, &second), "same biome must yield the same catalog");
        assert_eq!(cache.build_count(), 1);
        assert_eq!(second.defaults.len(), 1);
    }

    #[test]
    fn test_equal_biomes_are_distinct_keys() {
        let cache = CatalogCache::new();
        let a = Arc::new(forest());
        let b = Arc::new(forest());

        cache.get(&a);
        cache.get(&b);
        cache.get(&a.clone());

        assert_eq!(cache.build_count(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_empty_cache() {
        let cache = CatalogCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.build_count(), 0);
    }

    #[test]
    fn test_concurrent_first_access_builds_once() {
        let cache = CatalogCache::new();
        let biome = Arc::new(forest());

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..100 {
                        assert_eq!(cache.get(&biome).defaults.len(), 1);
                    }
                });
            }
        });

        assert_eq!(cache.build_count(), 1, "catalog must be built exactly once");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_keeps_biome_alive() {
        let cache = CatalogCache::new();
        let biome = Arc::new(forest());
        cache.get(&biome);
        assert_eq!(Arc::strong_count(&biome), 2);
    }
}
