//! Plants saplings on one plot per biome and grows them.
//!
//! Each plot runs on its own thread with its own world and RNG; all threads
//! share one [`BiomeTreeGrower`] and therefore one catalog cache.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::thread::ScopedJoinHandle;

use canopy_config::{CliArgs, Config, ConfigError, SimulationConfig};
use canopy_trees::{Biome, BiomeTreeGrower, BlockPos, GrowthWorld, MaterialId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::data::{SaplingDef, SimData};
use crate::grid::GridWorld;

const GROUND_Y: i32 = 64;
const HEIGHT_LIMIT: i32 = 128;

/// Growth results for one biome plot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlotReport {
    pub biome: String,
    /// Biome trees grown, by tree name.
    pub biome_trees: BTreeMap<String, u32>,
    /// Saplings that grew their own default tree instead.
    pub fallback: u32,
    /// Saplings that could not grow at all and are still standing.
    pub stuck: u32,
    /// Non-air blocks on the plot afterwards.
    pub blocks: usize,
    /// Solid blocks on the plot afterwards, by material.
    pub materials: BTreeMap<MaterialId, usize>,
}

impl PlotReport {
    /// Total number of biome trees grown.
    pub fn biome_tree_count(&self) -> u32 {
        self.biome_trees.values().sum()
    }
}

/// Runs the simulation over every registered biome.
pub fn run(config: &SimulationConfig, grower: &BiomeTreeGrower, data: &SimData) -> Vec<PlotReport> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = data
            .biomes
            .iter()
            .map(|(id, biome)| {
                let seed = config.seed ^ u64::from(id.0);
                std::thread::Builder::new()
                    .name(format!("plot-{}", biome.name))
                    .spawn_scoped(scope, move || {
                        grow_plot(config, grower, biome, &data.saplings, seed)
                    })
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|handle| match handle {
                Ok(handle) => join_plot(handle),
                Err(e) => {
                    tracing::error!("failed to spawn plot thread: {e}");
                    None
                }
            })
            .collect()
    })
}

/// Waits for a plot thread, logging its panic instead of propagating it.
fn join_plot(handle: ScopedJoinHandle<'_, PlotReport>) -> Option<PlotReport> {
    let plot = handle.thread().name().unwrap_or("plot").to_string();
    match handle.join() {
        Ok(report) => Some(report),
        Err(_) => {
            tracing::error!(thread = %plot, "plot thread panicked; report dropped");
            None
        }
    }
}

/// Re-reads `config.ron` and applies a changed growth toggle to `grower`.
///
/// CLI overrides win over the file, as they did at startup. Returns `true`
/// if the effective config changed.
pub fn reload_config(
    config: &mut Config,
    config_dir: &Path,
    args: &CliArgs,
    grower: &BiomeTreeGrower,
) -> Result<bool, ConfigError> {
    let Some(mut reloaded) = config.reload(config_dir)? else {
        return Ok(false);
    };
    reloaded.apply_cli_overrides(args);
    if reloaded == *config {
        return Ok(false);
    }

    let enabled = reloaded.biome_trees.saplings_grow_biome_trees;
    if enabled != grower.is_enabled() {
        tracing::info!(enabled, "biome tree growth toggled by config reload");
        grower.set_enabled(enabled);
    }
    *config = reloaded;
    Ok(true)
}

/// Plants and grows saplings on a single plot.
pub fn grow_plot(
    config: &SimulationConfig,
    grower: &BiomeTreeGrower,
    biome: &Arc<Biome>,
    saplings: &[SaplingDef],
    seed: u64,
) -> PlotReport {
    let mut world = GridWorld::new(HEIGHT_LIMIT);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut report = PlotReport {
        biome: biome.name.clone(),
        ..PlotReport::default()
    };

    if saplings.is_empty() {
        tracing::warn!(biome = %report.biome, "no saplings to plant");
        return report;
    }

    let spacing = config.sapling_spacing.max(1) as i32;
    let columns = (config.plot_size / config.sapling_spacing.max(1)).max(1);

    for i in 0..config.saplings_per_biome {
        let sapling_index = i as usize % saplings.len();
        let sapling = &saplings[sapling_index];
        let pos = BlockPos::new(
            (i % columns) as i32 * spacing,
            GROUND_Y,
            (i / columns) as i32 * spacing,
        );
        world.plant(pos, sapling_index);

        if grower.try_spawn_matching_tree(&mut world, biome, pos, &sapling.tree, &mut rng) {
            let name = world.take_last_placed().unwrap_or_default();
            *report.biome_trees.entry(name).or_default() += 1;
            continue;
        }

        // Default growth, as the host would do it.
        world.clear_block(pos);
        if world.place_tree(&sapling.tree, pos, &mut rng) {
            world.take_last_placed();
            report.fallback += 1;
        } else {
            world.plant(pos, sapling_index);
            report.stuck += 1;
        }
    }

    report.blocks = world.filled();
    report.materials = world.material_counts();
    tracing::debug!(
        biome = %report.biome,
        grown = report.biome_tree_count(),
        fallback = report.fallback,
        stuck = report.stuck,
        "plot finished"
    );
    report
}
