//! Sapling growth simulator.
//!
//! Loads biome definitions, plants a plot of saplings in every biome and
//! reports which trees they grew into.
//! Run with `cargo run -p canopy-sim -- --saplings 128 --seed 7`.

mod data;
mod grid;
mod sim;

use std::path::PathBuf;

use canopy_config::{CliArgs, Config, SimulationConfig};
use canopy_trees::BiomeTreeGrower;
use clap::Parser;
use tracing::info;

use crate::data::SimData;
use crate::sim::PlotReport;

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("canopy"))
            .unwrap_or_else(|| PathBuf::from(".canopy"))
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    canopy_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let data = match SimData::load(&config.simulation.data_path) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    let grower = BiomeTreeGrower::new(config.biome_trees.saplings_grow_biome_trees);
    info!(
        enabled = grower.is_enabled(),
        seed = config.simulation.seed,
        saplings_per_biome = config.simulation.saplings_per_biome,
        "growing saplings"
    );

    for round in 0..config.simulation.rounds.max(1) {
        if round > 0 {
            match sim::reload_config(&mut config, &config_dir, &args, &grower) {
                Ok(changed) => tracing::debug!(round, changed, "checked config"),
                Err(e) => tracing::warn!("config reload failed, keeping current settings: {e}"),
            }
        }

        let settings = SimulationConfig {
            seed: config.simulation.seed.wrapping_add(u64::from(round)),
            ..config.simulation.clone()
        };
        let reports = sim::run(&settings, &grower, &data);
        for report in &reports {
            log_report(round, report, &data);
        }
    }
    info!(catalogs = grower.cache().build_count(), "done");
}

fn log_report(round: u32, report: &PlotReport, data: &SimData) {
    let grown: Vec<String> = report
        .biome_trees
        .iter()
        .map(|(name, count)| format!("{name}x{count}"))
        .collect();
    info!(
        round,
        biome = %report.biome,
        biome_trees = report.biome_tree_count(),
        fallback = report.fallback,
        stuck = report.stuck,
        blocks = report.blocks,
        "{}",
        if grown.is_empty() { "-".to_string() } else { grown.join(", ") }
    );
    for (id, count) in &report.materials {
        tracing::debug!(biome = %report.biome, material = data.material_name(*id), count);
    }
}
