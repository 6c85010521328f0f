//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Canopy simulator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "canopy", about = "Grow saplings into their biome's native trees")]
pub struct CliArgs {
    /// Grow biome trees from saplings (true/false).
    #[arg(long)]
    pub biome_trees: Option<bool>,

    /// World RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Saplings planted per biome.
    #[arg(long)]
    pub saplings: Option<u32>,

    /// Growth rounds, re-reading the config file between rounds.
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Biome definitions file.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(enabled) = args.biome_trees {
            self.biome_trees.saplings_grow_biome_trees = enabled;
        }
        if let Some(seed) = args.seed {
            self.simulation.seed = seed;
        }
        if let Some(count) = args.saplings {
            self.simulation.saplings_per_biome = count;
        }
        if let Some(rounds) = args.rounds {
            self.simulation.rounds = rounds;
        }
        if let Some(ref path) = args.data {
            self.simulation.data_path = path.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
