//! Configuration for Canopy.
//!
//! Runtime-configurable settings that persist to disk as RON files, with CLI
//! overrides via clap and hot-reload detection.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{BiomeTreesConfig, Config, DebugConfig, SimulationConfig};
pub use error::ConfigError;
