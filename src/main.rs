//! Terminal sorting algorithm visualizer - entry point.

use clap::Parser;
use sortviz::config::CliOverrides;
use sortviz::model::{Algorithm, Direction, GenerationParams};
use std::path::PathBuf;
use tracing::info;

/// Terminal visualizer that animates sorting algorithms one swap per frame
#[derive(Parser, Debug)]
#[command(name = "sortviz")]
#[command(version)]
#[command(about = "Terminal visualizer that animates sorting algorithms one swap per frame")]
pub struct Args {
    /// Number of bars to sort
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Inclusive lower bound of the random value range
    #[arg(long)]
    pub min_value: Option<u32>,

    /// Inclusive upper bound of the random value range
    #[arg(long)]
    pub max_value: Option<u32>,

    /// Frame rate in ticks per second (1-240)
    #[arg(short, long)]
    pub tick_rate: Option<u32>,

    /// Algorithm to start with
    #[arg(short, long, value_parser = ["bubble", "insertion"])]
    pub algorithm: Option<String>,

    /// Start with descending order selected
    #[arg(short, long)]
    pub descending: bool,

    /// Seed for the random sequence (reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Propagate --no-color through the environment so every styling
    // decision sees the same answer.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve configuration with the full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = sortviz::config::load_config_with_precedence(args.config.clone())?;
        let merged = sortviz::config::merge_config(config_file)?;
        let with_env = sortviz::config::apply_env_overrides(merged);

        let overrides = CliOverrides {
            count: args.count,
            min_value: args.min_value,
            max_value: args.max_value,
            tick_rate: args.tick_rate,
            // clap already restricted the value set; an unknown name here
            // would be a bug in the value_parser list.
            algorithm: args.algorithm.as_deref().and_then(Algorithm::parse),
            direction: args.descending.then_some(Direction::Descending),
        };
        sortviz::config::apply_cli_overrides(with_env, overrides)
    };

    // Fail fast on invalid parameters before touching the terminal.
    config.validate()?;
    let params = GenerationParams::new(config.count, config.min_value, config.max_value)?;

    sortviz::logging::init(&config.log_file_path)?;
    info!(config = ?config, seed = ?args.seed, "configuration resolved");

    let colors = sortviz::view::ColorConfig::from_env_and_args(args.no_color);
    sortviz::view::run_with_config(&config, params, args.seed, colors)?;

    Ok(())
}
