//! Command-line runner for the predator-prey simulation.

mod render;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use eco_core::SimulationConfig;
use eco_world::{FieldView, Simulator};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file; missing fields use defaults
    #[arg(short, long)]
    config: Option<String>,

    /// Number of steps to run (defaults to the configured long run)
    #[arg(short, long)]
    steps: Option<u64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Field depth (rows)
    #[arg(long)]
    depth: Option<i32>,

    /// Field width (columns)
    #[arg(long)]
    width: Option<i32>,

    /// Print the final animal field as text
    #[arg(long)]
    render: bool,

    /// Write the final population as JSON to this file
    #[arg(long)]
    snapshot: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => SimulationConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(steps) = args.steps {
        config.num_steps = steps;
    }
    if let Some(depth) = args.depth {
        config.field.depth = depth;
    }
    if let Some(width) = args.width {
        config.field.width = width;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    telemetry::init_telemetry(args.json_logs)?;

    let config = load_config(&args)?;
    info!(
        seed = config.seed,
        steps = config.num_steps,
        depth = config.field.depth,
        width = config.field.width,
        "Starting ecosim"
    );

    let mut sim = Simulator::new(config)?;
    let executed = sim.run_long()?;

    let stats = sim.stats();
    println!("{stats}");
    println!("Ran {executed} steps, viable: {}", sim.is_viable());

    if let Some(path) = &args.snapshot {
        let json = sim.snapshot().to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot to {path}"))?;
        info!(path = %path, step = sim.step_count(), "Snapshot written");
    }

    if args.render {
        let view = FieldView::new(sim.step_count(), sim.ecosystem());
        print!("{}", render::render_text(&view));
    }

    Ok(())
}
