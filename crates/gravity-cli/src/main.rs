use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use gravity::config::SimulationConfig;
use gravity::world::{BodySnapshot, World};

/// Run the merging-planets simulation without a window
#[derive(Parser, Debug)]
#[command(name = "gravity", version)]
struct Args {
    /// Number of planets (overrides the config file)
    body_count: Option<usize>,

    /// Ticks to simulate
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// YAML file with a simulation configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log diagnostics every K ticks
    #[arg(long, default_value_t = 100)]
    report_every: usize,

    /// Print the final state as JSON on stdout
    #[arg(long)]
    snapshot: bool,
}

fn load_config(path: &Path) -> Result<SimulationConfig> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let config = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}

fn report(world: &World) {
    info!(
        "t={:.1} live={} mass={:.6e} absorbed={:.6e} energy={:.6e}",
        world.time,
        world.live_count(),
        world.total_live_mass(),
        world.anchor_absorbed_mass(),
        world.kinetic_energy() + world.potential_energy()
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(count) = args.body_count {
        config.body_count = count;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut world = World::generate(&config).context("invalid simulation configuration")?;
    report(&world);

    for tick in 1..=args.steps {
        world.tick(config.timestep);
        if args.report_every > 0 && tick % args.report_every == 0 {
            report(&world);
        }
    }

    info!(
        "finished {} ticks: {} of {} bodies live",
        args.steps,
        world.live_count(),
        world.body_count()
    );

    if args.snapshot {
        let bodies: Vec<BodySnapshot> = world.snapshot().collect();
        let mut out = io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, &bodies).context("failed to write snapshot")?;
        writeln!(out)?;
    }

    Ok(())
}
