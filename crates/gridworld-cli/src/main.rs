mod render;

use anyhow::Context;
use clap::Parser;
use gridworld_core::{TickStats, World, WorldConfig};
use std::fs;
use std::path::PathBuf;

/// Run the grid ecosystem simulation in the terminal.
#[derive(Parser, Debug)]
#[command(name = "gridworld", version)]
struct Args {
    /// Grid height in cells.
    #[arg(long, default_value_t = 128)]
    rows: usize,

    /// Grid width in cells.
    #[arg(long, default_value_t = 128)]
    columns: usize,

    /// RNG seed; identical seeds replay identical runs.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 1000)]
    ticks: usize,

    /// Print the grid and statistics every N ticks (0 = statistics only at the end).
    #[arg(long, default_value_t = 100)]
    render_every: usize,

    /// Suppress the ASCII grid and print only the statistics table.
    #[arg(long)]
    no_grid: bool,

    /// Write per-render-tick statistics samples to this file as JSON.
    #[arg(long)]
    metrics_out: Option<PathBuf>,
}

fn config_from_args(args: &Args) -> WorldConfig {
    WorldConfig {
        seed: args.seed,
        rows: args.rows,
        columns: args.columns,
        // Founder populations scale with the grid the same way the 128x128
        // defaults do.
        initial_plants: args.rows * args.columns / 4,
        initial_herbivores: (args.rows * args.columns * 1000 / (128 * 128)).max(1),
        initial_carnivores: (args.rows * args.columns * 500 / (128 * 128)).max(1),
        ..WorldConfig::default()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = config_from_args(&args);
    let mut world = World::try_new(config).context("world initialization failed")?;
    log::info!(
        "initialized {}x{} world, seed {}",
        world.rows(),
        world.columns(),
        args.seed
    );

    let mut samples: Vec<TickStats> = Vec::new();
    for tick in 1..=args.ticks {
        world.update();
        let render_now = args.render_every > 0 && tick % args.render_every == 0;
        if render_now || tick == args.ticks {
            let stats = world.tick_stats();
            if render_now && !args.no_grid {
                print!("{}", render::render_grid(&world.snapshot()));
            }
            print!("{}", render::render_stats(&stats));
            if args.metrics_out.is_some() {
                samples.push(stats);
            }
        }
    }
    log::info!("finished {} ticks", args.ticks);

    if let Some(path) = &args.metrics_out {
        let json = serde_json::to_string_pretty(&samples)?;
        fs::write(path, json).with_context(|| format!("writing metrics to {}", path.display()))?;
        log::info!("wrote {} samples to {}", samples.len(), path.display());
    }
    Ok(())
}
