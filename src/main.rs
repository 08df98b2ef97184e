use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use walker_tree::{render, GridPoint, GrowthConfig, Simulation, StrategyKind};

/// Grow a random-walk tree and write it out as a PNG.
#[derive(Parser, Debug)]
#[command(name = "walker_tree", version)]
struct Cli {
    /// Grid width in pixels.
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    width : u32,
    /// Grid height in pixels.
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    height : u32,
    /// Number of growth attempts.
    #[arg(long, default_value_t = 10_000)]
    iterations : u32,
    /// Direction model used by the walkers.
    #[arg(long, value_enum, default_value_t = StrategyKind::Biased)]
    strategy : StrategyKind,
    /// RNG seed; a random one is drawn and logged when omitted.
    #[arg(long)]
    seed : Option<u64>,
    /// Steps after which a walker is abandoned.
    #[arg(long, default_value_t = 10_000, value_parser = clap::value_parser!(u32).range(1..))]
    max_walker_steps : u32,
    /// Initial tree pixel as X,Y. Repeat for several; defaults to a short trunk at the bottom centre.
    #[arg(long = "seed-pixel", value_name = "X,Y")]
    seed_pixels : Vec<SeedPixelArg>,
    /// Log progress every this many attempts (0 disables).
    #[arg(long, default_value_t = 1_000)]
    progress_interval : u32,
    /// Where to write the image.
    #[arg(long, short, default_value = "tree.png")]
    output : PathBuf,
    /// Draw the final bounding box over the tree.
    #[arg(long)]
    outline_bounds : bool,
    /// Open the image in the default viewer once written.
    #[arg(long)]
    open : bool,
}

#[derive(Clone, Copy, Debug)]
struct SeedPixelArg(GridPoint);

impl FromStr for SeedPixelArg {
    type Err = String;

    fn from_str(value : &str) -> Result<Self, Self::Err> {
        let (x, y) = value
            .split_once(',')
            .ok_or_else(|| "expected format X,Y".to_string())?;
        let x = x.trim().parse::<i64>().map_err(|e| format!("bad x coordinate: {e}"))?;
        let y = y.trim().parse::<i64>().map_err(|e| format!("bad y coordinate: {e}"))?;
        Ok(SeedPixelArg(GridPoint { x, y }))
    }
}

impl Cli {
    fn growth_config(self : &Self) -> GrowthConfig {
        let mut config = GrowthConfig::init(self.width, self.height);
        config.iterations = self.iterations;
        config.strategy = self.strategy;
        config.rng_seed = self.seed;
        config.max_walker_steps = self.max_walker_steps;
        config.progress_interval = self.progress_interval;
        if !self.seed_pixels.is_empty() {
            config.seeds = self.seed_pixels.iter().map(|arg| arg.0).collect();
        }
        config
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("walker_tree=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut sim = Simulation::init(cli.growth_config()).context("failed to set up simulation")?;
    sim.run().context("growth failed")?;

    let mut image = render::image(sim.grid());
    if cli.outline_bounds {
        render::outline_bounds(&mut image, sim.bounds());
    }
    render::save_png(&image, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(path = %cli.output.display(), rng_seed = sim.rng_seed(), "done!");

    if cli.open {
        if let Err(err) = open::that(&cli.output) {
            warn!(error = %err, "could not open image viewer");
        }
    }
    Ok(())
}
