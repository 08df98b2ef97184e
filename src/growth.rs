// Growth loop: one walker at a time, each spawned on the existing tree,
// until the attempt budget is spent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::bounds::BoundingBox;
use crate::config::GrowthConfig;
use crate::direction::Strategy;
use crate::error::GrowthError;
use crate::grid::{Grid, GridPoint};
use crate::walker::{WalkOutcome, Walker};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthStats {
    pub iterations : u32,
    pub stuck : u32,
    pub left_grid : u32,
    pub step_capped : u32,
    pub total_steps : u64
}

pub struct Simulation {
    config : GrowthConfig,
    grid : Grid,
    bounds : BoundingBox,
    strategy : Box<dyn Strategy>,
    rng : StdRng,
    rng_seed : u64,
    spawn : GridPoint,
    stats : GrowthStats
}

// Draws points in the box until one lands on the tree. Terminates because
// the box always holds at least one filled pixel.
fn draw_spawn<R : Rng + ?Sized>(grid : &Grid, bounds : &BoundingBox, rng : &mut R) -> GridPoint {
    loop {
        let candidate = bounds.random_point(rng);
        if grid.is_filled(candidate) {
            return candidate;
        }
    }
}

impl Simulation {
    pub fn init(config : GrowthConfig) -> Result<Simulation, GrowthError> {
        config.validate()?;

        let mut grid = Grid::init(config.width, config.height);
        for &seed in &config.seeds {
            grid.fill(seed);
        }
        let bounds = BoundingBox::from_seeds(&config.seeds)?;

        let rng_seed = config.rng_seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let spawn = draw_spawn(&grid, &bounds, &mut rng);

        info!(
            width = config.width,
            height = config.height,
            iterations = config.iterations,
            strategy = ?config.strategy,
            rng_seed,
            seeds = config.seeds.len(),
            "growth simulation initialised"
        );

        Ok(Simulation {
            strategy : config.build_strategy(),
            config,
            grid,
            bounds,
            rng,
            rng_seed,
            spawn,
            stats : GrowthStats::default()
        })
    }

    pub fn grid(self : &Self) -> &Grid {
        &self.grid
    }

    pub fn bounds(self : &Self) -> &BoundingBox {
        &self.bounds
    }

    pub fn stats(self : &Self) -> GrowthStats {
        self.stats
    }

    pub fn rng_seed(self : &Self) -> u64 {
        self.rng_seed
    }

    // Where the next walker will start.
    pub fn spawn_point(self : &Self) -> GridPoint {
        self.spawn
    }

    pub fn is_finished(self : &Self) -> bool {
        self.stats.iterations >= self.config.iterations
    }

    /// Picks a new spawn point on the tree inside the current bounds.
    pub fn reseed(self : &mut Self) -> GridPoint {
        self.spawn = draw_spawn(&self.grid, &self.bounds, &mut self.rng);
        self.spawn
    }

    /// Runs one growth attempt from the current spawn point, then reseeds.
    /// Discarded walkers still use up the attempt.
    pub fn step(self : &mut Self) -> Result<WalkOutcome, GrowthError> {
        let mut walker = Walker::spawn(self.spawn);
        let outcome = walker.walk(
            &mut self.grid,
            &mut self.bounds,
            self.strategy.as_ref(),
            &mut self.rng,
            self.config.max_walker_steps
        )?;

        self.stats.iterations += 1;
        self.stats.total_steps += u64::from(walker.age());
        match outcome {
            WalkOutcome::Stuck { .. } => self.stats.stuck += 1,
            WalkOutcome::LeftGrid { at } => {
                self.stats.left_grid += 1;
                debug!(x = at.x, y = at.y, "walker discarded off grid");
            },
            WalkOutcome::StepCapReached => {
                self.stats.step_capped += 1;
                debug!(steps = walker.age(), "walker discarded at step cap");
            }
        }

        self.reseed();
        self.report_progress();
        Ok(outcome)
    }

    pub fn run(self : &mut Self) -> Result<GrowthStats, GrowthError> {
        while !self.is_finished() {
            self.step()?;
        }
        info!(
            iterations = self.stats.iterations,
            stuck = self.stats.stuck,
            left_grid = self.stats.left_grid,
            step_capped = self.stats.step_capped,
            filled = self.grid.filled_count(),
            "growth finished"
        );
        Ok(self.stats)
    }

    fn report_progress(self : &Self) {
        let interval = self.config.progress_interval;
        if interval == 0 || self.stats.iterations % interval != 0 {
            return;
        }
        let (min, max) = (self.bounds.min(), self.bounds.max());
        info!(
            iteration = self.stats.iterations,
            filled = self.grid.filled_count(),
            min_x = min.x,
            min_y = min.y,
            max_x = max.x,
            max_y = max.y,
            "growth progress"
        );
    }
}
