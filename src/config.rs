// Run parameters for a growth simulation.

use clap::ValueEnum;

use crate::direction::{BiasedContinuation, Direction, OccupancyLookup, Strategy};
use crate::error::GrowthError;
use crate::grid::GridPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Age-decaying pull along the growth axis, momentum and damping.
    Biased,
    /// Per-neighbourhood weight table.
    Occupancy
}

// Tunables of the biased continuation model.
#[derive(Debug, Clone, PartialEq)]
pub struct BiasedParams {
    pub exploration_scale : f64,
    pub exploration_floor : f64,
    pub baseline : f64,
    pub momentum_bonus : f64,
    pub growth_axis : Direction,
    pub spread_axis : Direction
}

impl Default for BiasedParams {
    fn default() -> BiasedParams {
        BiasedParams {
            exploration_scale : 50.0,
            exploration_floor : 1.0,
            baseline : 2.0,
            momentum_bonus : 100.0,
            growth_axis : Direction::North,
            spread_axis : Direction::South
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthConfig {
    pub width : u32,
    pub height : u32,
    pub iterations : u32,
    pub strategy : StrategyKind,
    pub biased : BiasedParams,
    // None draws a fresh seed per run.
    pub rng_seed : Option<u64>,
    pub max_walker_steps : u32,
    pub seeds : Vec<GridPoint>,
    // 0 disables progress logging.
    pub progress_interval : u32
}

impl Default for GrowthConfig {
    fn default() -> GrowthConfig {
        GrowthConfig::init(200, 200)
    }
}

impl GrowthConfig {
    pub fn init(width : u32, height : u32) -> GrowthConfig {
        GrowthConfig {
            width,
            height,
            iterations : 10_000,
            strategy : StrategyKind::Biased,
            biased : BiasedParams::default(),
            rng_seed : None,
            max_walker_steps : 10_000,
            seeds : GrowthConfig::trunk(width, height),
            progress_interval : 1_000
        }
    }

    /// Three pixels rising from the middle of the bottom edge, clipped to the
    /// grid height.
    pub fn trunk(width : u32, height : u32) -> Vec<GridPoint> {
        let x = (width / 2) as i64;
        (1..=3i64.min(height as i64))
            .map(|dy| GridPoint { x, y : height as i64 - dy })
            .collect()
    }

    pub fn validate(self : &Self) -> Result<(), GrowthError> {
        if self.width == 0 || self.height == 0 {
            return Err(GrowthError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}", self.width, self.height
            )));
        }
        if self.max_walker_steps == 0 {
            return Err(GrowthError::InvalidConfig("max walker steps must be positive".to_string()));
        }
        if self.seeds.is_empty() {
            return Err(GrowthError::NoSeedPixels);
        }
        for seed in &self.seeds {
            let inside = (0..self.width as i64).contains(&seed.x) && (0..self.height as i64).contains(&seed.y);
            if !inside {
                return Err(GrowthError::SeedOutOfBounds { x : seed.x, y : seed.y });
            }
        }
        if self.strategy == StrategyKind::Biased {
            let b = &self.biased;
            let all = [b.exploration_scale, b.exploration_floor, b.baseline, b.momentum_bonus];
            if all.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(GrowthError::InvalidConfig("biased weights must be finite and non-negative".to_string()));
            }
            // Keeps at least the two baseline directions drawable.
            if b.baseline <= 0.0 || b.growth_axis == b.spread_axis {
                return Err(GrowthError::InvalidConfig(
                    "biased model needs a positive baseline and distinct growth and spread axes".to_string()
                ));
            }
        }
        Ok(())
    }

    pub fn build_strategy(self : &Self) -> Box<dyn Strategy> {
        match self.strategy {
            StrategyKind::Biased => Box::new(BiasedContinuation::init(self.biased.clone())),
            StrategyKind::Occupancy => Box::new(OccupancyLookup)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_trunk_sits_on_bottom_edge() {
        let config = GrowthConfig::default();
        assert_eq!(
            config.seeds,
            vec![GridPoint { x : 100, y : 199 }, GridPoint { x : 100, y : 198 }, GridPoint { x : 100, y : 197 }]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn short_grid_gets_short_trunk() {
        assert_eq!(GrowthConfig::trunk(4, 1), vec![GridPoint { x : 2, y : 0 }]);
    }

    #[test]
    fn rejects_missing_seeds() {
        let config = GrowthConfig { seeds : Vec::new(), ..GrowthConfig::init(10, 10) };
        assert!(matches!(config.validate(), Err(GrowthError::NoSeedPixels)));
    }

    #[test]
    fn rejects_seed_off_grid() {
        let config = GrowthConfig { seeds : vec![GridPoint { x : 10, y : 3 }], ..GrowthConfig::init(10, 10) };
        assert!(matches!(config.validate(), Err(GrowthError::SeedOutOfBounds { x : 10, y : 3 })));
    }

    #[test]
    fn rejects_bad_shapes_and_caps() {
        assert!(GrowthConfig { width : 0, ..GrowthConfig::init(10, 10) }.validate().is_err());
        assert!(GrowthConfig { max_walker_steps : 0, ..GrowthConfig::init(10, 10) }.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_biased_params() {
        let mut config = GrowthConfig::init(10, 10);
        config.biased.baseline = 0.0;
        assert!(config.validate().is_err());
        config.strategy = StrategyKind::Occupancy;
        assert!(config.validate().is_ok());
    }
}
