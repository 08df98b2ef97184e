// Grows a branching tree on a pixel grid from short weighted random walks.
//
// Each walker starts on the tree, wanders through it and attaches to the
// first empty pixel it reaches, in the manner of diffusion-limited
// aggregation. New walkers are spawned inside the tree's bounding box so
// growth stays near the structure.

pub mod bounds;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod growth;
pub mod render;
pub mod walker;

pub use bounds::BoundingBox;
pub use config::{BiasedParams, GrowthConfig, StrategyKind};
pub use direction::{sample_direction, BiasedContinuation, Direction, OccupancyLookup, Strategy, WeightVector};
pub use error::GrowthError;
pub use grid::{Grid, GridPoint, PixelState};
pub use growth::{GrowthStats, Simulation};
pub use walker::{WalkOutcome, Walker};
