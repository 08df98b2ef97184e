// Direction model: how likely a walker is to take each of its four moves.
//
// Two strategies share one interface. The biased continuation model favours
// young walkers heading along the growth axis and walkers keeping their
// heading; the occupancy lookup model reads the walker's neighbourhood and
// pushes it along the edge of the structure.

use rand::Rng;

use crate::bounds::BoundingBox;
use crate::config::BiasedParams;
use crate::error::GrowthError;
use crate::grid::{Grid, GridPoint};
use crate::walker::Walker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West
}

// Weights aligned with `Direction::ALL`.
pub type WeightVector = [f64; 4];

impl Direction {
    pub const ALL : [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3
        }
    }

    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0)
        }
    }

    pub fn step(self, point : GridPoint) -> GridPoint {
        let (dx, dy) = self.offset();
        GridPoint {
            x : point.x.saturating_add(dx),
            y : point.y.saturating_add(dy)
        }
    }
}

/// Draws one direction with probability proportional to its weight.
///
/// A uniform `r` in `[0, 1)` is compared against the running sum of the
/// normalised weights in `Direction::ALL` order; the first direction whose
/// cumulative probability reaches `r` wins. Zero-weight directions are never
/// chosen. A vector with no positive weight, or with a negative or non-finite
/// entry, is an error.
pub fn sample_direction<R : Rng + ?Sized>(weights : &WeightVector, rng : &mut R) -> Result<Direction, GrowthError> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(GrowthError::DegenerateWeights(*weights));
    }
    let total : f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(GrowthError::DegenerateWeights(*weights));
    }

    let r : f64 = rng.gen();
    let mut cumulative = 0.0;
    let mut last_open = None;
    for (&dir, &weight) in Direction::ALL.iter().zip(weights.iter()) {
        if weight == 0.0 {
            continue;
        }
        cumulative += weight / total;
        last_open = Some(dir);
        if r <= cumulative {
            return Ok(dir);
        }
    }
    // Rounding can leave the final cumulative value just under r.
    last_open.ok_or(GrowthError::DegenerateWeights(*weights))
}

pub trait Strategy {
    fn weights(self : &Self, walker : &Walker, grid : &Grid, bounds : &BoundingBox) -> WeightVector;
}

pub struct BiasedContinuation {
    params : BiasedParams
}

impl BiasedContinuation {
    pub fn init(params : BiasedParams) -> BiasedContinuation {
        BiasedContinuation { params }
    }
}

impl Strategy for BiasedContinuation {
    fn weights(self : &Self, walker : &Walker, _grid : &Grid, bounds : &BoundingBox) -> WeightVector {
        let p = &self.params;
        let mut weights = [p.baseline; 4];

        weights[p.growth_axis.index()] = p.exploration_scale / (walker.age() as f64 + 1.0) + p.exploration_floor;
        weights[p.spread_axis.index()] = (walker.position().x as f64 - bounds.center_x()).abs().sqrt();

        if let Some(last) = walker.last_direction() {
            weights[last.index()] += p.momentum_bonus;
        }
        // Damped once per history entry, so a direction taken twice is damped twice.
        for dir in walker.history() {
            let w = &mut weights[dir.index()];
            *w = w.sqrt();
        }
        weights
    }
}

// Rows indexed by occupancy mask (bit 0 N, bit 1 S, bit 2 E, bit 3 W),
// columns in N, S, E, W order.
const OCCUPANCY_TABLE : [WeightVector; 16] = [
    [1.0, 1.0, 1.0, 1.0],    // open on all sides
    [1.0, 8.0, 4.0, 4.0],    // N
    [8.0, 1.0, 4.0, 4.0],    // S
    [1.0, 1.0, 8.0, 8.0],    // N S
    [4.0, 4.0, 1.0, 8.0],    // E
    [1.0, 8.0, 1.0, 8.0],    // N E
    [8.0, 1.0, 1.0, 8.0],    // S E
    [1.0, 1.0, 1.0, 24.0],   // N S E
    [4.0, 4.0, 8.0, 1.0],    // W
    [1.0, 8.0, 8.0, 1.0],    // N W
    [8.0, 1.0, 8.0, 1.0],    // S W
    [1.0, 1.0, 24.0, 1.0],   // N S W
    [8.0, 8.0, 1.0, 1.0],    // E W
    [1.0, 24.0, 1.0, 1.0],   // N E W
    [24.0, 1.0, 1.0, 1.0],   // S E W
    [1.0, 1.0, 1.0, 1.0]     // enclosed
];

pub struct OccupancyLookup;

impl Strategy for OccupancyLookup {
    fn weights(self : &Self, walker : &Walker, grid : &Grid, _bounds : &BoundingBox) -> WeightVector {
        OCCUPANCY_TABLE[grid.occupancy_mask(walker.position()) as usize]
    }
}
