// A single growth attempt.
//
// The walker starts on a filled cell and keeps stepping while it lands on
// filled cells. The first empty cell it reaches inside the grid becomes part
// of the tree. Stepping off the grid, or running past the step cap, discards
// the attempt.

use std::collections::VecDeque;

use rand::Rng;
use tracing::trace;

use crate::bounds::BoundingBox;
use crate::direction::{sample_direction, Direction, Strategy};
use crate::error::GrowthError;
use crate::grid::{Grid, GridPoint};

pub const HISTORY_LEN : usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    Stuck { at : GridPoint },
    LeftGrid { at : GridPoint },
    StepCapReached
}

#[derive(Debug, Clone)]
pub struct Walker {
    position : GridPoint,
    age : u32,
    last : Option<Direction>,
    history : VecDeque<Direction>
}

impl Walker {
    pub fn spawn(position : GridPoint) -> Walker {
        Walker {
            position,
            age : 0,
            last : None,
            history : VecDeque::with_capacity(HISTORY_LEN + 1)
        }
    }

    pub fn position(self : &Self) -> GridPoint {
        self.position
    }

    pub fn age(self : &Self) -> u32 {
        self.age
    }

    pub fn last_direction(self : &Self) -> Option<Direction> {
        self.last
    }

    // Oldest first.
    pub fn history(self : &Self) -> impl Iterator<Item = Direction> + '_ {
        self.history.iter().copied()
    }

    pub(crate) fn advance(self : &mut Self, dir : Direction) {
        self.position = dir.step(self.position);
        self.age += 1;
    }

    pub(crate) fn remember(self : &mut Self, dir : Direction) {
        self.last = Some(dir);
        self.history.push_back(dir);
        if self.history.len() > HISTORY_LEN {
            self.history.pop_front();
        }
    }

    /// Moves the walker until it sticks, leaves the grid or takes `max_steps`
    /// steps. On a stick the new pixel is filled and the bounds widened.
    pub fn walk<R : Rng + ?Sized>(
        self : &mut Self,
        grid : &mut Grid,
        bounds : &mut BoundingBox,
        strategy : &dyn Strategy,
        rng : &mut R,
        max_steps : u32
    ) -> Result<WalkOutcome, GrowthError> {
        while self.age < max_steps {
            let weights = strategy.weights(self, grid, bounds);
            let dir = sample_direction(&weights, rng)?;
            self.advance(dir);

            if !grid.contains(self.position) {
                trace!(x = self.position.x, y = self.position.y, age = self.age, "walker left the grid");
                return Ok(WalkOutcome::LeftGrid { at : self.position });
            }
            if grid.is_filled(self.position) {
                self.remember(dir);
                continue;
            }
            grid.fill(self.position);
            bounds.include(self.position);
            return Ok(WalkOutcome::Stuck { at : self.position });
        }
        Ok(WalkOutcome::StepCapReached)
    }
}
