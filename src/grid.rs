// Binary occupancy surface the tree grows on.
//
// Indexed (x, y) with y pointing down the image. Anything outside
// [0, width) x [0, height) reads as empty and can never be filled.

use std::convert::TryFrom;

use ndarray::{Array, Ix2, ShapeBuilder};
use geo::Coordinate;

use crate::direction::Direction;

pub type GridPoint = Coordinate<i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelState {
    Empty,
    Filled
}

pub struct Grid {
    cells : Array<PixelState, Ix2>,
    filled : usize
}

impl Grid {
    pub fn init(width : u32, height : u32) -> Grid {
        Grid {
            cells : Array::from_elem((width as usize, height as usize).f(), PixelState::Empty),
            filled : 0
        }
    }

    pub fn width(self : &Self) -> u32 {
        self.cells.dim().0 as u32
    }

    pub fn height(self : &Self) -> u32 {
        self.cells.dim().1 as u32
    }

    fn index(point : GridPoint) -> Option<(usize, usize)> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        Some((x, y))
    }

    pub fn contains(self : &Self, point : GridPoint) -> bool {
        Grid::index(point).map_or(false, |idx| self.cells.get(idx).is_some())
    }

    pub fn get(self : &Self, point : GridPoint) -> PixelState {
        Grid::index(point)
            .and_then(|idx| self.cells.get(idx))
            .copied()
            .unwrap_or(PixelState::Empty)
    }

    pub fn is_filled(self : &Self, point : GridPoint) -> bool {
        self.get(point) == PixelState::Filled
    }

    // Returns true only if the pixel went from empty to filled.
    pub fn fill(self : &mut Self, point : GridPoint) -> bool {
        let cell = match Grid::index(point).and_then(|idx| self.cells.get_mut(idx)) {
            Some(cell) => cell,
            None => return false
        };
        if *cell == PixelState::Filled {
            return false;
        }
        *cell = PixelState::Filled;
        self.filled += 1;
        true
    }

    pub fn filled_count(self : &Self) -> usize {
        self.filled
    }

    // States of the N, S, E, W neighbours, in `Direction::ALL` order.
    pub fn neighbors4(self : &Self, point : GridPoint) -> [PixelState; 4] {
        Direction::ALL.map(|dir| self.get(dir.step(point)))
    }

    // Bit i is set when the neighbour in `Direction::ALL[i]` is filled.
    pub fn occupancy_mask(self : &Self, point : GridPoint) -> u8 {
        self.neighbors4(point)
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == PixelState::Filled)
            .fold(0u8, |mask, (i, _)| mask | (1u8 << i))
    }

    pub fn filled_points(self : &Self) -> impl Iterator<Item = GridPoint> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, state)| **state == PixelState::Filled)
            .map(|((x, y), _)| GridPoint { x : x as i64, y : y as i64 })
    }
}
