// Smallest rectangle holding every filled pixel. Only ever grows.

use geo::Rect;
use rand::Rng;

use crate::error::GrowthError;
use crate::grid::GridPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    rect : Rect<i64>
}

impl BoundingBox {
    pub fn from_seeds(seeds : &[GridPoint]) -> Result<BoundingBox, GrowthError> {
        let (first, rest) = seeds.split_first().ok_or(GrowthError::NoSeedPixels)?;
        let mut bounds = BoundingBox { rect : Rect::new(*first, *first) };
        for &seed in rest {
            bounds.include(seed);
        }
        Ok(bounds)
    }

    pub fn min(self : &Self) -> GridPoint {
        self.rect.min()
    }

    pub fn max(self : &Self) -> GridPoint {
        self.rect.max()
    }

    pub fn include(self : &mut Self, point : GridPoint) {
        if self.contains(point) {
            return;
        }
        let (min, max) = (self.min(), self.max());
        self.rect = Rect::new(
            GridPoint { x : min.x.min(point.x), y : min.y.min(point.y) },
            GridPoint { x : max.x.max(point.x), y : max.y.max(point.y) }
        );
    }

    pub fn contains(self : &Self, point : GridPoint) -> bool {
        let (min, max) = (self.min(), self.max());
        (min.x..=max.x).contains(&point.x) && (min.y..=max.y).contains(&point.y)
    }

    pub fn center_x(self : &Self) -> f64 {
        (self.min().x + self.max().x) as f64 / 2.0
    }

    // Inclusive pixel extents.
    pub fn width(self : &Self) -> u64 {
        (self.max().x - self.min().x) as u64 + 1
    }

    pub fn height(self : &Self) -> u64 {
        (self.max().y - self.min().y) as u64 + 1
    }

    // Uniform over the rectangle, edges included.
    pub fn random_point<R : Rng + ?Sized>(self : &Self, rng : &mut R) -> GridPoint {
        let (min, max) = (self.min(), self.max());
        GridPoint {
            x : rng.gen_range(min.x..=max.x),
            y : rng.gen_range(min.y..=max.y)
        }
    }
}
