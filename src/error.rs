use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrowthError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no seed pixels to grow from")]
    NoSeedPixels,

    #[error("seed pixel ({x}, {y}) lies outside the grid")]
    SeedOutOfBounds { x : i64, y : i64 },

    #[error("direction weights {0:?} cannot be sampled")]
    DegenerateWeights([f64; 4]),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
