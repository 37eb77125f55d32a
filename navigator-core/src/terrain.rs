//! Seeded skyline generation.
//!
//! The ground is a polyline with one vertex every `step` pixels, starting at
//! x = 0 and running up to and including the right edge of the logical
//! viewport. Heights are drawn from a seeded `StdRng`, so the same config
//! always yields the same skyline.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{NavigatorError, NavigatorResult};
use crate::geometry::Point;

pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_STEP: i32 = 128;
pub const DEFAULT_MIN_HEIGHT: i32 = 400;
pub const DEFAULT_MAX_HEIGHT: i32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub seed: u64,
    /// Horizontal distance between vertices.
    pub step: i32,
    /// Inclusive lower bound for vertex y.
    pub min_height: i32,
    /// Exclusive upper bound for vertex y.
    pub max_height: i32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            step: DEFAULT_STEP,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl TerrainConfig {
    pub fn validate(&self) -> NavigatorResult<()> {
        if self.step <= 0 {
            return Err(NavigatorError::InvalidConfig(format!(
                "terrain step must be positive, got {}",
                self.step
            )));
        }
        if self.min_height >= self.max_height {
            return Err(NavigatorError::InvalidConfig(format!(
                "terrain height range is empty: [{}, {})",
                self.min_height, self.max_height
            )));
        }
        Ok(())
    }
}

/// The generated ground line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    points: Vec<Point>,
}

impl Terrain {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Generate the skyline for a viewport `width` pixels wide.
pub fn generate(config: &TerrainConfig, width: i32) -> NavigatorResult<Terrain> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let points: Vec<Point> = (0..=i32::MAX)
        .map_while(|i| i.checked_mul(config.step))
        .take_while(|&x| x <= width)
        .map(|x| Point::new(x, rng.random_range(config.min_height..config.max_height)))
        .collect();

    tracing::debug!(
        seed = config.seed,
        vertices = points.len(),
        width,
        "terrain generated"
    );

    Ok(Terrain { points })
}
