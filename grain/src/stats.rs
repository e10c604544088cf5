//! Value statistics over a point set.

use clap::ValueEnum;
use grain_utils::noise::SimplexNoise;
use grain_utils::random::{Mulberry32, Random};
use grain_utils::sequence::{halton23, plastic};
use rayon::prelude::*;

/// How sample points are placed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSet {
    /// Independent Mulberry32 draws on all three axes.
    Random,
    /// Halton bases 2 and 3 on x and y.
    Halton,
    /// Plastic-number recurrence on x and y.
    Plastic,
}

/// Generate `count` points in `[0, extent)^3`.
///
/// The quasi-random sets only cover x and y; z always comes from a Mulberry32
/// stream seeded with `seed + 1` so the points don't all share one plane.
pub fn points(set: PointSet, seed: u32, count: u32, extent: f64) -> Vec<[f64; 3]> {
    let mut rng = Mulberry32::new(seed.wrapping_add(1));

    (1..=count)
        .map(|index| {
            let [x, y] = match set {
                PointSet::Random => [rng.next_f64(), rng.next_f64()],
                PointSet::Halton => halton23(index),
                PointSet::Plastic => plastic(index),
            };
            [x * extent, y * extent, rng.next_f64() * extent]
        })
        .collect()
}

/// Aggregate of sampled noise values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of samples.
    pub count: u64,
    /// Smallest value seen.
    pub min: f64,
    /// Largest value seen.
    pub max: f64,
    /// Samples with `|v| > 1`.
    pub outside: u64,
    sum: f64,
}

impl Summary {
    const EMPTY: Self = Self {
        count: 0,
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
        outside: 0,
        sum: 0.0,
    };

    fn single(value: f64) -> Self {
        Self {
            count: 1,
            min: value,
            max: value,
            outside: u64::from(value.abs() > 1.0),
            sum: value,
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            outside: self.outside + other.outside,
            sum: self.sum + other.sum,
        }
    }

    /// Arithmetic mean, `NaN` when empty.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Share of samples outside `[-1, 1]`.
    #[must_use]
    pub fn outside_fraction(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.outside as f64 / self.count as f64
        }
    }
}

/// Evaluate `noise` at every point, in parallel.
pub fn summarize(noise: &SimplexNoise, points: &[[f64; 3]]) -> Summary {
    points
        .par_iter()
        .map(|&[x, y, z]| Summary::single(noise.sample(x, y, z)))
        .reduce(|| Summary::EMPTY, Summary::merge)
}
