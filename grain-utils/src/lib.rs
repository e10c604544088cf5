//! Shared building blocks for grain.
//!
//! - [`noise`] - seeded 3D simplex noise and its permutation tables
//! - [`random`] - pluggable random sources, including the default [`random::Mulberry32`]
//! - [`sequence`] - low-discrepancy point sequences for placing samples
//! - [`math`] - scalar helpers for post-processing noise values

pub mod math;
pub mod noise;
pub mod random;
pub mod sequence;
