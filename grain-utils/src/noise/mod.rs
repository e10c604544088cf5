//! Seeded 3D simplex noise.
//!
//! - [`PermutationTable`] - shuffled lattice hash tables, built once per seed
//! - [`SimplexNoise`] - the noise function evaluated over those tables

mod permutation;
mod simplex_noise;

pub use permutation::PermutationTable;
pub use simplex_noise::SimplexNoise;

/// Gradient directions: the midpoints of the twelve edges of a cube.
pub(crate) const GRADIENT: [[i32; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];

/// Unit lattice offsets of the second and third simplex corners.
///
/// One row per ordering of the cell-local offset magnitudes. The first three
/// values step to the second corner, the last three to the third.
pub(crate) const SIMPLEX_ORDER: [[u8; 6]; 6] = [
    [1, 0, 0, 1, 1, 0], // XYZ
    [1, 0, 0, 1, 0, 1], // XZY
    [0, 0, 1, 1, 0, 1], // ZXY
    [0, 0, 1, 0, 1, 1], // ZYX
    [0, 1, 0, 0, 1, 1], // YZX
    [0, 1, 0, 1, 1, 0], // YXZ
];
