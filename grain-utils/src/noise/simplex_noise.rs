//! 3D simplex noise.
//!
//! Follows Gustavson's "Simplex noise demystified": the input is skewed onto a
//! lattice of tetrahedra, the four corners of the containing simplex are found,
//! and each corner adds a gradient contribution with a radial falloff.
//!
//! Arithmetic is ordered so results stay bit-identical to other
//! implementations seeded with the same [`Mulberry32`] stream.

use crate::noise::{GRADIENT, PermutationTable, SIMPLEX_ORDER};
use crate::random::{Mulberry32, Random};

/// Seeded 3D simplex noise.
///
/// Sampling takes `&self` and never mutates, so one instance can be shared
/// between threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplexNoise {
    table: PermutationTable,
}

impl SimplexNoise {
    /// Skewing factor for 3D simplex: `1/3`
    const F3: f64 = 1.0 / 3.0;
    /// Unskewing factor for 3D simplex: `1/6`
    const G3: f64 = 1.0 / 6.0;
    const G3_2: f64 = Self::G3 * 2.0;
    const G3_3: f64 = Self::G3 * 3.0;
    /// Squared influence radius of a corner.
    const RADIUS_SQ: f64 = 0.6;
    /// Brings the summed contributions close to `[-1, 1]`.
    const SCALE: f64 = 32.0;

    /// Create a noise generator whose permutation is shuffled by `random`.
    ///
    /// Consumes 255 values from the source.
    ///
    /// # Panics
    ///
    /// Panics if `random` breaks the `[0, 1)` contract, see [`PermutationTable::new`].
    pub fn new<R: Random + ?Sized>(random: &mut R) -> Self {
        Self {
            table: PermutationTable::new(random),
        }
    }

    /// Create a noise generator from a seed, using [`Mulberry32`] as the source.
    #[must_use]
    pub fn from_seed(seed: u32) -> Self {
        Self::new(&mut Mulberry32::new(seed))
    }

    /// The permutation tables backing this generator.
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable {
        &self.table
    }

    /// Borrow this generator as a plain function of `(x, y, z)`.
    pub fn as_fn(&self) -> impl Fn(f64, f64, f64) -> f64 + Send + Sync + '_ {
        move |x, y, z| self.sample(x, y, z)
    }

    /// Contribution of one simplex corner.
    #[inline]
    fn corner_noise(&self, gx: usize, gy: usize, gz: usize, x: f64, y: f64, z: f64) -> f64 {
        let t = Self::RADIUS_SQ - x * x - y * y - z * z;
        if t < 0.0 {
            return 0.0;
        }

        let g = &GRADIENT[self.table.hash(gx, gy, gz)];
        let t4 = t * t * t * t;
        t4 * (f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z)
    }

    /// Sample the noise at the given coordinates.
    ///
    /// Returns a value typically in the range `[-1, 1]` (scaled by 32). Any
    /// finite input is valid; NaN and infinities propagate.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let s = (x + y + z) * Self::F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();

        let t = (i + j + k) * Self::G3;
        let x0 = x - i + t;
        let y0 = y - j + t;
        let z0 = z - k + t;

        // Determine which simplex tetrahedron we're in
        let row = if x0 >= y0 {
            if y0 >= z0 {
                0
            } else if x0 >= z0 {
                1
            } else {
                2
            }
        } else if y0 < z0 {
            3
        } else if x0 < z0 {
            4
        } else {
            5
        };
        let [i1, j1, k1, i2, j2, k2] = SIMPLEX_ORDER[row];

        let x1 = x0 - f64::from(i1) + Self::G3;
        let y1 = y0 - f64::from(j1) + Self::G3;
        let z1 = z0 - f64::from(k1) + Self::G3;

        let x2 = x0 - f64::from(i2) + Self::G3_2;
        let y2 = y0 - f64::from(j2) + Self::G3_2;
        let z2 = z0 - f64::from(k2) + Self::G3_2;

        let x3 = x0 - 1.0 + Self::G3_3;
        let y3 = y0 - 1.0 + Self::G3_3;
        let z3 = z0 - 1.0 + Self::G3_3;

        let ii = lattice_index(i);
        let jj = lattice_index(j);
        let kk = lattice_index(k);
        let (i1, j1, k1) = (usize::from(i1), usize::from(j1), usize::from(k1));
        let (i2, j2, k2) = (usize::from(i2), usize::from(j2), usize::from(k2));

        let n0 = self.corner_noise(ii, jj, kk, x0, y0, z0);
        let n1 = self.corner_noise(ii + i1, jj + j1, kk + k1, x1, y1, z1);
        let n2 = self.corner_noise(ii + i2, jj + j2, kk + k2, x2, y2, z2);
        let n3 = self.corner_noise(ii + 1, jj + 1, kk + 1, x3, y3, z3);

        Self::SCALE * (n0 + n1 + n2 + n3)
    }
}

impl Default for SimplexNoise {
    fn default() -> Self {
        Self::from_seed(0)
    }
}

/// Wraps a floored lattice coordinate into `0..256`.
#[inline]
fn lattice_index(v: f64) -> usize {
    (v as i64 & 0xFF) as usize
}
