//! Permutation tables hashing lattice coordinates to gradients.

use std::array;

use tracing::debug;

use crate::noise::GRADIENT;
use crate::random::Random;

const TABLE_SIZE: usize = 256;
const EXTENDED_SIZE: usize = TABLE_SIZE * 2;

/// A shuffled permutation of `0..=255` plus its derived lookup tables.
///
/// The extended tables repeat the permutation twice so a lattice hash of the
/// form `p[a + p[b]]` never needs a modulo. Tables are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; TABLE_SIZE],
    extended: [u8; EXTENDED_SIZE],
    gradients: [u8; EXTENDED_SIZE],
}

impl PermutationTable {
    /// Builds the tables by shuffling the identity permutation with `random`.
    ///
    /// Draws exactly 255 values. The same sequence of draws always yields the
    /// same table.
    ///
    /// # Panics
    ///
    /// Panics if `random` returns a value of `1.0` or more, since the swap index
    /// then falls outside the table. Negative values are truncated to a swap
    /// with the current slot and leave the shuffle biased rather than failing.
    pub fn new<R: Random + ?Sized>(random: &mut R) -> Self {
        let mut perm = [0u8; TABLE_SIZE];
        for (i, val) in perm.iter_mut().enumerate() {
            *val = i as u8;
        }

        // Forward Fisher-Yates: slot i takes a uniform pick from i..256
        for i in 0..TABLE_SIZE - 1 {
            let remaining = (TABLE_SIZE - i) as f64;
            let j = i + (random.next_f64() * remaining) as usize;
            perm.swap(i, j);
        }

        let extended: [u8; EXTENDED_SIZE] = array::from_fn(|k| perm[k & 0xFF]);
        let gradients = extended.map(|p| p % GRADIENT.len() as u8);

        debug!(
            head = ?&perm[..8],
            "built simplex permutation table"
        );

        Self {
            perm,
            extended,
            gradients,
        }
    }

    /// The 256-entry permutation.
    #[must_use]
    pub const fn permutation(&self) -> &[u8; TABLE_SIZE] {
        &self.perm
    }

    /// The permutation repeated twice.
    #[must_use]
    pub const fn extended(&self) -> &[u8; EXTENDED_SIZE] {
        &self.extended
    }

    /// Gradient index (`0..12`) for every entry of [`extended`](Self::extended).
    #[must_use]
    pub const fn gradient_indices(&self) -> &[u8; EXTENDED_SIZE] {
        &self.gradients
    }

    /// Gradient index for the lattice cell `(x, y, z)`.
    ///
    /// Each coordinate must be in `0..=256`: a masked lattice index plus a
    /// unit corner offset.
    #[inline]
    pub(crate) fn hash(&self, x: usize, y: usize, z: usize) -> usize {
        let yz = usize::from(self.extended[y + usize::from(self.extended[z])]);
        usize::from(self.gradients[x + yz])
    }
}
