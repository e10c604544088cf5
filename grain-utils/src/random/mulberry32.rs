//! Mulberry32, a small 32-bit state generator.
//!
//! This is the default source for seeded noise. The recurrence is kept bit-exact
//! so a seed always produces the same permutation table, and therefore the same
//! noise field, as other implementations of the same generator.

use super::Random;

/// Weyl sequence increment added to the state on every draw.
const INCREMENT: u32 = 0x6D2B_79F5;
/// `2^-32`, maps a `u32` onto `[0, 1)`.
const TO_UNIT: f64 = 1.0 / 4_294_967_296.0;

/// Mulberry32 pseudo-random generator.
///
/// Not suitable for anything security related. Statistical quality is adequate
/// for shuffling a 256-entry table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator from a 32-bit seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the generator and returns the next raw 32-bit output.
    pub const fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let s = self.state;

        let a = (s ^ (s >> 15)).wrapping_mul(s | 1);
        let b = a.wrapping_add((a ^ (a >> 7)).wrapping_mul(a | 61)) ^ a;

        b ^ (b >> 14)
    }

    /// Skips `count` outputs.
    pub const fn consume_count(&mut self, count: u32) {
        self.state = self
            .state
            .wrapping_add(INCREMENT.wrapping_mul(count));
    }
}

impl Default for Mulberry32 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Random for Mulberry32 {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) * TO_UNIT
    }
}
