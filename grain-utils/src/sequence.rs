//! Low-discrepancy sequences.
//!
//! These spread sample points more evenly than independent random draws, which
//! makes them a good fit for probing a noise field with few samples.

/// Plastic-constant recurrence step for the first axis, `1 / rho`.
#[allow(clippy::unreadable_literal)]
const P1: f64 = 0.7548776662466927;
/// Plastic-constant recurrence step for the second axis, `1 / rho^2`.
#[allow(clippy::unreadable_literal)]
const P2: f64 = 0.5698402909980532;

/// Radical inverse of `index` in `base`, the `index`-th element of the Halton
/// sequence for that base.
///
/// Returns `0.0` for every index when `base < 2`.
#[must_use]
pub fn halton(index: u32, base: u32) -> f64 {
    if base < 2 {
        return 0.0;
    }

    let b = f64::from(base);
    let mut result = 0.0;
    let mut fraction = 1.0;
    let mut i = index;
    while i > 0 {
        fraction /= b;
        result += fraction * f64::from(i % base);
        i /= base;
    }
    result
}

/// 2D Halton point using bases 2 and 3.
#[must_use]
pub fn halton23(index: u32) -> [f64; 2] {
    [halton(index, 2), halton(index, 3)]
}

/// 2D point of the additive recurrence built on the plastic number.
#[must_use]
pub fn plastic(index: u32) -> [f64; 2] {
    let n = f64::from(index);
    [(P1 * n) % 1.0, (P2 * n) % 1.0]
}
