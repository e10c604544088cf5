//! Scalar helpers for shaping noise values.

/// Clamps `value` into the range spanned by `min` and `max`, in either order.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min.min(max)).min(min.max(max))
}

/// Linearly remaps `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
#[must_use]
pub fn scale(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    (value - from_min) * ((to_max - to_min) / (from_max - from_min)) + to_min
}

/// Like [`scale`], but the result is clamped to the target range.
#[must_use]
pub fn scale_clamped(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    clamp(scale(value, from_min, from_max, to_min, to_max), to_min, to_max)
}

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, alpha: f64) -> f64 {
    (1.0 - alpha) * a + b * alpha
}

/// Inverse of [`lerp`]: where `value` sits between `a` and `b`.
///
/// Returns `0.0` when `a == b`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if a == b { 0.0 } else { (value - a) / (b - a) }
}

/// Hermite smoothstep of `value` between the two edges.
#[must_use]
pub fn smoothstep(min: f64, max: f64, value: f64) -> f64 {
    let x = ((value - min) / (max - min)).clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Perlin's smootherstep, with zero first and second derivatives at the edges.
#[must_use]
pub fn smootherstep(min: f64, max: f64, value: f64) -> f64 {
    let x = ((value - min) / (max - min)).clamp(0.0, 1.0);
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

/// Fractional part, always in `[0, 1)` for finite input.
#[inline]
#[must_use]
pub fn fract(value: f64) -> f64 {
    value - value.floor()
}

/// Modulo whose result takes the sign of `n`.
#[inline]
#[must_use]
pub fn floor_mod(value: f64, n: f64) -> f64 {
    ((value % n) + n) % n
}
