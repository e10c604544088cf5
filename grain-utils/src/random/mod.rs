//! Random sources used to build noise permutation tables.
//!
//! Anything that can hand out doubles in `[0, 1)` can drive a noise generator.
//! [`Mulberry32`] is the default, seed-based source; closures are adapted with
//! [`from_fn`].

mod mulberry32;

pub use mulberry32::Mulberry32;

/// A source of uniformly distributed doubles.
///
/// Implementations must return values in `[0, 1)`. The contract is not checked
/// at runtime; see [`PermutationTable::new`](crate::noise::PermutationTable::new)
/// for what happens when it is broken.
pub trait Random {
    /// Returns the next value, uniformly distributed in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: Random + ?Sized> Random for &mut R {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: Random + ?Sized> Random for Box<R> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// A [`Random`] source backed by a closure. Created with [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F: FnMut() -> f64> Random for FromFn<F> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.f)()
    }
}

/// Wraps a closure returning doubles in `[0, 1)` as a [`Random`] source.
///
/// ```
/// use grain_utils::random::{self, Random};
///
/// let mut counter = 0.0;
/// let mut source = random::from_fn(move || {
///     counter += 0.25;
///     counter % 1.0
/// });
/// assert!((source.next_f64() - 0.25).abs() < f64::EPSILON);
/// ```
pub const fn from_fn<F: FnMut() -> f64>(f: F) -> FromFn<F> {
    FromFn { f }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_yields_closure_values() {
        let values = [0.5, 0.25, 0.125];
        let mut iter = values.iter().copied();
        let mut source = from_fn(move || iter.next().unwrap_or(0.0));

        #[allow(clippy::float_cmp)]
        // Values are passed through untouched
        {
            assert_eq!(source.next_f64(), 0.5);
            assert_eq!(source.next_f64(), 0.25);
            assert_eq!(source.next_f64(), 0.125);
            assert_eq!(source.next_f64(), 0.0);
        }
    }

    #[test]
    fn test_boxed_source_forwards() {
        let mut boxed: Box<dyn Random> = Box::new(Mulberry32::new(0));
        let mut plain = Mulberry32::new(0);

        for _ in 0..8 {
            assert_eq!(boxed.next_f64().to_bits(), plain.next_f64().to_bits());
        }
    }
}
