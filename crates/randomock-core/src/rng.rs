//! Random number generator abstraction for determinism.
//!
//! In production, this wraps the thread-local RNG. In tests, a scripted
//! implementation keyed by call site is injected instead.

use rand::Rng;
use rand_distr::{Distribution, Exp1, StandardNormal};

/// Abstraction over random number generation.
///
/// Every method takes a `key` naming the call site. Real implementations
/// ignore it; scripted implementations use it to pick the sequence of values
/// to return, so keys should be short and descriptive (`"roll"`,
/// `"spawn_delay"`).
pub trait Randomizer: Send + Sync {
    /// Exponentially distributed `f64` with rate 1.
    fn exp_f64(&mut self, key: &str) -> f64;

    /// Uniform `f32` in `[0.0, 1.0)`.
    fn f32(&mut self, key: &str) -> f32;

    /// Uniform `f64` in `[0.0, 1.0)`.
    fn f64(&mut self, key: &str) -> f64;

    /// Non-negative platform-width integer.
    fn int(&mut self, key: &str) -> isize;

    /// Non-negative 31-bit integer.
    fn i31(&mut self, key: &str) -> i32;

    /// Integer in `[0, n)`.
    fn i31_below(&mut self, key: &str, n: i32) -> i32;

    /// Non-negative 63-bit integer.
    fn i63(&mut self, key: &str) -> i64;

    /// Integer in `[0, n)`.
    fn i63_below(&mut self, key: &str, n: i64) -> i64;

    /// Platform-width integer in `[0, n)`.
    fn int_below(&mut self, key: &str, n: isize) -> isize;

    /// Standard normally distributed `f64` (mean 0, standard deviation 1).
    fn norm_f64(&mut self, key: &str) -> f64;

    /// Uniform `u32`.
    fn u32(&mut self, key: &str) -> u32;

    /// Uniform `u64`.
    fn u64(&mut self, key: &str) -> u64;
}

/// Production randomizer backed by `rand::rng()`.
///
/// This type does not store the RNG; each call borrows the thread-local
/// generator, so it is zero-sized and freely shareable. Keys are ignored.
///
/// # Panics
///
/// The bounded methods (`i31_below`, `i63_below`, `int_below`) panic when
/// `n <= 0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomizer;

impl Randomizer for ThreadRandomizer {
    fn exp_f64(&mut self, _key: &str) -> f64 {
        Exp1.sample(&mut rand::rng())
    }

    fn f32(&mut self, _key: &str) -> f32 {
        rand::rng().random()
    }

    fn f64(&mut self, _key: &str) -> f64 {
        rand::rng().random()
    }

    fn int(&mut self, _key: &str) -> isize {
        // rand has no uniform sampler for isize; draw in i64 within isize range.
        let max = i64::try_from(isize::MAX).unwrap_or(i64::MAX);
        isize::try_from(rand::rng().random_range(0..=max)).unwrap_or(isize::MAX)
    }

    fn i31(&mut self, _key: &str) -> i32 {
        rand::rng().random_range(0..=i32::MAX)
    }

    fn i31_below(&mut self, _key: &str, n: i32) -> i32 {
        rand::rng().random_range(0..n)
    }

    fn i63(&mut self, _key: &str) -> i64 {
        rand::rng().random_range(0..=i64::MAX)
    }

    fn i63_below(&mut self, _key: &str, n: i64) -> i64 {
        rand::rng().random_range(0..n)
    }

    fn int_below(&mut self, _key: &str, n: isize) -> isize {
        let bound = i64::try_from(n).unwrap_or(i64::MAX);
        isize::try_from(rand::rng().random_range(0..bound)).unwrap_or(isize::MAX)
    }

    fn norm_f64(&mut self, _key: &str) -> f64 {
        StandardNormal.sample(&mut rand::rng())
    }

    fn u32(&mut self, _key: &str) -> u32 {
        rand::rng().random()
    }

    fn u64(&mut self, _key: &str) -> u64 {
        rand::rng().random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTEMPTS: usize = 200;

    #[test]
    fn test_thread_randomizer_floats_are_unit_interval() {
        let mut rng = ThreadRandomizer;
        for _ in 0..ATTEMPTS {
            let a = rng.f64("a");
            let b = rng.f32("b");
            assert!((0.0..1.0).contains(&a), "f64 out of range: {a}");
            assert!((0.0..1.0).contains(&b), "f32 out of range: {b}");
        }
    }

    #[test]
    fn test_thread_randomizer_exponential_is_non_negative() {
        let mut rng = ThreadRandomizer;
        for _ in 0..ATTEMPTS {
            let v = rng.exp_f64("wait");
            assert!(v >= 0.0 && v.is_finite(), "unexpected exponential sample {v}");
        }
    }

    #[test]
    fn test_thread_randomizer_normal_is_finite() {
        let mut rng = ThreadRandomizer;
        for _ in 0..ATTEMPTS {
            assert!(rng.norm_f64("noise").is_finite());
        }
    }

    #[test]
    fn test_thread_randomizer_signed_values_are_non_negative() {
        let mut rng = ThreadRandomizer;
        for _ in 0..ATTEMPTS {
            assert!(rng.int("k") >= 0);
            assert!(rng.i31("k") >= 0);
            assert!(rng.i63("k") >= 0);
        }
    }

    #[test]
    fn test_thread_randomizer_bounded_values_stay_below_bound() {
        let mut rng = ThreadRandomizer;
        for _ in 0..ATTEMPTS {
            assert!((0..6).contains(&rng.int_below("roll", 6)));
            assert!((0..3).contains(&rng.i31_below("pick", 3)));
            assert!((0..1_000).contains(&rng.i63_below("id", 1_000)));
        }
    }

    #[test]
    fn test_thread_randomizer_bound_of_one_always_yields_zero() {
        let mut rng = ThreadRandomizer;
        for _ in 0..ATTEMPTS {
            assert_eq!(rng.int_below("coin", 1), 0);
        }
    }

    #[test]
    fn test_thread_randomizer_platform_width_bound_covers_full_range() {
        let mut rng = ThreadRandomizer;
        for _ in 0..ATTEMPTS {
            let v = rng.int_below("wide", isize::MAX);
            assert!((0..isize::MAX).contains(&v), "int_below out of range: {v}");
        }
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_thread_randomizer_negative_platform_bound_panics() {
        let mut rng = ThreadRandomizer;
        rng.int_below("never", -3);
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_thread_randomizer_zero_bound_panics() {
        let mut rng = ThreadRandomizer;
        rng.i31_below("never", 0);
    }

    #[test]
    fn test_thread_randomizer_usable_as_trait_object() {
        let mut rng: Box<dyn Randomizer> = Box::new(ThreadRandomizer);
        let _ = rng.u32("a");
        let _ = rng.u64("b");
    }
}
