//! Small numeric helpers used alongside a `Randomizer`.

use rand::Rng;

/// Rounds `value` to `digits` decimal places, with halves rounded away from
/// zero.
#[must_use]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (factor * value).round() / factor
}

/// Returns a uniformly distributed value in `[a, b)`, or `a` when `a == b`.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    (b - a) * rng.random::<f64>() + a
}
