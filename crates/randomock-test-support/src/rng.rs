//! Test RNG — scripted, keyed `Randomizer` implementation for tests.

use std::collections::HashMap;

use randomock_core::rng::Randomizer;

use crate::convert::FromDispensed;
use crate::error::MockError;
use crate::policy::{Policy, default_policy};
use crate::sequence::Sequence;

/// A `Randomizer` that returns pre-programmed values per key.
///
/// Register values with [`register`](Self::register), hand the mock to the
/// code under test, and every `Randomizer` call with that key returns the
/// next value, converted to the method's return type with `as` cast
/// semantics. Bound arguments (`int_below`, `i31_below`, `i63_below`) are
/// ignored and values are never clamped.
///
/// # Panics
///
/// The `Randomizer` methods panic with a [`MockError`] payload when the key
/// was never registered, was registered without values, or is exhausted
/// under [`Policy::ErrorOut`]. Use [`MockError::catch`] to assert on these,
/// or [`try_next`](Self::try_next) to dispense without panicking.
///
/// A `MockRandomizer` is meant to be driven from one test thread; share it
/// through a `Mutex` if the code under test needs that.
#[derive(Debug)]
pub struct MockRandomizer {
    sequences: HashMap<String, Sequence>,
    policy: Policy,
}

impl Default for MockRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRandomizer {
    /// Create a mock whose keys start with the current process-wide default
    /// policy (see [`set_default_policy`](crate::set_default_policy)).
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(default_policy())
    }

    /// Create a mock whose keys start with `policy`, regardless of the
    /// process-wide default.
    #[must_use]
    pub fn with_policy(policy: Policy) -> Self {
        Self {
            sequences: HashMap::new(),
            policy,
        }
    }

    /// The policy given to keys when they are first registered.
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Appends `values` to the sequence for `key`, creating it with this
    /// mock's policy on first use.
    pub fn register(&mut self, key: &str, values: impl IntoIterator<Item = f64>) -> &mut Self {
        let policy = self.policy;
        let sequence = self.sequences.entry(key.to_owned()).or_insert_with(|| {
            tracing::debug!(key, %policy, "registering key");
            Sequence::new(key, policy)
        });
        sequence.append(values);
        self
    }

    /// Owned form of [`register`](Self::register) for building a mock in a
    /// single expression.
    #[must_use]
    pub fn with_values(mut self, key: &str, values: impl IntoIterator<Item = f64>) -> Self {
        self.register(key, values);
        self
    }

    /// Sets the exhaustion policy of an already registered key.
    ///
    /// # Panics
    ///
    /// Panics with `MockError::UnregisteredKey` if `key` has no values.
    pub fn set_policy(&mut self, key: &str, policy: Policy) -> &mut Self {
        match self.sequences.get_mut(key) {
            Some(sequence) => sequence.set_policy(policy),
            None => fail(MockError::UnregisteredKey(key.to_owned())),
        }
        self
    }

    /// Returns the exhaustion policy of a registered key.
    ///
    /// # Panics
    ///
    /// Panics with `MockError::UnregisteredKey` if `key` has no values.
    #[must_use]
    pub fn key_policy(&self, key: &str) -> Policy {
        match self.sequences.get(key) {
            Some(sequence) => sequence.policy(),
            None => fail(MockError::UnregisteredKey(key.to_owned())),
        }
    }

    /// The sequence registered under `key`, if any.
    #[must_use]
    pub fn sequence(&self, key: &str) -> Option<&Sequence> {
        self.sequences.get(key)
    }

    /// Dispenses the next raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `MockError::UnregisteredKey` for an unknown key, otherwise
    /// whatever the key's [`Sequence`] reports.
    pub fn try_next(&mut self, key: &str) -> Result<f64, MockError> {
        self.sequences
            .get_mut(key)
            .ok_or_else(|| MockError::UnregisteredKey(key.to_owned()))?
            .next_value()
    }

    fn dispense<T: FromDispensed>(&mut self, key: &str) -> T {
        match self.try_next(key) {
            Ok(value) => T::from_dispensed(value),
            Err(err) => fail(err),
        }
    }
}

fn fail(err: MockError) -> ! {
    tracing::error!(%err, "mock randomizer failed");
    std::panic::panic_any(err)
}

impl Randomizer for MockRandomizer {
    fn exp_f64(&mut self, key: &str) -> f64 {
        self.dispense(key)
    }

    fn f32(&mut self, key: &str) -> f32 {
        self.dispense(key)
    }

    fn f64(&mut self, key: &str) -> f64 {
        self.dispense(key)
    }

    fn int(&mut self, key: &str) -> isize {
        self.dispense(key)
    }

    fn i31(&mut self, key: &str) -> i32 {
        self.dispense(key)
    }

    fn i31_below(&mut self, key: &str, _n: i32) -> i32 {
        self.dispense(key)
    }

    fn i63(&mut self, key: &str) -> i64 {
        self.dispense(key)
    }

    fn i63_below(&mut self, key: &str, _n: i64) -> i64 {
        self.dispense(key)
    }

    fn int_below(&mut self, key: &str, _n: isize) -> isize {
        self.dispense(key)
    }

    fn norm_f64(&mut self, key: &str) -> f64 {
        self.dispense(key)
    }

    fn u32(&mut self, key: &str) -> u32 {
        self.dispense(key)
    }

    fn u64(&mut self, key: &str) -> u64 {
        self.dispense(key)
    }
}
